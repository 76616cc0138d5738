use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    // Copy config.toml and deck.json to the build output directory
    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
    fs::copy("deck.json", target_dir.join("deck.json")).unwrap();

    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-changed=deck.json");
}
