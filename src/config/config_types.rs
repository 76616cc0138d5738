// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub deck_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub card_height: f32,
    pub card_width_ratio: f32, // fraction of the window width
    pub card_max_width: f32,
    pub card_padding: f32,
    pub sticky_top: f32, // distance from window top to the pinned stack
    pub title_font_size: u32,
    pub content_font_size: u32,
    pub header_height: f32,
    pub footer_height: f32,
}

#[derive(Debug, Deserialize)]
pub struct ScrollConfig {
    pub wheel_line_height: f32, // pixels per wheel line
    pub page_screens: f32,      // virtual page height in window heights
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub spring: SpringConfig,
}

// Tuning parameters for the offset smoothing filter. These are
// aesthetic choices, not correctness constraints.
#[derive(Debug, Deserialize, Clone)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}
