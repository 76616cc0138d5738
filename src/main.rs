// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use cardvis::{
    config::Config,
    models::Deck,
    views::{PageView, ScrollTracker},
};

struct Model {
    // Core components:
    page: PageView,
    scroll: ScrollTracker,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the card deck; a missing or bad file falls back to the
    // built-in deck
    let deck = Deck::load_or_default(config.resolve_deck_path());

    // Create window
    app.new_window()
        .title("cardvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .build()
        .unwrap();

    let mut scroll = ScrollTracker::new(
        config.scroll.page_screens,
        config.scroll.wheel_line_height,
    );
    scroll.set_viewport_height(config.window.height as f32);

    Model {
        page: PageView::new(deck, config.style.clone(), &config.animation.spring),
        scroll,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    // wheel up is positive; scrolling down the page increases offset
    match delta {
        MouseScrollDelta::LineDelta(_x, y) => model.scroll.scroll_lines(-y),
        MouseScrollDelta::PixelDelta(position) => model.scroll.scroll_pixels(-position.y as f32),
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Down => model.scroll.scroll_lines(3.0),
        Key::Up => model.scroll.scroll_lines(-3.0),
        Key::Space | Key::PageDown => model.scroll.page_down(),
        Key::PageUp => model.scroll.page_up(),
        Key::Home => model.scroll.to_top(),
        Key::End => model.scroll.to_bottom(),
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / dt.max(1e-6);
    }

    // Pick up window resizes
    model.scroll.set_viewport_height(app.window_rect().h());

    /*****************  Main update method for the stack *****************/
    model.page.update(model.scroll.progress(), dt);
    /*********************************************************************/
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let win = app.window_rect();

    model.page.draw(&draw, win);

    if model.debug_flag {
        draw.text(&format!(
            "FPS: {:.1}\nprogress: {:.3}",
            model.fps,
            model.scroll.progress()
        ))
        .x_y(win.right() - 80.0, win.top() - 120.0)
        .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
