// src/views/card_view.rs
//
// One card panel in the stack. Holds the static card record, the
// scroll-to-motion mapping and the spring state for its offset.

use nannou::prelude::*;

use crate::{
    animation::{AnimatedCardState, CardMotion, Spring},
    config::{SpringConfig, StyleConfig},
    models::Card,
};

// cards below this opacity aren't worth drawing
const MIN_VISIBLE_OPACITY: f32 = 0.003;

pub struct CardView {
    pub card: Card,
    motion: CardMotion,
    spring: Spring,
    state: AnimatedCardState,
    fill: Rgb,
}

impl CardView {
    pub fn new(
        card: Card,
        index: usize,
        total: usize,
        style: &StyleConfig,
        spring_config: &SpringConfig,
    ) -> Self {
        let motion = CardMotion::new(index, total, style.card_height);
        let mut spring = Spring::new(spring_config);
        // settle the spring at the initial offset so nothing flies in
        spring.snap_to(motion.raw_offset(0.0));

        let fill = card.fill_color();
        let state = AnimatedCardState {
            offset_y: spring.position(),
            opacity: motion.opacity(0.0),
        };

        Self {
            card,
            motion,
            spring,
            state,
            fill,
        }
    }

    /// Advance the card's animation state for this frame.
    pub fn update(&mut self, progress: f32, dt: f32) -> AnimatedCardState {
        let target = self.motion.raw_offset(progress);
        self.state = AnimatedCardState {
            offset_y: self.spring.update(target, dt),
            opacity: self.motion.opacity(progress),
        };
        self.state
    }

    pub fn state(&self) -> AnimatedCardState {
        self.state
    }

    pub fn z_index(&self) -> usize {
        self.motion.z_index()
    }

    pub fn draw(&self, draw: &Draw, win: Rect, style: &StyleConfig) {
        let opacity = self.state.opacity;
        if opacity < MIN_VISIBLE_OPACITY {
            return;
        }

        let width = (win.w() * style.card_width_ratio).min(style.card_max_width);
        let height = style.card_height;

        // the stack is pinned below the window top; a negative offset
        // moves the card up the screen
        let center_y = win.top() - style.sticky_top - height / 2.0 - self.state.offset_y;

        // drop shadow
        draw.rect()
            .x_y(0.0, center_y - 8.0)
            .w_h(width, height)
            .color(rgba(0.0, 0.0, 0.0, 0.12 * opacity));

        // card panel
        draw.rect()
            .x_y(0.0, center_y)
            .w_h(width, height)
            .color(rgba(self.fill.red, self.fill.green, self.fill.blue, opacity));

        // title
        let pad = style.card_padding;
        let title_height = style.title_font_size as f32 * 1.4;
        draw.text(&self.card.title)
            .x_y(0.0, center_y + height / 2.0 - pad - title_height / 2.0)
            .w_h(width - pad * 2.0, title_height)
            .font_size(style.title_font_size)
            .color(rgba(1.0, 1.0, 1.0, opacity))
            .left_justify();

        // body text
        let body_height = height - pad * 2.0 - title_height;
        draw.text(&self.card.content)
            .x_y(0.0, center_y - height / 2.0 + pad + body_height / 2.0)
            .w_h(width - pad * 2.0, body_height)
            .font_size(style.content_font_size)
            .line_spacing(style.content_font_size as f32 * 0.6)
            .color(rgba(1.0, 1.0, 1.0, opacity))
            .left_justify()
            .align_text_top();
    }
}
