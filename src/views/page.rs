// src/views/page.rs
//
// The full page: sticky header, the pinned card stack, sticky footer.
// Cards are drawn in ascending stacking order so earlier cards end up
// on top, matching their computed z index.

use nannou::prelude::*;

use crate::{
    config::{SpringConfig, StyleConfig},
    models::Deck,
    views::CardView,
};

const PAGE_BACKGROUND: (f32, f32, f32) = (0.94, 0.94, 0.94);
const CHROME_TEXT: (f32, f32, f32) = (0.15, 0.15, 0.15);

pub struct PageView {
    cards: Vec<CardView>,
    style: StyleConfig,
}

impl PageView {
    pub fn new(deck: Deck, style: StyleConfig, spring_config: &SpringConfig) -> Self {
        let total = deck.len();
        let cards = deck
            .cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| CardView::new(card, index, total, &style, spring_config))
            .collect();

        Self { cards, style }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Advance every card's animation state for this frame.
    pub fn update(&mut self, progress: f32, dt: f32) {
        for card in self.cards.iter_mut() {
            card.update(progress, dt);
        }
    }

    pub fn draw(&self, draw: &Draw, win: Rect) {
        let (r, g, b) = PAGE_BACKGROUND;
        draw.background().color(rgb(r, g, b));

        // low z first, card 0 last and therefore on top
        let mut order: Vec<&CardView> = self.cards.iter().collect();
        order.sort_by_key(|card| card.z_index());
        for card in order {
            card.draw(draw, win, &self.style);
        }

        // header and footer sit above the stack
        self.draw_header(draw, win);
        self.draw_footer(draw, win);
    }

    fn draw_header(&self, draw: &Draw, win: Rect) {
        let height = self.style.header_height;
        let center_y = win.top() - height / 2.0;

        draw.rect()
            .x_y(0.0, center_y - 2.0)
            .w_h(win.w(), height)
            .color(rgba(0.0, 0.0, 0.0, 0.08));
        draw.rect()
            .x_y(0.0, center_y)
            .w_h(win.w(), height)
            .color(WHITE);

        let (r, g, b) = CHROME_TEXT;
        draw.text("Stacked Cards Header")
            .x_y(0.0, center_y)
            .w_h(win.w(), height)
            .font_size(28)
            .color(rgb(r, g, b));
    }

    fn draw_footer(&self, draw: &Draw, win: Rect) {
        let height = self.style.footer_height;
        let center_y = win.bottom() + height / 2.0;

        draw.rect()
            .x_y(0.0, center_y + 2.0)
            .w_h(win.w(), height)
            .color(rgba(0.0, 0.0, 0.0, 0.08));
        draw.rect()
            .x_y(0.0, center_y)
            .w_h(win.w(), height)
            .color(WHITE);

        let (r, g, b) = CHROME_TEXT;
        draw.text("Stacked Cards Footer")
            .x_y(0.0, center_y)
            .w_h(win.w(), height)
            .font_size(16)
            .color(rgb(r, g, b));
    }
}
