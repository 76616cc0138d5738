// src/models/data_model.rs
// the JSON-based card deck data model

use nannou::prelude::*;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub content: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Card {
    /// Parse the card's CSS-style "#RRGGBB" color. Malformed colors
    /// degrade to a neutral gray rather than failing.
    pub fn fill_color(&self) -> Rgb {
        parse_hex_color(&self.color).unwrap_or_else(|| rgb(0.5, 0.5, 0.5))
    }
}

impl Deck {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let deck: Deck = serde_json::from_str(&content)?;
        Ok(deck)
    }

    /// Load a deck, falling back to the built-in deck if the file is
    /// missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: vec![
                Card {
                    title: "Card 1".to_string(),
                    content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                        Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
                        Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris \
                        nisi ut aliquip ex ea commodo consequat."
                        .to_string(),
                    color: "#FF6B6B".to_string(),
                },
                Card {
                    title: "Card 2".to_string(),
                    content: "Duis aute irure dolor in reprehenderit in voluptate velit \
                        esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat \
                        cupidatat non proident, sunt in culpa qui officia deserunt mollit \
                        anim id est laborum."
                        .to_string(),
                    color: "#4ECDC4".to_string(),
                },
                Card {
                    title: "Card 3".to_string(),
                    content: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem \
                        accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae \
                        ab illo inventore veritatis et quasi architecto beatae vitae dicta \
                        sunt explicabo."
                        .to_string(),
                    color: "#45B7D1".to_string(),
                },
                Card {
                    title: "Card 4".to_string(),
                    content: "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut \
                        odit aut fugit, sed quia consequuntur magni dolores eos qui ratione \
                        voluptatem sequi nesciunt. Neque porro quisquam est, qui dolorem \
                        ipsum quia dolor sit amet."
                        .to_string(),
                    color: "#F7DC6F".to_string(),
                },
                Card {
                    title: "Card 5".to_string(),
                    content: "At vero eos et accusamus et iusto odio dignissimos ducimus qui \
                        blanditiis praesentium voluptatum deleniti atque corrupti quos dolores \
                        et quas molestias excepturi sint occaecati cupiditate non provident."
                        .to_string(),
                    color: "#CD6155".to_string(),
                },
            ],
        }
    }
}

/// Parse "#RRGGBB" into an Rgb<f32>.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}
