pub mod data_model;

pub use data_model::{Card, Deck};
