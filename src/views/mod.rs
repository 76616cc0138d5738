// src/views/mod.rs

pub mod card_view;
pub mod page;
pub mod scroll;

pub use card_view::CardView;
pub use page::PageView;
pub use scroll::ScrollTracker;
