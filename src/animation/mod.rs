pub mod card_motion;
pub mod spring;

pub use card_motion::{AnimatedCardState, CardMotion, CardSegment, FADE_ANCHOR, TOP_ANCHOR};
pub use spring::Spring;
