pub mod easing;

pub use easing::{lerp, EasingType};
