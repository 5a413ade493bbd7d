//! Word-cloud rendering.
//!
//! Thin by design: the interesting work happens upstream. The renderer
//! takes the ordered frequency table, drops stopwords, and rasterizes a
//! fixed-size PNG with frequency-proportional font sizes. Layout is
//! deterministic so re-running over an unchanged corpus reproduces the
//! same image.

pub mod cloud;

pub use cloud::{CloudRenderer, IMAGE_HEIGHT, IMAGE_WIDTH};
