//! Master and stack window geometry for tiling window managers.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Layout math converts between pixel counts and ratios all the time.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod action;
pub mod config;
mod engine;
pub mod layouts;
pub mod models;

pub use action::{Action, ParseActionError};
pub use config::Config;
pub use engine::Engine;
pub use layouts::{TileLayout, WindowsLayout};
pub use models::{Rect, RectDelta, Window, WindowHandle};
