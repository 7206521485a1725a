#[cfg(test)]
mod mock_engine;

use crate::action::Action;

#[cfg(test)]
pub use self::mock_engine::MockEngine;

/// The host side of a layout: what a layout may ask of the window manager it runs in.
pub trait Engine {
    /// Briefly show the current layout and its hint to the user.
    fn show_layout_notification(&mut self);

    /// Run the host's own behaviour for an action the layout does not override.
    fn execute_without_layout_override(&mut self, action: &Action);
}
