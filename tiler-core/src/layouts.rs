pub mod parts;
pub mod tile_layout;

use std::fmt::{Debug, Display};

use crate::action::Action;
use crate::engine::Engine;
use crate::models::{Handle, Rect, RectDelta, Window, WindowHandle};

pub use parts::{LayoutPart, RotatePart, Rotation, SplitPart, StackPart};
pub use tile_layout::TileLayout;

/// What a layout registry needs from a layout.
///
/// The registry owns boxed layouts, one per layout slot, and the host calls them one at a
/// time from its event loop.
pub trait WindowsLayout<H: Handle>: Debug + Display {
    /// Stable identifier of the kind of layout.
    fn class_id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    /// Short text shown next to the layout name, reflecting its current state.
    fn hint(&self) -> String;

    /// Place `tiles` inside `area`, writing each window's geometry.
    fn apply(&self, tiles: &mut [Window<H>], area: Rect);

    /// React to the user resizing `basis` by `delta`.
    fn adjust(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    );

    /// An independent copy for another layout slot.
    fn clone_layout(&self) -> Box<dyn WindowsLayout<H>>;

    fn execute_action(&mut self, engine: &mut dyn Engine, action: &Action);
}
