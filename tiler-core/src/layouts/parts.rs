//! The building blocks layouts are composed of.
mod rotate;
mod split;
mod stack;
mod weights;

pub use rotate::{RotatePart, Rotation};
pub use split::SplitPart;
pub use stack::StackPart;

use crate::models::{Handle, Rect, RectDelta, Window, WindowHandle};
use serde::{Deserialize, Serialize};

/// One node of a layout tree. Each node owns its children.
///
/// `apply` returns one rectangle per tile, in tile order, all inside `area` and not
/// overlapping each other. `adjust` reacts to `basis` being resized by `delta` and returns the
/// part of the resize this node could not take up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum LayoutPart {
    Stack(StackPart),
    Split(SplitPart),
    Rotate(RotatePart),
}

impl LayoutPart {
    pub fn apply<H: Handle>(&self, area: Rect, tiles: &[Window<H>]) -> Vec<Rect> {
        match self {
            Self::Stack(part) => part.apply(area, tiles),
            Self::Split(part) => part.apply(area, tiles),
            Self::Rotate(part) => part.apply(area, tiles),
        }
    }

    pub fn adjust<H: Handle>(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    ) -> RectDelta {
        match self {
            Self::Stack(part) => part.adjust(area, tiles, basis, delta),
            Self::Split(part) => part.adjust(area, tiles, basis, delta),
            Self::Rotate(part) => part.adjust(area, tiles, basis, delta),
        }
    }

    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitPart> {
        match self {
            Self::Split(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_split_mut(&mut self) -> Option<&mut SplitPart> {
        match self {
            Self::Split(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_rotate(&self) -> Option<&RotatePart> {
        match self {
            Self::Rotate(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_rotate_mut(&mut self) -> Option<&mut RotatePart> {
        match self {
            Self::Rotate(part) => Some(part),
            _ => None,
        }
    }
}

impl From<StackPart> for LayoutPart {
    fn from(part: StackPart) -> Self {
        Self::Stack(part)
    }
}

impl From<SplitPart> for LayoutPart {
    fn from(part: SplitPart) -> Self {
        Self::Split(part)
    }
}

impl From<RotatePart> for LayoutPart {
    fn from(part: RotatePart) -> Self {
        Self::Rotate(part)
    }
}
