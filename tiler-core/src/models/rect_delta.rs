use super::{Axis, Rect};
use serde::{Deserialize, Serialize};

/// How far each edge of a window moved during a drag.
///
/// Positive values mean the edge moved outwards, i.e. the window grew on that side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectDelta {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RectDelta {
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The delta that turns `before` into `after`.
    #[must_use]
    pub const fn from_rects(before: &Rect, after: &Rect) -> Self {
        Self {
            left: before.x - after.x,
            right: after.right() - before.right(),
            top: before.y - after.y,
            bottom: after.bottom() - before.bottom(),
        }
    }

    /// Move the edges of `rect` by this delta.
    #[must_use]
    pub fn apply_to(&self, rect: &Rect) -> Rect {
        Rect {
            x: rect.x - self.left,
            y: rect.y - self.top,
            w: (rect.w + self.left + self.right).max(0),
            h: (rect.h + self.top + self.bottom).max(0),
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// Movement of the edge at the start of `axis` (left or top).
    #[must_use]
    pub const fn leading(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Movement of the edge at the end of `axis` (right or bottom).
    #[must_use]
    pub const fn trailing(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    #[must_use]
    pub const fn with_leading(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                left: value,
                ..self
            },
            Axis::Vertical => Self { top: value, ..self },
        }
    }

    #[must_use]
    pub const fn with_trailing(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                right: value,
                ..self
            },
            Axis::Vertical => Self {
                bottom: value,
                ..self
            },
        }
    }

    /// The same movement seen with x and y swapped, see [`Rect::transposed`].
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            left: self.top,
            right: self.bottom,
            top: self.left,
            bottom: self.right,
        }
    }

    /// The same movement seen in a left to right mirror, see [`Rect::mirrored_within`].
    #[must_use]
    pub const fn mirrored(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..*self
        }
    }
}
