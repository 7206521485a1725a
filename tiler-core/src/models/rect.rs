//! Rectangles and the axis layout parts divide them along.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

/// Direction along which a layout part divides its area.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Divide along x, parts sit side by side.
    #[default]
    Horizontal,
    /// Divide along y, parts sit on top of each other.
    Vertical,
}

/// A rectangle in work-area coordinates. x,y from top left.
///
/// Width and height are never negative; every constructor in this crate keeps it that way.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The x coordinate just past the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// The y coordinate just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles share any area. Empty rectangles never intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink the rectangle by `margin` on every side.
    #[must_use]
    pub fn shrink(&self, margin: i32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - 2 * margin).max(0),
            h: (self.h - 2 * margin).max(0),
        }
    }

    /// Start and length of the rectangle along `axis`.
    #[must_use]
    pub const fn span(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::Horizontal => (self.x, self.w),
            Axis::Vertical => (self.y, self.h),
        }
    }

    /// Copy of the rectangle with its start and length along `axis` replaced.
    #[must_use]
    pub const fn with_span(&self, axis: Axis, start: i32, len: i32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                x: start,
                w: len,
                ..*self
            },
            Axis::Vertical => Self {
                y: start,
                h: len,
                ..*self
            },
        }
    }

    /// Split the rectangle in two along `axis`, leaving `gap` between the halves.
    ///
    /// The first half gets `ratio` of the length left after the gap, rounded to the
    /// nearest pixel; the second half gets the remainder. `ratio` must be within `0.0..=1.0`.
    #[must_use]
    pub fn split(&self, axis: Axis, ratio: f32, gap: i32) -> (Self, Self) {
        let (start, len) = self.span(axis);
        let available = (len - gap).max(0);
        let first = (f64::from(available) * f64::from(ratio)).round() as i32;
        let first = first.clamp(0, available);
        let second = available - first;
        (
            self.with_span(axis, start, first),
            self.with_span(axis, start + len - second, second),
        )
    }

    /// Swap the x and y axes.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            w: self.h,
            h: self.w,
        }
    }

    /// Mirror the rectangle left to right inside `outer`.
    #[must_use]
    pub const fn mirrored_within(&self, outer: &Self) -> Self {
        Self {
            x: outer.x + outer.right() - self.right(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_should_give_the_ratio_to_the_first_half() {
        let area = Rect::new(0, 0, 1200, 800);
        let (a, b) = area.split(Axis::Horizontal, 0.6, 0);
        assert_eq!(a, Rect::new(0, 0, 720, 800));
        assert_eq!(b, Rect::new(720, 0, 480, 800));
    }

    #[test]
    fn split_should_leave_the_gap_between_halves() {
        let area = Rect::new(10, 20, 400, 210);
        let (a, b) = area.split(Axis::Vertical, 0.5, 10);
        assert_eq!(a, Rect::new(10, 20, 400, 100));
        assert_eq!(b, Rect::new(10, 130, 400, 100));
        assert_eq!(b.bottom(), area.bottom());
    }

    #[test]
    fn split_of_a_rect_smaller_than_the_gap_stays_inside() {
        let area = Rect::new(0, 0, 5, 100);
        let (a, b) = area.split(Axis::Horizontal, 0.5, 10);
        assert_eq!(a.w, 0);
        assert_eq!(b.w, 0);
        assert!(area.contains(&a));
        assert!(area.contains(&b));
    }

    #[test]
    fn mirroring_twice_is_the_identity() {
        let outer = Rect::new(100, 0, 1000, 500);
        let inner = Rect::new(150, 10, 200, 300);
        let mirrored = inner.mirrored_within(&outer);
        assert_eq!(mirrored, Rect::new(850, 10, 200, 300));
        assert_eq!(mirrored.mirrored_within(&outer), inner);
    }

    #[test]
    fn shrink_should_not_produce_negative_sizes() {
        let rect = Rect::new(0, 0, 10, 40);
        assert_eq!(rect.shrink(8), Rect::new(8, 8, 0, 24));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 100, 100);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(99, 99, 10, 10)));
        assert!(!a.intersects(&Rect::new(50, 50, 0, 10)));
    }
}
