use super::weights;
use crate::models::{Axis, Handle, Rect, RectDelta, Window, WindowHandle};
use serde::{Deserialize, Serialize};

/// Lays windows out as bands next to each other along `axis`, `gap` apart.
///
/// A fresh stack is divided equally. Dragging a boundary stores a share per band, which the
/// stack keeps for as long as it holds the same number of windows; once that changes it goes
/// back to equal bands.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StackPart {
    pub axis: Axis,
    pub gap: i32,
    #[serde(default)]
    weights: Vec<f32>,
}

impl Default for StackPart {
    fn default() -> Self {
        Self::new(Axis::Vertical, 0)
    }
}

impl StackPart {
    #[must_use]
    pub const fn new(axis: Axis, gap: i32) -> Self {
        Self {
            axis,
            gap,
            weights: Vec::new(),
        }
    }

    /// Band shares for `count` windows: the dragged ones if they were made for this many
    /// windows, equal ones otherwise.
    fn weights_for(&self, count: usize) -> Vec<f32> {
        if self.weights.len() == count {
            self.weights.clone()
        } else {
            vec![1.0; count]
        }
    }

    pub fn apply<H: Handle>(&self, area: Rect, tiles: &[Window<H>]) -> Vec<Rect> {
        let (start, len) = area.span(self.axis);
        weights::split_weighted(start, len, &self.weights_for(tiles.len()), self.gap)
            .into_iter()
            .map(|(band_start, band_len)| area.with_span(self.axis, band_start, band_len))
            .collect()
    }

    /// Move the boundaries next to `basis` by the drag in `delta` and remember the new shares.
    ///
    /// Returns the part of `delta` this stack cannot absorb: the edges across the stack, plus
    /// the outer edges of the first and last band, which belong to whoever owns the stack.
    pub fn adjust<H: Handle>(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    ) -> RectDelta {
        let Some(index) = tiles.iter().position(|tile| &tile.handle == basis) else {
            return delta;
        };
        let (_, len) = area.span(self.axis);
        self.weights = weights::adjust_weights(
            len,
            &self.weights_for(tiles.len()),
            self.gap,
            index,
            delta.leading(self.axis),
            delta.trailing(self.axis),
        );

        let mut residual = delta;
        if index > 0 {
            residual = residual.with_leading(self.axis, 0);
        }
        if index + 1 < tiles.len() {
            residual = residual.with_trailing(self.axis, 0);
        }
        residual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn tiles(count: i32) -> Vec<Window<MockHandle>> {
        (0..count).map(|i| Window::new(WindowHandle(i))).collect()
    }

    #[test]
    fn an_empty_stack_has_no_geometry() {
        let stack = StackPart::default();
        assert!(stack.apply(Rect::new(0, 0, 100, 100), &tiles(0)).is_empty());
    }

    #[test]
    fn a_single_window_gets_the_whole_area() {
        let stack = StackPart::new(Axis::Vertical, 12);
        let area = Rect::new(5, 5, 400, 300);
        assert_eq!(stack.apply(area, &tiles(1)), vec![area]);
    }

    #[test]
    fn windows_are_stacked_with_gaps_between_them() {
        let stack = StackPart::new(Axis::Horizontal, 10);
        let rects = stack.apply(Rect::new(0, 0, 320, 50), &tiles(3));
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 100, 50),
                Rect::new(110, 0, 100, 50),
                Rect::new(220, 0, 100, 50),
            ]
        );
    }

    #[test]
    fn dragging_a_bottom_edge_moves_the_boundary_below_it() {
        let mut stack = StackPart::default();
        let area = Rect::new(0, 0, 200, 900);
        let windows = tiles(3);
        let residual = stack.adjust(area, &windows, &WindowHandle(1), RectDelta::new(0, 0, 0, 60));
        assert!(residual.is_zero());
        let rects = stack.apply(area, &windows);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 300));
        assert_eq!(rects[1], Rect::new(0, 300, 200, 360));
        assert_eq!(rects[2], Rect::new(0, 660, 200, 240));
    }

    #[test]
    fn drags_are_kept_by_the_stack_not_the_windows() {
        let mut stack = StackPart::default();
        let area = Rect::new(0, 0, 200, 900);
        let windows = tiles(3);
        let untouched = stack.clone();
        stack.adjust(area, &windows, &WindowHandle(0), RectDelta::new(0, 0, 0, 150));
        assert_eq!(windows, tiles(3));
        assert_eq!(untouched.apply(area, &windows)[0], Rect::new(0, 0, 200, 300));
        assert_eq!(stack.apply(area, &windows)[0], Rect::new(0, 0, 200, 450));
    }

    #[test]
    fn a_different_number_of_windows_gets_equal_bands_again() {
        let mut stack = StackPart::default();
        let area = Rect::new(0, 0, 200, 900);
        stack.adjust(area, &tiles(3), &WindowHandle(1), RectDelta::new(0, 0, 0, 60));

        let rects = stack.apply(area, &tiles(2));
        assert_eq!(
            rects,
            vec![Rect::new(0, 0, 200, 450), Rect::new(0, 450, 200, 450)]
        );
        // Dragging with the new count starts over from equal bands.
        stack.adjust(area, &tiles(2), &WindowHandle(0), RectDelta::new(0, 0, 0, -50));
        assert_eq!(stack.apply(area, &tiles(2))[0], Rect::new(0, 0, 200, 400));
        assert_eq!(stack.apply(area, &tiles(3))[0], Rect::new(0, 0, 200, 300));
    }

    #[test]
    fn outer_and_cross_edges_are_handed_back() {
        let mut stack = StackPart::default();
        let area = Rect::new(0, 0, 200, 900);
        let windows = tiles(3);
        let delta = RectDelta::new(7, 8, 9, 10);
        let first = stack.adjust(area, &windows, &WindowHandle(0), delta);
        assert_eq!(first, RectDelta::new(7, 8, 9, 0));
        let last = stack.adjust(area, &windows, &WindowHandle(2), delta);
        assert_eq!(last, RectDelta::new(7, 8, 0, 10));
    }

    #[test]
    fn unknown_basis_leaves_the_stack_alone() {
        let mut stack = StackPart::default();
        let windows = tiles(2);
        let delta = RectDelta::new(0, 0, 0, 50);
        let residual = stack.adjust(
            Rect::new(0, 0, 100, 100),
            &windows,
            &WindowHandle(42),
            delta,
        );
        assert_eq!(residual, delta);
        assert_eq!(stack, StackPart::default());
    }
}
