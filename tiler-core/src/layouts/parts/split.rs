use super::LayoutPart;
use crate::models::{Axis, Handle, Rect, RectDelta, Window, WindowHandle};
use serde::{Deserialize, Serialize};

/// Divides an area in two along `axis`: the first `primary_size` windows go to the primary
/// part, the rest to the secondary part.
///
/// The primary part gets `ratio` of the area (after the gap). When one side has no windows the
/// other side gets the whole area.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SplitPart {
    pub primary: Box<LayoutPart>,
    pub secondary: Box<LayoutPart>,
    pub axis: Axis,
    pub gap: i32,
    pub primary_size: usize,
    ratio: f32,
    min_ratio: f32,
    max_ratio: f32,
}

impl SplitPart {
    #[must_use]
    pub fn new(primary: LayoutPart, secondary: LayoutPart) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: Box::new(secondary),
            axis: Axis::Horizontal,
            gap: 0,
            primary_size: 1,
            ratio: 0.5,
            min_ratio: 0.0,
            max_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    /// Limit the ratio to `min..=max`, both within `0.0..=1.0`.
    #[must_use]
    pub fn with_ratio_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_ratio = min;
        self.max_ratio = max;
        self.set_ratio(self.ratio);
        self
    }

    #[must_use]
    pub const fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Set the primary share of the area, saturating at the ratio bounds.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(self.min_ratio, self.max_ratio);
    }

    pub fn apply<H: Handle>(&self, area: Rect, tiles: &[Window<H>]) -> Vec<Rect> {
        let primary_size = self.primary_size.min(tiles.len());
        if primary_size == tiles.len() {
            return self.primary.apply(area, tiles);
        }
        if primary_size == 0 {
            return self.secondary.apply(area, tiles);
        }

        let (primary_area, secondary_area) = area.split(self.axis, self.ratio, self.gap);
        let (primary_tiles, secondary_tiles) = tiles.split_at(primary_size);
        let mut rects = self.primary.apply(primary_area, primary_tiles);
        rects.extend(self.secondary.apply(secondary_area, secondary_tiles));
        rects
    }

    /// Pass the drag to the side holding `basis`, then move the split by whatever that side
    /// hands back on the edge facing the other side.
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
        let primary_size = self.primary_size.min(tiles.len());
        if primary_size == tiles.len() {
            return self.primary.adjust(area, tiles, basis, delta);
        }
        if primary_size == 0 {
            return self.secondary.adjust(area, tiles, basis, delta);
        }

        let (primary_area, secondary_area) = area.split(self.axis, self.ratio, self.gap);
        let (_, primary_len) = primary_area.span(self.axis);
        let (primary_tiles, secondary_tiles) = tiles.split_at(primary_size);

        if index < primary_size {
            let residual = self
                .primary
                .adjust(primary_area, primary_tiles, basis, delta);
            let moved = residual.trailing(self.axis);
            if moved != 0 {
                self.resize_primary(area, primary_len + moved);
            }
            residual.with_trailing(self.axis, 0)
        } else {
            let residual = self
                .secondary
                .adjust(secondary_area, secondary_tiles, basis, delta);
            let moved = residual.leading(self.axis);
            if moved != 0 {
                self.resize_primary(area, primary_len - moved);
            }
            residual.with_leading(self.axis, 0)
        }
    }

    fn resize_primary(&mut self, area: Rect, primary_len: i32) {
        let (_, len) = area.span(self.axis);
        let available = len - self.gap;
        if available > 0 {
            self.set_ratio(primary_len as f32 / available as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::parts::StackPart;
    use crate::models::MockHandle;

    fn tiles(count: i32) -> Vec<Window<MockHandle>> {
        (0..count).map(|i| Window::new(WindowHandle(i))).collect()
    }

    fn master_and_stack() -> SplitPart {
        SplitPart::new(StackPart::default().into(), StackPart::default().into())
            .with_ratio_bounds(0.2, 0.8)
    }

    #[test]
    fn primary_gets_the_ratio_of_the_area() {
        let mut split = master_and_stack();
        split.set_ratio(0.6);
        let rects = split.apply(Rect::new(0, 0, 1200, 800), &tiles(3));
        assert_eq!(rects[0], Rect::new(0, 0, 720, 800));
        assert_eq!(rects[1], Rect::new(720, 0, 480, 400));
        assert_eq!(rects[2], Rect::new(720, 400, 480, 400));
    }

    #[test]
    fn gap_separates_primary_and_secondary() {
        let split = master_and_stack().with_gap(20);
        let rects = split.apply(Rect::new(0, 0, 1020, 600), &tiles(2));
        assert_eq!(rects[0], Rect::new(0, 0, 500, 600));
        assert_eq!(rects[1], Rect::new(520, 0, 500, 600));
    }

    #[test]
    fn an_empty_primary_leaves_the_whole_area_to_the_secondary() {
        let mut split = master_and_stack();
        split.primary_size = 0;
        let area = Rect::new(0, 0, 300, 900);
        let rects = split.apply(area, &tiles(3));
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 300, 300),
                Rect::new(0, 300, 300, 300),
                Rect::new(0, 600, 300, 300),
            ]
        );
    }

    #[test]
    fn an_empty_secondary_leaves_the_whole_area_to_the_primary() {
        let mut split = master_and_stack();
        split.primary_size = 5;
        let area = Rect::new(0, 0, 300, 600);
        let rects = split.apply(area, &tiles(2));
        assert_eq!(
            rects,
            vec![Rect::new(0, 0, 300, 300), Rect::new(0, 300, 300, 300)]
        );
    }

    #[test]
    fn ratio_is_kept_within_its_bounds() {
        let mut split = master_and_stack();
        split.set_ratio(0.95);
        assert!((split.ratio() - 0.8).abs() < f32::EPSILON);
        split.set_ratio(-1.0);
        assert!((split.ratio() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn dragging_the_primary_edge_moves_the_split() {
        let mut split = master_and_stack();
        let area = Rect::new(0, 0, 1000, 500);
        let windows = tiles(2);
        let residual = split.adjust(
            area,
            &windows,
            &WindowHandle(0),
            RectDelta::new(0, 100, 0, 0),
        );
        assert!(residual.is_zero());
        assert!((split.ratio() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn dragging_the_secondary_edge_moves_the_split() {
        let mut split = master_and_stack();
        let area = Rect::new(0, 0, 1000, 500);
        let windows = tiles(2);
        split.adjust(
            area,
            &windows,
            &WindowHandle(1),
            RectDelta::new(100, 0, 0, 0),
        );
        assert!((split.ratio() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn dragging_past_the_bounds_saturates() {
        let mut split = master_and_stack();
        let area = Rect::new(0, 0, 1000, 500);
        let windows = tiles(2);
        split.adjust(
            area,
            &windows,
            &WindowHandle(0),
            RectDelta::new(0, 900, 0, 0),
        );
        assert!((split.ratio() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn outer_edges_are_handed_back() {
        let mut split = master_and_stack();
        let area = Rect::new(0, 0, 1000, 500);
        let windows = tiles(2);
        let residual = split.adjust(
            area,
            &windows,
            &WindowHandle(0),
            RectDelta::new(30, 0, 5, 0),
        );
        assert_eq!(residual, RectDelta::new(30, 0, 5, 0));
        assert!((split.ratio() - 0.5).abs() < f32::EPSILON);
    }
}
