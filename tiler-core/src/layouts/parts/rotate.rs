use super::LayoutPart;
use crate::models::{Handle, Rect, RectDelta, Window, WindowHandle};
use serde::{Deserialize, Serialize};

/// A right-angle rotation of a layout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// `degrees` must be a multiple of 90; any such value, negative or past 360, is accepted.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        debug_assert!(
            degrees % 90 == 0,
            "rotation must be a multiple of 90, got {degrees}"
        );
        match degrees.rem_euclid(360) / 90 {
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    #[must_use]
    pub fn rotated(self, degrees: i32) -> Self {
        Self::from_degrees(self.degrees() + degrees)
    }

    const fn transposes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    const fn mirrors(self) -> bool {
        matches!(self, Self::Deg180 | Self::Deg270)
    }
}

/// Runs the inner part in a rotated frame.
///
/// At 90 degrees x and y are swapped, so a master on the left ends up on top. At 180 degrees
/// the result is mirrored left to right. At 270 degrees both happen, putting the master at the
/// bottom.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RotatePart {
    pub inner: Box<LayoutPart>,
    pub rotation: Rotation,
}

impl RotatePart {
    #[must_use]
    pub fn new(inner: LayoutPart) -> Self {
        Self {
            inner: Box::new(inner),
            rotation: Rotation::Deg0,
        }
    }

    pub fn rotate(&mut self, degrees: i32) {
        self.rotation = self.rotation.rotated(degrees);
    }

    pub fn apply<H: Handle>(&self, area: Rect, tiles: &[Window<H>]) -> Vec<Rect> {
        let inner_area = self.area_into(area);
        self.inner
            .apply(inner_area, tiles)
            .into_iter()
            .map(|rect| self.rect_out(&inner_area, rect))
            .collect()
    }

    /// Run the drag through the inner part as it appears in the inner frame and hand back the
    /// residual in the caller's frame.
    pub fn adjust<H: Handle>(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    ) -> RectDelta {
        let inner_area = self.area_into(area);
        let residual = self
            .inner
            .adjust(inner_area, tiles, basis, self.delta_into(delta));
        self.delta_out(residual)
    }

    fn area_into(&self, area: Rect) -> Rect {
        if self.rotation.transposes() {
            area.transposed()
        } else {
            area
        }
    }

    fn rect_out(&self, inner_area: &Rect, rect: Rect) -> Rect {
        let rect = if self.rotation.mirrors() {
            rect.mirrored_within(inner_area)
        } else {
            rect
        };
        if self.rotation.transposes() {
            rect.transposed()
        } else {
            rect
        }
    }

    fn delta_into(&self, delta: RectDelta) -> RectDelta {
        let delta = if self.rotation.transposes() {
            delta.transposed()
        } else {
            delta
        };
        if self.rotation.mirrors() {
            delta.mirrored()
        } else {
            delta
        }
    }

    fn delta_out(&self, delta: RectDelta) -> RectDelta {
        let delta = if self.rotation.mirrors() {
            delta.mirrored()
        } else {
            delta
        };
        if self.rotation.transposes() {
            delta.transposed()
        } else {
            delta
        }
    }
}
