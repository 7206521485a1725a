use std::fmt;

use super::parts::{LayoutPart, RotatePart, Rotation, SplitPart, StackPart};
use super::WindowsLayout;
use crate::action::Action;
use crate::config::Config;
use crate::engine::Engine;
use crate::models::{Axis, Handle, Rect, RectDelta, Window, WindowHandle, WindowState};

pub const ID: &str = "TileLayout";
pub const NAME: &str = "Tile Layout";
pub const ICON: &str = "bismuth-tile";

pub const MIN_MASTER_RATIO: f32 = 0.2;
pub const MAX_MASTER_RATIO: f32 = 0.8;
pub const MAX_MASTER_COUNT: usize = 10;
const MASTER_RATIO_STEP: f32 = 0.05;

/// The config values a tile layout is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    gap: i32,
    master_ratio: f32,
    master_count: usize,
    rotation: Rotation,
}

impl Settings {
    fn from_config(config: &impl Config) -> Self {
        let mut gap = config.tile_layout_gap();
        if gap < 0 {
            tracing::warn!("Ignoring negative tile layout gap {}", gap);
            gap = 0;
        }

        let mut master_ratio = config.tile_layout_master_ratio();
        if master_ratio.is_nan() {
            tracing::warn!("Ignoring invalid master ratio, using 0.5");
            master_ratio = 0.5;
        } else if !(MIN_MASTER_RATIO..=MAX_MASTER_RATIO).contains(&master_ratio) {
            tracing::warn!(
                "Master ratio {} is outside {}..={}, clamping",
                master_ratio,
                MIN_MASTER_RATIO,
                MAX_MASTER_RATIO
            );
            master_ratio = master_ratio.clamp(MIN_MASTER_RATIO, MAX_MASTER_RATIO);
        }

        let mut master_count = config.tile_layout_master_count();
        if master_count > MAX_MASTER_COUNT {
            tracing::warn!(
                "Master count {} is above {}, clamping",
                master_count,
                MAX_MASTER_COUNT
            );
            master_count = MAX_MASTER_COUNT;
        }

        let degrees = config.tile_layout_rotation();
        let rotation = if degrees % 90 == 0 {
            Rotation::from_degrees(degrees)
        } else {
            tracing::warn!("Rotation {} is not a multiple of 90, ignoring", degrees);
            Rotation::Deg0
        };

        Self {
            gap,
            master_ratio,
            master_count,
            rotation,
        }
    }
}

/// The classic master and stack layout.
///
/// The first `master_count` windows share the master area, the rest are stacked beside it.
/// The whole layout can be rotated in steps of 90 degrees, and the master area can be rotated
/// on its own to lay the master windows out side by side.
#[derive(Debug)]
pub struct TileLayout {
    settings: Settings,
    tree: LayoutPart,
}

impl TileLayout {
    pub fn new(config: &impl Config) -> Self {
        Self::from_settings(Settings::from_config(config))
    }

    fn from_settings(settings: Settings) -> Self {
        let master = RotatePart::new(StackPart::new(Axis::Vertical, settings.gap).into());
        let stack = StackPart::new(Axis::Vertical, settings.gap);
        let mut split = SplitPart::new(master.into(), stack.into())
            .with_gap(settings.gap)
            .with_ratio_bounds(MIN_MASTER_RATIO, MAX_MASTER_RATIO);
        split.set_ratio(settings.master_ratio);
        split.primary_size = settings.master_count;

        let mut root = RotatePart::new(split.into());
        root.rotation = settings.rotation;
        Self {
            settings,
            tree: root.into(),
        }
    }

    fn split(&self) -> Option<&SplitPart> {
        self.tree.as_rotate()?.inner.as_split()
    }

    fn split_mut(&mut self) -> Option<&mut SplitPart> {
        self.tree.as_rotate_mut()?.inner.as_split_mut()
    }

    fn master_part(&self) -> Option<&RotatePart> {
        self.split()?.primary.as_rotate()
    }

    fn master_part_mut(&mut self) -> Option<&mut RotatePart> {
        self.split_mut()?.primary.as_rotate_mut()
    }

    #[must_use]
    pub fn master_count(&self) -> usize {
        self.split().map_or(0, |split| split.primary_size)
    }

    /// Set how many windows share the master area, at most 10.
    pub fn set_master_count(&mut self, count: usize) {
        if let Some(split) = self.split_mut() {
            split.primary_size = count.min(MAX_MASTER_COUNT);
        }
    }

    #[must_use]
    pub fn master_ratio(&self) -> f32 {
        self.split()
            .map_or(self.settings.master_ratio, SplitPart::ratio)
    }

    /// Set the share of the area given to the master windows, kept within `0.2..=0.8`.
    pub fn set_master_ratio(&mut self, ratio: f32) {
        if let Some(split) = self.split_mut() {
            split.set_ratio(ratio);
        }
    }

    /// Rotation of the whole layout.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.tree
            .as_rotate()
            .map_or(Rotation::Deg0, |part| part.rotation)
    }

    /// Rotation of the master area relative to the rest of the layout.
    #[must_use]
    pub fn part_rotation(&self) -> Rotation {
        self.master_part().map_or(Rotation::Deg0, |part| part.rotation)
    }

    pub fn rotate(&mut self, degrees: i32) {
        if let Some(root) = self.tree.as_rotate_mut() {
            root.rotate(degrees);
        }
    }

    pub fn rotate_part(&mut self, degrees: i32) {
        if let Some(master) = self.master_part_mut() {
            master.rotate(degrees);
        }
    }

    #[must_use]
    pub fn hint(&self) -> String {
        self.master_count().to_string()
    }

    /// Tile every window in `tiles` inside `area`.
    pub fn apply<H: Handle>(&self, tiles: &mut [Window<H>], area: Rect) {
        tracing::trace!("{}: tiling {} windows in {:?}", self, tiles.len(), area);
        let rects = self.tree.apply(area, tiles);
        for (tile, rect) in tiles.iter_mut().zip(rects) {
            tile.state = WindowState::Tiled;
            tile.geometry = rect;
        }
    }

    pub fn adjust<H: Handle>(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    ) {
        let residual = self.tree.adjust(area, tiles, basis, delta);
        tracing::debug!(
            "{}: adjusted {:?} by {:?}, unused {:?}",
            self,
            basis,
            delta,
            residual
        );
    }

    pub fn execute_action(&mut self, engine: &mut dyn Engine, action: &Action) {
        tracing::debug!("{}: executing {:?}", self, action);
        match action {
            Action::DecreaseMasterAreaSize => {
                self.set_master_ratio(self.master_ratio() - MASTER_RATIO_STEP);
            }
            Action::IncreaseMasterAreaSize => {
                self.set_master_ratio(self.master_ratio() + MASTER_RATIO_STEP);
            }
            Action::IncreaseMasterWindowCount => {
                self.set_master_count(self.master_count() + 1);
                engine.show_layout_notification();
            }
            Action::DecreaseMasterWindowCount => {
                self.set_master_count(self.master_count().saturating_sub(1));
                engine.show_layout_notification();
            }
            Action::Rotate => self.rotate(90),
            Action::RotateReverse => self.rotate(-90),
            Action::RotatePart => self.rotate_part(90),
            Action::FocusNextWindow
            | Action::FocusPreviousWindow
            | Action::MoveActiveWindowUp
            | Action::MoveActiveWindowDown
            | Action::ToggleActiveWindowFloating
            | Action::SwitchToNextLayout
            | Action::SwitchToPreviousLayout
            | Action::Other(_) => engine.execute_without_layout_override(action),
        }
    }
}

/// A fresh layout from the same config, carrying over only the master ratio and count.
impl Clone for TileLayout {
    fn clone(&self) -> Self {
        let mut other = Self::from_settings(self.settings);
        other.set_master_ratio(self.master_ratio());
        other.set_master_count(self.master_count());
        other
    }
}

impl fmt::Display for TileLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileLayout(nmaster={}, ratio={})",
            self.master_count(),
            self.master_ratio()
        )
    }
}

impl<H: Handle> WindowsLayout<H> for TileLayout {
    fn class_id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn icon(&self) -> &'static str {
        ICON
    }

    fn hint(&self) -> String {
        Self::hint(self)
    }

    fn apply(&self, tiles: &mut [Window<H>], area: Rect) {
        Self::apply(self, tiles, area);
    }

    fn adjust(
        &mut self,
        area: Rect,
        tiles: &[Window<H>],
        basis: &WindowHandle<H>,
        delta: RectDelta,
    ) {
        Self::adjust(self, area, tiles, basis, delta);
    }

    fn clone_layout(&self) -> Box<dyn WindowsLayout<H>> {
        Box::new(self.clone())
    }

    fn execute_action(&mut self, engine: &mut dyn Engine, action: &Action) {
        Self::execute_action(self, engine, action);
    }
}
