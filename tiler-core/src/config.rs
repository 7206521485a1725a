/// Settings a layout reads once, when it is created.
///
/// Layouts copy what they need, so a reloaded config only reaches layouts built after the
/// reload.
pub trait Config {
    /// Space between neighbouring tiles, and between the master and stack areas.
    fn tile_layout_gap(&self) -> i32;

    /// Fraction of the work area given to the master area.
    fn tile_layout_master_ratio(&self) -> f32 {
        0.5
    }

    /// Number of windows placed in the master area.
    fn tile_layout_master_count(&self) -> usize {
        1
    }

    /// Initial rotation of the whole layout in degrees, a multiple of 90.
    fn tile_layout_rotation(&self) -> i32 {
        0
    }
}
