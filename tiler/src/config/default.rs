use super::Config;

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            screen_gap: 0,
            tile_layout_gap: 0,
            tile_layout_master_ratio: 0.5,
            tile_layout_master_count: 1,
            tile_layout_rotation: 0,
        }
    }
}
