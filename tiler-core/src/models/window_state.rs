use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Undecided,
    Tiled,
    Floating,
    Maximized,
    Fullscreen,
    Dialog,
}
