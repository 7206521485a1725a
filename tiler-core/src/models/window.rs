//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use super::Rect;
use super::WindowState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}

/// A window as seen by a layout: who it is and where it goes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub state: WindowState,
    pub geometry: Rect,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>) -> Self {
        Self {
            handle,
            state: WindowState::default(),
            geometry: Rect::default(),
        }
    }

    #[must_use]
    pub fn is_tiled(&self) -> bool {
        self.state == WindowState::Tiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_windows_start_undecided() {
        let window = Window::new(WindowHandle::<MockHandle>(1));
        assert!(!window.is_tiled());
        assert_eq!(window.state, WindowState::Undecided);
        assert_eq!(window.geometry, Rect::default());
    }
}
