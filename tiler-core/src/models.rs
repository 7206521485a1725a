//! Geometry and window objects the layouts work on.
mod rect;
mod rect_delta;
mod window;
mod window_state;

pub use rect::Axis;
pub use rect::Rect;
pub use rect_delta::RectDelta;
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::Window;
pub use window::WindowHandle;
pub use window_state::WindowState;
