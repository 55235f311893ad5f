mod rect;
mod session;
mod window;

pub use rect::Rect;
pub use session::{SessionError, XSession};
pub use window::{client_rect, find_window_by_title, focus_window, WindowId};
