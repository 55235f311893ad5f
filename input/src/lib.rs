mod actions;
mod injector;
pub mod keycodes;
mod keymap;

pub use actions::{logical_buttons, N_ACTIONS};
pub use injector::{InputInjector, KeyEventKind};
pub use keymap::{Keymap, KeymapError};
