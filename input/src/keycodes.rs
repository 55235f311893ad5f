// X11 keycodes for the standard evdev/pc105 layout (keysym + 8).

pub type Keycode = u8;

pub const KEYCODE_UP: Keycode = 111;
pub const KEYCODE_DOWN: Keycode = 116;
pub const KEYCODE_LEFT: Keycode = 113;
pub const KEYCODE_RIGHT: Keycode = 114;
pub const KEYCODE_A: Keycode = 38;
pub const KEYCODE_S: Keycode = 39;
pub const KEYCODE_Q: Keycode = 24;
pub const KEYCODE_W: Keycode = 25;
pub const KEYCODE_Z: Keycode = 52;
pub const KEYCODE_X: Keycode = 53;
pub const KEYCODE_RETURN: Keycode = 36;
pub const KEYCODE_RSHIFT: Keycode = 62;
pub const KEYCODE_SPACE: Keycode = 65;

pub fn lookup(physical: &str) -> Option<Keycode> {
    match physical {
        "up" => Some(KEYCODE_UP),
        "down" => Some(KEYCODE_DOWN),
        "left" => Some(KEYCODE_LEFT),
        "right" => Some(KEYCODE_RIGHT),
        "a" => Some(KEYCODE_A),
        "s" => Some(KEYCODE_S),
        "q" => Some(KEYCODE_Q),
        "w" => Some(KEYCODE_W),
        "z" => Some(KEYCODE_Z),
        "x" => Some(KEYCODE_X),
        "return" => Some(KEYCODE_RETURN),
        "rshift" => Some(KEYCODE_RSHIFT),
        "space" => Some(KEYCODE_SPACE),
        _ => None,
    }
}
