use x11rb::connection::Connection;
use x11rb::protocol::xproto;
use x11rb::rust_connection::RustConnection;

/// Connection to the X server plus the default screen's handles. Shared
/// by the capture and input paths through an `Rc`; a single session per
/// target window, never across threads.
pub struct XSession {
    conn: RustConnection,
    screen: xproto::Screen,
}

#[derive(Debug)]
pub enum SessionError {
    Connect(x11rb::errors::ConnectError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Connect(err) => {
                write!(f, "can't open a connection to the X server: {err}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<x11rb::errors::ConnectError> for SessionError {
    fn from(err: x11rb::errors::ConnectError) -> SessionError {
        SessionError::Connect(err)
    }
}

impl XSession {
    pub fn open() -> Result<XSession, SessionError> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let screen = conn.setup().roots[screen_num].clone();
        Ok(XSession { conn, screen })
    }
    pub fn conn(&self) -> &RustConnection {
        &self.conn
    }
    pub fn root(&self) -> xproto::Window {
        self.screen.root
    }
    pub fn root_depth(&self) -> u8 {
        self.screen.root_depth
    }
}
