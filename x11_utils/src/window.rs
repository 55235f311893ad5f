use crate::{Rect, XSession};
use x11rb::connection::Connection;
use x11rb::errors::{ConnectionError, ReplyError};
use x11rb::protocol::xproto::{self, ConnectionExt as _};

pub type WindowId = xproto::Window;

/// Window extent in screen coordinates.
pub fn client_rect(session: &XSession, win: WindowId) -> Result<Rect, ReplyError> {
    let conn = session.conn();
    let geometry = conn.get_geometry(win)?.reply()?;
    let origin = conn.translate_coordinates(win, session.root(), 0, 0)?.reply()?;
    let left = i32::from(origin.dst_x);
    let top = i32::from(origin.dst_y);
    Ok(Rect::new(
        left,
        top,
        left + i32::from(geometry.width),
        top + i32::from(geometry.height),
    ))
}

/// Restore, raise and give input focus to `win`. Callers treat failure as
/// recoverable; some toolkits accept key events without explicit focus.
pub fn focus_window(session: &XSession, win: WindowId) -> Result<(), ConnectionError> {
    let conn = session.conn();
    conn.map_window(win)?;
    conn.configure_window(
        win,
        &xproto::ConfigureWindowAux::new().stack_mode(xproto::StackMode::ABOVE),
    )?;
    conn.set_input_focus(xproto::InputFocus::PARENT, win, x11rb::CURRENT_TIME)?;
    conn.flush()?;
    Ok(())
}

pub fn find_window_by_title(session: &XSession, hint: &str) -> Option<WindowId> {
    find_descendant(session, session.root(), &hint.to_lowercase())
}

fn find_descendant(session: &XSession, parent: WindowId, hint: &str) -> Option<WindowId> {
    // a window with a non-UTF8 title, or one that vanishes mid-walk,
    // can't be the one we're looking for; errors are ignored
    if let Ok(title) = window_title(session, parent) {
        if title.to_lowercase().contains(hint) {
            return Some(parent);
        }
    }
    if let Ok(children) = children(session, parent) {
        for child in children {
            if let Some(win) = find_descendant(session, child, hint) {
                return Some(win);
            }
        }
    }
    None
}

fn window_title(session: &XSession, win: WindowId) -> Result<String, ReplyError> {
    let bytes = session
        .conn()
        .get_property(
            false,
            win,
            xproto::AtomEnum::WM_NAME,
            xproto::AtomEnum::STRING,
            0,
            32,
        )?
        .reply()?
        .value;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn children(session: &XSession, win: WindowId) -> Result<Vec<WindowId>, ReplyError> {
    let tree = session.conn().query_tree(win)?.reply()?;
    Ok(tree.children)
}
