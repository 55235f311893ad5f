use crate::keycodes::{self, Keycode};
use crate::{actions, Keymap};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};
use x11_utils::{focus_window, WindowId, XSession};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, ConnectionExt as _};

#[derive(Clone, Copy)]
pub enum KeyEventKind {
    Press,
    Release,
}

const FOCUS_SETTLE: Duration = Duration::from_millis(10);

/// Turns discrete actions into bounded-duration key pulses against the
/// target window. Focus and delivery are best-effort: a dropped event is
/// an accepted cost of driving a real-time process, never an error.
pub struct InputInjector {
    session: Rc<XSession>,
    win: WindowId,
    keymap: Keymap,
    focus_before_send: bool,
    hold: Duration,
}

impl InputInjector {
    pub fn new(
        session: Rc<XSession>,
        win: WindowId,
        keymap: Keymap,
        focus_before_send: bool,
        hold: Duration,
    ) -> InputInjector {
        InputInjector {
            session,
            win,
            keymap,
            focus_before_send,
            hold,
        }
    }
    pub fn press_action(&mut self, action: i32) {
        self.press_logical(actions::logical_buttons(action));
    }
    pub fn press_logical(&mut self, logical: &[&str]) {
        if self.focus_before_send {
            // some toolkits only deliver key events to the focused window,
            // others accept them regardless; still send after a failure
            if let Err(err) = focus_window(&self.session, self.win) {
                warn!("focus failed: {err}");
            }
            std::thread::sleep(FOCUS_SETTLE);
        }
        let keycodes = resolve(&self.keymap, logical);
        for keycode in &keycodes {
            self.send_key(*keycode, KeyEventKind::Press);
        }
        std::thread::sleep(self.hold);
        // released most-recent-first so chorded presses unwind cleanly
        for keycode in keycodes.iter().rev() {
            self.send_key(*keycode, KeyEventKind::Release);
        }
    }
    fn send_key(&self, keycode: Keycode, kind: KeyEventKind) {
        let (response_type, label) = match kind {
            KeyEventKind::Press => (xproto::KEY_PRESS_EVENT, "press"),
            KeyEventKind::Release => (xproto::KEY_RELEASE_EVENT, "release"),
        };
        let event = xproto::KeyPressEvent {
            response_type,
            detail: keycode,
            root: self.session.root(),
            event: self.win,
            same_screen: true,
            time: 0,
            ..Default::default()
        };
        let result = self
            .session
            .conn()
            .send_event(false, self.win, xproto::EventMask::default(), event)
            .and_then(|_| self.session.conn().flush());
        if let Err(err) = result {
            debug!("dropped key {label} event: {err}");
        }
    }
}

fn resolve(keymap: &Keymap, logical: &[&str]) -> Vec<Keycode> {
    logical
        .iter()
        .filter_map(|name| {
            let physical = keymap.physical(name)?;
            keycodes::lookup(&physical.to_lowercase())
        })
        .collect()
}
