use crate::{EnvError, EnvSettings};
use capture::FrameCapturer;
use input::{InputInjector, Keymap};
use observation::Observation;
use std::path::PathBuf;
use std::process::Child;
use std::rc::Rc;
use tracing::{info, warn};
use x11_utils::{focus_window, WindowId, XSession};

/// Everything the adapter needs from the process on the other side of
/// the screen. `ensure` is lazy and idempotent: collaborators come into
/// existence on first use and are reused for the adapter's lifetime.
pub trait Target {
    fn ensure(&mut self) -> Result<(), EnvError>;
    fn focus(&mut self);
    fn capture(&mut self) -> Result<Observation, EnvError>;
    fn press_action(&mut self, action: i32);
}

const WINDOW_TITLE_HINT: &str = "melonds";

/// Live melonDS target: spawns the process once, discovers its window
/// once, then builds the capture and input pipelines against that handle.
pub struct MelonTarget {
    session: Rc<XSession>,
    exe: PathBuf,
    rom: Option<PathBuf>,
    keymap: Keymap,
    settings: EnvSettings,
    process: Option<Child>,
    win: Option<WindowId>,
    capturer: Option<FrameCapturer>,
    injector: Option<InputInjector>,
}

impl MelonTarget {
    pub fn new(
        session: Rc<XSession>,
        exe: PathBuf,
        rom: Option<PathBuf>,
        keymap: Keymap,
        settings: EnvSettings,
    ) -> MelonTarget {
        MelonTarget {
            session,
            exe,
            rom,
            keymap,
            settings,
            process: None,
            win: None,
            capturer: None,
            injector: None,
        }
    }
}

impl Target for MelonTarget {
    fn ensure(&mut self) -> Result<(), EnvError> {
        if self.process.is_none() {
            self.process = Some(launcher::spawn(&self.exe, self.rom.as_deref())?);
        }
        if self.win.is_none() {
            let win = launcher::wait_for_window(&self.session, WINDOW_TITLE_HINT)?;
            info!(window = win, "attached to the emulator window");
            self.win = Some(win);
        }
        let win = self.win.expect("window discovered above");
        if self.capturer.is_none() {
            let capturer =
                FrameCapturer::new(self.session.clone(), win, self.settings.target_size)?;
            info!(backend = capturer.backend_name(), "capture pipeline ready");
            self.capturer = Some(capturer);
        }
        if self.injector.is_none() {
            self.injector = Some(InputInjector::new(
                self.session.clone(),
                win,
                self.keymap.clone(),
                self.settings.focus_each_step,
                self.settings.key_hold,
            ));
        }
        Ok(())
    }
    fn focus(&mut self) {
        let Some(win) = self.win else { return };
        if let Err(err) = focus_window(&self.session, win) {
            warn!("focus failed: {err}");
        }
    }
    fn capture(&mut self) -> Result<Observation, EnvError> {
        let capturer = self.capturer.as_mut().expect("capture before ensure");
        Ok(capturer.capture()?)
    }
    fn press_action(&mut self, action: i32) {
        let injector = self.injector.as_mut().expect("press before ensure");
        injector.press_action(action);
    }
}
