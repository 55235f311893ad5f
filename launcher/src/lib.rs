use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tracing::info;
use x11_utils::{find_window_by_title, WindowId, XSession};

#[derive(Debug)]
pub enum LaunchError {
    Spawn(std::io::Error),
    WindowNotFound,
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::Spawn(err) => write!(f, "can't spawn the emulator: {err}"),
            LaunchError::WindowNotFound => write!(f, "the emulator window did not appear"),
        }
    }
}

impl std::error::Error for LaunchError {}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> LaunchError {
        LaunchError::Spawn(err)
    }
}

const WINDOW_DEADLINE: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub fn spawn(exe: &Path, rom: Option<&Path>) -> Result<Child, LaunchError> {
    let mut command = Command::new(exe);
    if let Some(rom) = rom {
        command.arg(rom);
    }
    let child = command.stderr(Stdio::null()).spawn()?;
    info!("emulator spawned (pid {})", child.id());
    Ok(child)
}

/// Poll window discovery until the deadline. The window only shows up
/// once the emulator has finished its own startup, so this doubles as
/// the settle wait after `spawn`.
pub fn wait_for_window(session: &XSession, title_hint: &str) -> Result<WindowId, LaunchError> {
    let deadline = Instant::now() + WINDOW_DEADLINE;
    loop {
        if let Some(win) = find_window_by_title(session, title_hint) {
            return Ok(win);
        }
        if Instant::now() >= deadline {
            return Err(LaunchError::WindowNotFound);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
