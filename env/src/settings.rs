use std::time::Duration;

/// Timing and shape knobs for one adapter instance. The sleeps are
/// best-effort settle heuristics against a real-time process, not
/// synchronization guarantees.
#[derive(Clone, Debug)]
pub struct EnvSettings {
    pub frame_skip: u32,
    pub stack_frames: usize,
    pub focus_each_step: bool,
    /// Pause after focusing at reset, before the first capture.
    pub settle: Duration,
    /// Pause after each injected press inside the frame-skip loop.
    pub frame_wait: Duration,
    /// How long injected keys stay held down.
    pub key_hold: Duration,
    pub target_size: (u32, u32),
}

impl Default for EnvSettings {
    fn default() -> EnvSettings {
        EnvSettings {
            frame_skip: 4,
            stack_frames: 4,
            focus_each_step: true,
            settle: Duration::from_millis(100),
            frame_wait: Duration::from_millis(50),
            key_hold: Duration::from_millis(40),
            target_size: (84, 84),
        }
    }
}
