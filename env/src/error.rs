use capture::CaptureError;
use launcher::LaunchError;
use reward::ConfigLoadError;

/// Failures that make the environment unusable. Transient conditions
/// (focus, a dropped key, a bad hot-reload edit) are contained at their
/// component and never surface here.
#[derive(Debug)]
pub enum EnvError {
    Launch(LaunchError),
    Capture(CaptureError),
    Config(ConfigLoadError),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::Launch(err) => write!(f, "{err}"),
            EnvError::Capture(err) => write!(f, "{err}"),
            EnvError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<LaunchError> for EnvError {
    fn from(err: LaunchError) -> EnvError {
        EnvError::Launch(err)
    }
}

impl From<CaptureError> for EnvError {
    fn from(err: CaptureError) -> EnvError {
        EnvError::Capture(err)
    }
}

impl From<ConfigLoadError> for EnvError {
    fn from(err: ConfigLoadError) -> EnvError {
        EnvError::Config(err)
    }
}
