mod backend;
mod capturer;
mod core_backend;
mod region;
mod shm_backend;
mod x_shm_seg;

pub use backend::{select_backend, CaptureBackend, RawFrame};
pub use capturer::{FrameCapturer, RegionSource, WindowRegion};
pub use core_backend::CoreBackend;
pub use region::{top_screen_region, NATIVE_HEIGHT, NATIVE_WIDTH};
pub use shm_backend::ShmBackend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureError {
    /// No usable capture backend exists; raised at construction only.
    Unavailable,
    /// Both grab attempts for one request returned no data.
    Failed,
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::Unavailable => write!(f, "no capture backend is available"),
            CaptureError::Failed => write!(f, "failed to capture a frame from the window"),
        }
    }
}

impl std::error::Error for CaptureError {}
