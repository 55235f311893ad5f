use crate::{CaptureError, CoreBackend, ShmBackend};
use std::rc::Rc;
use x11_utils::{Rect, XSession};

/// Raw grab result: ZPixmap bytes, 4 per pixel, row-major.
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

pub trait CaptureBackend {
    fn name(&self) -> &'static str;
    /// `None` means the backend produced no data for this request.
    fn grab(&mut self, region: &Rect) -> Option<RawFrame>;
}

/// Ranked by latency: the shared-memory path skips the copy through the
/// X byte stream, the core protocol works everywhere.
pub fn select_backend(session: &Rc<XSession>) -> Result<Box<dyn CaptureBackend>, CaptureError> {
    if let Some(backend) = ShmBackend::probe(session.clone()) {
        return Ok(Box::new(backend));
    }
    if let Some(backend) = CoreBackend::probe(session.clone()) {
        return Ok(Box::new(backend));
    }
    Err(CaptureError::Unavailable)
}
