use crate::{CaptureBackend, RawFrame};
use std::rc::Rc;
use tracing::debug;
use x11_utils::{Rect, XSession};
use x11rb::protocol::xproto::{self, ConnectionExt as _};

/// Core-protocol `GetImage` fallback: slower than MIT-SHM because the
/// frame travels through the X byte stream, but needs no extension.
pub struct CoreBackend {
    session: Rc<XSession>,
}

impl CoreBackend {
    pub fn probe(session: Rc<XSession>) -> Option<CoreBackend> {
        if !matches!(session.root_depth(), 24 | 32) {
            return None;
        }
        Some(CoreBackend { session })
    }
}

impl CaptureBackend for CoreBackend {
    fn name(&self) -> &'static str {
        "core"
    }
    fn grab(&mut self, region: &Rect) -> Option<RawFrame> {
        let width = region.width();
        let height = region.height();
        if width <= 0 || height <= 0 {
            return None;
        }
        let reply = self
            .session
            .conn()
            .get_image(
                xproto::ImageFormat::Z_PIXMAP,
                self.session.root(),
                region.left as i16,
                region.top as i16,
                width as u16,
                height as u16,
                !0,
            )
            .ok()?
            .reply()
            .map_err(|err| debug!("core grab returned no data: {err}"))
            .ok()?;
        let len = 4 * width as usize * height as usize;
        if !matches!(reply.depth, 24 | 32) || reply.data.len() < len {
            return None;
        }
        let mut data = reply.data;
        data.truncate(len);
        Some(RawFrame {
            width: width as u32,
            height: height as u32,
            data,
        })
    }
}
