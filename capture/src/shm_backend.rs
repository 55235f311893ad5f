use crate::x_shm_seg::XShmSeg;
use crate::{CaptureBackend, RawFrame};
use std::rc::Rc;
use tracing::debug;
use x11_utils::{Rect, XSession};
use x11rb::connection::RequestConnection;
use x11rb::protocol::shm::{self, ConnectionExt as _};
use x11rb::protocol::xproto;

/// MIT-SHM screen grabs. The segment is sized lazily and grown when the
/// capture region grows; its contents are copied out before returning so
/// the next grab can't alias a frame already handed to a caller.
pub struct ShmBackend {
    session: Rc<XSession>,
    seg: Option<XShmSeg>,
}

impl ShmBackend {
    pub fn probe(session: Rc<XSession>) -> Option<ShmBackend> {
        session
            .conn()
            .extension_information(shm::X11_EXTENSION_NAME)
            .ok()
            .flatten()?;
        if !matches!(session.root_depth(), 24 | 32) {
            return None;
        }
        Some(ShmBackend { session, seg: None })
    }
    fn segment(&mut self, len: usize) -> Option<&XShmSeg> {
        let stale = self.seg.as_ref().map_or(true, |seg| seg.len() < len);
        if stale {
            if let Some(old) = self.seg.take() {
                old.close(self.session.conn());
            }
            self.seg = Some(XShmSeg::new(self.session.conn(), len)?);
        }
        self.seg.as_ref()
    }
}

impl CaptureBackend for ShmBackend {
    fn name(&self) -> &'static str {
        "shm"
    }
    fn grab(&mut self, region: &Rect) -> Option<RawFrame> {
        let width = region.width();
        let height = region.height();
        if width <= 0 || height <= 0 {
            return None;
        }
        let len = 4 * width as usize * height as usize;
        let root = self.session.root();
        let session = self.session.clone();
        let seg = self.segment(len)?;
        let reply = session
            .conn()
            .shm_get_image(
                root,
                region.left as i16,
                region.top as i16,
                width as u16,
                height as u16,
                !0,
                xproto::ImageFormat::Z_PIXMAP.into(),
                seg.xid(),
                0,
            )
            .ok()?
            .reply()
            .map_err(|err| debug!("shm grab returned no data: {err}"))
            .ok()?;
        if !matches!(reply.depth, 24 | 32) {
            return None;
        }
        let data =
            unsafe { std::slice::from_raw_parts(seg.address().cast::<u8>(), len) }.to_vec();
        Some(RawFrame {
            width: width as u32,
            height: height as u32,
            data,
        })
    }
}

impl Drop for ShmBackend {
    fn drop(&mut self) {
        if let Some(seg) = self.seg.take() {
            seg.close(self.session.conn());
        }
    }
}
