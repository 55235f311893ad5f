use crate::{select_backend, top_screen_region, CaptureBackend, CaptureError};
use observation::{BgraRef, Observation};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;
use x11_utils::{client_rect, Rect, WindowId, XSession};

/// Where the capture region comes from. The live implementation asks the
/// window for its current geometry; tests substitute a fixed rectangle.
pub trait RegionSource {
    fn current(&self) -> Option<Rect>;
}

pub struct WindowRegion {
    session: Rc<XSession>,
    win: WindowId,
}

impl WindowRegion {
    pub fn new(session: Rc<XSession>, win: WindowId) -> WindowRegion {
        WindowRegion { session, win }
    }
}

impl RegionSource for WindowRegion {
    fn current(&self) -> Option<Rect> {
        match client_rect(&self.session, self.win) {
            Ok(client) => Some(top_screen_region(&client)),
            Err(err) => {
                debug!("window geometry query failed: {err}");
                None
            }
        }
    }
}

const RETRY_DELAY: Duration = Duration::from_millis(10);

/// Owns the cached capture region and the preprocessing pipeline. The
/// pipeline is backend-independent: gray conversion, area resize and
/// normalization see only raw pixels.
pub struct FrameCapturer {
    backend: Box<dyn CaptureBackend>,
    source: Box<dyn RegionSource>,
    region: Rect,
    target_width: u32,
    target_height: u32,
}

impl FrameCapturer {
    pub fn new(
        session: Rc<XSession>,
        win: WindowId,
        target: (u32, u32),
    ) -> Result<FrameCapturer, CaptureError> {
        let backend = select_backend(&session)?;
        FrameCapturer::from_parts(Box::new(WindowRegion::new(session, win)), backend, target)
    }
    pub fn from_parts(
        source: Box<dyn RegionSource>,
        backend: Box<dyn CaptureBackend>,
        target: (u32, u32),
    ) -> Result<FrameCapturer, CaptureError> {
        let region = source.current().ok_or(CaptureError::Failed)?;
        Ok(FrameCapturer {
            backend,
            source,
            region,
            target_width: target.0,
            target_height: target.1,
        })
    }
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
    pub fn region(&self) -> Rect {
        self.region
    }
    pub fn update_region(&mut self) {
        match self.source.current() {
            Some(region) => self.region = region,
            // a vanished window will surface as a failed grab; keep the
            // last known region until then
            None => debug!("keeping stale capture region"),
        }
    }
    /// One retry after a short delay with a freshly computed region; a
    /// second empty grab is fatal to the episode.
    pub fn capture(&mut self) -> Result<Observation, CaptureError> {
        let frame = match self.backend.grab(&self.region) {
            Some(frame) => frame,
            None => {
                std::thread::sleep(RETRY_DELAY);
                self.update_region();
                self.backend
                    .grab(&self.region)
                    .ok_or(CaptureError::Failed)?
            }
        };
        let gray = BgraRef::new(frame.width, frame.height, &frame.data).to_gray();
        let resized = gray.as_ref().resize_area(self.target_width, self.target_height);
        Ok(Observation::from(&resized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawFrame;
    use std::cell::Cell;
    use std::collections::VecDeque;

    struct FixedRegion {
        region: Rect,
        queries: Rc<Cell<u32>>,
    }

    impl RegionSource for FixedRegion {
        fn current(&self) -> Option<Rect> {
            self.queries.set(self.queries.get() + 1);
            Some(self.region)
        }
    }

    struct ScriptedBackend {
        replies: VecDeque<Option<RawFrame>>,
        grabs: Rc<Cell<u32>>,
    }

    impl CaptureBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }
        fn grab(&mut self, _region: &Rect) -> Option<RawFrame> {
            self.grabs.set(self.grabs.get() + 1);
            self.replies.pop_front().flatten()
        }
    }

    fn frame(value: u8) -> RawFrame {
        RawFrame {
            width: 2,
            height: 2,
            data: vec![value; 16],
        }
    }

    fn capturer(
        replies: Vec<Option<RawFrame>>,
    ) -> (FrameCapturer, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let queries = Rc::new(Cell::new(0));
        let grabs = Rc::new(Cell::new(0));
        let source = FixedRegion {
            region: Rect::new(0, 0, 2, 2),
            queries: queries.clone(),
        };
        let backend = ScriptedBackend {
            replies: VecDeque::from(replies),
            grabs: grabs.clone(),
        };
        let capturer =
            FrameCapturer::from_parts(Box::new(source), Box::new(backend), (2, 2)).unwrap();
        (capturer, queries, grabs)
    }

    #[test]
    fn successful_grab_needs_no_retry() {
        let (mut capturer, queries, grabs) = capturer(vec![Some(frame(0))]);
        let obs = capturer.capture().unwrap();
        assert!(obs.data().iter().all(|&v| v == 0.0));
        assert_eq!(grabs.get(), 1);
        // the only region query is the one at construction
        assert_eq!(queries.get(), 1);
    }

    #[test]
    fn empty_grab_recomputes_the_region_and_retries_once() {
        let (mut capturer, queries, grabs) = capturer(vec![None, Some(frame(255))]);
        let obs = capturer.capture().unwrap();
        assert!(obs.data().iter().all(|&v| v == 1.0));
        assert_eq!(grabs.get(), 2);
        assert_eq!(queries.get(), 2);
    }

    #[test]
    fn second_empty_grab_is_fatal() {
        let (mut capturer, _queries, grabs) = capturer(vec![None, None, Some(frame(1))]);
        assert_eq!(capturer.capture(), Err(CaptureError::Failed));
        // exactly one extra grab, then give up
        assert_eq!(grabs.get(), 2);
    }

    #[test]
    fn identical_pixels_produce_identical_observations() {
        let (mut capturer, _queries, _grabs) = capturer(vec![Some(frame(9)), Some(frame(9))]);
        let first = capturer.capture().unwrap();
        let second = capturer.capture().unwrap();
        assert_eq!(first, second);
    }
}
