use serde::{Deserialize, Serialize};

/// Opaque identifier of one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Contract for vsync-aligned frame callbacks.
///
/// The engine requests a frame and the host later calls
/// [`TimelineEngine::on_frame`](super::TimelineEngine::on_frame) with the same handle
/// and a timestamp in milliseconds. Cancelling an unknown or already fired handle
/// must be a no-op.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Headless scheduler whose frames are fired explicitly by the caller.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    cancelled: usize,
}

impl ManualFrameScheduler {
    /// Removes and returns every frame requested since the last call.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of cancellations that removed a pending frame.
    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(position) = self.pending.iter().position(|entry| *entry == handle) {
            self.pending.remove(position);
            self.cancelled += 1;
        }
    }
}
