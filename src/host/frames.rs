use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use tracing::{error, trace};

pub type FrameCallback = Box<dyn FnOnce()>;

/// Queue of callbacks waiting for the next repaint.
#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run every callback queued before this frame started.
    ///
    /// Callbacks scheduled while the frame runs wait for the next one. A
    /// panicking callback is logged and does not stop the rest of the batch.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();
        for callback in batch {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(callback)) {
                error!(
                    target = "frames",
                    panic = panic_message(&*payload),
                    "animation frame callback panicked"
                );
            }
        }
        if count > 0 {
            trace!(target = "frames", count, "ran animation frame");
        }
        count
    }

    /// Drive `frames` frames on a fixed interval, returning the number of
    /// callbacks executed.
    pub async fn animate(&self, period: Duration, frames: usize) -> usize {
        let mut interval = tokio::time::interval(period);
        let mut executed = 0;
        for _ in 0..frames {
            interval.tick().await;
            executed += self.run_frame();
        }
        executed
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
