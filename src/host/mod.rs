//! Host-side collaborators: native listener attachment and the
//! animation-frame primitive.

mod frames;
pub mod window_events;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::event::NativeEvent;

pub use frames::{FrameCallback, FrameQueue};

pub type NativeCallback<E> = Rc<dyn Fn(&E)>;

/// Platform the listener service attaches to.
pub trait Host {
    /// Event object handed to native listeners.
    type Event: 'static;

    fn add_listener(&self, native: NativeEvent, callback: NativeCallback<Self::Event>);

    /// Run `callback` once, on this thread, before the next repaint.
    fn schedule_before_repaint(&self, callback: FrameCallback);
}

/// In-process host that fires native events on demand and runs animation
/// frames when told to.
pub struct HeadlessHost<E> {
    listeners: RefCell<HashMap<NativeEvent, Vec<NativeCallback<E>>>>,
    frames: FrameQueue,
}

impl<E> Default for HeadlessHost<E> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(HashMap::new()),
            frames: FrameQueue::new(),
        }
    }
}

impl<E> HeadlessHost<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every listener attached to `native`, returning how many ran.
    pub fn fire(&self, native: NativeEvent, event: &E) -> usize {
        let listeners = self
            .listeners
            .borrow()
            .get(&native)
            .cloned()
            .unwrap_or_default();
        trace!(target = "host", %native, listeners = listeners.len(), "firing native event");
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self, native: NativeEvent) -> usize {
        self.listeners.borrow().get(&native).map_or(0, Vec::len)
    }

    pub fn frames(&self) -> &FrameQueue {
        &self.frames
    }

    pub fn run_frame(&self) -> usize {
        self.frames.run_frame()
    }
}

impl<E: 'static> Host for HeadlessHost<E> {
    type Event = E;

    fn add_listener(&self, native: NativeEvent, callback: NativeCallback<E>) {
        self.listeners
            .borrow_mut()
            .entry(native)
            .or_default()
            .push(callback);
    }

    fn schedule_before_repaint(&self, callback: FrameCallback) {
        self.frames.schedule(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fire_reaches_only_matching_listeners() {
        let host: HeadlessHost<u8> = HeadlessHost::new();
        let hits = Rc::new(Cell::new(0u8));

        let sink = Rc::clone(&hits);
        host.add_listener(NativeEvent::MouseUp, Rc::new(move |event: &u8| sink.set(*event)));

        assert_eq!(host.fire(NativeEvent::Scroll, &1), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(host.fire(NativeEvent::MouseUp, &4), 1);
        assert_eq!(hits.get(), 4);
        assert_eq!(host.listener_count(NativeEvent::MouseUp), 1);
    }

    #[test]
    fn scheduled_callbacks_wait_for_frame() {
        let host: HeadlessHost<()> = HeadlessHost::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);

        host.schedule_before_repaint(Box::new(move || flag.set(true)));
        assert!(!ran.get());
        assert_eq!(host.frames().pending(), 1);

        assert_eq!(host.run_frame(), 1);
        assert!(ran.get());
    }
}
