use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use one_listener::host::{FrameCallback, NativeCallback};
use one_listener::{EventName, Handler, Host, NativeEvent, OneListener};

/// Host that records every call the service makes into it.
#[derive(Default)]
struct SpyHost {
    added: RefCell<Vec<NativeEvent>>,
    listeners: RefCell<HashMap<NativeEvent, NativeCallback<u32>>>,
    scheduled: RefCell<Vec<FrameCallback>>,
    schedule_calls: Cell<usize>,
}

impl SpyHost {
    fn fire(&self, native: NativeEvent, event: u32) {
        let listener = self.listeners.borrow().get(&native).cloned();
        if let Some(listener) = listener {
            listener(&event);
        }
    }

    fn flush(&self) -> usize {
        let scheduled = std::mem::take(&mut *self.scheduled.borrow_mut());
        let count = scheduled.len();
        for callback in scheduled {
            callback();
        }
        count
    }
}

impl Host for SpyHost {
    type Event = u32;

    fn add_listener(&self, native: NativeEvent, callback: NativeCallback<u32>) {
        self.added.borrow_mut().push(native);
        self.listeners.borrow_mut().insert(native, callback);
    }

    fn schedule_before_repaint(&self, callback: FrameCallback) {
        self.schedule_calls.set(self.schedule_calls.get() + 1);
        self.scheduled.borrow_mut().push(callback);
    }
}

#[test]
fn adds_exactly_six_listeners_in_table_order() {
    let host = Rc::new(SpyHost::default());
    let _listeners = OneListener::new(Rc::clone(&host));
    assert_eq!(*host.added.borrow(), NativeEvent::ALL.to_vec());
}

#[test]
fn empty_bucket_never_touches_scheduler() {
    let host = Rc::new(SpyHost::default());
    let listeners = OneListener::new(Rc::clone(&host));

    for native in NativeEvent::ALL {
        host.fire(native, 0);
    }
    assert_eq!(host.schedule_calls.get(), 0);

    listeners.register(EventName::Scroll, "x", Handler::new(|| {}));
    listeners.cancel(EventName::Scroll, "x");
    host.fire(NativeEvent::Scroll, 0);
    assert_eq!(host.schedule_calls.get(), 0);
}

#[test]
fn scroll_firing_schedules_once_per_handler() {
    let host = Rc::new(SpyHost::default());
    let listeners = OneListener::new(Rc::clone(&host));
    let ran = Rc::new(Cell::new(0));
    let sink = Rc::clone(&ran);
    listeners.register(EventName::Scroll, "x", Handler::new(move || sink.set(sink.get() + 1)));

    host.fire(NativeEvent::Scroll, 3);
    assert_eq!(host.schedule_calls.get(), 1);
    assert_eq!(ran.get(), 0);
    assert_eq!(host.flush(), 1);
    assert_eq!(ran.get(), 1);
}

#[test]
fn mouseup_bypasses_scheduler() {
    let host = Rc::new(SpyHost::default());
    let listeners = OneListener::new(Rc::clone(&host));
    let seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&seen);
    listeners.register(
        EventName::MouseUp,
        "y",
        Handler::with_event(move |event: Option<&u32>| sink.set(event.copied())),
    );

    host.fire(NativeEvent::MouseUp, 42);
    assert_eq!(seen.get(), Some(42));
    assert_eq!(host.schedule_calls.get(), 0);
}
