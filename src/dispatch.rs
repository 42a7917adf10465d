//! Trampolines: the single host listener per native event name.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::event::{DispatchMode, EventName, NativeEvent};
use crate::host::Host;
use crate::registry::Registry;

/// Fans one native event out to the handlers in its bucket.
pub struct Trampoline<H: Host> {
    bucket: EventName,
    registry: Weak<RefCell<Registry<H::Event>>>,
    host: Weak<H>,
}

impl<H: Host> Trampoline<H> {
    pub fn new(
        bucket: EventName,
        registry: &Rc<RefCell<Registry<H::Event>>>,
        host: &Rc<H>,
    ) -> Self {
        Self {
            bucket,
            registry: Rc::downgrade(registry),
            host: Rc::downgrade(host),
        }
    }

    /// Dispatch `event` to the bucket as it stands right now. Returns the
    /// number of handlers called or scheduled.
    pub fn fire(&self, event: &H::Event) -> usize {
        let (Some(registry), Some(host)) = (self.registry.upgrade(), self.host.upgrade()) else {
            return 0;
        };
        // Borrow ends here; handlers are free to register or cancel.
        let Some(snapshot) = registry.borrow().snapshot(self.bucket) else {
            return 0;
        };

        trace!(bucket = %self.bucket, handlers = snapshot.len(), "dispatching");
        match self.bucket.dispatch_mode() {
            DispatchMode::Deferred => {
                for entry in snapshot.iter() {
                    let handler = entry.handler.clone();
                    host.schedule_before_repaint(Box::new(move || handler.call(None)));
                }
            }
            DispatchMode::Immediate => {
                for entry in snapshot.iter() {
                    entry.handler.call(Some(event));
                }
            }
        }
        snapshot.len()
    }
}

/// Attach one trampoline per native event name to `host`.
pub fn install<H: Host + 'static>(host: &Rc<H>, registry: &Rc<RefCell<Registry<H::Event>>>) {
    for native in NativeEvent::ALL {
        let trampoline = Trampoline::new(native.bucket(), registry, host);
        host.add_listener(
            native,
            Rc::new(move |event: &H::Event| {
                trampoline.fire(event);
            }),
        );
    }
}
