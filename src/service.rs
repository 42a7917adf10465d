use std::cell::{Ref, RefCell};
use std::rc::Rc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ListenerConfig, UnknownEventPolicy};
use crate::dispatch;
use crate::event::{EventName, UnknownEventName};
use crate::host::Host;
use crate::registry::{Handler, ListenerId, Registry};

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error(transparent)]
    UnknownEvent(#[from] UnknownEventName),
}

/// Shares one host listener per event name between any number of named
/// handlers.
///
/// Construction installs the trampolines on the host. Each instance owns its
/// own registry, so separate instances never see each other's handlers.
pub struct OneListener<H: Host> {
    registry: Rc<RefCell<Registry<H::Event>>>,
    host: Rc<H>,
    config: ListenerConfig,
}

impl<H: Host + 'static> OneListener<H> {
    pub fn new(host: Rc<H>) -> Self {
        Self::with_config(host, ListenerConfig::default())
    }

    pub fn with_config(host: Rc<H>, config: ListenerConfig) -> Self {
        let registry = Rc::new(RefCell::new(Registry::new()));
        dispatch::install(&host, &registry);
        info!(unknown_events = ?config.unknown_events, "installed native event trampolines");
        Self {
            registry,
            host,
            config,
        }
    }
}

impl<H: Host> OneListener<H> {
    /// Bind `handler` to `id` in `event`'s bucket. A taken id keeps its
    /// current handler.
    pub fn register(
        &self,
        event: EventName,
        id: impl Into<ListenerId>,
        handler: Handler<H::Event>,
    ) {
        self.registry.borrow_mut().register(event, id, handler);
    }

    pub fn cancel(&self, event: EventName, id: &str) {
        self.registry.borrow_mut().cancel(event, id);
    }

    /// String-named form of [`OneListener::register`].
    ///
    /// Names outside the five buckets are handled per
    /// [`UnknownEventPolicy`]; with the default policy they are accepted
    /// and never fire.
    pub fn request_event_listener(
        &self,
        event: &str,
        id: impl Into<ListenerId>,
        handler: Handler<H::Event>,
    ) -> Result<(), ListenerError> {
        let id = id.into();
        match self.resolve(event)? {
            Some(name) => self.register(name, id, handler),
            None => warn!(event, %id, "ignoring listener for unsupported event"),
        }
        Ok(())
    }

    /// String-named form of [`OneListener::cancel`].
    pub fn cancel_event_listener(&self, event: &str, id: &str) -> Result<(), ListenerError> {
        if let Some(name) = self.resolve(event)? {
            self.cancel(name, id);
        }
        Ok(())
    }

    pub fn registry(&self) -> Ref<'_, Registry<H::Event>> {
        self.registry.borrow()
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    fn resolve(&self, event: &str) -> Result<Option<EventName>, ListenerError> {
        match event.parse::<EventName>() {
            Ok(name) => Ok(Some(name)),
            Err(err) => match self.config.unknown_events {
                UnknownEventPolicy::Ignore => Ok(None),
                UnknownEventPolicy::Reject => Err(err.into()),
            },
        }
    }
}
