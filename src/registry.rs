//! Per-event handler buckets.
//!
//! Buckets are copy-on-write: `register` and `cancel` build a new entry
//! vector and swap it in, so a [`Snapshot`] handed to a firing keeps seeing
//! the entries it started with while handlers mutate the registry.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tracing::debug;

use crate::event::EventName;

pub type ListenerId = String;

/// Callback bound to one listener id.
///
/// Deferred buckets call it with `None`; the mouseup bucket passes the
/// event object.
pub struct Handler<E> {
    callback: Rc<dyn Fn(Option<&E>)>,
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

impl<E: 'static> Handler<E> {
    /// Handler that ignores the event object.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(move |_: Option<&E>| callback()),
        }
    }

    pub fn with_event(callback: impl Fn(Option<&E>) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }
}

impl<E> Handler<E> {
    pub fn call(&self, event: Option<&E>) {
        (self.callback)(event)
    }

    pub fn ptr_eq(&self, other: &Handler<E>) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

#[derive(Debug)]
pub struct Entry<E> {
    pub id: ListenerId,
    pub handler: Handler<E>,
}

impl<E> Clone for Entry<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            handler: self.handler.clone(),
        }
    }
}

/// Immutable view of one bucket, in insertion order.
#[derive(Debug)]
pub struct Snapshot<E> {
    entries: Rc<Vec<Entry<E>>>,
}

impl<E> Clone for Snapshot<E> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<E> Deref for Snapshot<E> {
    type Target = [Entry<E>];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

#[derive(Debug)]
pub struct Registry<E> {
    buckets: HashMap<EventName, Rc<Vec<Entry<E>>>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Bind `handler` to `id` unless the id is already taken in this bucket.
    ///
    /// Returns `true` when a new entry was created. An existing entry is
    /// never replaced; callers must `cancel` first.
    pub fn register(
        &mut self,
        event: EventName,
        id: impl Into<ListenerId>,
        handler: Handler<E>,
    ) -> bool {
        let id = id.into();
        let mut entries = match self.buckets.get(&event) {
            Some(bucket) if bucket.iter().any(|entry| entry.id == id) => {
                debug!(%event, %id, "listener id already registered; keeping existing handler");
                return false;
            }
            Some(bucket) => Vec::clone(bucket),
            None => Vec::new(),
        };

        debug!(%event, %id, "registering listener");
        entries.push(Entry { id, handler });
        self.buckets.insert(event, Rc::new(entries));
        true
    }

    /// Remove the entry at `id`, dropping the bucket once it is empty.
    ///
    /// Returns `true` when an entry was removed.
    pub fn cancel(&mut self, event: EventName, id: &str) -> bool {
        let Some(bucket) = self.buckets.get(&event) else {
            return false;
        };
        if !bucket.iter().any(|entry| entry.id == id) {
            return false;
        }

        let entries: Vec<Entry<E>> = bucket
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();

        if entries.is_empty() {
            debug!(%event, %id, "canceled last listener; dropping bucket");
            self.buckets.remove(&event);
        } else {
            debug!(%event, %id, remaining = entries.len(), "canceled listener");
            self.buckets.insert(event, Rc::new(entries));
        }
        true
    }

    /// Current contents of `event`'s bucket, or `None` when no bucket exists.
    pub fn snapshot(&self, event: EventName) -> Option<Snapshot<E>> {
        self.buckets.get(&event).map(|entries| Snapshot {
            entries: Rc::clone(entries),
        })
    }

    pub fn has_bucket(&self, event: EventName) -> bool {
        self.buckets.contains_key(&event)
    }

    pub fn contains(&self, event: EventName, id: &str) -> bool {
        self.buckets
            .get(&event)
            .is_some_and(|bucket| bucket.iter().any(|entry| entry.id == id))
    }

    pub fn handler(&self, event: EventName, id: &str) -> Option<Handler<E>> {
        self.buckets
            .get(&event)?
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.handler.clone())
    }

    /// Number of listeners registered under `event`.
    pub fn len(&self, event: EventName) -> usize {
        self.buckets.get(&event).map_or(0, |bucket| bucket.len())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
