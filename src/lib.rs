//! One host listener per window event, shared by any number of named
//! handlers.
//!
//! Scroll, resize (and orientation change), mouse wheel and mouse move
//! handlers run in the next animation frame; mouse up handlers run
//! synchronously with the event object.

pub mod config;
pub mod dispatch;
pub mod event;
pub mod host;
pub mod registry;
pub mod service;

pub use config::{ConfigError, ListenerConfig, UnknownEventPolicy};
pub use event::{DispatchMode, EventName, NativeEvent, UnknownEventName};
pub use host::{FrameQueue, HeadlessHost, Host};
pub use registry::{Handler, ListenerId, Registry, Snapshot};
pub use service::{ListenerError, OneListener};
