use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Bucket names handlers can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    Scroll,
    Resize,
    MouseWheel,
    MouseMove,
    MouseUp,
}

/// How a trampoline hands an event to the handlers in its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One animation-frame callback per handler, invoked without the event.
    Deferred,
    /// Synchronous call with the original event object.
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported event name: {0}")]
pub struct UnknownEventName(pub String);

impl EventName {
    pub const ALL: [EventName; 5] = [
        EventName::Scroll,
        EventName::Resize,
        EventName::MouseWheel,
        EventName::MouseMove,
        EventName::MouseUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventName::Scroll => "scroll",
            EventName::Resize => "resize",
            EventName::MouseWheel => "mousewheel",
            EventName::MouseMove => "mousemove",
            EventName::MouseUp => "mouseup",
        }
    }

    pub fn dispatch_mode(self) -> DispatchMode {
        match self {
            EventName::MouseUp => DispatchMode::Immediate,
            _ => DispatchMode::Deferred,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

/// Event names the host fires. Each one gets exactly one trampoline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeEvent {
    Scroll,
    Resize,
    OrientationChange,
    MouseWheel,
    MouseMove,
    MouseUp,
}

impl NativeEvent {
    /// Install table, in installation order.
    pub const ALL: [NativeEvent; 6] = [
        NativeEvent::Scroll,
        NativeEvent::Resize,
        NativeEvent::OrientationChange,
        NativeEvent::MouseWheel,
        NativeEvent::MouseMove,
        NativeEvent::MouseUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NativeEvent::Scroll => "scroll",
            NativeEvent::Resize => "resize",
            NativeEvent::OrientationChange => "orientationchange",
            NativeEvent::MouseWheel => "mousewheel",
            NativeEvent::MouseMove => "mousemove",
            NativeEvent::MouseUp => "mouseup",
        }
    }

    /// Registry bucket this native event fans out to.
    pub fn bucket(self) -> EventName {
        match self {
            NativeEvent::Scroll => EventName::Scroll,
            NativeEvent::Resize | NativeEvent::OrientationChange => EventName::Resize,
            NativeEvent::MouseWheel => EventName::MouseWheel,
            NativeEvent::MouseMove => EventName::MouseMove,
            NativeEvent::MouseUp => EventName::MouseUp,
        }
    }
}

impl fmt::Display for NativeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NativeEvent {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NativeEvent::ALL
            .into_iter()
            .find(|native| native.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_names() {
        for name in EventName::ALL {
            assert_eq!(name.as_str().parse::<EventName>().unwrap(), name);
        }
    }

    #[test]
    fn orientationchange_is_not_a_bucket() {
        let err = "orientationchange".parse::<EventName>().unwrap_err();
        assert_eq!(err.0, "orientationchange");
        assert_eq!(
            "orientationchange".parse::<NativeEvent>().unwrap().bucket(),
            EventName::Resize
        );
    }

    #[test]
    fn only_mouseup_is_immediate() {
        let immediate: Vec<_> = EventName::ALL
            .into_iter()
            .filter(|name| name.dispatch_mode() == DispatchMode::Immediate)
            .collect();
        assert_eq!(immediate, vec![EventName::MouseUp]);
    }

    #[test]
    fn every_bucket_has_a_native_source() {
        for name in EventName::ALL {
            assert!(NativeEvent::ALL.iter().any(|native| native.bucket() == name));
        }
    }
}
