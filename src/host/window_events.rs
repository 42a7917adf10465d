use winit::event::{ElementState, WindowEvent};

use super::HeadlessHost;
use crate::event::NativeEvent;

/// Native event a winit window event corresponds to, if any.
pub fn native_event(event: &WindowEvent) -> Option<NativeEvent> {
    match event {
        WindowEvent::Resized(_) => Some(NativeEvent::Resize),
        WindowEvent::MouseWheel { .. } => Some(NativeEvent::MouseWheel),
        WindowEvent::CursorMoved { .. } => Some(NativeEvent::MouseMove),
        WindowEvent::MouseInput {
            state: ElementState::Released,
            ..
        } => Some(NativeEvent::MouseUp),
        _ => None,
    }
}

/// Fire `host` from a winit event loop. Returns `false` for events with no
/// native counterpart.
pub fn forward(host: &HeadlessHost<WindowEvent>, event: &WindowEvent) -> bool {
    match native_event(event) {
        Some(native) => {
            host.fire(native, event);
            true
        }
        None => false,
    }
}
