//! Native Event Normalization
//!
//! Converts host payloads into the touch-shaped payload handlers observe.
//! Mouse input is presented as a single touch so responder logic sees one
//! model regardless of input modality.

use crate::native::{
    NativeEvent, NormalizedNativeEvent, NormalizedTouch, RawNativeEvent, RawTouch, Rect,
};

/// Hosts may hand out ever-increasing touch identifiers; keep them small
const MAX_TOUCH_IDENTIFIER: u32 = 20;

/// Normalize a native payload
///
/// Pure: the same input always yields the same output, and an already
/// normalized payload comes back unchanged.
pub fn normalize_native_event(native: &NativeEvent) -> NormalizedNativeEvent {
    match native {
        NativeEvent::Normalized(normalized) => normalized.clone(),
        NativeEvent::Raw(raw) if raw.is_mouse() => normalize_mouse_event(raw),
        NativeEvent::Raw(raw) => normalize_touch_event(raw),
    }
}

fn location(page_x: f64, page_y: f64, rect: Option<Rect>) -> (f64, f64) {
    match rect {
        Some(rect) => (page_x - rect.left, page_y - rect.top),
        None => (page_x, page_y),
    }
}

fn normalize_touch(touch: &RawTouch, timestamp: f64) -> NormalizedTouch {
    let identifier = if touch.identifier > MAX_TOUCH_IDENTIFIER {
        touch.identifier % MAX_TOUCH_IDENTIFIER
    } else {
        touch.identifier
    };
    let (location_x, location_y) = location(touch.page_x, touch.page_y, touch.target_rect);

    NormalizedTouch {
        identifier,
        location_x,
        location_y,
        page_x: touch.page_x,
        page_y: touch.page_y,
        screen_x: touch.screen_x,
        screen_y: touch.screen_y,
        force: touch.force,
        target: touch.target,
        timestamp,
    }
}

fn normalize_touches(touches: &[RawTouch], timestamp: f64) -> Vec<NormalizedTouch> {
    touches.iter().map(|t| normalize_touch(t, timestamp)).collect()
}

fn normalize_touch_event(raw: &RawNativeEvent) -> NormalizedNativeEvent {
    let changed_touches = normalize_touches(&raw.changed_touches, raw.timestamp);
    let touches = normalize_touches(&raw.touches, raw.timestamp);

    // Keyboard and focus payloads carry no touches at all
    let (identifier, location_x, location_y, page_x, page_y) = match changed_touches.first() {
        Some(t) => (t.identifier, t.location_x, t.location_y, t.page_x, t.page_y),
        None => (0, 0.0, 0.0, 0.0, 0.0),
    };

    NormalizedNativeEvent {
        event_type: raw.event_type.clone(),
        changed_touches,
        touches,
        identifier,
        location_x,
        location_y,
        page_x,
        page_y,
        target: raw.target,
        timestamp: raw.timestamp,
        which: raw.which,
    }
}

fn normalize_mouse_event(raw: &RawNativeEvent) -> NormalizedNativeEvent {
    let (location_x, location_y) = location(raw.page_x, raw.page_y, raw.target_rect);
    let touch = NormalizedTouch {
        identifier: 0,
        location_x,
        location_y,
        page_x: raw.page_x,
        page_y: raw.page_y,
        target: raw.target,
        timestamp: raw.timestamp,
        ..Default::default()
    };

    // A released button leaves no active touches behind
    let touches = if raw.event_type == "mouseup" {
        Vec::new()
    } else {
        vec![touch.clone()]
    };

    NormalizedNativeEvent {
        event_type: raw.event_type.clone(),
        changed_touches: vec![touch],
        touches,
        identifier: 0,
        location_x,
        location_y,
        page_x: raw.page_x,
        page_y: raw.page_y,
        target: raw.target,
        timestamp: raw.timestamp,
        which: raw.which,
    }
}
