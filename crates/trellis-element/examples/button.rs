//! Example: an accessible button driven from touch, mouse and keyboard

use trellis_element::{create_element, HandlerSlot, Props, SyntheticEvent};
use trellis_events::{RawNativeEvent, RawTouch};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let button = create_element(
        "div",
        Props::new()
            .with("accessibilityRole", "button")
            .with("accessibilityLabel", "Save")
            .with_handler("onClick", |event| {
                println!("click via {}", event.native_event.event_type());
                true
            })
            .with_handler("onResponderRelease", |event| {
                println!("release, follow-up cancelled: {}", event.is_default_prevented());
                true
            }),
        vec!["Save".into()],
    );

    let mut click = SyntheticEvent::click(12.0, 8.0);
    button.dispatch(HandlerSlot::Click, &mut click);

    let mut enter = SyntheticEvent::key_press(13);
    button.dispatch(HandlerSlot::KeyPress, &mut enter);

    let touch = RawTouch::new(1, 12.0, 8.0);
    let raw = RawNativeEvent::touch("touchend", vec![], vec![touch]);
    let mut release = SyntheticEvent::from_native(raw);
    button.dispatch(HandlerSlot::ResponderRelease, &mut release);

    for (name, value) in button.attrs() {
        println!("{name} = {value:?}");
    }
    Ok(())
}
