use dioxus::prelude::*;

use crate::core::timing;
use crate::core::toggle::{AnimationRuns, KnobFrame, ToggleMachine, ToggleReport};

/// Frame interval for the knob animation loop.
const FRAME_MS: u64 = 16;

/// Animated on/off switch.
///
/// `on_toggle` fires once per activation. With the default `report` it
/// receives the new state; `ToggleReport::PreviousValue` hands over the
/// state from before the flip instead.
#[component]
pub fn Toggle(
    #[props(default)] initial_value: bool,
    on_toggle: EventHandler<bool>,
    #[props(default)] report: ToggleReport,
) -> Element {
    let mut machine = use_signal(|| ToggleMachine::new(initial_value, report));
    let frame = use_signal(|| KnobFrame::resting(initial_value));
    let mut runs = use_signal(AnimationRuns::default);

    let current = frame();
    let pressed = machine.read().pressed();
    let color = current.color().css();

    rsx! {
        button {
            r#type: "button",
            class: "toggle",
            role: "switch",
            aria_checked: "{pressed}",
            style: "border-color: {color};",
            onclick: move |_| {
                let activation = machine.write().activate(*frame.peek());
                let run = runs.write().begin();

                let transition = activation.transition;
                let mut frame = frame;
                spawn(async move {
                    let started = timing::now();
                    loop {
                        // A newer activation owns the knob now.
                        if !runs.peek().is_current(run) {
                            break;
                        }
                        let elapsed = timing::now().since(started);
                        frame.set(transition.sample(elapsed));
                        if transition.is_finished(elapsed) {
                            break;
                        }
                        timing::sleep_ms(FRAME_MS).await;
                    }
                });

                tracing::debug!(
                    pressed = activation.pressed,
                    reported = activation.reported,
                    "toggle activated"
                );
                on_toggle.call(activation.reported);
            },
            span {
                class: "toggle__knob",
                style: "left: {current.offset}px; border-color: {color};",
            }
        }
    }
}
