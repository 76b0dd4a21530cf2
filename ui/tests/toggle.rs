use ui::core::toggle::{
    KnobFrame, ToggleMachine, ToggleReport, Transition, KNOB_OFF_X, KNOB_ON_X, TRACK_OFF,
    TRACK_ON, TRANSITION_MS,
};

fn activate_n(machine: &mut ToggleMachine, n: usize) -> Vec<bool> {
    (0..n)
        .map(|_| {
            let frame = KnobFrame::resting(machine.pressed());
            machine.activate(frame).reported
        })
        .collect()
}

#[test]
fn legacy_callback_sees_pre_flip_values() {
    let mut machine = ToggleMachine::new(false, ToggleReport::PreviousValue);

    let first = machine.activate(KnobFrame::resting(false));
    assert!(machine.pressed());
    assert!(!first.reported);

    let second = machine.activate(KnobFrame::resting(true));
    assert!(!machine.pressed());
    assert!(second.reported);
}

#[test]
fn default_callback_sees_new_values() {
    let mut machine = ToggleMachine::new(false, ToggleReport::default());
    assert_eq!(activate_n(&mut machine, 3), vec![true, false, true]);
}

#[test]
fn parity_of_activations_decides_final_state() {
    for initial in [false, true] {
        for n in 0..7 {
            let mut machine = ToggleMachine::new(initial, ToggleReport::NewValue);
            let reports = activate_n(&mut machine, n);
            assert_eq!(reports.len(), n, "callback fires once per activation");
            assert_eq!(machine.pressed(), initial ^ (n % 2 == 1));
        }
    }
}

#[test]
fn transition_runs_between_fixed_endpoints() {
    let on = Transition::toward(KnobFrame::resting(false), true);
    assert_eq!(on.duration_ms, TRANSITION_MS);
    assert_eq!(on.sample(0.0).offset, KNOB_OFF_X);
    assert_eq!(on.sample(TRANSITION_MS).offset, KNOB_ON_X);
    assert_eq!(on.sample(TRANSITION_MS).color(), TRACK_ON);

    let off = Transition::toward(KnobFrame::resting(true), false);
    assert_eq!(off.sample(TRANSITION_MS).offset, KNOB_OFF_X);
    assert_eq!(off.sample(TRANSITION_MS).color(), TRACK_OFF);
}

#[test]
fn offset_and_colour_advance_together() {
    let tr = Transition::toward(KnobFrame::resting(false), true);
    let mut last = tr.sample(0.0);
    for step in 1..=10 {
        let frame = tr.sample(step as f64 * TRANSITION_MS / 10.0);
        assert!(frame.offset >= last.offset);
        assert!(frame.blend >= last.blend);
        last = frame;
    }
}
