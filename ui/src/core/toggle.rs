//! State machine and transition math for the binary toggle.
//!
//! The logical state flips synchronously on every activation. The visual
//! state (knob offset + track colour) follows along a short eased
//! transition which the view samples frame by frame. A second activation
//! while a transition is still running starts a new transition from the
//! knob's current frame, so the knob never jumps.

/// Length of one knob transition.
pub const TRANSITION_MS: f64 = 100.0;

/// Knob offset (px from the track's left edge) while off.
pub const KNOB_OFF_X: f32 = 3.0;
/// Knob offset (px from the track's left edge) while on.
pub const KNOB_ON_X: f32 = 13.0;

pub const TRACK_OFF: Rgb = Rgb::from_hex(0x4b5563);
pub const TRACK_ON: Rgb = Rgb::from_hex(0x544fff);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Channel-wise linear blend; `t` is clamped to `0.0..=1.0`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One visual frame of the toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobFrame {
    /// Knob offset in px.
    pub offset: f32,
    /// Colour blend, 0 = off colour, 1 = on colour.
    pub blend: f32,
}

impl KnobFrame {
    pub fn resting(pressed: bool) -> Self {
        if pressed {
            Self {
                offset: KNOB_ON_X,
                blend: 1.0,
            }
        } else {
            Self {
                offset: KNOB_OFF_X,
                blend: 0.0,
            }
        }
    }

    pub fn color(&self) -> Rgb {
        TRACK_OFF.mix(TRACK_ON, self.blend)
    }
}

/// Offset and colour moving together from one frame to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: KnobFrame,
    pub to: KnobFrame,
    pub duration_ms: f64,
}

impl Transition {
    pub fn toward(from: KnobFrame, pressed: bool) -> Self {
        Self {
            from,
            to: KnobFrame::resting(pressed),
            duration_ms: TRANSITION_MS,
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn sample(&self, elapsed_ms: f64) -> KnobFrame {
        if self.duration_ms <= 0.0 || self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = ease_in_out((elapsed_ms / self.duration_ms).max(0.0) as f32);
        KnobFrame {
            offset: self.from.offset + (self.to.offset - self.from.offset) * t,
            blend: self.from.blend + (self.to.blend - self.from.blend) * t,
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Which value the toggle hands to its callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleReport {
    /// The state after the flip.
    #[default]
    NewValue,
    /// The state before the flip. Kept for callers written against the
    /// legacy callback, which reported the old value.
    PreviousValue,
}

/// Outcome of a single activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    /// Stored state after the flip.
    pub pressed: bool,
    /// Value to pass to the callback.
    pub reported: bool,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMachine {
    pressed: bool,
    report: ToggleReport,
}

impl ToggleMachine {
    pub fn new(initial_value: bool, report: ToggleReport) -> Self {
        Self {
            pressed: initial_value,
            report,
        }
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Flip the state. `current` is the frame currently on screen; the
    /// returned transition starts there and ends at the new resting frame.
    pub fn activate(&mut self, current: KnobFrame) -> Activation {
        let previous = self.pressed;
        let transition = Transition::toward(current, !previous);
        self.pressed = !previous;

        let reported = match self.report {
            ToggleReport::NewValue => self.pressed,
            ToggleReport::PreviousValue => previous,
        };

        Activation {
            pressed: self.pressed,
            reported,
            transition,
        }
    }
}

/// Tracks which animation loop owns the knob. Every activation starts a new
/// run; loops from older runs stop at their next frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationRuns {
    latest: u64,
}

impl AnimationRuns {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, run: u64) -> bool {
        self.latest == run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_css() {
        assert_eq!(TRACK_OFF.css(), "#4b5563");
        assert_eq!(TRACK_ON.css(), "#544fff");
    }

    #[test]
    fn mix_hits_both_endpoints() {
        assert_eq!(TRACK_OFF.mix(TRACK_ON, 0.0), TRACK_OFF);
        assert_eq!(TRACK_OFF.mix(TRACK_ON, 1.0), TRACK_ON);
        assert_eq!(TRACK_OFF.mix(TRACK_ON, 7.0), TRACK_ON);
    }

    #[test]
    fn transition_ends_on_resting_frame() {
        let tr = Transition::toward(KnobFrame::resting(false), true);
        assert_eq!(tr.sample(0.0), KnobFrame::resting(false));
        assert_eq!(tr.sample(TRANSITION_MS), KnobFrame::resting(true));
        assert_eq!(tr.sample(TRANSITION_MS * 3.0), KnobFrame::resting(true));

        let mid = tr.sample(TRANSITION_MS / 2.0);
        assert!(mid.offset > KNOB_OFF_X && mid.offset < KNOB_ON_X);
        assert!((mid.blend - 0.5).abs() < 1e-6);
    }

    #[test]
    fn new_value_is_reported_by_default() {
        let mut machine = ToggleMachine::new(false, ToggleReport::default());
        let first = machine.activate(KnobFrame::resting(false));
        assert!(first.pressed);
        assert!(first.reported);
    }

    #[test]
    fn legacy_mode_reports_previous_value() {
        let mut machine = ToggleMachine::new(false, ToggleReport::PreviousValue);

        let first = machine.activate(KnobFrame::resting(false));
        assert!(machine.pressed());
        assert!(!first.reported);

        let second = machine.activate(KnobFrame::resting(true));
        assert!(!machine.pressed());
        assert!(second.reported);
    }

    #[test]
    fn retarget_starts_from_current_frame() {
        let mut machine = ToggleMachine::new(false, ToggleReport::NewValue);
        let first = machine.activate(KnobFrame::resting(false));
        let halfway = first.transition.sample(40.0);

        let second = machine.activate(halfway);
        assert_eq!(second.transition.from, halfway);
        assert_eq!(second.transition.to, KnobFrame::resting(false));
    }

    #[test]
    fn second_activation_supersedes_running_loop() {
        let mut runs = AnimationRuns::default();
        let first = runs.begin();
        assert!(runs.is_current(first));

        let second = runs.begin();
        assert!(!runs.is_current(first));
        assert!(runs.is_current(second));
    }
}
