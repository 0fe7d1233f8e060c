//! Admin session gate: triple-activation trigger plus PIN comparison.
//!
//! Three states: Locked (initial), PinPrompt, Unlocked. The trigger counter
//! resets to zero whenever it reaches three, regardless of outcome. A wrong
//! PIN drops straight back to Locked with the counter at zero — no lockout,
//! no backoff, no attempt limit. Unlocked is terminal for the session. This
//! is a casual deterrent, not a security boundary.

/// Activations required on the designated UI element to open the prompt.
pub const ADMIN_TRIGGER_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    PinPrompt,
    Unlocked,
}

/// What a single trigger activation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Below the threshold; nothing visible happens.
    Counted,
    /// Threshold reached while locked: the PIN prompt opens.
    PinPromptOpened,
    /// Threshold reached while already unlocked: the admin panel reopens.
    PanelOpened,
}

/// Session-scoped gate in front of the content editor. Never persisted;
/// reopening the page starts a fresh Locked gate.
#[derive(Debug, Clone)]
pub struct AdminGate {
    state: GateState,
    activations: u8,
    pin: String,
}

impl AdminGate {
    /// The PIN comes from configuration, resolved at process start.
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            state: GateState::Locked,
            activations: 0,
            pin: pin.into(),
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// One activation of the designated element (the logo, in the original
    /// layout). There is no timeout window; only the count matters.
    pub fn trigger(&mut self) -> TriggerOutcome {
        self.activations += 1;
        if self.activations < ADMIN_TRIGGER_THRESHOLD {
            return TriggerOutcome::Counted;
        }
        self.activations = 0;
        if self.state == GateState::Unlocked {
            return TriggerOutcome::PanelOpened;
        }
        self.state = GateState::PinPrompt;
        TriggerOutcome::PinPromptOpened
    }

    /// PIN submission. Only meaningful in `PinPrompt`; a correct value
    /// unlocks the session, anything else returns the gate to `Locked`.
    pub fn submit_pin(&mut self, candidate: &str) -> bool {
        if self.state != GateState::PinPrompt {
            return self.state == GateState::Unlocked;
        }
        if candidate == self.pin {
            self.state = GateState::Unlocked;
            true
        } else {
            self.state = GateState::Locked;
            self.activations = 0;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_activations_open_pin_prompt() {
        let mut gate = AdminGate::new("2427");
        assert_eq!(gate.trigger(), TriggerOutcome::Counted);
        assert_eq!(gate.trigger(), TriggerOutcome::Counted);
        assert_eq!(gate.trigger(), TriggerOutcome::PinPromptOpened);
        assert_eq!(gate.state(), GateState::PinPrompt);
    }

    #[test]
    fn correct_pin_unlocks() {
        let mut gate = AdminGate::new("2427");
        gate.trigger();
        gate.trigger();
        gate.trigger();
        assert!(gate.submit_pin("2427"));
        assert_eq!(gate.state(), GateState::Unlocked);
    }

    #[test]
    fn wrong_pin_returns_to_locked_with_counter_reset() {
        let mut gate = AdminGate::new("2427");
        gate.trigger();
        gate.trigger();
        gate.trigger();
        assert!(!gate.submit_pin("0000"));
        assert_eq!(gate.state(), GateState::Locked);
        // Counter restarted from zero: three more activations are needed.
        assert_eq!(gate.trigger(), TriggerOutcome::Counted);
        assert_eq!(gate.trigger(), TriggerOutcome::Counted);
        assert_eq!(gate.trigger(), TriggerOutcome::PinPromptOpened);
    }

    #[test]
    fn unlocked_is_terminal_and_reopens_panel() {
        let mut gate = AdminGate::new("2427");
        gate.trigger();
        gate.trigger();
        gate.trigger();
        gate.submit_pin("2427");

        gate.trigger();
        gate.trigger();
        assert_eq!(gate.trigger(), TriggerOutcome::PanelOpened);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn counter_resets_after_reaching_threshold() {
        let mut gate = AdminGate::new("2427");
        gate.trigger();
        gate.trigger();
        gate.trigger();
        // Already at PinPrompt; the count starts over.
        assert_eq!(gate.trigger(), TriggerOutcome::Counted);
    }

    #[test]
    fn pin_submission_outside_prompt_does_not_unlock() {
        let mut gate = AdminGate::new("2427");
        assert!(!gate.submit_pin("2427"));
        assert_eq!(gate.state(), GateState::Locked);
    }
}
