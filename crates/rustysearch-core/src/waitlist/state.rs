use std::time::Duration;

use crate::config::{SUBMITTING_LABEL, SUBMIT_DELAY_MS};
use crate::error::WaitlistError;

/// Phase of the waitlist form for the current page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistPhase {
    Idle,
    Submitting,
    /// Terminal for the session
    Completed,
}

/// Submit control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    /// Show the spinner icon before the label
    pub busy: bool,
}

/// Everything the waitlist section needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistView {
    pub phase: WaitlistPhase,
    pub button: SubmitButton,
    pub form_visible: bool,
    pub success_visible: bool,
}

/// Proof that a submission started; consumed when it completes.
#[derive(Debug)]
#[must_use = "a started submission must be completed"]
pub struct SubmitTicket {
    delay: Duration,
}

impl SubmitTicket {
    /// How long to wait before completing.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The `Idle -> Submitting -> Completed` machine.
///
/// Pure state: persistence, analytics and timing are handled by
/// [`WaitlistController`](super::WaitlistController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistState {
    phase: WaitlistPhase,
    button: SubmitButton,
    original_label: Option<String>,
}

impl WaitlistState {
    /// Fresh form with the given submit label.
    pub fn idle(submit_label: &str) -> Self {
        Self {
            phase: WaitlistPhase::Idle,
            button: SubmitButton {
                label: submit_label.to_string(),
                disabled: false,
                busy: false,
            },
            original_label: None,
        }
    }

    /// Already joined in an earlier session: skip straight to the success panel.
    pub fn completed(submit_label: &str) -> Self {
        Self {
            phase: WaitlistPhase::Completed,
            ..Self::idle(submit_label)
        }
    }

    pub fn phase(&self) -> WaitlistPhase {
        self.phase
    }

    /// `Idle -> Submitting`: disable the button and show the loading label.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, WaitlistError> {
        if self.phase != WaitlistPhase::Idle {
            return Err(WaitlistError::InvalidTransition {
                action: "submit",
                phase: self.phase,
            });
        }

        self.original_label = Some(std::mem::replace(
            &mut self.button.label,
            SUBMITTING_LABEL.to_string(),
        ));
        self.button.disabled = true;
        self.button.busy = true;
        self.phase = WaitlistPhase::Submitting;

        Ok(SubmitTicket {
            delay: Duration::from_millis(SUBMIT_DELAY_MS),
        })
    }

    /// `Submitting -> Completed`: restore the button and swap form for success panel.
    pub fn complete(&mut self, _ticket: SubmitTicket) -> Result<(), WaitlistError> {
        if self.phase != WaitlistPhase::Submitting {
            return Err(WaitlistError::InvalidTransition {
                action: "complete submission",
                phase: self.phase,
            });
        }

        if let Some(label) = self.original_label.take() {
            self.button.label = label;
        }
        self.button.disabled = false;
        self.button.busy = false;
        self.phase = WaitlistPhase::Completed;
        Ok(())
    }

    pub fn view(&self) -> WaitlistView {
        let completed = self.phase == WaitlistPhase::Completed;
        WaitlistView {
            phase: self.phase,
            button: self.button.clone(),
            form_visible: !completed,
            success_visible: completed,
        }
    }
}
