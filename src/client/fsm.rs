use crate::recognition::ChapterMatch;
use crate::{Error, Result};
use tracing::{debug, warn};

pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to capture image";
pub const CONNECTIVITY_MESSAGE: &str = "Network response was not ok";
pub const DEFAULT_ANALYSIS_MESSAGE: &str = "Analysis failed";
pub const MALFORMED_ANSWER_MESSAGE: &str = "Invalid response structure";

/// UI-facing state of the capture client.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Loading,
    Success(ChapterMatch),
    Error(String),
}

impl ScanState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Events that settle (or start) one scan attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Trigger,
    CaptureFailed,
    RequestFailed,
    /// Backend answered `status: "error"`, possibly with a message.
    BackendRejected(Option<String>),
    /// Backend claimed success but the answer is missing required fields.
    MalformedAnswer,
    Recognized(ChapterMatch),
}

/// State machine enforcing the capture client's contract: one submission in
/// flight at a time, and Loading always settles to exactly one of
/// Success or Error.
pub struct ScanStateMachine {
    state: ScanState,
}

impl Default for ScanStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanStateMachine {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
        }
    }

    pub fn current_state(&self) -> &ScanState {
        &self.state
    }

    pub fn transition(&mut self, event: ScanEvent) -> Result<()> {
        let new_state = match (&self.state, event) {
            // Trigger is valid from any settled state; while Loading it is
            // rejected, which is the in-flight submission guard.
            (ScanState::Idle, ScanEvent::Trigger)
            | (ScanState::Success(_), ScanEvent::Trigger)
            | (ScanState::Error(_), ScanEvent::Trigger) => ScanState::Loading,

            (ScanState::Loading, ScanEvent::CaptureFailed) => {
                ScanState::Error(CAPTURE_FAILED_MESSAGE.to_string())
            }
            (ScanState::Loading, ScanEvent::RequestFailed) => {
                ScanState::Error(CONNECTIVITY_MESSAGE.to_string())
            }
            (ScanState::Loading, ScanEvent::BackendRejected(message)) => ScanState::Error(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_ANALYSIS_MESSAGE.to_string()),
            ),
            (ScanState::Loading, ScanEvent::MalformedAnswer) => {
                ScanState::Error(MALFORMED_ANSWER_MESSAGE.to_string())
            }
            (ScanState::Loading, ScanEvent::Recognized(data)) => ScanState::Success(data),

            (state, event) => {
                warn!("Invalid scan transition from {:?} with {:?}", state, event);
                return Err(Error::internal(format!(
                    "invalid transition from {:?} with {:?}",
                    state, event
                )));
            }
        };

        debug!("Scan state: {:?} -> {:?}", self.state, new_state);
        self.state = new_state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::BookReference;
    use pretty_assertions::assert_eq;

    fn john3() -> ChapterMatch {
        ChapterMatch {
            book: BookReference {
                name: "John".to_string(),
                short_name: "JHN".to_string(),
            },
            chapter: "3".to_string(),
        }
    }

    #[test]
    fn test_trigger_enters_loading() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        assert_eq!(fsm.current_state(), &ScanState::Loading);
        assert!(fsm.current_state().is_busy());
    }

    #[test]
    fn test_trigger_while_loading_is_rejected() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();

        assert!(fsm.transition(ScanEvent::Trigger).is_err());
        // The in-flight attempt is untouched.
        assert_eq!(fsm.current_state(), &ScanState::Loading);
    }

    #[test]
    fn test_recognized_settles_to_success() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::Recognized(john3())).unwrap();

        assert_eq!(fsm.current_state(), &ScanState::Success(john3()));
        assert!(!fsm.current_state().is_busy());
    }

    #[test]
    fn test_capture_failure_settles_with_fixed_message() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::CaptureFailed).unwrap();

        assert_eq!(
            fsm.current_state(),
            &ScanState::Error("Failed to capture image".to_string())
        );
    }

    #[test]
    fn test_backend_rejection_uses_backend_message() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::BackendRejected(Some(
            "No Bible book identified".to_string(),
        )))
        .unwrap();

        assert_eq!(
            fsm.current_state(),
            &ScanState::Error("No Bible book identified".to_string())
        );
    }

    #[test]
    fn test_backend_rejection_without_message_uses_default() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::BackendRejected(Some("  ".to_string())))
            .unwrap();

        assert_eq!(
            fsm.current_state(),
            &ScanState::Error("Analysis failed".to_string())
        );
    }

    #[test]
    fn test_malformed_answer_message() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::MalformedAnswer).unwrap();

        assert_eq!(
            fsm.current_state(),
            &ScanState::Error("Invalid response structure".to_string())
        );
    }

    #[test]
    fn test_retrigger_after_error_and_success() {
        let mut fsm = ScanStateMachine::new();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::RequestFailed).unwrap();
        fsm.transition(ScanEvent::Trigger).unwrap();
        fsm.transition(ScanEvent::Recognized(john3())).unwrap();
        fsm.transition(ScanEvent::Trigger).unwrap();

        assert_eq!(fsm.current_state(), &ScanState::Loading);
    }

    #[test]
    fn test_settle_events_invalid_outside_loading() {
        let mut fsm = ScanStateMachine::new();
        assert!(fsm.transition(ScanEvent::RequestFailed).is_err());
        assert!(fsm.transition(ScanEvent::Recognized(john3())).is_err());
        assert_eq!(fsm.current_state(), &ScanState::Idle);
    }
}
