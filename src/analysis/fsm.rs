use crate::{Error, Result};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Validating,
    Dispatching,
    Rendering(Outcome),
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisEvent {
    UploadReceived,
    UploadAccepted,
    UploadRejected,
    ResultReceived,
    DispatchFailed,
}

/// Tracks one request cycle. Every request starts a fresh machine at `Idle`.
#[derive(Debug)]
pub struct AnalysisStateMachine {
    state: AnalysisState,
}

impl Default for AnalysisStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisStateMachine {
    pub fn new() -> Self {
        Self {
            state: AnalysisState::Idle,
        }
    }

    pub fn current_state(&self) -> AnalysisState {
        self.state
    }

    pub fn transition(&mut self, event: AnalysisEvent) -> Result<AnalysisState> {
        let old_state = self.state;

        let new_state = match (old_state, event) {
            (AnalysisState::Idle, AnalysisEvent::UploadReceived) => AnalysisState::Validating,
            (AnalysisState::Validating, AnalysisEvent::UploadAccepted) => {
                AnalysisState::Dispatching
            }
            (AnalysisState::Validating, AnalysisEvent::UploadRejected) => {
                AnalysisState::Rendering(Outcome::Error)
            }
            (AnalysisState::Dispatching, AnalysisEvent::ResultReceived) => {
                AnalysisState::Rendering(Outcome::Success)
            }
            (AnalysisState::Dispatching, AnalysisEvent::DispatchFailed) => {
                AnalysisState::Rendering(Outcome::Error)
            }
            _ => {
                warn!(
                    "Invalid FSM transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    old_state, event
                )));
            }
        };

        info!(
            "FSM state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(new_state)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, AnalysisState::Rendering(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let fsm = AnalysisStateMachine::new();
        assert_eq!(fsm.current_state(), AnalysisState::Idle);
        assert!(!fsm.is_terminal());
    }

    #[test]
    fn test_success_path() {
        let mut fsm = AnalysisStateMachine::new();
        fsm.transition(AnalysisEvent::UploadReceived).unwrap();
        fsm.transition(AnalysisEvent::UploadAccepted).unwrap();
        assert_eq!(fsm.current_state(), AnalysisState::Dispatching);

        let state = fsm.transition(AnalysisEvent::ResultReceived).unwrap();
        assert_eq!(state, AnalysisState::Rendering(Outcome::Success));
        assert!(fsm.is_terminal());
    }

    #[test]
    fn test_validation_failure_path() {
        let mut fsm = AnalysisStateMachine::new();
        fsm.transition(AnalysisEvent::UploadReceived).unwrap();
        let state = fsm.transition(AnalysisEvent::UploadRejected).unwrap();
        assert_eq!(state, AnalysisState::Rendering(Outcome::Error));
    }

    #[test]
    fn test_dispatch_failure_path() {
        let mut fsm = AnalysisStateMachine::new();
        fsm.transition(AnalysisEvent::UploadReceived).unwrap();
        fsm.transition(AnalysisEvent::UploadAccepted).unwrap();
        let state = fsm.transition(AnalysisEvent::DispatchFailed).unwrap();
        assert_eq!(state, AnalysisState::Rendering(Outcome::Error));
    }

    #[test]
    fn test_cannot_dispatch_without_validation() {
        let mut fsm = AnalysisStateMachine::new();
        let err = fsm.transition(AnalysisEvent::UploadAccepted).unwrap_err();
        assert!(matches!(err, Error::Fsm(_)));
        assert_eq!(fsm.current_state(), AnalysisState::Idle);
    }

    #[test]
    fn test_terminal_state_rejects_further_events() {
        let mut fsm = AnalysisStateMachine::new();
        fsm.transition(AnalysisEvent::UploadReceived).unwrap();
        fsm.transition(AnalysisEvent::UploadRejected).unwrap();
        assert!(fsm.transition(AnalysisEvent::UploadReceived).is_err());
    }
}
