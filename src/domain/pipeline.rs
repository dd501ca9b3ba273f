//! Note pipeline state machine

use std::fmt;
use thiserror::Error;

/// Pipeline states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Recording,
    Processing,
}

impl PipelineState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Processing => "processing",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: PipelineState,
    pub action: String,
}

/// Pipeline session entity.
/// Serializes the transcribe-and-format workflow: at most one recording or
/// processing run at a time.
///
/// State machine:
///   IDLE -> RECORDING (start_recording)
///   RECORDING -> PROCESSING (stop_recording)
///   RECORDING -> IDLE (cancel_recording, empty transcript)
///   IDLE -> PROCESSING (begin_processing, file ingest)
///   PROCESSING -> IDLE (complete_processing)
#[derive(Debug, Default)]
pub struct PipelineSession {
    state: PipelineState,
}

impl PipelineSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: PipelineState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == PipelineState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == PipelineState::Recording
    }

    /// Check if currently processing
    pub fn is_processing(&self) -> bool {
        self.state == PipelineState::Processing
    }

    /// Transition from IDLE to RECORDING
    pub fn start_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PipelineState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.state = PipelineState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to PROCESSING
    pub fn stop_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PipelineState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = PipelineState::Processing;
        Ok(())
    }

    /// Transition from RECORDING to IDLE (nothing to process)
    pub fn cancel_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PipelineState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "cancel recording".to_string(),
            });
        }
        self.state = PipelineState::Idle;
        Ok(())
    }

    /// Transition from IDLE to PROCESSING (file ingest path)
    pub fn begin_processing(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PipelineState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "begin processing".to_string(),
            });
        }
        self.state = PipelineState::Processing;
        Ok(())
    }

    /// Transition from PROCESSING to IDLE
    pub fn complete_processing(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PipelineState::Processing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete processing".to_string(),
            });
        }
        self.state = PipelineState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = PipelineSession::new();
        assert!(session.is_idle());
        assert!(!session.is_recording());
        assert!(!session.is_processing());
    }

    #[test]
    fn start_recording_from_idle() {
        let mut session = PipelineSession::new();
        assert!(session.start_recording().is_ok());
        assert!(session.is_recording());
    }

    #[test]
    fn start_recording_from_recording_fails() {
        let mut session = PipelineSession::new();
        session.start_recording().unwrap();

        let err = session.start_recording().unwrap_err();
        assert_eq!(err.current_state, PipelineState::Recording);
        assert!(err.action.contains("start recording"));
    }

    #[test]
    fn stop_recording_moves_to_processing() {
        let mut session = PipelineSession::new();
        session.start_recording().unwrap();

        assert!(session.stop_recording().is_ok());
        assert!(session.is_processing());
    }

    #[test]
    fn stop_recording_from_idle_fails() {
        let mut session = PipelineSession::new();

        let err = session.stop_recording().unwrap_err();
        assert_eq!(err.current_state, PipelineState::Idle);
    }

    #[test]
    fn cancel_recording_returns_to_idle() {
        let mut session = PipelineSession::new();
        session.start_recording().unwrap();

        assert!(session.cancel_recording().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn begin_processing_from_idle() {
        let mut session = PipelineSession::new();
        assert!(session.begin_processing().is_ok());
        assert!(session.is_processing());
    }

    #[test]
    fn begin_processing_while_recording_fails() {
        let mut session = PipelineSession::new();
        session.start_recording().unwrap();

        let err = session.begin_processing().unwrap_err();
        assert_eq!(err.current_state, PipelineState::Recording);
    }

    #[test]
    fn complete_processing_returns_to_idle() {
        let mut session = PipelineSession::new();
        session.begin_processing().unwrap();

        assert!(session.complete_processing().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn complete_processing_from_idle_fails() {
        let mut session = PipelineSession::new();

        let err = session.complete_processing().unwrap_err();
        assert_eq!(err.current_state, PipelineState::Idle);
    }

    #[test]
    fn full_recording_cycle() {
        let mut session = PipelineSession::new();

        session.start_recording().unwrap();
        session.stop_recording().unwrap();
        session.complete_processing().unwrap();
        assert!(session.is_idle());

        // Reusable: a file ingest can follow
        session.begin_processing().unwrap();
        session.complete_processing().unwrap();
        assert!(session.is_idle());
    }

    #[test]
    fn state_display() {
        assert_eq!(PipelineState::Idle.to_string(), "idle");
        assert_eq!(PipelineState::Recording.to_string(), "recording");
        assert_eq!(PipelineState::Processing.to_string(), "processing");
    }

    #[test]
    fn error_display_names_state_and_action() {
        let err = InvalidStateTransition {
            current_state: PipelineState::Processing,
            action: "start recording".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start recording"));
        assert!(msg.contains("processing"));
    }
}
