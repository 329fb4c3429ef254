//! Session state for callers that drive the pipeline interactively.
//!
//! The legacy surface held "current file / current record / current error"
//! as loose mutable fields; here it is an explicit state machine. Each
//! `file_selected` hands out a generation token, and only the outcome
//! carrying the current token is ever applied — a submission that was
//! superseded or deleted mid-decode is discarded, never merged
//! (last-submission-wins).

use crate::ExtractionOutcome;
use cine_fields::CanonicalRecord;
use tracing::debug;

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No file selected.
    Empty,
    /// A submission is in flight.
    Processing { generation: u64 },
    /// The last submission produced a complete record.
    Ready(CanonicalRecord),
    /// The last submission failed; the outcome carries the reason.
    Failed(ExtractionOutcome),
}

/// Proof of which submission an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken {
    generation: u64,
}

/// One controller per interactive session. No locking: submissions never
/// share state, so superseding is a plain counter bump.
#[derive(Debug)]
pub struct SessionController {
    state: SessionState,
    generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Empty,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// A new file selection supersedes whatever is in flight; the previous
    /// token becomes stale immediately.
    pub fn file_selected(&mut self) -> SubmissionToken {
        self.generation += 1;
        self.state = SessionState::Processing {
            generation: self.generation,
        };
        SubmissionToken {
            generation: self.generation,
        }
    }

    /// Applies a finished outcome if its token is still current. Returns
    /// whether the outcome was applied; a stale outcome is dropped.
    pub fn decode_completed(&mut self, token: SubmissionToken, outcome: ExtractionOutcome) -> bool {
        let current = matches!(self.state, SessionState::Processing { .. })
            && token.generation == self.generation;
        if !current {
            debug!(
                stale_generation = token.generation,
                current_generation = self.generation,
                "stale decode outcome discarded"
            );
            return false;
        }

        self.state = match outcome {
            ExtractionOutcome::Success(record) => SessionState::Ready(record),
            failure => SessionState::Failed(failure),
        };
        true
    }

    /// Clears the session and invalidates any pending submission.
    pub fn delete_requested(&mut self) {
        self.generation += 1;
        self.state = SessionState::Empty;
    }

    /// The current failure message, if the session is in a failed state.
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            SessionState::Failed(outcome) => outcome.message(),
            _ => None,
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
