//! Answer parameters for a single use case call.
//!
//! [`AnswerParams`] groups the static parameters that control a call to
//! [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default limit for one generation request.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-call control parameters.
///
/// There is no retry setting: a failed generation is reported to the
/// caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerParams {
    /// Upper bound on the generator call. `None` waits indefinitely.
    pub generation_timeout: Option<Duration>,
}

impl Default for AnswerParams {
    fn default() -> Self {
        Self {
            generation_timeout: Some(DEFAULT_GENERATION_TIMEOUT),
        }
    }
}

impl AnswerParams {
    // ==================== Builder Methods ====================

    pub fn with_generation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.generation_timeout = timeout;
        self
    }
}
