//! Progress notification port

use cityguide_domain::AttributeKind;

/// Callback for progress updates during an answer
pub trait AnswerProgressNotifier: Send + Sync {
    /// Called right before the generator is invoked
    fn on_generation_start(&self, city: &str, attribute: AttributeKind);

    /// Called when the generator returns, successfully or not
    fn on_generation_end(&self, success: bool);
}

/// No-op progress notifier
pub struct NoAnswerProgress;

impl AnswerProgressNotifier for NoAnswerProgress {
    fn on_generation_start(&self, _city: &str, _attribute: AttributeKind) {}
    fn on_generation_end(&self, _success: bool) {}
}
