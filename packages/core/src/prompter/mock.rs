//! Mock host prompter for testing.
//!
//! Returns a scripted answer and records every request it receives, so tests
//! can drive the credential command without a terminal.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{HostPrompter, PromptError, PromptRequest};
use crate::credential::Credential;

/// A scripted prompter.
///
/// # Example
///
/// ```
/// use get_credential_core::prompter::MockPrompter;
///
/// // Answers every prompt with alice / hunter2
/// let mock = MockPrompter::with_credential("alice", "hunter2");
///
/// // Answers with nothing, as if the operator dismissed the prompt
/// let dismissed = MockPrompter::dismissed();
/// assert_eq!(dismissed.call_count(), 0);
/// ```
pub struct MockPrompter {
    answer: Result<Option<Credential>, PromptError>,
    call_count: Arc<AtomicUsize>,
    requests: Mutex<Vec<PromptRequest>>,
}

impl MockPrompter {
    /// Create a mock that answers with the given username and secret.
    pub fn with_credential(username: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self::answering(Ok(Some(Credential::new(username, secret))))
    }

    /// Create a mock that returns no credential and no error.
    pub fn dismissed() -> Self {
        Self::answering(Ok(None))
    }

    /// Create a mock that fails with the given error.
    pub fn with_error(error: PromptError) -> Self {
        Self::answering(Err(error))
    }

    /// Create a mock that rejects its arguments.
    pub fn rejecting(argument: &str, reason: &str) -> Self {
        Self::with_error(PromptError::invalid_argument(argument, reason))
    }

    fn answering(answer: Result<Option<Credential>, PromptError>) -> Self {
        Self {
            answer,
            call_count: Arc::new(AtomicUsize::new(0)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of times the prompter was invoked.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Clone of the call counter for tracking after the mock is moved.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<PromptRequest> {
        self.requests().pop()
    }
}

impl Default for MockPrompter {
    fn default() -> Self {
        Self::with_credential("mock-user", "mock-password")
    }
}

impl HostPrompter for MockPrompter {
    fn prompt_for_credential(
        &self,
        request: &PromptRequest,
    ) -> Result<Option<Credential>, PromptError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.answer.clone()
    }
}
