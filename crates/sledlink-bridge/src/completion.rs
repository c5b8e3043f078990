//! One-shot completion handlers for bridge invocations.
//!
//! Every invocation is paired with a [`Completion`]: an optional success
//! handler and an optional error handler, exactly one of which the native
//! side invokes, exactly once, with a native-defined payload. Operations
//! without a success path (for example `connect`) carry an empty success
//! slot; that emptiness is itself part of the forwarding contract and is
//! observable through [`Completion::has_success`].

use serde_json::Value;
use std::fmt;

/// Handler invoked with the native success payload.
pub type SuccessHandler = Box<dyn FnOnce(Value) + Send + 'static>;

/// Handler invoked with the native error reason.
pub type ErrorHandler = Box<dyn FnOnce(Value) + Send + 'static>;

/// Success/error handler pair consumed by whichever outcome arrives.
///
/// The pair is consumed on resolution, so a completion can never fire twice;
/// the unused handler is dropped silently.
pub struct Completion {
    on_success: Option<SuccessHandler>,
    on_error: Option<ErrorHandler>,
}

impl Completion {
    /// A completion with both handlers, for request/response operations.
    #[must_use]
    pub fn new(
        on_success: impl FnOnce(Value) + Send + 'static,
        on_error: impl FnOnce(Value) + Send + 'static,
    ) -> Self {
        Self {
            on_success: Some(Box::new(on_success)),
            on_error: Some(Box::new(on_error)),
        }
    }

    /// A completion with no handlers, for fire-and-forget operations.
    #[must_use]
    pub fn none() -> Self {
        Self {
            on_success: None,
            on_error: None,
        }
    }

    /// A completion carrying only an error handler.
    #[must_use]
    pub fn error_only(on_error: Option<ErrorHandler>) -> Self {
        Self {
            on_success: None,
            on_error,
        }
    }

    /// A completion built from already-boxed optional handlers.
    #[must_use]
    pub fn from_handlers(
        on_success: Option<SuccessHandler>,
        on_error: Option<ErrorHandler>,
    ) -> Self {
        Self {
            on_success,
            on_error,
        }
    }

    /// Whether a success handler is attached.
    #[must_use]
    pub fn has_success(&self) -> bool {
        self.on_success.is_some()
    }

    /// Whether an error handler is attached.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.on_error.is_some()
    }

    /// Resolve with a success payload, consuming the completion.
    pub fn succeed(self, value: Value) {
        if let Some(handler) = self.on_success {
            handler(value);
        }
    }

    /// Resolve with an error reason, consuming the completion.
    pub fn fail(self, reason: Value) {
        if let Some(handler) = self.on_error {
            handler(reason);
        }
    }

    /// Resolve from a native outcome, consuming the completion.
    pub fn resolve(self, outcome: std::result::Result<Value, Value>) {
        match outcome {
            Ok(value) => self.succeed(value),
            Err(reason) => self.fail(reason),
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("has_success", &self.has_success())
            .field("has_error", &self.has_error())
            .finish()
    }
}
