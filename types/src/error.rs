use thiserror::Error;

/// Errors raised while binding or driving the log page.
///
/// All failures are local to the page. Handlers that hit an error leave the
/// UI state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A required element is absent from the document at bind time.
    #[error("missing element #{element}")]
    Initialization { element: String },

    /// Input outside the accepted domain (unknown level, bad date, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JS interop failure in the browser layer.
    #[error("js error: {0}")]
    Js(String),
}

impl PageError {
    pub fn missing(element: impl Into<String>) -> Self {
        Self::Initialization {
            element: element.into(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
