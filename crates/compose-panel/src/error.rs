use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A consumer was set up in a scope with no matching owner among its ancestors.
    MissingProvider { name: String, provider: &'static str },
}

impl ComposeError {
    pub(crate) fn missing_provider(name: &str, provider: &'static str) -> Self {
        ComposeError::MissingProvider {
            name: name.to_string(),
            provider,
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::MissingProvider { name, provider } => write!(
                f,
                "compose `{name}` has no provider; did you call `{provider}` in a parent scope?"
            ),
        }
    }
}

impl std::error::Error for ComposeError {}
