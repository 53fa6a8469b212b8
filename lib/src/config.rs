#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Record the caller's file, line and column on failures.
    pub capture_location: bool,
    /// The `name` every [`AssertionError`](crate::error::AssertionError) carries.
    pub error_name: String,
}

impl Config {
    pub const DEFAULT_ERROR_NAME: &'static str = "AssertionError";

    pub fn new(capture_location: bool, error_name: impl Into<String>) -> Self {
        Self {
            capture_location,
            error_name: error_name.into(),
        }
        .sanitized()
    }

    /// An empty error name falls back to [`Self::DEFAULT_ERROR_NAME`].
    pub fn sanitized(mut self) -> Self {
        if self.error_name.trim().is_empty() {
            self.error_name = String::from(Self::DEFAULT_ERROR_NAME);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_location: true,
            error_name: String::from(Self::DEFAULT_ERROR_NAME),
        }
    }
}
