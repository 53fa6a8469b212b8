use std::{fmt, panic};

/// A source position of the code that invoked a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[track_caller]
    pub fn caller() -> Self {
        panic::Location::caller().into()
    }
}

impl From<&'static panic::Location<'static>> for Location {
    fn from(location: &'static panic::Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Resolves the call site of the current check.
///
/// Every frame between the public entry point and here carries
/// `#[track_caller]`, so the result points at user code. Returns `None`
/// when capture is disabled.
#[track_caller]
pub fn resolve_call_site(enabled: bool) -> Option<Location> {
    if enabled {
        Some(Location::caller())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_this_file() {
        let location = resolve_call_site(true).unwrap();
        assert!(location.file.ends_with("location.rs"));
        assert_eq!(location.line, line!() - 2);
    }

    #[test]
    fn disabled_capture_is_none() {
        assert_eq!(resolve_call_site(false), None);
    }
}
