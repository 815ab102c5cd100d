//! Call-site resolution for failure diagnostics
//!
//! Every public assertion is `#[track_caller]`, so `Location::caller()` seen
//! from inside the helper is the user's assertion line no matter how many
//! internal frames sit in between.

use std::fmt;
use std::panic::Location;

/// Source location of an assertion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// File base name, directories stripped
    pub file: &'static str,
    /// 1-based line number
    pub line: u32,
}

impl CallSite {
    /// Capture the location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    /// Build a call site from a raw location, stripping the directory part
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: base_name(location.file()),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strip everything up to the last path separator
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
