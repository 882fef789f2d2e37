//! Human-readable messages for failed fetches.

use crate::users::FetchError;

const PREFIX: &str = "Failed to fetch user data. ";

/// Map a fetch failure to the message shown in the error panel.
#[must_use]
pub fn classify(err: &FetchError) -> String {
    match err {
        FetchError::Network(_) => format!("{PREFIX}Please check your internet connection."),
        FetchError::HttpStatus(_) => format!("{PREFIX}Server responded with: {err}"),
        other => format!("{PREFIX}{other}"),
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
