use std::error::Error as StdError;

use serde::Serialize;

use crate::chain::{chain, kind_of};
use crate::kind::ErrorKind;

/// Flattened view of an error chain, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Kind of the outermost taxonomy error, `None` if the chain has none.
    pub kind: Option<ErrorKind>,
    /// Display of the outer error.
    pub message: String,
    /// Display of each deeper link, outermost first.
    pub causes: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        Self {
            kind: kind_of(err),
            message: err.to_string(),
            causes: chain(err).skip(1).map(ToString::to_string).collect(),
        }
    }
}

/// Emits one ERROR event for `err` with its kind and chain depth attached.
pub fn log_error(err: &(dyn StdError + 'static)) {
    let kind: &'static str = kind_of(err).map_or("untagged", Into::into);
    let depth = chain(err).count();
    tracing::error!(kind, depth, "{err}");
}
