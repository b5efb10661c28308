#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod chain;
pub mod error;
pub mod kind;
pub mod report;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use chain::{chain, find, is_kind, kind_of};
pub use error::{BoxError, Error, Result};
pub use kind::{ErrorKind, SUPPORTED_NETWORKS};
pub use report::{ErrorReport, log_error};
