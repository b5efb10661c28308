use std::fmt::Display;

use crate::kind::{ErrorKind, SUPPORTED_NETWORKS};

/// Any cause an [`Error`] can carry.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure tagged with exactly one [`ErrorKind`].
///
/// Only the constructors below produce values, so the kind is always drawn
/// from the catalog. When a cause is supplied it is kept and returned from
/// [`std::error::Error::source`]; its text is also embedded in the message so
/// the value logs well on its own.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    fn caused(kind: ErrorKind, cause: BoxError, trailer: &str) -> Self {
        Self {
            kind,
            message: format!("{}: {cause}{trailer}", kind.message()),
            source: Some(cause),
        }
    }

    fn described(kind: ErrorKind, detail: impl Display) -> Self {
        Self {
            kind,
            message: format!("{}: {detail}", kind.message()),
            source: None,
        }
    }

    pub fn transaction_not_found<E: Into<BoxError>>(cause: E) -> Self {
        Self::caused(ErrorKind::TransactionNotFound, cause.into(), "")
    }

    pub fn rpc_connection_failed<E: Into<BoxError>>(cause: E) -> Self {
        Self::caused(ErrorKind::RpcConnectionFailed, cause.into(), "")
    }

    pub fn rpc_timeout<E: Into<BoxError>>(cause: E) -> Self {
        Self::caused(ErrorKind::RpcTimeout, cause.into(), "")
    }

    /// Carries no per-endpoint detail; callers that want it should log the
    /// individual failures before collapsing them into this value.
    pub fn all_rpc_failed() -> Self {
        Self {
            kind: ErrorKind::AllRpcFailed,
            message: ErrorKind::AllRpcFailed.message().to_string(),
            source: None,
        }
    }

    pub fn simulator_not_found(msg: &str) -> Self {
        Self::described(ErrorKind::SimulatorNotFound, msg)
    }

    pub fn simulation_failed<E: Into<BoxError>>(cause: E, stderr: &str) -> Self {
        Self::caused(
            ErrorKind::SimulationFailed,
            cause.into(),
            &format!(", stderr: {stderr}"),
        )
    }

    /// `stderr` is appended only when non-empty.
    pub fn sim_crash<E: Into<BoxError>>(cause: E, stderr: &str) -> Self {
        let trailer = if stderr.is_empty() {
            String::new()
        } else {
            format!(", stderr: {stderr}")
        };
        Self::caused(ErrorKind::SimCrash, cause.into(), &trailer)
    }

    pub fn invalid_network(network: &str) -> Self {
        Self::described(
            ErrorKind::InvalidNetwork,
            format_args!(
                "{network}. Must be one of: {}",
                SUPPORTED_NETWORKS.join(", ")
            ),
        )
    }

    pub fn marshal_failed<E: Into<BoxError>>(cause: E) -> Self {
        Self::caused(ErrorKind::MarshalFailed, cause.into(), "")
    }

    /// `output` is the raw response body that failed to decode.
    pub fn unmarshal_failed<E: Into<BoxError>>(cause: E, output: &str) -> Self {
        Self::caused(
            ErrorKind::UnmarshalFailed,
            cause.into(),
            &format!(", output: {output}"),
        )
    }

    pub fn simulation_logic_error(msg: &str) -> Self {
        Self::described(ErrorKind::SimulationLogicError, msg)
    }

    /// Error object returned by the RPC server itself, as opposed to a transport failure.
    pub fn rpc_error(url: &str, msg: &str, code: i64) -> Self {
        let kind = ErrorKind::RpcError;
        Self {
            kind,
            message: format!("{} from {url}: {msg} (code {code})", kind.message()),
            source: None,
        }
    }

    pub fn validation_failed(msg: &str) -> Self {
        Self::described(ErrorKind::ValidationFailed, msg)
    }

    pub fn protocol_unsupported(version: u32) -> Self {
        Self::described(ErrorKind::ProtocolUnsupported, version)
    }

    pub fn cli_argument_required(arg: &str) -> Self {
        Self::described(ErrorKind::CliArgumentRequired, format_args!("--{arg}"))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Checks this value's own kind only. Use [`crate::is_kind`] to search the chain.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// The wrapped cause, if the constructor took one.
    pub fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}
