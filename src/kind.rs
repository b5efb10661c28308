use serde::{Deserialize, Serialize};

/// Networks accepted by the CLI; listed verbatim in [`ErrorKind::InvalidNetwork`] messages.
pub const SUPPORTED_NETWORKS: [&str; 3] = ["testnet", "mainnet", "futurenet"];

/// Closed catalog of failure categories.
///
/// Kinds compare by value, never by message text. The string form is the
/// variant name (`"RpcTimeout"`), which is also what serde emits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
    strum_macros::VariantNames,
)]
pub enum ErrorKind {
    TransactionNotFound,
    RpcConnectionFailed,
    RpcTimeout,
    AllRpcFailed,
    SimulatorNotFound,
    SimulationFailed,
    SimCrash,
    InvalidNetwork,
    MarshalFailed,
    UnmarshalFailed,
    SimulationLogicError,
    RpcError,
    ValidationFailed,
    ProtocolUnsupported,
    CliArgumentRequired,
}

impl ErrorKind {
    /// Fixed leading text of every message produced for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::TransactionNotFound => "transaction not found",
            Self::RpcConnectionFailed => "RPC connection failed",
            Self::RpcTimeout => "RPC request timed out",
            Self::AllRpcFailed => "all RPC endpoints failed",
            Self::SimulatorNotFound => "simulator binary not found",
            Self::SimulationFailed => "simulation execution failed",
            Self::SimCrash => "simulator process crashed",
            Self::InvalidNetwork => "invalid network",
            Self::MarshalFailed => "failed to marshal request",
            Self::UnmarshalFailed => "failed to unmarshal response",
            Self::SimulationLogicError => "simulation logic error",
            Self::RpcError => "RPC server returned an error",
            Self::ValidationFailed => "validation failed",
            Self::ProtocolUnsupported => "unsupported protocol version",
            Self::CliArgumentRequired => "required argument missing",
        }
    }
}
