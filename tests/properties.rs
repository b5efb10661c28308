#![expect(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::io;

use erst_errors::{BoxError, Error, ErrorKind, is_kind, kind_of};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn sample(kind: ErrorKind) -> Error {
    match kind {
        ErrorKind::TransactionNotFound => Error::transaction_not_found("404"),
        ErrorKind::RpcConnectionFailed => Error::rpc_connection_failed("refused"),
        ErrorKind::RpcTimeout => Error::rpc_timeout("deadline"),
        ErrorKind::AllRpcFailed => Error::all_rpc_failed(),
        ErrorKind::SimulatorNotFound => Error::simulator_not_found("erst-sim"),
        ErrorKind::SimulationFailed => Error::simulation_failed("exit 1", "boom"),
        ErrorKind::SimCrash => Error::sim_crash("sigsegv", "core dumped"),
        ErrorKind::InvalidNetwork => Error::invalid_network("devnet"),
        ErrorKind::MarshalFailed => Error::marshal_failed("bad xdr"),
        ErrorKind::UnmarshalFailed => Error::unmarshal_failed("eof", "{"),
        ErrorKind::SimulationLogicError => Error::simulation_logic_error("no result"),
        ErrorKind::RpcError => Error::rpc_error("https://rpc.example.org", "bad", -32600),
        ErrorKind::ValidationFailed => Error::validation_failed("empty"),
        ErrorKind::ProtocolUnsupported => Error::protocol_unsupported(7),
        ErrorKind::CliArgumentRequired => Error::cli_argument_required("hash"),
    }
}

fn any_kind() -> impl Strategy<Value = ErrorKind> {
    (0..ErrorKind::iter().count()).prop_map(|i| ErrorKind::iter().nth(i).unwrap())
}

#[derive(thiserror::Error, Debug)]
#[error("while {step}")]
struct Context {
    step: String,
    #[source]
    source: BoxError,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sim_crash_stderr_segment_present_iff_non_empty(
        cause in "[a-z ]{1,20}",
        stderr in "[a-zA-Z0-9 \n]{0,40}",
    ) {
        let msg = Error::sim_crash(cause.as_str(), &stderr).to_string();
        prop_assert!(msg.starts_with("simulator process crashed: "));
        if stderr.is_empty() {
            prop_assert!(!msg.contains(", stderr:"));
        } else {
            let expected_tail = format!(", stderr: {stderr}");
            prop_assert!(msg.ends_with(&expected_tail));
        }
    }

    #[test]
    fn rpc_error_embeds_every_input(
        host in "[a-z]{1,12}",
        server_msg in "[a-z ]{0,30}",
        code in any::<i64>(),
    ) {
        let url = format!("https://{host}.example.org");
        let msg = Error::rpc_error(&url, &server_msg, code).to_string();
        let from_url = format!("from {url}: ");
        let code_tail = format!("{server_msg} (code {code})");
        prop_assert!(msg.contains(&from_url));
        prop_assert!(msg.ends_with(&code_tail));
    }

    #[test]
    fn invalid_network_and_cli_argument_embed_name(name in "[a-z-]{1,16}") {
        let network = Error::invalid_network(&name).to_string();
        prop_assert!(network.contains(&name));
        prop_assert!(network.ends_with("Must be one of: testnet, mainnet, futurenet"));

        let flag = format!("--{name}");
        prop_assert!(Error::cli_argument_required(&name).to_string().ends_with(&flag));
    }

    #[test]
    fn kind_survives_arbitrary_wrapping_depth(
        kind in any_kind(),
        layers in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut err: BoxError = Box::new(sample(kind));
        for use_io in layers {
            err = if use_io {
                Box::new(io::Error::other(err))
            } else {
                Box::new(Context { step: "replaying".into(), source: err })
            };
        }

        prop_assert!(is_kind(&*err, kind));
        prop_assert_eq!(kind_of(&*err), Some(kind));
        for other in ErrorKind::iter().filter(|k| *k != kind) {
            prop_assert!(!is_kind(&*err, other));
        }
    }
}
