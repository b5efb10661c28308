use std::error::Error as StdError;
use std::io;

use crate::error::Error;
use crate::kind::ErrorKind;

/// `err` followed by every error reachable through [`StdError::source`].
///
/// An [`io::Error`] reports its payload's source rather than the payload, so
/// for those links the payload from [`io::Error::get_ref`] comes next instead.
pub fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e| next_link(*e))
}

fn next_link<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    if let Some(payload) = err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        let payload: &'a (dyn StdError + 'static) = payload;
        return Some(payload);
    }
    err.source()
}

/// First taxonomy [`Error`] in the chain, outermost wins.
pub fn find<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    chain(err).find_map(|e| e.downcast_ref::<Error>())
}

/// Kind of the outermost taxonomy [`Error`] in the chain.
pub fn kind_of(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    find(err).map(Error::kind)
}

/// Whether any link of the chain was built with `kind`.
///
/// Works through wrapping added outside this crate, including
/// `io::Error::other`, as long as each layer exposes the one below it.
pub fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    chain(err)
        .filter_map(|e| e.downcast_ref::<Error>())
        .any(|e| e.is(kind))
}
