// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

/// Failures while establishing or authorizing the realtime channel
/// subscription.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectionError {
    #[error("The server rejected the session credentials.")]
    InvalidCredentials,
    #[error("The connection attempt timed out.")]
    TimedOut,
    #[error("{msg}")]
    Generic { msg: String },
}
