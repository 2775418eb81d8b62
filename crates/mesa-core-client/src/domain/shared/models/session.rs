// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::SecretString;

use super::UserId;

/// An authenticated session. Constructed by the embedding application after
/// login and handed to `Client::connect`; every REST call and the channel
/// subscription are authorized with the bearer token it carries.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub token: SecretString,
}

impl Session {
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: SecretString::new(token.into()),
        }
    }
}
