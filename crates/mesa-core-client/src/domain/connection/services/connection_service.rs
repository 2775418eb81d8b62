// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::connection::models::ConnectionError;
use crate::domain::shared::models::Session;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, session: &Session) -> Result<(), ConnectionError>;
    async fn disconnect(&self);
}
