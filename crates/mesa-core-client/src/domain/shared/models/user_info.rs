// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::UserId;

/// The minimal set of attributes the backend sends along whenever it refers
/// to a user (conversation counterparts, assignees, presence events).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBasicInfo {
    pub id: UserId,
    pub name: String,
}
