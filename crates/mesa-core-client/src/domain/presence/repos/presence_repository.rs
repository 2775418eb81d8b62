// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{UserBasicInfo, UserId};

/// Tracks which users are currently online. Membership in the repository is
/// the definition of "online"; there is no separate status flag.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresenceRepository: Send + Sync {
    /// Merges a full roster snapshot into the set. Users already known keep
    /// their entry, users in `users` that are missing get added. Nobody is
    /// removed, since a snapshot may race with join events that follow it.
    fn merge_roster(&self, users: Vec<UserBasicInfo>);

    fn user_joined(&self, user: UserBasicInfo);

    fn user_left(&self, user_id: &UserId);

    fn is_online(&self, user_id: &UserId) -> bool;

    /// All online users, sorted by name.
    fn online_users(&self) -> Vec<UserBasicInfo>;

    /// Empties the set. Called when the connection drops, since stale
    /// presence is worse than none.
    fn clear(&self);
}
