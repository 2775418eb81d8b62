// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use itertools::Itertools;
use parking_lot::RwLock;

use crate::domain::presence::repos::PresenceRepository;
use crate::domain::shared::models::{UserBasicInfo, UserId};

pub struct InMemoryPresenceRepository {
    users: RwLock<HashMap<UserId, UserBasicInfo>>,
}

impl InMemoryPresenceRepository {
    pub fn new() -> Self {
        Self {
            users: Default::default(),
        }
    }
}

impl PresenceRepository for InMemoryPresenceRepository {
    fn merge_roster(&self, users: Vec<UserBasicInfo>) {
        let mut map = self.users.write();
        for user in users {
            map.insert(user.id.clone(), user);
        }
    }

    fn user_joined(&self, user: UserBasicInfo) {
        self.users.write().insert(user.id.clone(), user);
    }

    fn user_left(&self, user_id: &UserId) {
        self.users.write().remove(user_id);
    }

    fn is_online(&self, user_id: &UserId) -> bool {
        self.users.read().contains_key(user_id)
    }

    fn online_users(&self) -> Vec<UserBasicInfo> {
        self.users
            .read()
            .values()
            .cloned()
            .sorted_by(|lhs, rhs| lhs.name.cmp(&rhs.name))
            .collect()
    }

    fn clear(&self) {
        self.users.write().clear();
    }
}
