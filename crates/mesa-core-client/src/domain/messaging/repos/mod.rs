// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messages_repository::{MessagesRepository, UpdateHandler};

mod messages_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::messages_repository::MockMessagesRepository;
}
