// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_presence_repository::InMemoryPresenceRepository;

mod in_memory_presence_repository;
