// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use mesa_core_client::app::event_handlers::{
    PresenceEvent, PresenceEventHandler, ServerEvent, ServerEventHandler,
};
use mesa_core_client::domain::presence::repos::PresenceRepository;
use mesa_core_client::dtos::{UserBasicInfo, UserId};
use mesa_core_client::infra::presence::InMemoryPresenceRepository;
use mesa_core_client::test::MockAppDependencies;
use mesa_core_client::ClientEvent;

fn user(id: &str, name: &str) -> UserBasicInfo {
    UserBasicInfo {
        id: id.into(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_merges_snapshot_into_presence_map() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let users = vec![user("u1", "Jane"), user("u2", "John")];

    deps.presence_repo
        .expect_merge_roster()
        .once()
        .with(predicate::eq(users.clone()))
        .return_once(|_| ());

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::PresenceChanged {
            ids: vec!["u1".into(), "u2".into()],
        }))
        .return_once(|_| ());

    let event_handler = PresenceEventHandler::from(&deps.into_deps());
    let result = event_handler
        .handle_event(ServerEvent::Presence(PresenceEvent::Snapshot { users }))
        .await?;

    assert_eq!(result, None);

    Ok(())
}

#[tokio::test]
async fn test_handles_join_and_leave() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.presence_repo
        .expect_user_joined()
        .once()
        .with(predicate::eq(user("u3", "Maria")))
        .return_once(|_| ());

    deps.presence_repo
        .expect_user_left()
        .once()
        .with(predicate::eq(UserId::from("u1")))
        .return_once(|_| ());

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::PresenceChanged {
            ids: vec!["u3".into()],
        }))
        .return_once(|_| ());

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::PresenceChanged {
            ids: vec!["u1".into()],
        }))
        .return_once(|_| ());

    let event_handler = PresenceEventHandler::from(&deps.into_deps());
    event_handler
        .handle_event(ServerEvent::Presence(PresenceEvent::Joined {
            user: user("u3", "Maria"),
        }))
        .await?;
    event_handler
        .handle_event(ServerEvent::Presence(PresenceEvent::Left {
            user_id: "u1".into(),
        }))
        .await?;

    Ok(())
}

#[test]
fn test_repeated_snapshots_are_merged_not_substituted() {
    let repo = InMemoryPresenceRepository::new();

    repo.merge_roster(vec![user("u1", "Jane"), user("u2", "John")]);
    repo.merge_roster(vec![user("u3", "Maria")]);

    assert_eq!(repo.is_online(&"u1".into()), true);
    assert_eq!(repo.is_online(&"u2".into()), true);
    assert_eq!(repo.is_online(&"u3".into()), true);
}

#[test]
fn test_presence_map_membership_is_online_status() {
    let repo = InMemoryPresenceRepository::new();

    repo.merge_roster(vec![user("u1", "Jane"), user("u2", "John")]);
    repo.user_left(&"u1".into());
    repo.user_joined(user("u3", "Maria"));

    assert_eq!(repo.is_online(&"u1".into()), false);
    assert_eq!(repo.is_online(&"u2".into()), true);
    assert_eq!(
        repo.online_users(),
        vec![user("u2", "John"), user("u3", "Maria")]
    );

    repo.clear();
    assert_eq!(repo.online_users(), vec![]);
}
