// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use derivative::Derivative;
use parking_lot::RwLock;
use url::Url;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::connection::services::mocks::MockConnectionService;
use crate::domain::messaging::models::ConversationId;
use crate::domain::messaging::repos::mocks::MockMessagesRepository;
use crate::domain::messaging::services::mocks::MockMessagingService;
use crate::domain::presence::repos::mocks::MockPresenceRepository;
use crate::domain::shared::models::{ConnectionState, Session, UserId};
use crate::domain::tickets::repos::mocks::MockTicketsRepository;
use crate::domain::tickets::services::mocks::MockTicketApiService;
use crate::test::{ConstantTimeProvider, IncrementingIDProvider};

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap()
}

pub fn mock_user_id() -> UserId {
    UserId::from("agent-jane")
}

pub fn mock_counterpart_id() -> UserId {
    UserId::from("customer-john")
}

pub fn mock_conversation_id() -> ConversationId {
    ConversationId::from("conversation-1")
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext {
            session: RwLock::new(Some(Session::new(mock_user_id(), "mock-token"))),
            connection_state: RwLock::new(ConnectionState::Connected),
            active_conversation: RwLock::new(Some(mock_conversation_id())),
            config: AppConfig::new(
                Url::parse("https://support.mesa-desk.org/api/").unwrap(),
            ),
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub connection_service: MockConnectionService,
    pub ctx: AppContext,
    #[derivative(Default(value = "Arc::new(IncrementingIDProvider::new(\"id\"))"))]
    pub id_provider: DynIDProvider,
    pub messages_repo: MockMessagesRepository,
    pub messaging_service: MockMessagingService,
    pub presence_repo: MockPresenceRepository,
    pub ticket_api_service: MockTicketApiService,
    pub tickets_repo: MockTicketsRepository,
    #[derivative(Default(value = "Arc::new(ConstantTimeProvider::new(mock_reference_date()))"))]
    pub time_provider: DynTimeProvider,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            connection_service: Arc::new(mock.connection_service),
            ctx: Arc::new(mock.ctx),
            id_provider: mock.id_provider,
            messages_repo: Arc::new(mock.messages_repo),
            messaging_service: Arc::new(mock.messaging_service),
            presence_repo: Arc::new(mock.presence_repo),
            ticket_api_service: Arc::new(mock.ticket_api_service),
            tickets_repo: Arc::new(mock.tickets_repo),
            time_provider: mock.time_provider,
        }
    }
}
