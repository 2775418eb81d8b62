// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::connection::services::ConnectionService;
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::messaging::services::MessagingService;
use crate::domain::presence::repos::PresenceRepository;
use crate::domain::tickets::repos::TicketsRepository;
use crate::domain::tickets::services::TicketApiService;
use crate::util::{IDProvider, TimeProvider};

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConnectionService = Arc<dyn ConnectionService>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub(crate) type DynMessagingService = Arc<dyn MessagingService>;
pub(crate) type DynPresenceRepository = Arc<dyn PresenceRepository>;
pub(crate) type DynTicketApiService = Arc<dyn TicketApiService>;
pub(crate) type DynTicketsRepository = Arc<dyn TicketsRepository>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub messages_repo: DynMessagesRepository,
    pub messaging_service: DynMessagingService,
    pub presence_repo: DynPresenceRepository,
    pub ticket_api_service: DynTicketApiService,
    pub tickets_repo: DynTicketsRepository,
    pub time_provider: DynTimeProvider,
}
