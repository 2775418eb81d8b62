// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::{
    ClientEventDispatcher, ConnectionEventHandler, MessagesEventHandler, PresenceEventHandler,
    ServerEventHandlerQueue,
};
use crate::app::services::{BoardService, ChatService, ConnectionService};
use crate::client::ClientInner;
use crate::domain::connection::services::Connector;
use crate::infra::http::RestApiClient;
use crate::infra::messaging::InMemoryMessagesRepository;
use crate::infra::presence::InMemoryPresenceRepository;
use crate::infra::realtime::RealtimeClient;
use crate::infra::tickets::InMemoryTicketsRepository;
use crate::util::{IDProvider, NanoIDProvider, SystemTimeProvider, TimeProvider};
use crate::{Client, ClientDelegate};

pub struct UndefinedConnector;
pub struct UndefinedConfig;

pub struct ClientBuilder<C, F> {
    config: F,
    connector: C,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedConnector, UndefinedConfig> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: UndefinedConfig,
            connector: UndefinedConnector,
            delegate: None,
            id_provider: Arc::new(NanoIDProvider::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<F> ClientBuilder<UndefinedConnector, F> {
    pub fn set_connector(
        self,
        connector: Box<dyn Connector>,
    ) -> ClientBuilder<Box<dyn Connector>, F> {
        ClientBuilder {
            config: self.config,
            connector,
            delegate: self.delegate,
            id_provider: self.id_provider,
            time_provider: self.time_provider,
        }
    }
}

impl<C> ClientBuilder<C, UndefinedConfig> {
    pub fn set_config(self, config: AppConfig) -> ClientBuilder<C, AppConfig> {
        ClientBuilder {
            config,
            connector: self.connector,
            delegate: self.delegate,
            id_provider: self.id_provider,
            time_provider: self.time_provider,
        }
    }
}

impl<C, F> ClientBuilder<C, F> {
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<Box<dyn Connector>, AppConfig> {
    pub fn build(self) -> Client {
        let server_event_handler_queue = Arc::new(ServerEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let ctx = Arc::new(AppContext::new(self.config));
        let rest_api_client = Arc::new(RestApiClient::new(ctx.clone()));

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            connection_service: Arc::new(RealtimeClient::new(
                self.connector,
                server_event_handler_queue.clone(),
            )),
            ctx,
            id_provider: self.id_provider,
            messages_repo: Arc::new(InMemoryMessagesRepository::new()),
            messaging_service: rest_api_client.clone(),
            presence_repo: Arc::new(InMemoryPresenceRepository::new()),
            ticket_api_service: rest_api_client,
            tickets_repo: Arc::new(InMemoryTicketsRepository::new()),
            time_provider: self.time_provider,
        };

        server_event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(PresenceEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            board: BoardService::from(&dependencies),
            chat: ChatService::from(&dependencies),
            connection: ConnectionService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
