// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::{
    mock_conversation_id, mock_counterpart_id, mock_reference_date, mock_user_id,
    MockAppDependencies,
};
pub use ticket_builder::TicketBuilder;

mod constant_time_provider;
mod incrementing_id_provider;
mod mock_app_dependencies;
mod ticket_builder;
