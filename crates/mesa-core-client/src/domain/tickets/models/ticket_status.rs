// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The lifecycle status of a ticket. One variant per board column, plus a
/// catch-all so that a status value the server introduced after this client
/// shipped round-trips instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    OnHold,
    Closed,
    Cancelled,
    #[strum(default)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketStatusMetadata {
    pub label: &'static str,
    pub color: &'static str,
}

impl TicketStatus {
    /// Infallible counterpart to `from_str`. The catch-all variant absorbs
    /// unknown values, so the error path exists only in the `FromStr`
    /// signature.
    pub fn parse(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Self::Unrecognized(value.to_string()))
    }

    /// Display metadata for the known statuses. `Unrecognized` has none, a
    /// consumer renders the raw value instead.
    pub fn metadata(&self) -> Option<TicketStatusMetadata> {
        let metadata = match self {
            Self::Open => TicketStatusMetadata {
                label: "Open",
                color: "#60a5fa",
            },
            Self::InProgress => TicketStatusMetadata {
                label: "In Progress",
                color: "#fb923c",
            },
            Self::OnHold => TicketStatusMetadata {
                label: "On Hold",
                color: "#facc15",
            },
            Self::Closed => TicketStatusMetadata {
                label: "Closed",
                color: "#4ade80",
            },
            Self::Cancelled => TicketStatusMetadata {
                label: "Cancelled",
                color: "#f87171",
            },
            Self::Unrecognized(_) => return None,
        };
        Some(metadata)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// The fixed board columns, in display order.
    pub fn columns() -> Vec<TicketStatus> {
        Self::iter().filter(Self::is_recognized).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_round_trips_known_statuses() {
        for status in TicketStatus::columns() {
            assert_eq!(
                TicketStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
        assert_eq!(TicketStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_parses_unknown_status_as_unrecognized() {
        assert_eq!(
            TicketStatus::from_str("waiting_on_vendor").unwrap(),
            TicketStatus::Unrecognized("waiting_on_vendor".to_string())
        );
        assert_eq!(
            TicketStatus::parse("waiting_on_vendor"),
            TicketStatus::Unrecognized("waiting_on_vendor".to_string())
        );
        assert_eq!(TicketStatus::parse("on_hold"), TicketStatus::OnHold);
    }

    #[test]
    fn test_columns_exclude_unrecognized() {
        assert_eq!(
            TicketStatus::columns(),
            vec![
                TicketStatus::Open,
                TicketStatus::InProgress,
                TicketStatus::OnHold,
                TicketStatus::Closed,
                TicketStatus::Cancelled,
            ]
        );
    }
}
