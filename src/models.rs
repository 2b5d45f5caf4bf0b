//! API Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Ticket identifier
pub type TicketId = u64;

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable description
    pub message: String,
}

// ============ Tickets ============

/// Ticket workflow status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    /// Newly submitted, the status every ticket starts with
    #[default]
    Created,
    /// Picked up by an agent
    Open,
    /// Waiting on the customer
    Pending,
    /// Waiting on a third party
    OnHold,
    /// Resolved, may still be reopened
    Solved,
    /// Resolved and archived
    Closed,
}

/// Ticket category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketType {
    /// General enquiry
    #[default]
    Question,
    /// Something is broken for this customer
    Incident,
    /// Root cause behind one or more incidents
    Problem,
    /// Follow-up work item
    Task,
}

impl TicketType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Incident => "Incident",
            Self::Problem => "Problem",
            Self::Task => "Task",
        }
    }

    /// Type for a numeric wire value, in declaration order
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Question),
            1 => Some(Self::Incident),
            2 => Some(Self::Problem),
            3 => Some(Self::Task),
            _ => None,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket type as supplied by a caller.
///
/// Accepts a type name or its numeric value. Unknown names and out-of-range
/// numbers are kept rather than rejected at deserialization so the validator
/// can report them against the `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestedType {
    /// A recognised type name
    Known(TicketType),
    /// A numeric value, `0..=3` in [`TicketType`] declaration order
    Index(i64),
    /// A name that matches no type
    Unknown(String),
}

impl RequestedType {
    /// The ticket type this value names, if any
    pub fn known(&self) -> Option<TicketType> {
        match self {
            Self::Known(t) => Some(*t),
            Self::Index(i) => TicketType::from_index(*i),
            Self::Unknown(_) => None,
        }
    }

    /// `null` reads the same as an absent field
    fn deserialize_or_default<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Self>::deserialize(deserializer)?.unwrap_or_default())
    }
}

impl Default for RequestedType {
    fn default() -> Self {
        Self::Known(TicketType::default())
    }
}

impl From<TicketType> for RequestedType {
    fn from(t: TicketType) -> Self {
        Self::Known(t)
    }
}

impl fmt::Display for RequestedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => t.fmt(f),
            Self::Index(i) => i.fmt(f),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Stored ticket entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Unique, assigned by the store
    pub id: TicketId,
    /// Workflow status
    pub status: TicketStatus,
    /// Category
    pub ticket_type: TicketType,
    /// Contact email
    pub customer_email: String,
    /// Contact phone
    pub customer_phone: String,
    /// Customer account number, if given
    pub customer_number: Option<String>,
    /// Set once on creation
    pub created_at: DateTime<Utc>,
    /// Free-text problem statement
    pub description: String,
}

/// Ticket creation/update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    /// Defaults to `Question` when absent or `null`
    #[serde(
        rename = "type",
        default,
        deserialize_with = "RequestedType::deserialize_or_default"
    )]
    #[schema(value_type = TicketType)]
    pub ticket_type: RequestedType,
    /// Required, must contain exactly one `@`
    pub customer_email: Option<String>,
    /// Required
    pub customer_phone: Option<String>,
    /// Optional non-negative 32-bit integer in text form
    pub customer_number: Option<String>,
    /// Required, at most 500 UTF-16 code units
    pub description: Option<String>,
}

/// Ticket as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    /// Ticket id
    pub id: TicketId,
    /// Workflow status
    pub status: TicketStatus,
    /// Category
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    /// Contact email
    pub customer_email: String,
    /// Contact phone
    pub customer_phone: String,
    /// Customer account number, `null` when not given
    pub customer_number: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Free-text problem statement
    pub description: String,
}

impl From<&Ticket> for TicketResponse {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            status: ticket.status,
            ticket_type: ticket.ticket_type,
            customer_email: ticket.customer_email.clone(),
            customer_phone: ticket.customer_phone.clone(),
            customer_number: ticket.customer_number.clone(),
            created_at: ticket.created_at,
            description: ticket.description.clone(),
        }
    }
}
