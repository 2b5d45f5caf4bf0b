//! Ticket service
//!
//! The only component that mutates the store. Requests reaching it have
//! already passed validation.

use crate::error::{TicketError, TicketResult};
use crate::models::{Ticket, TicketId, TicketRequest, TicketResponse, TicketStatus};
use crate::store::{InMemoryTicketStore, TicketStore};
use chrono::Utc;
use std::sync::Arc;

/// Ticket service over a shared store
pub struct TicketService<S = InMemoryTicketStore> {
    store: Arc<S>,
}

impl<S> Clone for TicketService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryTicketStore::new()))
    }
}

impl<S: TicketStore> TicketService<S> {
    /// Service over an existing store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a ticket by id
    pub fn get(&self, id: TicketId) -> TicketResult<TicketResponse> {
        self.store
            .find_by_id(id)
            .map(|ticket| TicketResponse::from(&ticket))
            .ok_or(TicketError::NotFound(id))
    }

    /// All tickets in store order
    pub fn get_all(&self) -> Vec<TicketResponse> {
        self.store.all().iter().map(TicketResponse::from).collect()
    }

    /// Create a ticket with a fresh id, the current time and `Created` status
    pub fn add(&self, request: &TicketRequest) -> TicketResponse {
        let ticket = self.store.insert_next(|id| Ticket {
            id,
            status: TicketStatus::Created,
            ticket_type: request.ticket_type.known().unwrap_or_default(),
            customer_email: request.customer_email.clone().unwrap_or_default(),
            customer_phone: request.customer_phone.clone().unwrap_or_default(),
            customer_number: request.customer_number.clone(),
            created_at: Utc::now(),
            description: request.description.clone().unwrap_or_default(),
        });

        tracing::info!(ticket_id = ticket.id, ticket_type = %ticket.ticket_type, "ticket created");
        TicketResponse::from(&ticket)
    }

    /// Overwrite the caller-owned fields of a ticket.
    ///
    /// `id`, `created_at` and `status` are left as stored.
    pub fn update(&self, id: TicketId, request: &TicketRequest) -> TicketResult<TicketResponse> {
        let ticket = self
            .store
            .modify(id, |ticket| apply_request(ticket, request))
            .ok_or(TicketError::NotFound(id))?;

        tracing::info!(ticket_id = id, "ticket updated");
        Ok(TicketResponse::from(&ticket))
    }

    /// Delete a ticket. Unknown ids are ignored.
    pub fn delete(&self, id: TicketId) {
        if self.store.remove(id).is_some() {
            tracing::info!(ticket_id = id, "ticket deleted");
        } else {
            tracing::debug!(ticket_id = id, "delete of unknown ticket ignored");
        }
    }
}

fn apply_request(ticket: &mut Ticket, request: &TicketRequest) {
    if let Some(ticket_type) = request.ticket_type.known() {
        ticket.ticket_type = ticket_type;
    }
    ticket.customer_email = request.customer_email.clone().unwrap_or_default();
    ticket.customer_phone = request.customer_phone.clone().unwrap_or_default();
    ticket.customer_number = request.customer_number.clone();
    ticket.description = request.description.clone().unwrap_or_default();
}
