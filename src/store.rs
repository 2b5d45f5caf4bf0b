//! Ticket Store - in-memory persistence for ticket records
//!
//! The store keeps tickets in insertion order and looks them up with a
//! linear scan. Mutations take the write lock, so id assignment and append
//! happen as one step.

use crate::models::{Ticket, TicketId};
use parking_lot::RwLock;

/// Ticket storage
pub trait TicketStore: Send + Sync {
    /// Append a ticket. The caller guarantees the id is unique.
    fn add(&self, ticket: Ticket);

    /// First ticket with the given id, in insertion order
    fn find_by_id(&self, id: TicketId) -> Option<Ticket>;

    /// Overwrite the ticket at the matching position.
    ///
    /// Returns `false` when no ticket matched.
    fn replace(&self, id: TicketId, ticket: Ticket) -> bool;

    /// Remove the matching ticket, if any
    fn remove(&self, id: TicketId) -> Option<Ticket>;

    /// Snapshot of all tickets in insertion order
    fn all(&self) -> Vec<Ticket>;

    /// Assign the next id, build the ticket with it and append it
    fn insert_next<F>(&self, build: F) -> Ticket
    where
        F: FnOnce(TicketId) -> Ticket;

    /// Apply `f` to the matching ticket in place and return the result
    fn modify<F>(&self, id: TicketId, f: F) -> Option<Ticket>
    where
        F: FnOnce(&mut Ticket);
}

#[derive(Debug, Default)]
struct Inner {
    tickets: Vec<Ticket>,
    /// Highest id ever stored, so deleted ids are never handed out again
    high_water: TicketId,
}

impl Inner {
    fn position(&self, id: TicketId) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == id)
    }

    fn next_id(&self) -> TicketId {
        let max = self.tickets.iter().map(|t| t.id).max().unwrap_or(0);
        max.max(self.high_water) + 1
    }

    fn push(&mut self, ticket: Ticket) {
        self.high_water = self.high_water.max(ticket.id);
        self.tickets.push(ticket);
    }
}

/// In-memory ticket store
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    inner: RwLock<Inner>,
}

impl InMemoryTicketStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with tickets
    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let store = Self::new();
        for ticket in tickets {
            store.add(ticket);
        }
        store
    }

    /// Number of stored tickets
    pub fn len(&self) -> usize {
        self.inner.read().tickets.len()
    }

    /// `true` when no tickets are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TicketStore for InMemoryTicketStore {
    fn add(&self, ticket: Ticket) {
        self.inner.write().push(ticket);
    }

    fn find_by_id(&self, id: TicketId) -> Option<Ticket> {
        self.inner.read().tickets.iter().find(|t| t.id == id).cloned()
    }

    fn replace(&self, id: TicketId, ticket: Ticket) -> bool {
        let mut inner = self.inner.write();
        match inner.position(id) {
            Some(index) => {
                inner.high_water = inner.high_water.max(ticket.id);
                inner.tickets[index] = ticket;
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: TicketId) -> Option<Ticket> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        Some(inner.tickets.remove(index))
    }

    fn all(&self) -> Vec<Ticket> {
        self.inner.read().tickets.clone()
    }

    fn insert_next<F>(&self, build: F) -> Ticket
    where
        F: FnOnce(TicketId) -> Ticket,
    {
        let mut inner = self.inner.write();
        let ticket = build(inner.next_id());
        inner.push(ticket.clone());
        ticket
    }

    fn modify<F>(&self, id: TicketId, f: F) -> Option<Ticket>
    where
        F: FnOnce(&mut Ticket),
    {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        f(&mut inner.tickets[index]);
        Some(inner.tickets[index].clone())
    }
}
