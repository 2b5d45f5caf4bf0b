//! Ticket management endpoints

use crate::error::ApiError;
use crate::extract::ValidTicketRequest;
use crate::models::*;
use crate::ApiState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Mount point of the ticket routes
pub const BASE_PATH: &str = "/tickets";

/// Ticket routes, relative to [`BASE_PATH`]
pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route("/:id", get(get_ticket).put(update_ticket).delete(delete_ticket))
}

/// List all tickets
#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "All tickets in creation order", body = Vec<TicketResponse>)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(State(state): State<Arc<ApiState>>) -> Json<Vec<TicketResponse>> {
    Json(state.tickets.get_all())
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket details", body = TicketResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<TicketId>,
) -> Result<Json<TicketResponse>, ApiError> {
    Ok(Json(state.tickets.get(id)?))
}

/// Create a new ticket
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = TicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponse,
            headers(("Location" = String, description = "URL of the new ticket"))),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<Arc<ApiState>>,
    ValidTicketRequest(input): ValidTicketRequest,
) -> impl IntoResponse {
    let ticket = state.tickets.add(&input);
    let location = format!("{BASE_PATH}/{}", ticket.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(ticket))
}

/// Update an existing ticket
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket ID")),
    request_body = TicketRequest,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponse),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<TicketId>,
    ValidTicketRequest(input): ValidTicketRequest,
) -> Result<Json<TicketResponse>, ApiError> {
    Ok(Json(state.tickets.update(id, &input)?))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted or never existed")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(State(state): State<Arc<ApiState>>, Path(id): Path<TicketId>) -> StatusCode {
    state.tickets.delete(id);
    StatusCode::NO_CONTENT
}
