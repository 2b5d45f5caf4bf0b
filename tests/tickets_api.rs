use axum::http::StatusCode;
use axum_test::TestServer;
use customer_support_api::error::ValidationErrorResponse;
use customer_support_api::routes::health::HealthResponse;
use customer_support_api::{
    build_router, ApiConfig, ApiState, ErrorResponse, TicketResponse, TicketStatus, TicketType,
};
use serde_json::{json, Value};

fn server() -> TestServer {
    TestServer::new(build_router(ApiState::default(), &ApiConfig::default())).unwrap()
}

fn ticket_body() -> Value {
    json!({
        "type": "Incident",
        "customerEmail": "alex@example.com",
        "customerPhone": "+1 202 555 0147",
        "customerNumber": "3141",
        "description": "Checkout page returns a blank screen"
    })
}

async fn create(server: &TestServer, body: &Value) -> TicketResponse {
    let response = server.post("/tickets").json(body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<TicketResponse>()
}

#[tokio::test]
async fn test_list_empty() {
    let server = server();

    let response = server.get("/tickets").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<TicketResponse>>(), vec![]);
}

#[tokio::test]
async fn test_create_and_get() {
    let server = server();

    let response = server.post("/tickets").json(&ticket_body()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("location"), "/tickets/1");

    let created = response.json::<TicketResponse>();
    assert_eq!(created.id, 1);
    assert_eq!(created.status, TicketStatus::Created);
    assert_eq!(created.ticket_type, TicketType::Incident);
    assert_eq!(created.customer_email, "alex@example.com");
    assert_eq!(created.customer_number.as_deref(), Some("3141"));

    let fetched = server.get("/tickets/1").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<TicketResponse>(), created);
}

#[tokio::test]
async fn test_wire_format() {
    let server = server();
    create(&server, &ticket_body()).await;

    let value = server.get("/tickets/1").await.json::<Value>();

    assert_eq!(value["id"], 1);
    assert_eq!(value["status"], "Created");
    assert_eq!(value["type"], "Incident");
    assert_eq!(value["customerPhone"], "+1 202 555 0147");
    assert_eq!(value["description"], "Checkout page returns a blank screen");
    assert!(value["createdAt"].is_string());
}

#[tokio::test]
async fn test_list_in_creation_order() {
    let server = server();
    create(&server, &ticket_body()).await;
    let mut second = ticket_body();
    second["type"] = json!("Task");
    create(&server, &second).await;

    let tickets = server.get("/tickets").await.json::<Vec<TicketResponse>>();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, 1);
    assert_eq!(tickets[1].id, 2);
    assert_eq!(tickets[1].ticket_type, TicketType::Task);
}

#[tokio::test]
async fn test_get_unknown_ticket() {
    let server = server();

    let response = server.get("/tickets/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ErrorResponse>().code, "not_found");
}

#[tokio::test]
async fn test_create_empty_body_object() {
    let server = server();

    let response = server.post("/tickets").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ValidationErrorResponse>();
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].field, "customerEmail");
    assert_eq!(body.errors[0].message, "Email address is required!");
}

#[tokio::test]
async fn test_create_null_body() {
    let server = server();

    let response = server.post("/tickets").json(&Value::Null).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ValidationErrorResponse>();
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].field, "model");
    assert_eq!(body.errors[0].message, "Supplied model is not valid!");
}

#[tokio::test]
async fn test_create_malformed_body() {
    let server = server();

    let response = server.post("/tickets").text("{ not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ValidationErrorResponse>();
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].field, "model");
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let server = server();
    let cases = [
        ("customerEmail", json!("gmail.com")),
        ("customerEmail", json!("@gmail.com")),
        ("customerPhone", json!("")),
        ("customerNumber", json!("abc")),
        ("description", json!("x".repeat(501))),
        ("type", json!("Refund")),
    ];

    for (field, value) in cases {
        let mut body = ticket_body();
        body[field] = value;

        let response = server.post("/tickets").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let errors = response.json::<ValidationErrorResponse>().errors;
        assert_eq!(errors.len(), 1, "{field}");
        assert_eq!(errors[0].field, field);
    }

    assert!(server.get("/tickets").await.json::<Vec<TicketResponse>>().is_empty());
}

#[tokio::test]
async fn test_create_with_numeric_type() {
    let server = server();
    let mut body = ticket_body();
    body["type"] = json!(1);

    let created = create(&server, &body).await;

    assert_eq!(created.ticket_type, TicketType::Incident);
}

#[tokio::test]
async fn test_create_rejects_out_of_range_type() {
    let server = server();
    let mut body = ticket_body();
    body["type"] = json!(99);

    let response = server.post("/tickets").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = response.json::<ValidationErrorResponse>().errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "type");
    assert_eq!(errors[0].message, "'Type' has a range of values which does not include '99'.");
}

#[tokio::test]
async fn test_create_with_null_type() {
    let server = server();
    let mut body = ticket_body();
    body["type"] = Value::Null;

    let created = create(&server, &body).await;

    assert_eq!(created.ticket_type, TicketType::Question);
}

#[tokio::test]
async fn test_description_limit_counts_utf16_units() {
    let server = server();
    let mut body = ticket_body();
    body["description"] = json!("🎫".repeat(300));

    let response = server.post("/tickets").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ValidationErrorResponse>().errors[0].field, "description");
}

#[tokio::test]
async fn test_create_without_customer_number() {
    let server = server();
    let mut body = ticket_body();
    body.as_object_mut().unwrap().remove("customerNumber");

    let created = create(&server, &body).await;

    assert_eq!(created.customer_number, None);
}

#[tokio::test]
async fn test_update_ticket() {
    let server = server();
    let created = create(&server, &ticket_body()).await;

    let update = json!({
        "type": "Problem",
        "customerEmail": "alex.r@example.com",
        "customerPhone": "+1 202 555 0199",
        "description": "Blank screen also on the cart page"
    });
    let response = server.put("/tickets/1").json(&update).await;

    response.assert_status_ok();
    let updated = response.json::<TicketResponse>();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.status, TicketStatus::Created);
    assert_eq!(updated.ticket_type, TicketType::Problem);
    assert_eq!(updated.customer_email, "alex.r@example.com");
    assert_eq!(updated.customer_number, None);
    assert_eq!(updated.description, "Blank screen also on the cart page");

    assert_eq!(server.get("/tickets/1").await.json::<TicketResponse>(), updated);
}

#[tokio::test]
async fn test_update_unknown_ticket() {
    let server = server();

    let response = server.put("/tickets/7").json(&ticket_body()).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let server = server();
    create(&server, &ticket_body()).await;

    let mut body = ticket_body();
    body["customerPhone"] = json!("   ");
    let response = server.put("/tickets/1").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let stored = server.get("/tickets/1").await.json::<TicketResponse>();
    assert_eq!(stored.customer_phone, "+1 202 555 0147");
}

#[tokio::test]
async fn test_delete_ticket() {
    let server = server();
    create(&server, &ticket_body()).await;

    server.delete("/tickets/1").await.assert_status(StatusCode::NO_CONTENT);
    server.get("/tickets/1").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_ticket() {
    let server = server();

    server.delete("/tickets/5").await.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let server = server();
    create(&server, &ticket_body()).await;
    create(&server, &ticket_body()).await;
    server.delete("/tickets/2").await;

    let third = create(&server, &ticket_body()).await;

    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_health() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health = response.json::<HealthResponse>();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_document() {
    let server = server();

    let doc = server.get("/api-docs/openapi.json").await.json::<Value>();

    assert!(doc["paths"]["/tickets"].is_object());
    assert!(doc["paths"]["/tickets/{id}"].is_object());
}

#[tokio::test]
async fn test_docs_disabled() {
    let config = ApiConfig {
        enable_docs: false,
        ..ApiConfig::default()
    };
    let server = TestServer::new(build_router(ApiState::default(), &config)).unwrap();

    server.get("/api-docs/openapi.json").await.assert_status(StatusCode::NOT_FOUND);
}
