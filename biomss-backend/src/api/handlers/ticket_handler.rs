// src/api/handlers/ticket_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::dto::ticket_dto::{
    CreateTicketCommentDto, CreateTicketDto, TicketCommentDto, TicketDto, TicketFilterDto,
    TicketStatsDto, UpdateTicketDto,
};
use crate::api::dto::PaginatedResponse;
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use tracing::info;

// --- CRUD Handlers ---

pub async fn create_ticket_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTicketDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        user_id = %user.user_id(),
        title = %payload.title,
        "Creating support ticket"
    );

    let ticket = app_state
        .ticket_service
        .create_ticket(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Ticket created successfully", ticket),
    ))
}

pub async fn get_ticket_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<TicketDto>> {
    let ticket = app_state.ticket_service.get_ticket(&user.claims, id).await?;
    Ok(ApiResponse::success("Ticket retrieved", ticket))
}

pub async fn list_tickets_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<TicketFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<TicketDto>>> {
    let tickets = app_state
        .ticket_service
        .list_tickets(&user.claims, &filter)
        .await?;

    Ok(ApiResponse::success("Tickets retrieved", tickets))
}

pub async fn update_ticket_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateTicketDto>,
) -> AppResult<ApiResponse<TicketDto>> {
    info!(user_id = %user.user_id(), ticket_id = %id, "Updating support ticket");

    let ticket = app_state
        .ticket_service
        .update_ticket(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("Ticket updated successfully", ticket))
}

pub async fn delete_ticket_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .ticket_service
        .delete_ticket(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message("Ticket deleted successfully"))
}

pub async fn ticket_stats_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<ApiResponse<TicketStatsDto>> {
    let stats = app_state.ticket_service.get_stats().await?;
    Ok(ApiResponse::success("Ticket statistics", stats))
}

// --- コメント ---

pub async fn add_comment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(ticket_id): UuidPath,
    Json(payload): Json<CreateTicketCommentDto>,
) -> AppResult<impl IntoResponse> {
    let comment = app_state
        .ticket_service
        .add_comment(&user.claims, ticket_id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Comment added successfully", comment),
    ))
}

pub async fn list_comments_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(ticket_id): UuidPath,
) -> AppResult<ApiResponse<Vec<TicketCommentDto>>> {
    let comments = app_state
        .ticket_service
        .list_comments(&user.claims, ticket_id)
        .await?;

    Ok(ApiResponse::success("Comments retrieved", comments))
}

pub async fn delete_comment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(comment_id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    app_state
        .ticket_service
        .delete_comment(&user.claims, comment_id)
        .await?;

    Ok(ApiResponse::success_message("Comment deleted successfully"))
}

// --- Router Setup ---

pub fn ticket_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/tickets",
            get(list_tickets_handler).post(create_ticket_handler),
        )
        .route("/tickets/stats", get(ticket_stats_handler))
        .route(
            "/tickets/{id}",
            get(get_ticket_handler)
                .patch(update_ticket_handler)
                .delete(delete_ticket_handler),
        )
        .route(
            "/tickets/{id}/comments",
            get(list_comments_handler).post(add_comment_handler),
        )
        .route("/ticket-comments/{id}", delete(delete_comment_handler))
        .with_state(app_state)
}
