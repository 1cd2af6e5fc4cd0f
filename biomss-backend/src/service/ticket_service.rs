// src/service/ticket_service.rs
use crate::api::dto::ticket_dto::{
    CreateTicketCommentDto, CreateTicketDto, TicketCommentDto, TicketDto, TicketFilterDto,
    TicketStatsDto, UpdateTicketDto,
};
use crate::api::dto::PaginatedResponse;
use crate::db::DbPool;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::lifecycle::{on_ticket_transition, TicketSideEffects};
use crate::domain::ticket_model::ActiveModel as TicketActiveModel;
use crate::domain::ticket_status::{TicketPriority, TicketStatus};
use crate::domain::user_model::UserClaims;
use crate::domain::visibility::TicketScope;
use crate::error::{AppError, AppResult};
use crate::repository::ticket_comment_repository::TicketCommentRepository;
use crate::repository::ticket_repository::TicketRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::utils::transaction::{execute_with_retry, is_unique_violation, RetryConfig};
use crate::with_transaction;
use chrono::Utc;
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct TicketService {
    db: DbPool,
    repo: Arc<TicketRepository>,
    comment_repo: Arc<TicketCommentRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl TicketService {
    pub fn new(db: DbPool, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            repo: Arc::new(TicketRepository::new(db.clone())),
            comment_repo: Arc::new(TicketCommentRepository::new(db.clone())),
            db,
            audit_log_service,
        }
    }

    fn scope_for(actor: &UserClaims) -> TicketScope {
        TicketScope::for_actor(Some(actor.role), actor.user_id, actor.branch_id)
    }

    /// チケットを作成する
    ///
    /// 採番（カウンタ行の読み取り→加算）とINSERTを単一トランザクションで
    /// 実行する。採番が競合した場合は一度だけリトライし、それでも失敗したら
    /// 一時的な作成失敗として返す。
    pub async fn create_ticket(
        &self,
        actor: &UserClaims,
        payload: CreateTicketDto,
    ) -> AppResult<TicketDto> {
        payload.validate()?;

        let payload = Arc::new(payload);
        let created_by = actor.user_id;

        let result = execute_with_retry(
            &self.db,
            move |txn| {
                let payload = Arc::clone(&payload);
                Box::pin(async move {
                    let ticket_number = TicketRepository::allocate_ticket_number(txn).await?;
                    let ticket = TicketRepository::insert_with_number(
                        txn,
                        ticket_number,
                        &payload,
                        created_by,
                    )
                    .await?;
                    Ok(ticket)
                })
            },
            RetryConfig::single_retry(),
        )
        .await;

        let ticket = result.map_err(|e| {
            if let AppError::DbErr(db_err) = &e {
                if is_unique_violation(db_err) {
                    return AppError::CreateFailed(
                        "Ticket creation failed due to a numbering conflict".to_string(),
                    );
                }
            }
            e
        })?;

        info!(
            ticket_id = %ticket.id,
            ticket_number = %ticket.ticket_number,
            created_by = %created_by,
            "Ticket created"
        );

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(created_by),
                action: AuditAction::Create,
                resource_type: "support_ticket",
                resource_id: Some(ticket.id),
                description: format!("Created ticket {}", ticket.ticket_number),
                details: Some(serde_json::json!({
                    "ticket_number": ticket.ticket_number.clone(),
                    "priority": ticket.priority.clone(),
                    "category": ticket.category.clone(),
                })),
            })
            .await;

        Ok(ticket.into())
    }

    pub async fn get_ticket(&self, actor: &UserClaims, id: Uuid) -> AppResult<TicketDto> {
        let ticket = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket with id {} not found", id)))?;

        // 閲覧スコープ外のチケットは存在を明かさない
        if !Self::scope_for(actor).permits(ticket.branch_id, ticket.assigned_to) {
            return Err(AppError::NotFound(format!(
                "Ticket with id {} not found",
                id
            )));
        }

        Ok(ticket.into())
    }

    pub async fn list_tickets(
        &self,
        actor: &UserClaims,
        filter: &TicketFilterDto,
    ) -> AppResult<PaginatedResponse<TicketDto>> {
        let scope = Self::scope_for(actor);
        let (tickets, total) = self.repo.find_with_scope(&scope, filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            tickets.into_iter().map(TicketDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    /// チケットを更新する
    ///
    /// ステータスが変わる場合は遷移ルールを適用し、ステータスと
    /// タイムスタンプ群を同一トランザクションで書き込む。
    pub async fn update_ticket(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateTicketDto,
    ) -> AppResult<TicketDto> {
        payload.validate()?;

        // 未知のステータスはレコードに触れる前に拒否する
        let new_status = match &payload.status {
            Some(raw) => Some(TicketStatus::from_str(raw).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Invalid ticket status: '{}'. Valid statuses are: {}",
                    raw,
                    TicketStatus::all()
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?),
            None => None,
        };

        let now = Utc::now();
        let actor_id = actor.user_id;

        let updated = with_transaction!(&self.db, |txn| async move {
            let ticket = TicketRepository::find_by_id_in_txn(txn, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Ticket with id {} not found", id)))?;

            let effects = match new_status {
                Some(status) => on_ticket_transition(&ticket.timestamps(), status, now),
                None => TicketSideEffects::default(),
            };

            let mut active: TicketActiveModel = ticket.into();

            if let Some(title) = payload.title {
                active.title = Set(title);
            }
            if let Some(description) = payload.description {
                active.description = Set(description);
            }
            if let Some(category) = payload.category {
                active.category = Set(category.as_str().to_string());
            }
            if let Some(priority) = payload.priority {
                active.priority = Set(priority.as_str().to_string());
            }
            if let Some(assigned_to) = payload.assigned_to {
                active.assigned_to = Set(Some(assigned_to));
            }
            if let Some(resolution_notes) = payload.resolution_notes {
                active.resolution_notes = Set(Some(resolution_notes));
            }

            if let Some(status) = new_status {
                active.status = Set(status.as_str().to_string());
            }

            // 遷移ルールの結果をステータスと同一更新で適用する
            if let Some(resolved_at) = effects.resolved_at {
                active.resolved_at = Set(Some(resolved_at));
            }
            if let Some(seconds) = effects.resolution_time_seconds {
                active.resolution_time_seconds = Set(Some(seconds));
            }
            if let Some(closed_at) = effects.closed_at {
                active.closed_at = Set(Some(closed_at));
            }

            let updated = TicketRepository::update(txn, active).await?;
            Ok(updated)
        })?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor_id),
                action: AuditAction::Update,
                resource_type: "support_ticket",
                resource_id: Some(updated.id),
                description: format!("Updated ticket {}", updated.ticket_number),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_ticket(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let ticket = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "support_ticket",
                resource_id: Some(id),
                description: format!("Deleted ticket {}", ticket.ticket_number),
                details: None,
            })
            .await;

        Ok(())
    }

    pub async fn get_stats(&self) -> AppResult<TicketStatsDto> {
        let total = self.repo.count_all().await?;
        let open = self
            .repo
            .count_by_status(TicketStatus::Open.as_str())
            .await?;
        let in_progress = self
            .repo
            .count_by_status(TicketStatus::InProgress.as_str())
            .await?;
        let resolved = self
            .repo
            .count_by_status(TicketStatus::Resolved.as_str())
            .await?;
        let critical = self
            .repo
            .count_by_priority(TicketPriority::Critical.as_str())
            .await?;

        Ok(TicketStatsDto {
            total,
            open,
            in_progress,
            resolved,
            critical,
        })
    }

    // --- コメント ---

    pub async fn add_comment(
        &self,
        actor: &UserClaims,
        ticket_id: Uuid,
        payload: CreateTicketCommentDto,
    ) -> AppResult<TicketCommentDto> {
        payload.validate()?;

        // 見えないチケットにはコメントもできない
        let ticket = self.get_ticket(actor, ticket_id).await?;

        let comment = self
            .comment_repo
            .create(ticket_id, actor.user_id, payload.comment, payload.is_internal)
            .await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "ticket_comment",
                resource_id: Some(comment.id),
                description: format!("Added comment to ticket {}", ticket.ticket_number),
                details: None,
            })
            .await;

        Ok(comment.into())
    }

    pub async fn list_comments(
        &self,
        actor: &UserClaims,
        ticket_id: Uuid,
    ) -> AppResult<Vec<TicketCommentDto>> {
        // 可視性チェックを兼ねる
        self.get_ticket(actor, ticket_id).await?;

        let include_internal = actor.role.is_it_staff();
        let comments = self
            .comment_repo
            .find_by_ticket(ticket_id, include_internal)
            .await?;

        Ok(comments.into_iter().map(TicketCommentDto::from).collect())
    }

    pub async fn delete_comment(&self, actor: &UserClaims, comment_id: Uuid) -> AppResult<()> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Comment with id {} not found", comment_id))
            })?;

        // 自分のコメントか管理者のみ削除可能
        if comment.user_id != Some(actor.user_id) && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Cannot delete another user's comment".to_string(),
            ));
        }

        self.comment_repo.delete_by_id(comment_id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "ticket_comment",
                resource_id: Some(comment_id),
                description: "Deleted ticket comment".to_string(),
                details: None,
            })
            .await;

        Ok(())
    }
}
