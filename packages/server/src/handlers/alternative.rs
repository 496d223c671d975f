use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::instrument;

use crate::entity::alternative;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::handlers::hearing::find_hearing;
use crate::models::alternative::*;
use crate::models::shared::validate_reorder_ids;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Alternatives",
    operation_id = "createAlternative",
    summary = "Add an alternative to a hearing",
    description = "Creates an alternative at the requested insertion index (appended when omitted) and renumbers every sibling so positions stay equal to display indices.",
    params(("id" = i32, Path, description = "Hearing ID")),
    request_body = CreateAlternativeRequest,
    responses(
        (status = 201, description = "Alternative created", body = AlternativeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Hearing not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(hearing_id))]
pub async fn create_alternative(
    State(state): State<AppState>,
    Path(hearing_id): Path<i32>,
    AppJson(payload): AppJson<CreateAlternativeRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_alternative(&payload)?;

    let txn = state.db.begin().await?;
    find_hearing(&txn, hearing_id).await?;

    let ordered = ordered_alternative_ids(&txn, hearing_id).await?;
    let index = resolve_insert_index(ordered.len(), payload.position);

    let new_alternative = alternative::ActiveModel {
        title: Set(payload.title.unwrap_or_default().trim().to_string()),
        lead: Set(payload.lead.unwrap_or_default()),
        body: Set(payload.body.unwrap_or_default()),
        hearing_id: Set(Some(hearing_id)),
        position: Set(Some(index as i32)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_alternative.insert(&txn).await?;

    let mut ids = ordered;
    ids.insert(index, model.id);
    renumber(&txn, &ids).await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(AlternativeResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Alternatives",
    operation_id = "listAlternatives",
    summary = "List a hearing's alternatives in display order",
    params(("id" = i32, Path, description = "Hearing ID")),
    responses(
        (status = 200, description = "Ordered alternatives", body = Vec<AlternativeResponse>),
        (status = 404, description = "Hearing not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(hearing_id))]
pub async fn list_alternatives(
    State(state): State<AppState>,
    Path(hearing_id): Path<i32>,
) -> Result<Json<Vec<AlternativeResponse>>, AppError> {
    find_hearing(&state.db, hearing_id).await?;

    let alternatives = alternative::Entity::find()
        .filter(alternative::Column::HearingId.eq(hearing_id))
        .order_by_asc(alternative::Column::Position)
        .all(&state.db)
        .await?;

    Ok(Json(alternatives.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/reorder",
    tag = "Alternatives",
    operation_id = "reorderAlternatives",
    summary = "Reorder a hearing's alternatives",
    description = "Replaces the display order. The ID array must contain exactly the hearing's current alternatives; positions are assigned by array index starting at 0.",
    params(("id" = i32, Path, description = "Hearing ID")),
    request_body = ReorderAlternativesRequest,
    responses(
        (status = 204, description = "Alternatives reordered"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Hearing not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(hearing_id))]
pub async fn reorder_alternatives(
    State(state): State<AppState>,
    Path(hearing_id): Path<i32>,
    AppJson(payload): AppJson<ReorderAlternativesRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_reorder_ids(&payload.alternative_ids, "alternative ID")?;

    let txn = state.db.begin().await?;
    find_hearing(&txn, hearing_id).await?;

    let existing = ordered_alternative_ids(&txn, hearing_id).await?;
    let existing_set: std::collections::HashSet<i32> = existing.into_iter().collect();
    let payload_set: std::collections::HashSet<i32> =
        payload.alternative_ids.iter().copied().collect();
    if existing_set != payload_set {
        return Err(AppError::Validation(
            "alternative_ids must contain exactly the alternatives currently in the hearing".into(),
        ));
    }

    renumber(&txn, &payload.alternative_ids).await?;

    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/{alt_id}",
    tag = "Alternatives",
    operation_id = "deleteAlternative",
    summary = "Remove an alternative from a hearing",
    description = "Deletes the alternative and renumbers the survivors so positions stay dense from 0.",
    params(
        ("id" = i32, Path, description = "Hearing ID"),
        ("alt_id" = i32, Path, description = "Alternative ID"),
    ),
    responses(
        (status = 204, description = "Alternative deleted"),
        (status = 404, description = "Alternative not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(hearing_id, alt_id))]
pub async fn delete_alternative(
    State(state): State<AppState>,
    Path((hearing_id, alt_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;
    find_hearing(&txn, hearing_id).await?;

    let alt = alternative::Entity::find_by_id(alt_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("Alternative not found".into()))?;
    if alt.hearing_id != Some(hearing_id) {
        return Err(AppError::NotFound("Alternative not found".into()));
    }

    alternative::Entity::delete_by_id(alt.id).exec(&txn).await?;

    let survivors = ordered_alternative_ids(&txn, hearing_id).await?;
    renumber(&txn, &survivors).await?;

    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// IDs of a hearing's alternatives in current display order.
async fn ordered_alternative_ids<C: ConnectionTrait>(
    db: &C,
    hearing_id: i32,
) -> Result<Vec<i32>, AppError> {
    let ids = alternative::Entity::find()
        .filter(alternative::Column::HearingId.eq(hearing_id))
        .order_by_asc(alternative::Column::Position)
        .select_only()
        .column(alternative::Column::Id)
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

/// The explicit renumber step every structural mutation goes through: assign
/// each alternative its zero-based index in the given order.
async fn renumber<C: ConnectionTrait>(db: &C, ordered_ids: &[i32]) -> Result<(), AppError> {
    for (index, &id) in ordered_ids.iter().enumerate() {
        alternative::Entity::update_many()
            .filter(alternative::Column::Id.eq(id))
            .col_expr(
                alternative::Column::Position,
                Expr::value(i32::try_from(index).map_err(|_| {
                    AppError::Validation("Too many alternatives to renumber".into())
                })?),
            )
            .exec(db)
            .await?;
    }
    Ok(())
}

/// Clamp a requested insertion index into `[0, len]`; absent appends.
fn resolve_insert_index(len: usize, requested: Option<i32>) -> usize {
    match requested {
        Some(position) => (Ord::max(position, 0) as usize).min(len),
        None => len,
    }
}
