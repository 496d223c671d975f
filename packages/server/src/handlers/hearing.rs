use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{Commentable, alternative, hearing, image};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::hearing::*;
use crate::state::AppState;

/// Canonical path of a hearing's public page.
pub fn show_path(hearing_id: i32, slug: &str) -> String {
    format!("/kuulemiset/{hearing_id}-{slug}")
}

/// Plain `302 Found` redirect. axum's `Redirect` helpers emit 303/307/308,
/// none of which match the contract of the public hearing routes.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// `GET /kuulemiset` — redirect to the first published hearing, or to the
/// configured frontpage while nothing is published yet.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let first = hearing::Entity::find()
        .order_by_asc(hearing::Column::CreatedAt)
        .order_by_asc(hearing::Column::Id)
        .one(&state.db)
        .await?;

    match first {
        Some(h) => Ok(found(&show_path(h.id, &h.slug))),
        None => Ok(found(&state.config.server.frontpage_url)),
    }
}

/// `GET /kuulemiset/{hearing_id}-{slug}` — the public hearing page.
///
/// The router cannot split a single path segment, so the whole segment is
/// captured and parsed here. A malformed segment is indistinguishable from a
/// missing hearing. A stale slug redirects to the canonical address.
#[instrument(skip(state), fields(key = %key))]
pub async fn show(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let (hearing_id, slug) =
        parse_show_key(&key).ok_or_else(|| AppError::NotFound("Hearing not found".into()))?;

    let hearing = find_hearing(&state.db, hearing_id).await?;

    if hearing.slug != slug {
        return Ok(found(&show_path(hearing.id, &hearing.slug)));
    }

    let detail = load_hearing_detail(&state.db, hearing).await?;
    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Hearings",
    operation_id = "createHearing",
    summary = "Publish a new hearing",
    request_body = CreateHearingRequest,
    responses(
        (status = 201, description = "Hearing created", body = HearingResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Slug already in use (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(slug = %payload.slug))]
pub async fn create_hearing(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateHearingRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_hearing(&payload)?;

    let slug = payload.slug.trim().to_string();
    let taken = hearing::Entity::find()
        .filter(hearing::Column::Slug.eq(slug.clone()))
        .count(&state.db)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict(format!("Slug '{slug}' is already in use")));
    }

    let new_hearing = hearing::ActiveModel {
        title: Set(payload.title.unwrap_or_default().trim().to_string()),
        slug: Set(slug),
        lead: Set(payload.lead.unwrap_or_default()),
        body: Set(payload.body.unwrap_or_default()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_hearing.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(HearingResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Hearings",
    operation_id = "listHearings",
    summary = "List hearings, newest first",
    responses(
        (status = 200, description = "List of hearings", body = Vec<HearingResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_hearings(
    State(state): State<AppState>,
) -> Result<Json<Vec<HearingResponse>>, AppError> {
    let hearings = hearing::Entity::find()
        .order_by_desc(hearing::Column::CreatedAt)
        .order_by_desc(hearing::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(hearings.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Hearings",
    operation_id = "getHearing",
    summary = "Get a hearing with its commentable sections",
    params(("id" = i32, Path, description = "Hearing ID")),
    responses(
        (status = 200, description = "Hearing details", body = HearingDetailResponse),
        (status = 404, description = "Hearing not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_hearing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HearingDetailResponse>, AppError> {
    let hearing = find_hearing(&state.db, id).await?;
    let detail = load_hearing_detail(&state.db, hearing).await?;
    Ok(Json(detail))
}

pub(super) async fn find_hearing<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<hearing::Model, AppError> {
    hearing::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Hearing not found".into()))
}

fn parse_show_key(key: &str) -> Option<(i32, &str)> {
    let (id, slug) = key.split_once('-')?;
    Some((id.parse().ok()?, slug))
}

/// Load a hearing's alternatives and images and assemble the full document,
/// including the aggregated commentable-sections string: the hearing's own
/// token followed by each alternative's sections in display order.
async fn load_hearing_detail<C: ConnectionTrait>(
    db: &C,
    hearing: hearing::Model,
) -> Result<HearingDetailResponse, AppError> {
    let alternatives = alternative::Entity::find()
        .filter(alternative::Column::HearingId.eq(hearing.id))
        .order_by_asc(alternative::Column::Position)
        .all(db)
        .await?;

    let alt_ids: Vec<i32> = alternatives.iter().map(|a| a.id).collect();
    let images: Vec<image::Model> = if alt_ids.is_empty() {
        Vec::new()
    } else {
        image::Entity::find()
            .filter(image::Column::AlternativeId.is_in(alt_ids))
            .all(db)
            .await?
    };

    let main_image_ids: Vec<i32> = alternatives.iter().filter_map(|a| a.main_image_id).collect();
    let main_images: Vec<image::Model> = if main_image_ids.is_empty() {
        Vec::new()
    } else {
        image::Entity::find()
            .filter(image::Column::Id.is_in(main_image_ids))
            .all(db)
            .await?
    };

    let mut sections = vec![hearing.commentable_option()];
    for alt in &alternatives {
        let alt_images: Vec<image::Model> = images
            .iter()
            .filter(|i| i.alternative_id == Some(alt.id))
            .cloned()
            .collect();
        let main_image = alt
            .main_image_id
            .and_then(|id| main_images.iter().find(|i| i.id == id));
        sections.push(alt.commentable_sections_string(main_image, &alt_images));
    }

    let commentable_id = hearing.commentable_id();
    Ok(HearingDetailResponse {
        id: hearing.id,
        title: hearing.title,
        slug: hearing.slug,
        lead: hearing.lead,
        body: hearing.body,
        commentable_id,
        commentable_sections_string: sections.join(";"),
        alternatives: alternatives.into_iter().map(Into::into).collect(),
        created_at: hearing.created_at,
        updated_at: hearing.updated_at,
    })
}
