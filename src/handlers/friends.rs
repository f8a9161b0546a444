use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    alerts,
    errors::{AppError, ENTITY_NAME},
    extractors::ValidatedJson,
    state::AppState,
    types::FriendsDTO,
};

/// `POST /api/friends` : create a new friends entity. The service assigns
/// the id; a request that already carries one is rejected.
pub async fn create_friends(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<FriendsDTO>,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to save Friends : {:?}", dto);
    if dto.id.is_some() {
        return Err(AppError::id_exists());
    }

    let result = state.friends.save(dto).await?;
    let id = result.id.ok_or(AppError::MissingGeneratedId)?;

    let mut headers = alerts::entity_creation_alert(ENTITY_NAME, id);
    if let Ok(location) = HeaderValue::try_from(format!("/api/friends/{id}")) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// `PUT /api/friends/{id}` : full replace of an existing friends entity.
pub async fn update_friends(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<FriendsDTO>,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to update Friends : {}, {:?}", id, dto);
    let body_id = dto.id.ok_or_else(AppError::id_null)?;
    if id != body_id {
        return Err(AppError::id_invalid());
    }
    if !state.friends_repository.exists_by_id(id).await? {
        return Err(AppError::id_not_found());
    }

    let result = state.friends.update(dto).await?;

    Ok((
        StatusCode::OK,
        alerts::entity_update_alert(ENTITY_NAME, id),
        Json(result),
    )
        .into_response())
}

/// `PATCH /api/friends/{id}` : merge the non-null fields of the body into
/// the stored entity. The service reports absence at merge time, which can
/// only happen when a delete races the existence check; that surfaces as a
/// plain 404.
pub async fn partial_update_friends(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<FriendsDTO>,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to partial update Friends : {}, {:?}", id, dto);
    let body_id = dto.id.ok_or_else(AppError::id_null)?;
    if id != body_id {
        return Err(AppError::id_invalid());
    }
    if !state.friends_repository.exists_by_id(id).await? {
        return Err(AppError::id_not_found());
    }

    let result = state.friends.partial_update(dto).await?;

    Ok(wrap_or_not_found(
        result,
        alerts::entity_update_alert(ENTITY_NAME, id),
    ))
}

/// `GET /api/friends` : all friends entities, in whatever order the store
/// returns them.
pub async fn get_all_friends(
    State(state): State<AppState>,
) -> Result<Json<Vec<FriendsDTO>>, AppError> {
    tracing::debug!("REST request to get all Friends");
    let result = state.friends.find_all().await?;

    Ok(Json(result))
}

/// `GET /api/friends/{id}` : a single friends entity, or 404.
pub async fn get_friends(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to get Friends : {}", id);
    let result = state.friends.find_one(id).await?;

    Ok(wrap_or_not_found(result, HeaderMap::new()))
}

/// `DELETE /api/friends/{id}` : unconditional delete, 204 either way.
pub async fn delete_friends(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to delete Friends : {}", id);
    state.friends.delete(id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        alerts::entity_deletion_alert(ENTITY_NAME, id),
    )
        .into_response())
}

// Absent entities on read paths are a bare 404 with no body, unlike the
// 400 idnotfound validation failure on write paths.
fn wrap_or_not_found(dto: Option<FriendsDTO>, headers: HeaderMap) -> Response {
    match dto {
        Some(dto) => (StatusCode::OK, headers, Json(dto)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
