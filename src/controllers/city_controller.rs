use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::ApiError;
use crate::models::{City, CityView, CreateCityRequest, UpdateCityRequest};
use crate::state::AppState;

/// The four city routes. One path parameter serves double duty: GET
/// treats it as a name, PUT and DELETE parse it as a numeric ID.
pub fn routes() -> Router<AppState> {
    Router::new().route("/city", post(create_city)).route(
        "/city/{city}",
        get(get_city)
            .put(update_city_population)
            .delete(delete_city),
    )
}

/// `POST /city` — insert a city with an application-assigned ID.
///
/// The ID is one past the ID of the last stored row, computed before
/// the field presence check, so an empty table trips the generic 500
/// rather than the validation 400. The read-compute-insert sequence is
/// not atomic; see `CityService::next_id`.
async fn create_city(
    State(state): State<AppState>,
    body: Result<Json<CreateCityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<City>>), ApiError> {
    let Ok(Json(body)) = body else {
        return Err(ApiError::MissingFields);
    };

    let id = state.city_service.next_id().await.map_err(|e| {
        tracing::error!(error = %e, "could not compute the next city ID");
        ApiError::CreateFailed
    })?;

    let Some(city) = body.into_city(id) else {
        return Err(ApiError::MissingFields);
    };

    state.city_service.insert(&city).await.map_err(|e| {
        tracing::error!(error = %e, id, "city insert failed");
        ApiError::CreateFailed
    })?;

    // Echo the stored row(s) back, as an array, by re-querying.
    let rows = state.city_service.find_by_id(id).await.map_err(|e| {
        tracing::error!(error = %e, id, "re-reading the created city failed");
        ApiError::CreateFailed
    })?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// `GET /city/{name}` — exact, case-sensitive name lookup.
///
/// Returns the first match without its ID. A lookup failure answers 400
/// with a not-found message; the contract conflates the two cases.
async fn get_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CityView>, ApiError> {
    let city = state.city_service.find_by_name(&name).await.map_err(|e| {
        tracing::error!(error = %e, name, "city lookup failed");
        ApiError::LookupFailed
    })?;
    match city {
        Some(city) => Ok(Json(CityView::from(city))),
        None => Err(ApiError::CityNotFound),
    }
}

/// `PUT /city/{id}` — overwrite the population of the matching row(s).
///
/// Answers 201 with the re-read rows. A non-numeric ID, a missing or
/// null population, or a failed statement all collapse into this
/// route's catch-all 400.
async fn update_city_population(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateCityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<City>>), ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::UpdateFailed);
    };
    let population = body
        .ok()
        .and_then(|Json(body)| body.population)
        .ok_or(ApiError::UpdateFailed)?;

    let affected = state
        .city_service
        .update_population(id, population)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, id, "population update failed");
            ApiError::UpdateFailed
        })?;
    if affected == 0 {
        return Err(ApiError::NoCityFound);
    }

    let rows = state.city_service.find_by_id(id).await.map_err(|e| {
        tracing::error!(error = %e, id, "re-reading the updated city failed");
        ApiError::UpdateFailed
    })?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// `DELETE /city/{id}` — remove the matching row(s) permanently.
async fn delete_city(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::DeleteFailed);
    };

    let deleted = state.city_service.delete(id).await.map_err(|e| {
        tracing::error!(error = %e, id, "city delete failed");
        ApiError::DeleteFailed
    })?;
    if deleted == 0 {
        return Err(ApiError::NothingToDelete);
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
