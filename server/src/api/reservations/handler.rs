//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{Reservation, ReservationData, StatusData};
use shared::{DataResponse, RequestData};

use super::validation;
use crate::core::ServerState;
use crate::db::repository::reservation as repo;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub mobile_number: Option<String>,
}

/// GET /reservations - list, filtered by date or phone number
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let reservations = match (&query.date, &query.mobile_number) {
        (Some(date), _) => repo::list_by_date(&state.pool, date).await?,
        (None, Some(mobile)) => repo::search_by_phone(&state.pool, mobile).await?,
        (None, None) => repo::find_all(&state.pool).await?,
    };
    Ok(Json(DataResponse::new(reservations)))
}

/// GET /reservations/{id}
pub async fn read(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let reservation = fetch(&state, id).await?;
    Ok(Json(DataResponse::new(reservation)))
}

/// POST /reservations - create after the full validation pipeline
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<RequestData<ReservationData>>,
) -> AppResult<(StatusCode, Json<DataResponse<Reservation>>)> {
    let new = validation::validate_reservation(body.data.as_ref(), &state.business_clock())?;
    let reservation = repo::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(reservation))))
}

/// PUT /reservations/{id} - full record replace
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<RequestData<ReservationData>>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    fetch(&state, id).await?;
    let new = validation::validate_reservation(body.data.as_ref(), &state.business_clock())?;
    let reservation = repo::update(&state.pool, id, new).await?;
    Ok(Json(DataResponse::new(reservation)))
}

/// PUT /reservations/{id}/status - status field only
pub async fn change_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<RequestData<StatusData>>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let current = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{id} doesnt exist as a reservation_id.")))?;

    let requested = body.data.as_ref().and_then(|d| d.status.as_deref());
    let status = validation::validate_status_change(current.status, requested)?;

    let reservation = repo::update_status(&state.pool, id, status).await?;
    Ok(Json(DataResponse::new(reservation)))
}

/// DELETE /reservations/{id}
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    repo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Existence guard shared by read and update
async fn fetch(state: &ServerState, id: i64) -> AppResult<Reservation> {
    repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No reservation with the id: {id} found.")))
}
