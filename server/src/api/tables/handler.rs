//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{ReservationStatus, SeatData, Table, TableData};
use shared::{DataResponse, RequestData};

use super::validation;
use crate::core::ServerState;
use crate::db::repository::{reservation as reservation_repo, table as table_repo};
use crate::utils::{AppError, AppResult};

/// GET /tables - all tables, ordered by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<DataResponse<Vec<Table>>>> {
    let tables = table_repo::find_all(&state.pool).await?;
    Ok(Json(DataResponse::new(tables)))
}

/// POST /tables
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<RequestData<TableData>>,
) -> AppResult<(StatusCode, Json<DataResponse<Table>>)> {
    let new = validation::validate_table(body.data.as_ref())?;
    let table = table_repo::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(table))))
}

/// PUT /tables/{id}/seat - seat a reservation at this table
///
/// Marks the table occupied and moves the reservation to `seated`.
pub async fn seat(
    State(state): State<ServerState>,
    Path(table_id): Path<i64>,
    Json(body): Json<RequestData<SeatData>>,
) -> AppResult<Json<DataResponse<Table>>> {
    let reservation_id = body
        .data
        .as_ref()
        .and_then(|d| d.reservation_id)
        .ok_or_else(|| AppError::validation("reservation_id field not provided and or empty"))?;

    let table = table_repo::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No table with the id: {table_id} found.")))?;
    let reservation = reservation_repo::find_by_id(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No reservation with the id: {reservation_id} found."))
        })?;

    if table.is_occupied() {
        return Err(AppError::validation("Table is currently occupied."));
    }
    if reservation.status == ReservationStatus::Seated {
        return Err(AppError::validation("Reservation is already seated."));
    }
    if table.capacity < reservation.people {
        return Err(AppError::validation(
            "Table does not have sufficient capacity.",
        ));
    }

    let table = table_repo::seat(&state.pool, table_id, reservation_id).await?;
    reservation_repo::update_status(&state.pool, reservation_id, ReservationStatus::Seated).await?;

    Ok(Json(DataResponse::new(table)))
}

/// DELETE /tables/{id}/seat - finish the seated reservation and free the table
pub async fn finish(
    State(state): State<ServerState>,
    Path(table_id): Path<i64>,
) -> AppResult<Json<DataResponse<Table>>> {
    let table = table_repo::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No table with the id: {table_id} found.")))?;

    let reservation_id = table
        .reservation_id
        .ok_or_else(|| AppError::validation("Table is not occupied."))?;

    let table = table_repo::free(&state.pool, table_id).await?;
    reservation_repo::update_status(&state.pool, reservation_id, ReservationStatus::Finished)
        .await?;

    Ok(Json(DataResponse::new(table)))
}
