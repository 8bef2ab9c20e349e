//! Reservation Repository

use shared::models::{NewReservation, Reservation, ReservationStatus};
use shared::util::{digits_only, now_millis};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "reservation_id, first_name, last_name, mobile_number, reservation_date, \
                       reservation_time, people, status, created_at, updated_at";

/// All reservations, ordered by date then time
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation ORDER BY reservation_date, reservation_time"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Reservations for one date, ordered by time
///
/// Finished and cancelled reservations are excluded; the dashboard only
/// shows bookings that still need a table.
pub async fn list_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation \
         WHERE reservation_date = ? AND status NOT IN ('finished', 'cancelled') \
         ORDER BY reservation_time"
    ))
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Reservations whose phone number contains the given digits
///
/// Separators are stripped from both sides of the comparison so partial
/// numbers typed without formatting still match.
pub async fn search_by_phone(pool: &SqlitePool, mobile_number: &str) -> RepoResult<Vec<Reservation>> {
    let needle = digits_only(mobile_number);
    let rows = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation \
         WHERE instr(replace(replace(replace(replace(replace(mobile_number, \
               '(', ''), ')', ''), '-', ''), '.', ''), ' ', ''), ?) > 0 \
         ORDER BY reservation_date, reservation_time"
    ))
    .bind(needle)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let row = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE reservation_id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: NewReservation) -> RepoResult<Reservation> {
    let now = now_millis();
    let result = sqlx::query(
        "INSERT INTO reservation \
         (first_name, last_name, mobile_number, reservation_date, reservation_time, people, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.mobile_number)
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.people)
    .bind(data.status)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

/// Full-record replace of every caller-editable field
pub async fn update(pool: &SqlitePool, id: i64, data: NewReservation) -> RepoResult<Reservation> {
    let rows = sqlx::query(
        "UPDATE reservation SET first_name = ?, last_name = ?, mobile_number = ?, \
         reservation_date = ?, reservation_time = ?, people = ?, status = ?, updated_at = ? \
         WHERE reservation_id = ?",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.mobile_number)
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.people)
    .bind(data.status)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

/// Status-only update
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<Reservation> {
    let rows = sqlx::query(
        "UPDATE reservation SET status = ?, updated_at = ? WHERE reservation_id = ?",
    )
    .bind(status)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE reservation_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn booking(date: &str, time: &str, phone: &str) -> NewReservation {
        NewReservation {
            first_name: "Rick".into(),
            last_name: "Sanchez".into(),
            mobile_number: phone.into(),
            reservation_date: date.into(),
            reservation_time: time.into(),
            people: 4,
            status: ReservationStatus::Booked,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_defaults() {
        let pool = test_pool().await;
        let r = create(&pool, booking("2030-01-04", "18:00", "555-123-4567"))
            .await
            .unwrap();
        assert!(r.reservation_id > 0);
        assert_eq!(r.status, ReservationStatus::Booked);
        assert_eq!(r.people, 4);
        assert!(r.created_at > 0);
    }

    #[tokio::test]
    async fn list_by_date_orders_by_time_and_hides_finished() {
        let pool = test_pool().await;
        create(&pool, booking("2030-01-04", "20:00", "555-000-0001")).await.unwrap();
        create(&pool, booking("2030-01-04", "11:00", "555-000-0002")).await.unwrap();
        create(&pool, booking("2030-01-05", "12:00", "555-000-0003")).await.unwrap();
        let done = create(&pool, booking("2030-01-04", "12:00", "555-000-0004")).await.unwrap();
        update_status(&pool, done.reservation_id, ReservationStatus::Finished)
            .await
            .unwrap();

        let rows = list_by_date(&pool, "2030-01-04").await.unwrap();
        let times: Vec<_> = rows.iter().map(|r| r.reservation_time.as_str()).collect();
        assert_eq!(times, vec!["11:00", "20:00"]);
    }

    #[tokio::test]
    async fn search_by_phone_ignores_separators() {
        let pool = test_pool().await;
        create(&pool, booking("2030-01-04", "18:00", "(555) 123-4567")).await.unwrap();
        create(&pool, booking("2030-01-04", "19:00", "555-999-0000")).await.unwrap();

        let rows = search_by_phone(&pool, "5551234567").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mobile_number, "(555) 123-4567");

        // Partial digits match too
        let rows = search_by_phone(&pool, "123-45").await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let pool = test_pool().await;
        let r = create(&pool, booking("2030-01-04", "18:00", "555-123-4567"))
            .await
            .unwrap();

        let mut edited = booking("2030-01-05", "19:30", "555-123-4567");
        edited.first_name = "Morty".into();
        edited.people = 2;
        let updated = update(&pool, r.reservation_id, edited).await.unwrap();

        assert_eq!(updated.first_name, "Morty");
        assert_eq!(updated.reservation_date, "2030-01-05");
        assert_eq!(updated.people, 2);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 999, booking("2030-01-04", "18:00", "555-123-4567"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_status_only_touches_status() {
        let pool = test_pool().await;
        let r = create(&pool, booking("2030-01-04", "18:00", "555-123-4567"))
            .await
            .unwrap();
        let seated = update_status(&pool, r.reservation_id, ReservationStatus::Seated)
            .await
            .unwrap();
        assert_eq!(seated.status, ReservationStatus::Seated);
        assert_eq!(seated.first_name, "Rick");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let pool = test_pool().await;
        let r = create(&pool, booking("2030-01-04", "18:00", "555-123-4567"))
            .await
            .unwrap();
        assert!(delete(&pool, r.reservation_id).await.unwrap());
        assert!(!delete(&pool, r.reservation_id).await.unwrap());
        assert!(find_by_id(&pool, r.reservation_id).await.unwrap().is_none());
    }
}
