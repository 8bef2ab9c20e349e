//! Dining Table Repository

use shared::models::{NewTable, Table};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "table_id, table_name, capacity, reservation_id, created_at, updated_at";

/// All tables, ordered by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Table>> {
    let rows = sqlx::query_as::<_, Table>(&format!(
        "SELECT {COLUMNS} FROM dining_table ORDER BY table_name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Table>> {
    let row = sqlx::query_as::<_, Table>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE table_id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: NewTable) -> RepoResult<Table> {
    let now = now_millis();
    let result = sqlx::query(
        "INSERT INTO dining_table (table_name, capacity, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&data.table_name)
    .bind(data.capacity)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create table".into()))
}

/// Occupy the table with a reservation
pub async fn seat(pool: &SqlitePool, table_id: i64, reservation_id: i64) -> RepoResult<Table> {
    let rows = sqlx::query(
        "UPDATE dining_table SET reservation_id = ?, updated_at = ? WHERE table_id = ?",
    )
    .bind(reservation_id)
    .bind(now_millis())
    .bind(table_id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {table_id} not found")));
    }
    find_by_id(pool, table_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {table_id} not found")))
}

/// Clear the table's reservation, making it free again
pub async fn free(pool: &SqlitePool, table_id: i64) -> RepoResult<Table> {
    let rows = sqlx::query(
        "UPDATE dining_table SET reservation_id = NULL, updated_at = ? WHERE table_id = ?",
    )
    .bind(now_millis())
    .bind(table_id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {table_id} not found")));
    }
    find_by_id(pool, table_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {table_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn new_table(name: &str, capacity: i64) -> NewTable {
        NewTable {
            table_name: name.into(),
            capacity,
        }
    }

    #[tokio::test]
    async fn create_starts_free() {
        let pool = test_pool().await;
        let t = create(&pool, new_table("Bar #1", 2)).await.unwrap();
        assert!(t.table_id > 0);
        assert!(!t.is_occupied());
        assert_eq!(t.capacity, 2);
    }

    #[tokio::test]
    async fn find_all_orders_by_name() {
        let pool = test_pool().await;
        create(&pool, new_table("Patio", 6)).await.unwrap();
        create(&pool, new_table("Bar #1", 2)).await.unwrap();
        let names: Vec<_> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.table_name)
            .collect();
        assert_eq!(names, vec!["Bar #1", "Patio"]);
    }

    #[tokio::test]
    async fn seat_then_free_round_trip() {
        let pool = test_pool().await;
        let t = create(&pool, new_table("Patio", 6)).await.unwrap();

        let seated = seat(&pool, t.table_id, 42).await.unwrap();
        assert_eq!(seated.reservation_id, Some(42));
        assert!(seated.is_occupied());

        let freed = free(&pool, t.table_id).await.unwrap();
        assert_eq!(freed.reservation_id, None);
        assert!(!freed.is_occupied());
    }

    #[tokio::test]
    async fn seat_missing_table_is_not_found() {
        let pool = test_pool().await;
        let err = seat(&pool, 999, 1).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
