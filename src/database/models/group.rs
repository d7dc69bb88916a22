use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite};

use super::timestamp_now;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Group {
    pub group_id: i64,
    pub group_name: Option<String>,
    pub added_date: String,
    pub is_admin: bool,
}

/// Row shape used when listing admin-flagged groups.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AdminGroup {
    pub group_id: i64,
    pub group_name: Option<String>,
}

impl Group {
    /// Insert or refresh a group. The admin flag is only ever raised here, never cleared.
    pub async fn upsert(
        pool: &sqlx::SqlitePool,
        group_id: i64,
        group_name: Option<&str>,
        is_admin: bool,
    ) -> Result<(), sqlx::Error> {
        upsert_with(pool, group_id, group_name, is_admin).await
    }

    pub async fn set_admin(pool: &sqlx::SqlitePool, group_id: i64) -> Result<(), sqlx::Error> {
        set_admin_with(pool, group_id).await
    }

    /// Upsert plus admin flag in a single transaction, so a crash between the two
    /// never leaves an admin group recorded without its flag.
    pub async fn record_observation(
        pool: &sqlx::SqlitePool,
        group_id: i64,
        group_name: Option<&str>,
        is_admin: bool,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        upsert_with(&mut *tx, group_id, group_name, false).await?;
        if is_admin {
            set_admin_with(&mut *tx, group_id).await?;
        }
        tx.commit().await
    }

    pub async fn find(
        pool: &sqlx::SqlitePool,
        group_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            "SELECT group_id, group_name, added_date, is_admin FROM groups WHERE group_id = ?"
        )
        .bind(group_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn admin_groups(pool: &sqlx::SqlitePool) -> Result<Vec<AdminGroup>, sqlx::Error> {
        sqlx::query_as::<_, AdminGroup>(
            "SELECT group_id, group_name FROM groups WHERE is_admin = 1"
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM groups")
            .fetch_one(pool)
            .await
    }

    pub async fn count_admin(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM groups WHERE is_admin = 1")
            .fetch_one(pool)
            .await
    }
}

async fn upsert_with<'e, E>(
    executor: E,
    group_id: i64,
    group_name: Option<&str>,
    is_admin: bool,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO groups (group_id, group_name, added_date, is_admin)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(group_id) DO UPDATE SET
            group_name = excluded.group_name,
            added_date = excluded.added_date,
            is_admin = MAX(groups.is_admin, excluded.is_admin)
        "#,
    )
    .bind(group_id)
    .bind(group_name)
    .bind(timestamp_now())
    .bind(is_admin)
    .execute(executor)
    .await?;

    Ok(())
}

async fn set_admin_with<'e, E>(executor: E, group_id: i64) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("UPDATE groups SET is_admin = 1 WHERE group_id = ?")
        .bind(group_id)
        .execute(executor)
        .await?;

    Ok(())
}
