use serde::{Deserialize, Serialize};

use super::{Group, User};

/// Counts shown in the admin panel and the health report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotStats {
    pub users: i64,
    pub groups: i64,
    pub admin_groups: i64,
}

impl BotStats {
    pub async fn load(pool: &sqlx::SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            users: User::count(pool).await?,
            groups: Group::count(pool).await?,
            admin_groups: Group::count_admin(pool).await?,
        })
    }
}
