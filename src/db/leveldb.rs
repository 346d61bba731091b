// db/leveldb.rs
use async_trait::async_trait;

use super::db::DBClient;
use crate::models::levelmodel::Level;

#[async_trait]
pub trait LevelExt: Send + Sync + std::fmt::Debug {
    async fn get_levels(&self) -> Result<Vec<Level>, sqlx::Error>;
}

#[async_trait]
impl LevelExt for DBClient {
    async fn get_levels(&self) -> Result<Vec<Level>, sqlx::Error> {
        sqlx::query_as::<_, Level>(
            r#"
            SELECT id, level_name, profit_bonus_percentage
            FROM levels
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await
    }
}
