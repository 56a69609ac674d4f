//! Storage seam for config resolution: the `ConfigStore` trait and its SeaORM implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};

use crate::internal::error::Result;
use crate::internal::model::round::RoundStatus;
use crate::internal::model::{config, round, round_unit};

/// Read/write access to the config entries, rounds and recorded round units.
///
/// A missing row is `Ok(None)` (or an empty `Vec`), never an error.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Point lookup of a config entry by its unique key
    async fn find_config(&self, key: &str) -> Result<Option<config::Model>>;

    /// Insert the entry, or overwrite value and description if the key exists
    async fn upsert_config(&self, key: &str, value: &str, description: &str) -> Result<()>;

    /// Highest `ordem` recorded for the round
    async fn latest_unit_ordem(&self, round_id: &str) -> Result<Option<i32>>;

    /// All rounds, highest `number` first
    async fn rounds_by_number_desc(&self) -> Result<Vec<round::Model>>;
}

#[derive(Clone)]
pub struct SeaOrmStore {
    conn: Arc<DatabaseConnection>,
}

impl SeaOrmStore {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    /// Record a round. Rounds are owned by the game itself, this is for seeding and tests.
    pub async fn insert_round(&self, id: &str, number: i32, status: RoundStatus) -> Result<()> {
        let model = round::ActiveModel {
            id: Set(id.to_owned()),
            number: Set(number),
            status: Set(status.as_str().to_owned()),
        };
        round::Entity::insert(model)
            .exec_without_returning(self.conn.as_ref())
            .await?;
        Ok(())
    }

    /// Record that unit number `ordem` was produced in a round.
    pub async fn record_unit(&self, round_id: &str, ordem: i32) -> Result<()> {
        let model = round_unit::ActiveModel {
            round_id: Set(round_id.to_owned()),
            ordem: Set(ordem),
            ..Default::default() // id NotSet
        };
        round_unit::Entity::insert(model)
            .exec_without_returning(self.conn.as_ref())
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for SeaOrmStore {
    async fn find_config(&self, key: &str) -> Result<Option<config::Model>> {
        let entry = config::Entity::find()
            .filter(config::Column::Key.eq(key))
            .one(self.conn.as_ref())
            .await?;
        Ok(entry)
    }

    async fn upsert_config(&self, key: &str, value: &str, description: &str) -> Result<()> {
        let entry = config::ActiveModel {
            key: Set(key.to_owned()),
            value: Set(value.to_owned()),
            description: Set(Some(description.to_owned())),
            ..Default::default() // id NotSet
        };
        config::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(config::Column::Key)
                    .update_columns([config::Column::Value, config::Column::Description])
                    .to_owned(),
            )
            .exec_without_returning(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn latest_unit_ordem(&self, round_id: &str) -> Result<Option<i32>> {
        let unit = round_unit::Entity::find()
            .filter(round_unit::Column::RoundId.eq(round_id))
            .order_by_desc(round_unit::Column::Ordem)
            .one(self.conn.as_ref())
            .await?;
        Ok(unit.map(|u| u.ordem))
    }

    async fn rounds_by_number_desc(&self) -> Result<Vec<round::Model>> {
        let rounds = round::Entity::find()
            .order_by_desc(round::Column::Number)
            .all(self.conn.as_ref())
            .await?;
        Ok(rounds)
    }
}
