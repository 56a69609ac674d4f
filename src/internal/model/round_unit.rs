use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A unit (pizza) recorded for a round. `ordem` is its position inside the round,
/// so the highest `ordem` is how many units the round has seen.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "round_units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub round_id: String,
    pub ordem: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::round::Entity",
        from = "Column::RoundId",
        to = "super::round::Column::Id"
    )]
    Round,
}

impl Related<super::round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
