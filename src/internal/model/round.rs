use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::internal::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub number: i32,
    pub status: String, // see `RoundStatus`, kept as text so unknown states survive a read
}

impl Model {
    pub fn is_finalized(&self) -> bool {
        self.status == RoundStatus::Finalized.as_str()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::round_unit::Entity")]
    RoundUnit,
}

impl Related<super::round_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoundUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Created,
    InProgress,
    Finalized,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Created => "created",
            RoundStatus::InProgress => "in_progress",
            RoundStatus::Finalized => "finalized",
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(RoundStatus::Created),
            "in_progress" => Ok(RoundStatus::InProgress),
            "finalized" => Ok(RoundStatus::Finalized),
            _ => Err(StoreError::InvalidValue(format!("unknown round status: {s}"))),
        }
    }
}
