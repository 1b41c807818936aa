use sea_orm::entity::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

/// One row per performed computation. Append-only; `n2` is NULL for
/// single-operand operations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub operation: String,
    pub n1: f64,
    pub n2: Option<f64>,
    pub result: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
