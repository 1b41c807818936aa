//! Storage infrastructure - SeaORM entity, repository and migrations.

pub mod entity;
pub mod migrations;
mod sea_orm_repo;

pub use sea_orm_repo::OrmCalculationsRepository;
