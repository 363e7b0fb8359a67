pub mod entity;
pub mod migrations;
mod sea_orm_repo;
mod sidebar_repo;

pub use sea_orm_repo::OrmPreferencesRepository;
pub use sidebar_repo::OrmSidebarRepository;
