use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct PersonnelProvider {
    pub db: DatabaseConnection,
}
