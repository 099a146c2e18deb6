use sea_orm::DatabaseConnection;

pub mod repository;


pub(crate) struct ProfileProvider {
    pub db: DatabaseConnection,
}
