pub mod auth;
pub mod material;
pub mod personnel;
pub mod profile;
pub mod vehicle;
