//! Typed identifiers shared between the fleet core and its data providers.

mod macros;
mod material_id;
mod personnel_id;
mod user_id;
mod vehicle_id;

pub use material_id::MaterialId;
pub use personnel_id::PersonnelId;
pub use user_id::UserId;
pub use vehicle_id::VehicleId;
