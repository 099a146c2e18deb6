use shared_types::{MaterialId, PersonnelId, UserId, VehicleId};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    Repository(DataLayerError),
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        Self::Repository(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EntityNotFoundError {
    #[error("Vehicle `{0}` not found")]
    Vehicle(VehicleId),

    #[error("Material `{0}` not found")]
    Material(MaterialId),

    #[error("Personnel `{0}` not found")]
    Personnel(PersonnelId),

    #[error("Profile `{0}` not found")]
    Profile(UserId),
}

#[derive(Debug, thiserror::Error)]
pub enum BusinessLogicError {
    #[error("A vehicle with plate number `{0}` already exists")]
    PlateNumberAlreadyExists(String),

    #[error("Material `{material}` and vehicle `{vehicle}` belong to different owners")]
    OwnershipMismatch {
        material: MaterialId,
        vehicle: VehicleId,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No active session")]
    SessionRequired,

    #[error("Missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}

#[derive(Debug)]
pub enum ErrorCode {
    Vehicle001,
    Vehicle002,

    Material001,
    Material002,

    Personnel001,

    Profile001,

    Auth001,

    Validation,
    Database,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Vehicle001 => "Vehicle not found",
            ErrorCode::Vehicle002 => "Plate number already exists",

            ErrorCode::Material001 => "Material not found",
            ErrorCode::Material002 => "Material and vehicle owners differ",

            ErrorCode::Personnel001 => "Personnel not found",

            ErrorCode::Profile001 => "Profile not found",

            ErrorCode::Auth001 => "No active session",

            ErrorCode::Validation => "Invalid request",
            ErrorCode::Database => "Database error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Vehicle(_) => ErrorCode::Vehicle001,
            EntityNotFoundError::Material(_) => ErrorCode::Material001,
            EntityNotFoundError::Personnel(_) => ErrorCode::Personnel001,
            EntityNotFoundError::Profile(_) => ErrorCode::Profile001,
        }
    }
}

impl BusinessLogicError {
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::PlateNumberAlreadyExists(_) => ErrorCode::Vehicle002,
            BusinessLogicError::OwnershipMismatch { .. } => ErrorCode::Material002,
        }
    }
}

impl ValidationError {
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::SessionRequired => ErrorCode::Auth001,
            ValidationError::MissingRequiredField(_) | ValidationError::InvalidQuantity(_) => {
                ErrorCode::Validation
            }
        }
    }
}
