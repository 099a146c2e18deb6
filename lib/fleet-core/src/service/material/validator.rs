use super::dto::{CreateMaterialRequestDTO, UpdateMaterialRequestDTO};
use crate::service::error::ValidationError;

pub(crate) fn validate_create_request(
    request: &CreateMaterialRequestDTO,
) -> Result<(), ValidationError> {
    validate_fields(&request.name, &request.material_type, request.quantity)
}

pub(crate) fn validate_update_request(
    request: &UpdateMaterialRequestDTO,
) -> Result<(), ValidationError> {
    validate_fields(&request.name, &request.material_type, request.quantity)
}

fn validate_fields(name: &str, material_type: &str, quantity: u32) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("name"));
    }
    if material_type.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("type"));
    }
    if quantity == 0 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    Ok(())
}
