use crate::service::error::ValidationError;

/// Name, type, station and plate are the mandatory vehicle fields.
pub(crate) fn validate_required_fields(
    name: &str,
    vehicle_type: &str,
    fire_station: &str,
    plate_number: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("name"));
    }
    if vehicle_type.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("type"));
    }
    if fire_station.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("fire_station"));
    }
    if plate_number.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("plate_number"));
    }
    Ok(())
}
