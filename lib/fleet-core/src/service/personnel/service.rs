use one_dto_mapper::convert_inner;
use shared_types::PersonnelId;

use super::PersonnelService;
use super::dto::{CreatePersonnelRequestDTO, PersonnelResponseDTO, UpdatePersonnelRequestDTO};
use super::mapper;
use crate::model::auth::AuthContext;
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl PersonnelService {
    pub async fn create_personnel(
        &self,
        ctx: &AuthContext,
        request: CreatePersonnelRequestDTO,
    ) -> Result<PersonnelId, ServiceError> {
        validate_required_fields(&request.first_name, &request.last_name, &request.role)?;

        let personnel = mapper::personnel_from_create_request(request, ctx.user_id());
        let id = self.personnel_repository.create_personnel(personnel).await?;

        Ok(id)
    }

    /// The caller's personnel records, newest first.
    pub async fn get_personnel_list(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<PersonnelResponseDTO>, ServiceError> {
        let personnel = self
            .personnel_repository
            .get_personnel_list(ctx.user_id())
            .await?;

        Ok(convert_inner(personnel))
    }

    pub async fn update_personnel(
        &self,
        ctx: &AuthContext,
        request: UpdatePersonnelRequestDTO,
    ) -> Result<(), ServiceError> {
        validate_required_fields(&request.first_name, &request.last_name, &request.role)?;

        let id = request.id;
        self.personnel_repository
            .update_personnel(request.into(), ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Personnel(id).into(),
                error => ServiceError::from(error),
            })
    }

    pub async fn delete_personnel(
        &self,
        ctx: &AuthContext,
        personnel_id: &PersonnelId,
    ) -> Result<(), ServiceError> {
        self.personnel_repository
            .delete_personnel(personnel_id, ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Personnel(*personnel_id).into()
                }
                error => ServiceError::from(error),
            })
    }
}

fn validate_required_fields(
    first_name: &str,
    last_name: &str,
    role: &str,
) -> Result<(), ValidationError> {
    if first_name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("first_name"));
    }
    if last_name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("last_name"));
    }
    if role.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("role"));
    }
    Ok(())
}
