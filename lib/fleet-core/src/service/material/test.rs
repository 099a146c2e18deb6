use std::sync::Arc;

use mockall::Sequence;
use mockall::predicate::*;
use shared_types::{MaterialId, UserId, VehicleId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::MaterialService;
use super::dto::CreateMaterialRequestDTO;
use crate::model::auth::AuthContext;
use crate::model::material::{Material, MaterialStatus};
use crate::model::vehicle::{Vehicle, VehicleStatus};
use crate::repository::material_repository::MockMaterialRepository;
use crate::repository::vehicle_repository::MockVehicleRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError};

fn setup_service(
    material_repository: MockMaterialRepository,
    vehicle_repository: MockVehicleRepository,
) -> MaterialService {
    MaterialService::new(Arc::new(material_repository), Arc::new(vehicle_repository))
}

fn auth_context() -> AuthContext {
    AuthContext::from_session(Some(UserId::from(Uuid::new_v4()))).unwrap()
}

fn generic_material(id: MaterialId, owner: UserId, is_verified: bool) -> Material {
    Material {
        id,
        created_at: OffsetDateTime::now_utc(),
        user_id: owner,
        name: "ARI complet".to_string(),
        material_type: "Protection respiratoire".to_string(),
        quantity: 2,
        location: "Cellule avant".to_string(),
        status: MaterialStatus::Operationnel,
        description: None,
        photo_url: None,
        vehicle_id: None,
        is_verified,
    }
}

fn generic_vehicle(id: VehicleId, owner: UserId) -> Vehicle {
    Vehicle {
        id,
        created_at: OffsetDateTime::now_utc(),
        user_id: owner,
        name: "CCF 3".to_string(),
        vehicle_type: "Camion-citerne feux de forêts".to_string(),
        fire_station: "Caserne Est".to_string(),
        plate_number: "IJ-789-KL".to_string(),
        capacity: 3,
        equipment_list: None,
        status: VehicleStatus::Operationnel,
        photo_url: None,
        lien: None,
        last_verification: None,
    }
}

#[tokio::test]
async fn test_toggle_verified_twice_restores_the_original_flag() {
    let ctx = auth_context();
    let owner = ctx.user_id();
    let material_id: MaterialId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    let mut seq = Sequence::new();

    material_repository
        .expect_get_material()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, false))));
    material_repository
        .expect_set_verified()
        .times(1)
        .in_sequence(&mut seq)
        .with(eq(material_id), eq(owner), eq(true))
        .returning(|_, _, _| Ok(()));
    material_repository
        .expect_get_material()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, true))));
    material_repository
        .expect_set_verified()
        .times(1)
        .in_sequence(&mut seq)
        .with(eq(material_id), eq(owner), eq(false))
        .returning(|_, _, _| Ok(()));

    let service = setup_service(material_repository, MockVehicleRepository::default());

    let first = service.toggle_verified(&ctx, &material_id).await.unwrap();
    assert!(first);

    let second = service.toggle_verified(&ctx, &material_id).await.unwrap();
    assert!(!second);
}

#[tokio::test]
async fn test_toggle_verified_unknown_material() {
    let ctx = auth_context();
    let material_id: MaterialId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_material()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = setup_service(material_repository, MockVehicleRepository::default());

    let result = service.toggle_verified(&ctx, &material_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(
            EntityNotFoundError::Material(_)
        ))
    ));
}

#[tokio::test]
async fn test_assign_to_vehicle_success() {
    let ctx = auth_context();
    let owner = ctx.user_id();
    let material_id: MaterialId = Uuid::new_v4().into();
    let vehicle_id: VehicleId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_material()
        .times(1)
        .with(eq(material_id), eq(owner))
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, false))));
    material_repository
        .expect_set_vehicle()
        .times(1)
        .with(eq(material_id), eq(owner), eq(Some(vehicle_id)))
        .returning(|_, _, _| Ok(()));

    let mut vehicle_repository = MockVehicleRepository::default();
    vehicle_repository
        .expect_get_vehicle()
        .times(1)
        .with(eq(vehicle_id), eq(owner))
        .returning(move |id, owner| Ok(Some(generic_vehicle(*id, owner))));

    let service = setup_service(material_repository, vehicle_repository);

    service
        .assign_to_vehicle(&ctx, &material_id, Some(vehicle_id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unassign_does_not_look_up_any_vehicle() {
    let ctx = auth_context();
    let owner = ctx.user_id();
    let material_id: MaterialId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_material()
        .times(1)
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, true))));
    material_repository
        .expect_set_vehicle()
        .times(1)
        .with(eq(material_id), eq(owner), eq(None::<VehicleId>))
        .returning(|_, _, _| Ok(()));

    // no expectation on the vehicle repository, a lookup would panic
    let service = setup_service(material_repository, MockVehicleRepository::default());

    service
        .assign_to_vehicle(&ctx, &material_id, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_assign_to_foreign_owned_vehicle_is_rejected() {
    let ctx = auth_context();
    let material_id: MaterialId = Uuid::new_v4().into();
    let vehicle_id: VehicleId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_material()
        .times(1)
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, false))));

    let mut vehicle_repository = MockVehicleRepository::default();
    vehicle_repository
        .expect_get_vehicle()
        .times(1)
        .returning(|id, _| {
            // a row that slipped past query scoping with a different owner
            Ok(Some(generic_vehicle(*id, UserId::from(Uuid::new_v4()))))
        });

    let service = setup_service(material_repository, vehicle_repository);

    let result = service
        .assign_to_vehicle(&ctx, &material_id, Some(vehicle_id))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::OwnershipMismatch { .. }
        ))
    ));
}

#[tokio::test]
async fn test_assign_to_unknown_vehicle() {
    let ctx = auth_context();
    let material_id: MaterialId = Uuid::new_v4().into();
    let vehicle_id: VehicleId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_material()
        .times(1)
        .returning(move |id, owner| Ok(Some(generic_material(*id, owner, false))));

    let mut vehicle_repository = MockVehicleRepository::default();
    vehicle_repository
        .expect_get_vehicle()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = setup_service(material_repository, vehicle_repository);

    let result = service
        .assign_to_vehicle(&ctx, &material_id, Some(vehicle_id))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Vehicle(
            _
        )))
    ));
}

#[tokio::test]
async fn test_create_material_with_zero_quantity_is_rejected() {
    let ctx = auth_context();

    let service = setup_service(
        MockMaterialRepository::default(),
        MockVehicleRepository::default(),
    );

    let request = CreateMaterialRequestDTO {
        name: "Projecteur portatif".to_string(),
        material_type: "Éclairage".to_string(),
        quantity: 0,
        location: "Coffre latéral".to_string(),
        status: MaterialStatus::Operationnel,
        description: None,
        photo_url: None,
        vehicle_id: None,
    };

    let result = service.create_material(&ctx, request).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::InvalidQuantity(
            0
        )))
    ));
}

#[tokio::test]
async fn test_get_materials_for_vehicle_maps_the_scoped_set() {
    let ctx = auth_context();
    let owner = ctx.user_id();
    let vehicle_id: VehicleId = Uuid::new_v4().into();

    let mut material_repository = MockMaterialRepository::default();
    material_repository
        .expect_get_materials_for_vehicle()
        .times(1)
        .with(eq(vehicle_id), eq(owner))
        .returning(|_, owner| {
            Ok(vec![
                generic_material(Uuid::new_v4().into(), owner, true),
                generic_material(Uuid::new_v4().into(), owner, false),
            ])
        });

    let service = setup_service(material_repository, MockVehicleRepository::default());

    let materials = service
        .get_materials_for_vehicle(&ctx, &vehicle_id)
        .await
        .unwrap();
    assert_eq!(materials.len(), 2);
    assert!(materials[0].is_verified);
    assert!(!materials[1].is_verified);
}
