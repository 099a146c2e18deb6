use fleet_core::model::vehicle::{
    UpdateVehicleRequest, VehicleStatus, VerificationRecord, VerificationStatus,
};
use fleet_core::repository::error::DataLayerError;
use fleet_core::repository::vehicle_repository::VehicleRepository;
use sea_orm::DatabaseConnection;
use shared_types::UserId;
use time::Duration;
use uuid::Uuid;

use super::VehicleProvider;
use crate::test_utilities::{
    dummy_vehicle, get_dummy_date, insert_material_to_database, insert_profile_to_database,
    insert_vehicle_to_database, setup_test_data_layer_and_connection,
};

struct TestSetup {
    pub provider: VehicleProvider,
    pub user_id: UserId,
    pub db: DatabaseConnection,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let user_id = insert_profile_to_database(&db, "jdupont").await.unwrap();

    TestSetup {
        provider: VehicleProvider { db: db.clone() },
        user_id,
        db,
    }
}

#[tokio::test]
async fn test_create_vehicle_and_get_back() {
    let setup = setup().await;

    let vehicle = dummy_vehicle(setup.user_id, "AB-123-CD");
    let id = setup.provider.create_vehicle(vehicle.clone()).await.unwrap();
    assert_eq!(id, vehicle.id);

    let stored = setup
        .provider
        .get_vehicle(&id, setup.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, vehicle);
    assert!(stored.last_verification.is_none());
}

#[tokio::test]
async fn test_create_vehicle_duplicate_plate_number() {
    let setup = setup().await;

    setup
        .provider
        .create_vehicle(dummy_vehicle(setup.user_id, "AB-123-CD"))
        .await
        .unwrap();

    let result = setup
        .provider
        .create_vehicle(dummy_vehicle(setup.user_id, "AB-123-CD"))
        .await;
    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_vehicle_not_visible_to_other_owner() {
    let setup = setup().await;
    let other_user = insert_profile_to_database(&setup.db, "intruder")
        .await
        .unwrap();

    let id = insert_vehicle_to_database(&setup.db, setup.user_id, "AB-123-CD", get_dummy_date())
        .await
        .unwrap();

    let result = setup.provider.get_vehicle(&id, other_user).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_vehicle_list_newest_first_and_scoped() {
    let setup = setup().await;
    let other_user = insert_profile_to_database(&setup.db, "neighbour")
        .await
        .unwrap();

    let older = insert_vehicle_to_database(&setup.db, setup.user_id, "AA-111-AA", get_dummy_date())
        .await
        .unwrap();
    let newer = insert_vehicle_to_database(
        &setup.db,
        setup.user_id,
        "BB-222-BB",
        get_dummy_date() + Duration::days(1),
    )
    .await
    .unwrap();
    insert_vehicle_to_database(&setup.db, other_user, "CC-333-CC", get_dummy_date())
        .await
        .unwrap();

    let list = setup.provider.get_vehicle_list(setup.user_id).await.unwrap();
    assert_eq!(
        vec![newer, older],
        list.iter().map(|vehicle| vehicle.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_update_vehicle_leaves_verification_untouched() {
    let setup = setup().await;

    let mut vehicle = dummy_vehicle(setup.user_id, "AB-123-CD");
    let record = VerificationRecord {
        verifier_id: setup.user_id,
        verified_at: get_dummy_date(),
        status: VerificationStatus::Ok,
    };
    vehicle.last_verification = Some(record);
    let id = setup.provider.create_vehicle(vehicle).await.unwrap();

    setup
        .provider
        .update_vehicle(
            UpdateVehicleRequest {
                id,
                name: "FPT 3".to_string(),
                vehicle_type: "FPT".to_string(),
                fire_station: "CIS Sud".to_string(),
                plate_number: "ZZ-999-ZZ".to_string(),
                capacity: 8,
                equipment_list: Some("Echelle, lances".to_string()),
                status: VehicleStatus::EnMaintenance,
                photo_url: None,
                lien: None,
            },
            setup.user_id,
        )
        .await
        .unwrap();

    let stored = setup
        .provider
        .get_vehicle(&id, setup.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!("FPT 3", stored.name);
    assert_eq!(VehicleStatus::EnMaintenance, stored.status);
    assert_eq!(Some(record), stored.last_verification);
}

#[tokio::test]
async fn test_update_vehicle_wrong_owner() {
    let setup = setup().await;
    let other_user = insert_profile_to_database(&setup.db, "intruder")
        .await
        .unwrap();

    let vehicle = dummy_vehicle(setup.user_id, "AB-123-CD");
    let id = setup.provider.create_vehicle(vehicle.clone()).await.unwrap();

    let result = setup
        .provider
        .update_vehicle(
            UpdateVehicleRequest {
                id,
                name: "Hijacked".to_string(),
                vehicle_type: vehicle.vehicle_type,
                fire_station: vehicle.fire_station,
                plate_number: vehicle.plate_number,
                capacity: vehicle.capacity,
                equipment_list: None,
                status: vehicle.status,
                photo_url: None,
                lien: None,
            },
            other_user,
        )
        .await;
    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_update_verification_writes_whole_record() {
    let setup = setup().await;

    let id = insert_vehicle_to_database(&setup.db, setup.user_id, "AB-123-CD", get_dummy_date())
        .await
        .unwrap();
    let record = VerificationRecord {
        verifier_id: setup.user_id,
        verified_at: get_dummy_date() + Duration::hours(2),
        status: VerificationStatus::Anomalie,
    };

    setup
        .provider
        .update_verification(&id, setup.user_id, record)
        .await
        .unwrap();

    let stored = setup
        .provider
        .get_vehicle(&id, setup.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(Some(record), stored.last_verification);
}

#[tokio::test]
async fn test_update_verification_wrong_owner() {
    let setup = setup().await;
    let other_user = insert_profile_to_database(&setup.db, "intruder")
        .await
        .unwrap();

    let id = insert_vehicle_to_database(&setup.db, setup.user_id, "AB-123-CD", get_dummy_date())
        .await
        .unwrap();

    let result = setup
        .provider
        .update_verification(
            &id,
            other_user,
            VerificationRecord {
                verifier_id: other_user,
                verified_at: get_dummy_date(),
                status: VerificationStatus::Ok,
            },
        )
        .await;
    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_delete_vehicle_clears_material_assignment() {
    let setup = setup().await;

    let vehicle_id =
        insert_vehicle_to_database(&setup.db, setup.user_id, "AB-123-CD", get_dummy_date())
            .await
            .unwrap();
    let material_id =
        insert_material_to_database(&setup.db, setup.user_id, Some(vehicle_id), true)
            .await
            .unwrap();

    setup
        .provider
        .delete_vehicle(&vehicle_id, setup.user_id)
        .await
        .unwrap();

    use fleet_core::repository::material_repository::MaterialRepository;
    let material_provider = crate::material::MaterialProvider {
        db: setup.db.clone(),
    };
    let material = material_provider
        .get_material(&material_id, setup.user_id)
        .await
        .unwrap()
        .unwrap();
    assert!(material.vehicle_id.is_none());
}

#[tokio::test]
async fn test_delete_vehicle_unknown_or_foreign() {
    let setup = setup().await;

    let result = setup
        .provider
        .delete_vehicle(&Uuid::new_v4().into(), setup.user_id)
        .await;
    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}
