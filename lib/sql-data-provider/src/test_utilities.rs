use fleet_core::model::material::{Material, MaterialStatus};
use fleet_core::model::personnel::{Personnel, PersonnelStatus};
use fleet_core::model::vehicle::{Vehicle, VehicleStatus};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{MaterialId, PersonnelId, UserId, VehicleId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::entity::{material, personnel, profile, vehicle};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    let db = db_conn("sqlite::memory:").await.unwrap();
    DataLayer::build(db)
}

pub async fn insert_profile_to_database(
    database: &DatabaseConnection,
    username: &str,
) -> Result<UserId, DbErr> {
    let profile = profile::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        username: Set(username.to_owned()),
        avatar_url: Set(None),
    }
    .insert(database)
    .await?;

    Ok(profile.id)
}

pub async fn insert_vehicle_to_database(
    database: &DatabaseConnection,
    user_id: UserId,
    plate_number: &str,
    created_at: OffsetDateTime,
) -> Result<VehicleId, DbErr> {
    let vehicle = vehicle::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_at: Set(created_at),
        user_id: Set(user_id),
        name: Set("VSAV 1".to_string()),
        vehicle_type: Set("VSAV".to_string()),
        fire_station: Set("CIS Centre".to_string()),
        plate_number: Set(plate_number.to_owned()),
        capacity: Set(5),
        equipment_list: Set(None),
        status: Set(vehicle::VehicleStatus::Operationnel),
        photo_url: Set(None),
        lien: Set(None),
        verifier_id: Set(None),
        last_verified_at: Set(None),
        verification_status: Set(None),
    }
    .insert(database)
    .await?;

    Ok(vehicle.id)
}

pub async fn insert_material_to_database(
    database: &DatabaseConnection,
    user_id: UserId,
    vehicle_id: Option<VehicleId>,
    is_verified: bool,
) -> Result<MaterialId, DbErr> {
    let material = material::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_at: Set(get_dummy_date()),
        user_id: Set(user_id),
        name: Set("Lot de secours".to_string()),
        material_type: Set("Secourisme".to_string()),
        quantity: Set(1),
        location: Set("Soute arrière".to_string()),
        status: Set(material::MaterialStatus::Operationnel),
        description: Set(None),
        photo_url: Set(None),
        vehicle_id: Set(vehicle_id),
        is_verified: Set(is_verified),
    }
    .insert(database)
    .await?;

    Ok(material.id)
}

pub async fn insert_personnel_to_database(
    database: &DatabaseConnection,
    user_id: UserId,
    last_name: &str,
) -> Result<PersonnelId, DbErr> {
    let personnel = personnel::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_at: Set(get_dummy_date()),
        user_id: Set(user_id),
        first_name: Set("Jean".to_string()),
        last_name: Set(last_name.to_owned()),
        role: Set("Sapeur".to_string()),
        contact_number: Set("0600000000".to_string()),
        email: Set("jean@example.com".to_string()),
        fire_station: Set("CIS Centre".to_string()),
        status: Set(personnel::PersonnelStatus::Actif),
        notes: Set(None),
        photo_url: Set(None),
    }
    .insert(database)
    .await?;

    Ok(personnel.id)
}

pub fn dummy_vehicle(user_id: UserId, plate_number: &str) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4().into(),
        created_at: get_dummy_date(),
        user_id,
        name: "FPT 2".to_string(),
        vehicle_type: "FPT".to_string(),
        fire_station: "CIS Nord".to_string(),
        plate_number: plate_number.to_owned(),
        capacity: 6,
        equipment_list: None,
        status: VehicleStatus::Operationnel,
        photo_url: None,
        lien: None,
        last_verification: None,
    }
}

pub fn dummy_material(user_id: UserId, vehicle_id: Option<VehicleId>) -> Material {
    Material {
        id: Uuid::new_v4().into(),
        created_at: get_dummy_date(),
        user_id,
        name: "Lance incendie".to_string(),
        material_type: "Incendie".to_string(),
        quantity: 2,
        location: "Soute gauche".to_string(),
        status: MaterialStatus::Operationnel,
        description: None,
        photo_url: None,
        vehicle_id,
        is_verified: false,
    }
}

pub fn dummy_personnel(user_id: UserId) -> Personnel {
    Personnel {
        id: Uuid::new_v4().into(),
        created_at: get_dummy_date(),
        user_id,
        first_name: "Claire".to_string(),
        last_name: "Martin".to_string(),
        role: "Caporal".to_string(),
        contact_number: "0611111111".to_string(),
        email: "claire@example.com".to_string(),
        fire_station: "CIS Nord".to_string(),
        status: PersonnelStatus::Actif,
        notes: None,
        photo_url: None,
    }
}
