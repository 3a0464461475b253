//! Tests de l'API: mapping des erreurs et formats de sérialisation

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use ambulance_dispatch::dto::ambulance_dto::CreateAmbulanceRequest;
use ambulance_dispatch::dto::mission_dto::{CreateMissionRequest, UpdateMissionStatusRequest};
use ambulance_dispatch::models::mission::{MissionPriority, MissionStatus};
use ambulance_dispatch::utils::errors::AppError;
use validator::Validate;

#[tokio::test]
async fn test_health_endpoint_reports_healthy() {
    let app = ambulance_dispatch::routes::create_health_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "ambulance-dispatch");
}

#[tokio::test]
async fn test_error_responses_carry_expected_status() {
    let cases = vec![
        (
            AppError::NotFound("Mission not found".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError::Conflict("Plate already registered".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            AppError::Unauthorized("Missing token".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            AppError::Forbidden("Admin role required".to_string()),
            StatusCode::FORBIDDEN,
        ),
        (
            AppError::BadRequest("Unknown status".to_string()),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_mission_create_request_wire_format() {
    // Le format d'entrée utilise les labels français des enums
    let payload = json!({
        "patient_name": "Marie Laurent",
        "patient_phone": "0698765432",
        "patient_age": 45,
        "patient_condition": "Fracture ouverte",
        "priority": "urgente",
        "pickup_address": "8 avenue des Champs-Élysées, Paris",
        "pickup_latitude": 48.8698,
        "pickup_longitude": 2.3078,
        "hospital_id": "a3bb189e-8bf9-3888-9912-ace4e6543002",
        "symptoms": ["douleur", "saignement"]
    });

    let request: CreateMissionRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(request.priority, MissionPriority::Urgente);
    assert!(request.validate().is_ok());
    // estimated_duration absent: le repository posera le défaut de 30 minutes
    assert!(request.estimated_duration.is_none());
}

#[test]
fn test_mission_status_request_rejects_unknown_label() {
    let result: Result<UpdateMissionStatusRequest, _> =
        serde_json::from_str(r#"{"status": "perdue"}"#);
    assert!(result.is_err());
}

#[test]
fn test_mission_status_serializes_to_french_labels() {
    assert_eq!(
        serde_json::to_value(MissionStatus::EnAttente).unwrap(),
        json!("en_attente")
    );
    assert_eq!(
        serde_json::to_value(MissionStatus::Terminee).unwrap(),
        json!("terminee")
    );
}

#[test]
fn test_ambulance_create_request_validation() {
    let payload = json!({
        "plate_number": "AB-123-CD",
        "model": "Mercedes Sprinter 519",
        "capacity": 2,
        "equipment": ["defibrillateur", "oxygene"],
        "fuel_level": 85
    });

    let request: CreateAmbulanceRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_ok());

    let bad_payload = json!({
        "plate_number": "!",
        "model": "Mercedes Sprinter 519"
    });
    let bad_request: CreateAmbulanceRequest = serde_json::from_value(bad_payload).unwrap();
    assert!(bad_request.validate().is_err());
}
