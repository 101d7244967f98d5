use super::*;
use serde_json::json;

#[test]
fn decision_payload_uses_camel_case_and_lowercase_decision() {
    let payload = DecisionPayload::new("a@b.com", Decision::Confirmed, &Invitation::default());
    let value = serde_json::to_value(&payload).expect("json");

    assert_eq!(value["userEmail"], "a@b.com");
    assert_eq!(value["decision"], "confirmed");
    assert_eq!(value["venue"]["name"], "Restaurante a definir");
    assert_eq!(value["date"], "14 de fevereiro de 2026");
    assert_eq!(value["time"], "19h");
}

#[test]
fn success_response_omits_error_field() {
    let value = serde_json::to_value(NotificationResponse::sent(2)).expect("json");
    assert_eq!(value, json!({ "success": true, "emailsSent": 2 }));
}

#[test]
fn failure_response_omits_emails_sent() {
    let value =
        serde_json::to_value(NotificationResponse::failed("Missing required fields")).expect("json");
    assert_eq!(
        value,
        json!({ "success": false, "error": "Missing required fields" })
    );
}

#[test]
fn decision_parses_only_known_values() {
    assert_eq!("declined".parse::<Decision>(), Ok(Decision::Declined));
    assert!("Confirmed".parse::<Decision>().is_err());
}

#[test]
fn maps_url_points_at_venue_coordinates() {
    assert_eq!(
        Invitation::default().maps_url(),
        "https://maps.google.com/?q=-23.5505,-46.6333"
    );
}
