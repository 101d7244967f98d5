use super::*;
use shared::domain::Invitation;

fn payload(decision: Decision) -> DecisionPayload {
    DecisionPayload::new("ana@example.com", decision, &Invitation::default())
}

#[test]
fn owner_confirmed_email_celebrates_with_details() {
    let email = owner_email(&payload(Decision::Confirmed));
    assert_eq!(email.subject, OWNER_CONFIRMED_SUBJECT);
    assert!(email.html.contains("ana@example.com"));
    assert!(email.html.contains("Restaurante a definir"));
    assert!(email.html.contains("14 de fevereiro de 2026"));
    assert!(email.html.contains("19h"));
}

#[test]
fn owner_declined_email_commiserates_without_details() {
    let email = owner_email(&payload(Decision::Declined));
    assert_eq!(email.subject, OWNER_DECLINED_SUBJECT);
    assert!(email.html.contains("declinou o convite"));
    assert!(!email.html.contains("Restaurante a definir"));
}

#[test]
fn invitee_email_lists_venue_date_and_time() {
    let email = invitee_email(&payload(Decision::Confirmed));
    assert_eq!(email.subject, INVITEE_SUBJECT);
    assert!(email.html.contains("📍 Local:</strong> Restaurante a definir"));
    assert!(email.html.contains("Endereço a definir, Cidade, Estado"));
    assert!(email.html.contains("🕐 Horário:</strong> 19h"));
}

#[test]
fn user_supplied_values_are_escaped() {
    let mut payload = payload(Decision::Confirmed);
    payload.user_email = "<script>@x.com".into();
    payload.venue.name = "Bar & \"Grill\"".into();

    let owner = owner_email(&payload);
    assert!(!owner.html.contains("<script>"));
    assert!(owner.html.contains("&lt;script&gt;@x.com"));
    assert!(owner.html.contains("Bar &amp; &quot;Grill&quot;"));
}

#[test]
fn invitee_details_are_escaped() {
    let mut payload = payload(Decision::Confirmed);
    payload.time = "19h <b>em ponto</b>".into();

    let invitee = invitee_email(&payload);
    assert!(invitee.html.contains("19h &lt;b&gt;em ponto&lt;/b&gt;"));
}
