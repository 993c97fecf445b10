use super::*;

fn contact() -> ContactConfig {
    ContactConfig {
        mailbox: "reception@svitanokmed.com".to_owned(),
        subject_prefix: "Website inquiry".to_owned(),
        phone_display: "+380 44 123 45 67".to_owned(),
    }
}

fn filled_form() -> ContactFormState {
    ContactFormState {
        name: "Olena Kovalenko".to_owned(),
        email: "olena@example.com".to_owned(),
        phone: "+380 67 123 45 67".to_owned(),
        message: "I would like to book a checkup.".to_owned(),
        ..ContactFormState::default()
    }
}

// =============================================================
// Field validators
// =============================================================

#[test]
fn name_is_required() {
    assert!(validate_name("").is_some());
    assert!(validate_name("   ").is_some());
    assert!(validate_name("Olena").is_none());
}

#[test]
fn name_over_cap_fails_with_length_message() {
    let long = "x".repeat(NAME_MAX + 1);
    let message = validate_name(&long).expect("over-cap name must fail");
    assert!(message.contains("100"));

    let exact = "x".repeat(NAME_MAX);
    assert!(validate_name(&exact).is_none());
}

#[test]
fn email_shapes() {
    assert!(validate_email("olena@example.com").is_none());
    assert!(validate_email("o.k@clinic.ua").is_none());

    assert!(validate_email("").is_some());
    assert!(validate_email("no-at-sign").is_some());
    assert!(validate_email("@example.com").is_some());
    assert!(validate_email("two@@example.com").is_some());
    assert!(validate_email("spaces in@example.com").is_some());
    assert!(validate_email("dotless@example").is_some());
    assert!(validate_email("trailing@example.").is_some());
}

#[test]
fn phone_accepts_both_local_prefixes() {
    assert!(validate_phone("+380671234567").is_none());
    assert!(validate_phone("0671234567").is_none());
    assert!(validate_phone("+380 67 123 45 67").is_none());
    assert!(validate_phone("(067) 123-45-67").is_none());
}

#[test]
fn phone_rejects_other_shapes() {
    assert!(validate_phone("").is_some());
    assert!(validate_phone("1234").is_some());
    assert!(validate_phone("+49 151 1234567").is_some());
    assert!(validate_phone("067123456").is_some(), "one digit short");
    assert!(validate_phone("06712345678").is_some(), "one digit long");
    assert!(validate_phone("067123456a").is_some());
}

#[test]
fn message_required_and_capped() {
    assert!(validate_message("").is_some());
    let long = "m".repeat(MESSAGE_MAX + 1);
    let message = validate_message(&long).expect("over-cap message must fail");
    assert!(message.contains("1000"));
    assert!(validate_message("Short note.").is_none());
}

#[test]
fn validate_all_aggregates_failures() {
    let errors = validate_all("", "bad", "123", "");
    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![Field::Name, Field::Email, Field::Phone, Field::Message]
    );
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn invalid_form_does_not_submit() {
    let mut form = filled_form();
    form.name = "y".repeat(NAME_MAX + 1);

    assert!(form.try_begin_submit(&contact()).is_none());
    assert!(!form.submitting);
    assert!(form.error_for(Field::Name).is_some());
    assert!(form.banner().is_some());
}

#[test]
fn valid_form_yields_draft_with_all_fields() {
    let mut form = filled_form();
    let draft = form.try_begin_submit(&contact()).expect("clean form submits");

    assert_eq!(draft.to, "reception@svitanokmed.com");
    assert!(draft.subject.contains("Olena Kovalenko"));
    assert!(draft.body.contains("olena@example.com"));
    assert!(draft.body.contains("+380 67 123 45 67"));
    assert!(draft.body.contains("book a checkup"));
    assert!(form.errors.is_empty());
    assert!(form.notice.is_some());
}

#[test]
fn duplicate_submission_is_blocked_until_reset() {
    let mut form = filled_form();
    assert!(form.try_begin_submit(&contact()).is_some());
    assert!(form.submitting);

    // second click while the first attempt is still showing its notice
    assert!(form.try_begin_submit(&contact()).is_none());

    form.reset_submission();
    assert!(form.notice.is_none());
    assert!(form.try_begin_submit(&contact()).is_some());
}

#[test]
fn successful_validation_clears_previous_errors() {
    let mut form = filled_form();
    form.email = "broken".to_owned();
    assert!(form.try_begin_submit(&contact()).is_none());
    assert!(form.error_for(Field::Email).is_some());

    form.email = "olena@example.com".to_owned();
    assert!(form.try_begin_submit(&contact()).is_some());
    assert!(form.error_for(Field::Email).is_none());
    assert!(form.banner().is_none());
}
