use confreg_form::{
    ActivityCatalog, ActivitySelection, Field, FieldError, JobRole, PaymentMethod, Registration,
    ShirtColor, ShirtDesign,
};

fn checked(catalog: &ActivityCatalog, ids: &[&str]) -> ActivitySelection {
    let mut sel = ActivitySelection::new();
    for id in ids {
        assert!(sel.set_checked(catalog, id, true), "setup toggle for {id}");
    }
    sel
}

fn complete_registration(catalog: &ActivityCatalog) -> Registration {
    let mut reg = Registration::default();
    reg.registrant.name = "Grace Hopper".to_string();
    reg.registrant.email = "grace@example.com".to_string();
    reg.registrant.job_role = JobRole::Engineer;
    reg.shirt.set_design(ShirtDesign::Classic);
    assert!(reg.shirt.set_color(ShirtColor::Gold));
    reg.activities = checked(catalog, &["main-conference", "async-rust"]);
    reg.payment.method = PaymentMethod::CreditCard;
    reg.payment.card.number = "1234567890123".to_string();
    reg.payment.card.zip = "12345".to_string();
    reg.payment.card.cvv = "123".to_string();
    reg
}

#[test]
fn complete_credit_card_registration_validates() {
    let catalog = ActivityCatalog::load_from_static();
    let reg = complete_registration(&catalog);
    let report = reg.validate();
    assert!(report.is_ok(), "unexpected issues: {:?}", report.issues());
    assert_eq!(report.field_state(Field::Name), Some(true));
    assert_eq!(report.field_state(Field::CardNumber), Some(true));
    assert_eq!(reg.activities.total_dollars(), 300);
}

#[test]
fn empty_registration_fails_every_base_check() {
    let reg = Registration::default();
    let report = reg.validate();
    assert!(!report.is_ok());
    assert_eq!(report.field_state(Field::Name), Some(false));
    assert_eq!(report.field_state(Field::Email), Some(false));
    assert_eq!(report.field_state(Field::Activities), Some(false));
    // Credit card is the default method, so its empty fields fail too.
    assert_eq!(report.field_state(Field::CardNumber), Some(false));
    assert_eq!(report.field_state(Field::CardZip), Some(false));
    assert_eq!(report.field_state(Field::CardCvv), Some(false));
}

#[test]
fn no_activities_blocks_submission_even_when_everything_else_passes() {
    let catalog = ActivityCatalog::load_from_static();
    let mut reg = complete_registration(&catalog);
    reg.activities = ActivitySelection::new();
    let report = reg.validate();
    assert!(!report.is_ok());
    assert_eq!(report.issues(), [FieldError::NoActivities]);
}

#[test]
fn short_card_number_fails_and_other_methods_skip_card_checks() {
    let catalog = ActivityCatalog::load_from_static();
    let mut reg = complete_registration(&catalog);
    reg.payment.card.number = "123".to_string();
    let report = reg.validate();
    assert_eq!(report.issues(), [FieldError::CardNumberFormat]);

    // Switching away from credit card drops the card fields from the
    // evaluated set entirely.
    reg.payment.method = PaymentMethod::PayPal;
    let report = reg.validate();
    assert!(report.is_ok());
    assert_eq!(report.field_state(Field::CardNumber), None);

    reg.payment.method = PaymentMethod::Bitcoin;
    assert!(reg.validate().is_ok());
}

#[test]
fn issues_preserve_check_order() {
    let catalog = ActivityCatalog::load_from_static();
    let mut reg = complete_registration(&catalog);
    reg.registrant.name = "   ".to_string();
    reg.registrant.email = "grace@example".to_string();
    reg.payment.card.cvv = "12".to_string();
    let report = reg.validate();
    assert_eq!(
        report.issues(),
        [
            FieldError::NameRequired,
            FieldError::EmailFormat,
            FieldError::CvvFormat,
        ]
    );
}
