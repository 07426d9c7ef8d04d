use confreg_form::{
    FieldError, check_card_number, check_card_zip, check_cvv, check_email, check_name,
};

#[test]
fn name_accepts_any_non_whitespace_content() {
    assert!(check_name("Ada Lovelace").is_ok());
    assert!(check_name("  x  ").is_ok());
    assert_eq!(check_name(""), Err(FieldError::NameRequired));
    assert_eq!(check_name("   \t\n"), Err(FieldError::NameRequired));
}

#[test]
fn email_requires_single_at_and_alphabetic_tld() {
    assert!(check_email("a@b.com").is_ok());
    assert!(check_email("first.last@example.dev").is_ok());
    assert!(check_email("UPPER@CASE.COM").is_ok());

    assert_eq!(check_email("a@b"), Err(FieldError::EmailFormat));
    assert_eq!(check_email("a@@b.com"), Err(FieldError::EmailFormat));
    assert_eq!(check_email("@b.com"), Err(FieldError::EmailFormat));
    assert_eq!(check_email("a@.com"), Err(FieldError::EmailFormat));
    assert_eq!(check_email("a@sub.b.com"), Err(FieldError::EmailFormat));
    assert_eq!(check_email("a@b.c0m"), Err(FieldError::EmailFormat));
    assert_eq!(check_email(""), Err(FieldError::EmailFormat));
}

#[test]
fn card_number_accepts_thirteen_to_sixteen_digits() {
    assert_eq!(
        check_card_number("123"),
        Err(FieldError::CardNumberFormat)
    );
    assert_eq!(
        check_card_number("123456789012"),
        Err(FieldError::CardNumberFormat),
        "twelve digits is one short"
    );
    assert!(check_card_number("1234567890123").is_ok());
    assert!(check_card_number("1234567890123456").is_ok());
    assert_eq!(
        check_card_number("12345678901234567"),
        Err(FieldError::CardNumberFormat),
        "seventeen digits is one over"
    );
    assert_eq!(
        check_card_number("1234 5678 9012 3456"),
        Err(FieldError::CardNumberFormat),
        "separators are not accepted"
    );
}

#[test]
fn zip_and_cvv_require_exact_digit_counts() {
    assert!(check_card_zip("12345").is_ok());
    assert_eq!(check_card_zip("1234"), Err(FieldError::ZipFormat));
    assert_eq!(check_card_zip("123456"), Err(FieldError::ZipFormat));
    assert_eq!(check_card_zip("12a45"), Err(FieldError::ZipFormat));

    assert!(check_cvv("123").is_ok());
    assert_eq!(check_cvv("12"), Err(FieldError::CvvFormat));
    assert_eq!(check_cvv("1234"), Err(FieldError::CvvFormat));
    assert_eq!(check_cvv("12x"), Err(FieldError::CvvFormat));
}
