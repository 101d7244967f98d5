use super::*;

#[test]
fn blank_email_is_required() {
    assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
    assert_eq!(validate_email("   \t"), Err(ValidationError::EmailRequired));
}

#[test]
fn email_without_at_or_domain_dot_is_rejected() {
    for input in [
        "ana",
        "ana.example.com",
        "ana@example",
        "ana@@example.com",
        "@example.com",
        "ana@.com",
        "ana@example.",
        "ana maria@example.com",
    ] {
        assert_eq!(
            validate_email(input),
            Err(ValidationError::InvalidEmailFormat),
            "{input} should be rejected"
        );
    }
}

#[test]
fn well_formed_email_is_accepted_as_typed() {
    for input in ["a@b.com", "Ana.Maria+amor@mail.example.com.br", "x@y.z"] {
        assert_eq!(validate_email(input), Ok(()), "{input} should be accepted");
    }
}

#[test]
fn surrounding_whitespace_is_not_trimmed_before_matching() {
    assert_eq!(
        validate_email(" a@b.com"),
        Err(ValidationError::InvalidEmailFormat)
    );
}

#[test]
fn leading_int_parse_ignores_trailing_garbage() {
    assert_eq!(parse_leading_int("14"), Some(14));
    assert_eq!(parse_leading_int("  02"), Some(2));
    assert_eq!(parse_leading_int("2022abc"), Some(2022));
    assert_eq!(parse_leading_int("-3"), Some(-3));
    assert_eq!(parse_leading_int("+7"), Some(7));
}

#[test]
fn leading_int_parse_without_digits_is_nan() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("99999999999"), None);
}

#[test]
fn default_answer_accepts_only_valentines_2022() {
    let answer = ChallengeAnswer::default();
    assert!(answer.matches(&ChallengeInput::new(14, 2, 2022)));
    assert_eq!(answer.check(&ChallengeInput::parse("14", "02", "2022")), Ok(()));
}

#[test]
fn default_answer_rejects_any_differing_component() {
    let answer = ChallengeAnswer::default();
    for (day, month, year) in [
        (1, 1, 2022),
        (13, 2, 2022),
        (14, 3, 2022),
        (14, 2, 2021),
        (2, 14, 2022),
        (14, 2, 22),
        (0, 0, 0),
    ] {
        assert_eq!(
            answer.check(&ChallengeInput::new(day, month, year)),
            Err(ValidationError::WrongDate),
            "{day}/{month}/{year} should be rejected"
        );
    }
}

#[test]
fn non_numeric_fields_never_match() {
    let answer = ChallengeAnswer::default();
    assert!(!answer.matches(&ChallengeInput::parse("", "2", "2022")));
    assert!(!answer.matches(&ChallengeInput::parse("14", "fev", "2022")));
    assert!(!answer.matches(&ChallengeInput::default()));
}

#[test]
fn configured_answer_replaces_default() {
    let answer = ChallengeAnswer::from_ymd(2019, 6, 12).expect("date");
    assert!(answer.matches(&ChallengeInput::new(12, 6, 2019)));
    assert!(!answer.matches(&ChallengeInput::new(14, 2, 2022)));
}

#[test]
fn hints_are_not_enforced() {
    let answer = ChallengeAnswer::default();
    let out_of_range = ChallengeInput::new(DAY_HINT.max + 1, MONTH_HINT.max, YEAR_HINT.min);
    assert_eq!(answer.check(&out_of_range), Err(ValidationError::WrongDate));
}
