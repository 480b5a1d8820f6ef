//! Tests for credential validation.

use planga::{Error, WidgetConfiguration, encrypt_options, validate};
use rstest::rstest;
use test_utils::sample::{self, NUMERIC_API_KEY, PRIVATE_API_KEY, PUBLIC_API_ID};

#[rstest]
#[case("a", true)]
#[case("Z", true)]
#[case("abcDEF", true)]
#[case("PlangaSecretKeyForTesw", true)]
#[case("", false)]
#[case("abc1", false)]
#[case("0123456789abcdef", false)]
#[case("abc def", false)]
#[case(" abc", false)]
#[case("abc\t", false)]
#[case("abc-def", false)]
#[case("abc_def", false)]
#[case("abc=", false)]
#[case("ünïcode", false)]
fn letters_only(#[case] value: &str, #[case] expected: bool) {
    test_utils::init_tracer();

    let as_public_id = WidgetConfiguration::builder()
        .public_api_id(value)
        .private_api_key(PRIVATE_API_KEY)
        .build();
    assert_eq!(validate::is_valid(&as_public_id), expected);

    let as_private_key = WidgetConfiguration::builder()
        .public_api_id(PUBLIC_API_ID)
        .private_api_key(value)
        .build();
    assert_eq!(validate::is_valid(&as_private_key), expected);
    assert_eq!(validate::validate(&as_private_key).is_ok(), expected);
}

#[test]
fn missing_fields() {
    test_utils::init_tracer();

    let config = WidgetConfiguration::builder().build();
    assert!(!validate::is_valid(&config));

    let Err(Error::Validation(msg)) = validate::validate(&config) else {
        panic!("should fail validation");
    };
    assert_eq!(msg, "`public_api_id` is missing");
}

// Validation and encryption are independent: a key the validator rejects is
// still accepted by the encoder when it is usable key material.
#[test]
fn validation_decoupled_from_encoding() {
    test_utils::init_tracer();

    let config = sample::configuration_with_key(NUMERIC_API_KEY);
    assert!(!validate::is_valid(&config));
    assert!(encrypt_options(&config).is_ok());
}
