//! End-to-end tests for the order-info build flow against fake signers.

use std::cell::RefCell;

use secrecy::{ExposeSecret as _, SecretString};

use alipay_client_sdk::{
    Error, MerchantConfig, OrderInfoBuilder, Result, Signer, UrlEncodingPolicy,
};

/// Returns a fixed signature regardless of the message, so two builds that
/// differ in one field differ in exactly that field on the wire.
struct ConstSigner(&'static str);

impl Signer for ConstSigner {
    fn sign(&self, _message: &str, _private_key: &SecretString) -> Result<String> {
        Ok(self.0.to_owned())
    }
}

/// Captures the exact message handed to the signing primitive.
struct RecordingSigner {
    message: RefCell<Option<String>>,
}

impl RecordingSigner {
    fn new() -> Self {
        Self {
            message: RefCell::new(None),
        }
    }
}

impl Signer for RecordingSigner {
    fn sign(&self, message: &str, private_key: &SecretString) -> Result<String> {
        assert_eq!(private_key.expose_secret(), "fake-pem");
        *self.message.borrow_mut() = Some(message.to_owned());
        Ok("sig".to_owned())
    }
}

struct FailingSigner;

impl Signer for FailingSigner {
    fn sign(&self, _message: &str, _private_key: &SecretString) -> Result<String> {
        Err(Error::signing("hsm unavailable"))
    }
}

fn config() -> MerchantConfig {
    MerchantConfig::new(
        "2088000000000000".to_owned(),
        "seller@shop.example".to_owned(),
        SecretString::from("fake-pem".to_owned()),
    )
    .unwrap()
}

fn populated_builder() -> OrderInfoBuilder {
    let mut builder = OrderInfoBuilder::new(config());
    builder
        .log_enabled(false)
        .out_trade_no("0819145412-6177")
        .subject("Annual pass")
        .body("Annual pass for one device")
        .total_fee("0.01")
        .notify_url("http://notify.msp.hk/notify.htm")
        .it_b_pay("30m")
        .show_url("http://m.alipay.com")
        .app_id("appid-001")
        .app_env("system=android^version=3.0.1.2")
        .extern_token("token-001");
    builder
}

#[test]
fn fully_populated_build_renders_exact_wire_string() {
    let mut builder = populated_builder();
    builder.encoding_policy(UrlEncodingPolicy::SingleEncode);
    let report = builder.build(&ConstSigner("sig=="));

    let expected = concat!(
        "&partner=\"2088000000000000\"",
        "&seller_id=\"seller@shop.example\"",
        "&out_trade_no=\"0819145412-6177\"",
        "&subject=\"Annual pass\"",
        "&body=\"Annual pass for one device\"",
        "&total_fee=\"0.01\"",
        "&service=\"mobile.securitypay.pay\"",
        "&_input_charset=\"utf-8\"",
        "&payment_type=\"1\"",
        "&notify_url=\"http%3A%2F%2Fnotify.msp.hk%2Fnotify.htm\"",
        "&it_b_pay=\"30m\"",
        "&show_url=\"http%3A%2F%2Fm.alipay.com\"",
        "&app_id=\"appid-001\"",
        "&appenv=\"system=android^version=3.0.1.2\"",
        "&extern_token=\"token-001\"",
        "&sign=\"sig%3D%3D\"",
        "&sign_type=\"RSA\"",
    );
    assert_eq!(report.order_info, expected);
    assert!(report.is_complete());
    assert!(report.omitted_optional.is_empty());
}

#[test]
fn signer_receives_rendered_string_without_leading_separator() {
    let signer = RecordingSigner::new();
    let report = populated_builder().build(&signer);

    assert!(report.order_info.starts_with("&partner=\"2088000000000000\""));

    let (payload, _) = report.order_info.split_once("&sign=").unwrap();
    let message = signer.message.borrow().clone().unwrap();
    assert_eq!(format!("&{message}"), payload);
}

#[test]
fn missing_required_field_omits_exactly_that_pair() {
    let signer = ConstSigner("sig");
    let full = populated_builder().build(&signer);

    let mut builder = populated_builder();
    builder.subject("");
    let partial = builder.build(&signer);

    assert_eq!(partial.order_info, full.order_info.replace("&subject=\"Annual pass\"", ""));
    assert_eq!(partial.omitted_required, vec!["subject"]);
    assert!(!partial.is_complete());
}

#[test]
fn missing_optional_field_omits_exactly_that_pair() {
    let signer = ConstSigner("sig");
    let full = populated_builder().build(&signer);

    let mut builder = populated_builder();
    builder.app_id("");
    let partial = builder.build(&signer);

    assert_eq!(partial.order_info, full.order_info.replace("&app_id=\"appid-001\"", ""));
    assert_eq!(partial.omitted_optional, vec!["app_id"]);
    assert!(partial.is_complete());
}

#[test]
fn legacy_policy_double_encodes_urls_on_the_wire() {
    let mut builder = populated_builder();
    builder.notify_url("http://a.com/cb?x=1&y=2");
    let report = builder.build(&ConstSigner("sig"));

    assert!(report.order_info.contains(
        "&notify_url=\"http%253A%252F%252Fa.com%252Fcb%253Fx%253D1%2526y%253D2\""
    ));
}

#[test]
fn single_encode_policy_emits_set_time_encoding() {
    let mut builder = populated_builder();
    builder
        .encoding_policy(UrlEncodingPolicy::SingleEncode)
        .notify_url("http://a.com/cb?x=1&y=2");
    let report = builder.build(&ConstSigner("sig"));

    assert!(report.order_info.contains("&notify_url=\"http%3A%2F%2Fa.com%2Fcb%3Fx%3D1%26y%3D2\""));
}

#[test]
fn unmutated_builder_builds_deterministically() {
    let signer = ConstSigner("sig");
    let builder = populated_builder();

    let first = builder.build(&signer);
    let second = builder.build(&signer);

    assert_eq!(first.order_info, second.order_info);
    assert_eq!(first.omitted_required, second.omitted_required);
    assert_eq!(first.omitted_optional, second.omitted_optional);
}

#[test]
fn fee_amount_and_preformatted_string_agree() {
    let signer = ConstSigner("sig");

    let mut via_amount = populated_builder();
    via_amount.total_fee_amount(1.2);
    let mut via_string = populated_builder();
    via_string.total_fee("1.20");

    assert_eq!(via_amount.build(&signer).order_info, via_string.build(&signer).order_info);
}

#[test]
fn signer_failure_degrades_to_omitted_sign_field() {
    let report = populated_builder().build(&FailingSigner);

    assert!(!report.order_info.contains("&sign=\""));
    assert!(report.order_info.ends_with("&sign_type=\"RSA\""));
    assert_eq!(report.omitted_required, vec!["sign"]);
}

#[test]
fn quotes_in_values_pass_through_unescaped() {
    // Legacy wire format: embedded quotes corrupt the pair boundaries and
    // are deliberately not escaped.
    let mut builder = populated_builder();
    builder.subject("say \"hi\"");
    let report = builder.build(&ConstSigner("sig"));

    assert!(report.order_info.contains("&subject=\"say \"hi\"\""));
}
