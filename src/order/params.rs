//! Wire parameter names of the `mobile.securitypay.pay` interface.
//!
//! Fixed tokens from the gateway's parameter table. [`super::OrderInfoBuilder`]
//! emits them in the gateway's documented order.

/// Interface name, fixed to `mobile.securitypay.pay`.
pub const SERVICE: &str = "service";

/// Partner identity: the 2088-prefixed 16-digit account number assigned when
/// signing up with the gateway.
pub const PARTNER: &str = "partner";

/// Charset of the merchant input, fixed to `utf-8`.
pub const INPUT_CHARSET: &str = "_input_charset";

/// Signature algorithm tag; only RSA is supported.
pub const SIGN_TYPE: &str = "sign_type";

/// Signature over the rendered parameter string.
pub const SIGN: &str = "sign";

/// Async-notification callback URL on the merchant site, called by the
/// gateway's servers. URL-encoded.
pub const NOTIFY_URL: &str = "notify_url";

/// Client application identifier.
pub const APP_ID: &str = "app_id";

/// Client environment tag, by convention
/// `system=<platform>^version=<app version>`, e.g.
/// `system=android^version=3.0.1.2`.
pub const APP_ENV: &str = "appenv";

/// Merchant-unique order number.
pub const OUT_TRADE_NO: &str = "out_trade_no";

/// Product / order title, up to 128 characters.
pub const SUBJECT: &str = "subject";

/// Payment type; defaults to `1` (product purchase).
pub const PAYMENT_TYPE: &str = "payment_type";

/// Receiving account of the merchant: email, phone number, or the
/// [`PARTNER`] id.
pub const SELLER_ID: &str = "seller_id";

/// Order total in CNY, range `[0.01, 100000000.00]`, exactly two fraction
/// digits.
pub const TOTAL_FEE: &str = "total_fee";

/// Free-form order description; for multi-product orders, concatenate the
/// per-product descriptions into one string.
pub const BODY: &str = "body";

/// Unpaid-order timeout in the gateway mini-language (`15m`, `2h`, `1d`,
/// `1c`); once exceeded the order is closed automatically. Rendered by
/// [`crate::PayTimeout`].
pub const IT_B_PAY: &str = "it_b_pay";

/// Product display URL. URL-encoded.
pub const SHOW_URL: &str = "show_url";

/// Access token from the open platform granting the merchant time-limited
/// access to gateway services on the payer's account.
pub const EXTERN_TOKEN: &str = "extern_token";
