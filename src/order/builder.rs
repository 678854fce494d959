use rust_decimal::prelude::FromPrimitive as _;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, error, warn};

use crate::config::MerchantConfig;
use crate::encode::{self, DEFAULT_CHARSET};
use crate::order::UrlEncodingPolicy;
use crate::order::params;
use crate::signer::Signer;

const SERVICE_VALUE: &str = "mobile.securitypay.pay";
const PAYMENT_TYPE_VALUE: &str = "1";
const SIGN_TYPE_VALUE: &str = "RSA";

const FEE_SCALE: u32 = 2;

/// Accumulates order fields and renders the signed parameter string.
///
/// One instance per logical order. Setters may be chained; [`Self::build`]
/// renders from the current field state into a fresh string each call, so a
/// builder can be rebuilt after mutation and repeated builds of an unmutated
/// builder are identical whenever the injected signer is deterministic.
///
/// ```
/// use alipay_client_sdk::{MerchantConfig, OrderInfoBuilder, PayTimeout};
///
/// # fn demo(config: MerchantConfig, signer: &dyn alipay_client_sdk::Signer)
/// # -> alipay_client_sdk::Result<()> {
/// let mut builder = OrderInfoBuilder::new(config);
/// builder
///     .out_trade_no("20260829001")
///     .subject("Annual pass")
///     .body("Annual pass, valid 12 months")
///     .total_fee_amount(128.0)
///     .notify_url("https://shop.example/alipay/callback")
///     .it_b_pay(&PayTimeout::new(30).minute()?);
/// let report = builder.build(signer);
/// assert!(report.is_complete());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct OrderInfoBuilder {
    config: MerchantConfig,
    encoding_policy: UrlEncodingPolicy,
    log_enabled: bool,
    out_trade_no: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    total_fee: Option<String>,
    /// Stored percent-encoded (set-time pass).
    notify_url: Option<String>,
    it_b_pay: Option<String>,
    /// Stored percent-encoded (set-time pass).
    show_url: Option<String>,
    app_id: Option<String>,
    app_env: Option<String>,
    extern_token: Option<String>,
}

impl OrderInfoBuilder {
    #[must_use]
    pub fn new(config: MerchantConfig) -> Self {
        Self {
            config,
            encoding_policy: UrlEncodingPolicy::default(),
            log_enabled: true,
            out_trade_no: None,
            subject: None,
            body: None,
            total_fee: None,
            notify_url: None,
            it_b_pay: None,
            show_url: None,
            app_id: None,
            app_env: None,
            extern_token: None,
        }
    }

    /// Merchant-unique order number. Required.
    pub fn out_trade_no(&mut self, out_trade_no: &str) -> &mut Self {
        self.out_trade_no = Some(out_trade_no.to_owned());
        self
    }

    /// Product / order title. Required.
    pub fn subject(&mut self, subject: &str) -> &mut Self {
        self.subject = Some(subject.to_owned());
        self
    }

    /// Order description. Required.
    pub fn body(&mut self, body: &str) -> &mut Self {
        self.body = Some(body.to_owned());
        self
    }

    /// Order total as a pre-formatted decimal string with two fraction
    /// digits, e.g. `"1.20"`. Required (or [`Self::total_fee_amount`]).
    /// The value is stored as given; a malformed literal is the caller's
    /// contract violation and reaches the wire verbatim.
    pub fn total_fee(&mut self, total_fee: &str) -> &mut Self {
        self.total_fee = Some(total_fee.to_owned());
        self
    }

    /// Order total as an amount, formatted to exactly two fraction digits
    /// with half-away-from-zero rounding: `1.2` stores `"1.20"`.
    pub fn total_fee_amount(&mut self, total_fee: f64) -> &mut Self {
        match Decimal::from_f64(total_fee) {
            Some(fee) => {
                let mut fee =
                    fee.round_dp_with_strategy(FEE_SCALE, RoundingStrategy::MidpointAwayFromZero);
                fee.rescale(FEE_SCALE);
                self.total_fee = Some(fee.to_string());
            }
            None => {
                error!(total_fee, "total fee is not a representable decimal amount");
                self.total_fee = None;
            }
        }
        self
    }

    /// Async-notification callback URL, percent-encoded at set time (UTF-8).
    pub fn notify_url(&mut self, notify_url: &str) -> &mut Self {
        self.notify_url_with_charset(notify_url, DEFAULT_CHARSET)
    }

    /// [`Self::notify_url`] with an explicit charset name. An unsupported
    /// charset drops the value (logged, not propagated).
    pub fn notify_url_with_charset(&mut self, notify_url: &str, charset: &str) -> &mut Self {
        self.notify_url = encode_field(params::NOTIFY_URL, notify_url, charset);
        self
    }

    /// Unpaid-order timeout in the gateway mini-language; see
    /// [`crate::PayTimeout`].
    pub fn it_b_pay(&mut self, it_b_pay: &str) -> &mut Self {
        self.it_b_pay = Some(it_b_pay.to_owned());
        self
    }

    /// Product display URL, percent-encoded at set time (UTF-8).
    pub fn show_url(&mut self, show_url: &str) -> &mut Self {
        self.show_url_with_charset(show_url, DEFAULT_CHARSET)
    }

    /// [`Self::show_url`] with an explicit charset name. An unsupported
    /// charset drops the value (logged, not propagated).
    pub fn show_url_with_charset(&mut self, show_url: &str, charset: &str) -> &mut Self {
        self.show_url = encode_field(params::SHOW_URL, show_url, charset);
        self
    }

    /// Client application identifier.
    pub fn app_id(&mut self, app_id: &str) -> &mut Self {
        self.app_id = Some(app_id.to_owned());
        self
    }

    /// Client environment tag, e.g. `system=android^version=3.0.1.2`.
    pub fn app_env(&mut self, app_env: &str) -> &mut Self {
        self.app_env = Some(app_env.to_owned());
        self
    }

    /// Open-platform access token.
    pub fn extern_token(&mut self, extern_token: &str) -> &mut Self {
        self.extern_token = Some(extern_token.to_owned());
        self
    }

    /// Gates the warn/debug logs around optional-field omission and the
    /// rendered payload dump. Error logs are always emitted. On by default,
    /// matching the reference SDK.
    pub fn log_enabled(&mut self, log_enabled: bool) -> &mut Self {
        self.log_enabled = log_enabled;
        self
    }

    /// Append-time encoding policy for the URL-valued fields. Defaults to
    /// [`UrlEncodingPolicy::Legacy`] for wire compatibility.
    pub fn encoding_policy(&mut self, encoding_policy: UrlEncodingPolicy) -> &mut Self {
        self.encoding_policy = encoding_policy;
        self
    }

    /// Renders the order-info string and signs it.
    ///
    /// Field order is fixed by the gateway: the required fields (partner,
    /// seller_id, out_trade_no, subject, body, total_fee, service,
    /// _input_charset, payment_type), then the optional fields (notify_url,
    /// it_b_pay, show_url, app_id, appenv, extern_token), then sign and
    /// sign_type. The signer receives the accumulated string with its
    /// leading `&` stripped, before the sign fields are appended.
    ///
    /// Never fails: an empty required field or a signer/encoding failure
    /// degrades to a logged omission recorded on the returned
    /// [`BuildReport`], and the (gateway-invalid) string is still returned.
    /// Values are emitted verbatim between double quotes; a `"` inside a
    /// value is not escaped. Both are the reference SDK's legacy wire
    /// behavior, preserved deliberately.
    pub fn build(&self, signer: &dyn Signer) -> BuildReport {
        let mut report = BuildReport::new();

        self.append_required(params::PARTNER, &self.config.partner_id, &mut report);
        self.append_required(params::SELLER_ID, &self.config.seller_id, &mut report);
        self.append_required(
            params::OUT_TRADE_NO,
            self.out_trade_no.as_deref().unwrap_or_default(),
            &mut report,
        );
        self.append_required(
            params::SUBJECT,
            self.subject.as_deref().unwrap_or_default(),
            &mut report,
        );
        self.append_required(
            params::BODY,
            self.body.as_deref().unwrap_or_default(),
            &mut report,
        );
        self.append_required(
            params::TOTAL_FEE,
            self.total_fee.as_deref().unwrap_or_default(),
            &mut report,
        );
        self.append_required(params::SERVICE, SERVICE_VALUE, &mut report);
        self.append_required(params::INPUT_CHARSET, DEFAULT_CHARSET, &mut report);
        self.append_required(params::PAYMENT_TYPE, PAYMENT_TYPE_VALUE, &mut report);

        let notify_url = self.rendered_url(self.notify_url.as_deref());
        self.append_optional(params::NOTIFY_URL, notify_url.as_deref(), &mut report);
        self.append_optional(params::IT_B_PAY, self.it_b_pay.as_deref(), &mut report);
        let show_url = self.rendered_url(self.show_url.as_deref());
        self.append_optional(params::SHOW_URL, show_url.as_deref(), &mut report);
        self.append_optional(params::APP_ID, self.app_id.as_deref(), &mut report);
        self.append_optional(params::APP_ENV, self.app_env.as_deref(), &mut report);
        self.append_optional(params::EXTERN_TOKEN, self.extern_token.as_deref(), &mut report);

        let signature = self.signature(signer, &report.order_info);
        self.append_required(params::SIGN, &signature, &mut report);
        self.append_required(params::SIGN_TYPE, SIGN_TYPE_VALUE, &mut report);

        if self.log_enabled {
            debug!(order_info = %report.order_info, "order info rendered");
        }
        report
    }

    fn append_required(&self, name: &'static str, value: &str, report: &mut BuildReport) {
        if value.is_empty() {
            error!(field = name, "required field is empty, omitted from order info");
            report.omitted_required.push(name);
            return;
        }
        push_param(&mut report.order_info, name, value);
    }

    fn append_optional(&self, name: &'static str, value: Option<&str>, report: &mut BuildReport) {
        match value {
            Some(value) if !value.is_empty() => push_param(&mut report.order_info, name, value),
            _ => {
                if self.log_enabled {
                    warn!(field = name, "optional field is empty, omitted from order info");
                }
                report.omitted_optional.push(name);
            }
        }
    }

    fn rendered_url(&self, stored: Option<&str>) -> Option<String> {
        stored.map(|value| self.encoding_policy.render(value))
    }

    fn signature(&self, signer: &dyn Signer, rendered: &str) -> String {
        let message = rendered.strip_prefix('&').unwrap_or(rendered);
        match signer.sign(message, &self.config.private_key) {
            Ok(signature) => encode::encode_utf8(&signature),
            Err(err) => {
                error!("signing failed: {err}");
                String::new()
            }
        }
    }
}

/// Output of [`OrderInfoBuilder::build`]: the rendered string plus every
/// field omitted along the way, so callers and tests can check for
/// degradation without parsing logs.
#[derive(Clone, Debug)]
pub struct BuildReport {
    /// Full parameter string, leading `&` included.
    pub order_info: String,
    /// Required fields skipped because their value was empty, `sign`
    /// included when the signer failed.
    pub omitted_required: Vec<&'static str>,
    /// Optional fields skipped because they were never set, set empty, or
    /// dropped by an encoding failure.
    pub omitted_optional: Vec<&'static str>,
}

impl BuildReport {
    fn new() -> Self {
        Self {
            order_info: String::new(),
            omitted_required: Vec::new(),
            omitted_optional: Vec::new(),
        }
    }

    /// True when every required field, signature included, made the wire.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.omitted_required.is_empty()
    }
}

fn push_param(out: &mut String, name: &str, value: &str) {
    out.push('&');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

fn encode_field(name: &'static str, value: &str, charset: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match encode::encode(value, charset) {
        Ok(encoded) => Some(encoded),
        Err(err) => {
            error!(field = name, charset, "dropping value, percent-encoding failed: {err}");
            None
        }
    }
}
