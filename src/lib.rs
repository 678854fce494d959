//! Client-side SDK for the Alipay mobile payment gateway
//! (`mobile.securitypay.pay`).
//!
//! The crate assembles the signed `&key="value"` order-info string the
//! gateway's mobile client expects:
//! - collect merchant order fields with [`OrderInfoBuilder`]
//! - render them in the gateway's fixed field order
//! - sign the rendered string through an injected [`Signer`]
//! - append the trailing `sign` / `sign_type` fields
//!
//! [`PayTimeout`] renders payment-expiry durations into the gateway's
//! timeout mini-language (`"15m"`, `"2h"`, `"1d"`, or the `"1c"` sentinel).
//!
//! The RSA primitive itself is not part of this crate; callers wrap their
//! signing facility in a [`Signer`] implementation. Everything here is pure
//! in-memory string assembly, no I/O.

pub mod config;
pub mod encode;
pub mod error;
pub mod order;
pub mod signer;
pub mod timeout;

pub use config::{MerchantConfig, RawMerchantConfig};
pub use error::Error;
pub use order::{BuildReport, OrderInfoBuilder, UrlEncodingPolicy};
pub use signer::Signer;
pub use timeout::PayTimeout;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
