//! Order-info assembly for `mobile.securitypay.pay`.
//!
//! This module implements the gateway's order payload flow:
//! - accumulate merchant order fields
//! - render them as `&key="value"` pairs in the gateway's fixed order
//! - sign the rendered string via the injected [`crate::Signer`]
//! - append the trailing `sign` / `sign_type` fields
//!
//! Missing fields degrade to logged omissions on the [`BuildReport`]; the
//! only hard failures in the crate live in config construction and the
//! timeout formatter.

mod builder;
pub mod params;
mod policy;

pub use builder::{BuildReport, OrderInfoBuilder};
pub use policy::UrlEncodingPolicy;
