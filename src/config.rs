use secrecy::ExposeSecret as _;
use secrecy::SecretString;

use crate::Result;
use crate::error::Error;

/// Raw merchant values typically passed from app-level configuration.
#[derive(Clone, Debug)]
pub struct RawMerchantConfig {
    pub partner_id: String,
    pub seller_id: String,
    pub private_key: SecretString,
}

/// Validated merchant identity injected into [`crate::OrderInfoBuilder`].
///
/// Replaces the ambient key-store globals of the reference mobile SDK so
/// builders can be constructed with fake identifiers in tests.
#[derive(Clone, Debug)]
pub struct MerchantConfig {
    /// Gateway partner account, the 2088-prefixed 16-digit number assigned
    /// at sign-up. Emitted as the `partner` field.
    pub partner_id: String,
    /// Receiving account (email, phone number, or the partner id itself).
    /// Emitted as the `seller_id` field.
    pub seller_id: String,
    /// RSA private key material handed to the injected [`crate::Signer`].
    pub private_key: SecretString,
}

impl MerchantConfig {
    pub fn from_raw(raw: RawMerchantConfig) -> Result<Self> {
        Self::new(raw.partner_id, raw.seller_id, raw.private_key)
    }

    pub fn new(partner_id: String, seller_id: String, private_key: SecretString) -> Result<Self> {
        if partner_id.is_empty() {
            return Err(Error::validation(
                "merchant config requires a non-empty partner id",
            ));
        }
        if seller_id.is_empty() {
            return Err(Error::validation(
                "merchant config requires a non-empty seller id",
            ));
        }
        if private_key.expose_secret().is_empty() {
            return Err(Error::validation(
                "merchant config requires non-empty private key material",
            ));
        }

        Ok(Self {
            partner_id,
            seller_id,
            private_key,
        })
    }
}
