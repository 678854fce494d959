use secrecy::SecretString;

use crate::Result;

/// Seam for the gateway's signature primitive.
///
/// The SDK performs no cryptography itself; callers wrap their RSA facility
/// in an implementation and inject it at build time. The wire `sign_type` is
/// fixed to `RSA`, so the produced signature must verify under the merchant's
/// RSA public key registered with the gateway.
pub trait Signer {
    /// Signs `message` (the rendered parameter string with its leading `&`
    /// stripped) with `private_key`, returning the signature in the textual
    /// form the gateway expects (typically base64). The builder
    /// percent-encodes the returned value before putting it on the wire.
    ///
    /// # Errors
    ///
    /// Implementations report failures with [`crate::error::Kind::Signing`];
    /// the builder degrades a failed signature to an omitted `sign` field
    /// rather than aborting the build.
    fn sign(&self, message: &str, private_key: &SecretString) -> Result<String>;
}
