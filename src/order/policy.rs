use crate::encode;

/// Append-time encoding policy for `notify_url` / `show_url`.
///
/// The reference mobile SDK percent-encodes these URLs twice: once when the
/// field is set and once more when the parameter string is rendered, and
/// deployed gateway integrations decode accordingly. `Legacy` keeps that
/// wire form and stays the default; `SingleEncode` emits the value encoded
/// exactly once.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UrlEncodingPolicy {
    /// Re-encode the stored (already encoded) value at append time.
    #[default]
    Legacy,
    /// Emit the stored value as-is, encoded exactly once at set time.
    SingleEncode,
}

impl UrlEncodingPolicy {
    /// Applies the append-time step to a value encoded at set time.
    pub(crate) fn render(self, stored: &str) -> String {
        match self {
            UrlEncodingPolicy::Legacy => encode::encode_utf8(stored),
            UrlEncodingPolicy::SingleEncode => stored.to_owned(),
        }
    }
}
