use std::borrow::Cow;
use std::fmt;

/// Classifies errors for programmatic handling.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// A caller-supplied value was rejected by a range or format check.
    Validation,
    /// Percent-encoding failed, e.g. an unsupported charset name.
    Encoding,
    /// The injected signing primitive reported a failure.
    Signing,
}

/// Crate-wide error carrying a [`Kind`] and a human-readable message.
#[derive(Clone, Debug)]
pub struct Error {
    kind: Kind,
    message: Cow<'static, str>,
}

impl Error {
    pub(crate) fn new<M: Into<Cow<'static, str>>>(kind: Kind, message: M) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(Kind::Validation, message)
    }

    pub fn encoding<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(Kind::Encoding, message)
    }

    pub fn signing<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(Kind::Signing, message)
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
