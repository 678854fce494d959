//! Payment-expiry rendering for the `it_b_pay` parameter.

use crate::Result;
use crate::error::Error;

const UNIT_MINUTE: &str = "m";
const UNIT_HOUR: &str = "h";
const UNIT_DAY: &str = "d";

/// Renders unpaid-order timeouts into the gateway mini-language.
///
/// The gateway accepts 1 minute up to a 15-day horizon; the per-unit ceilings
/// (21600 minutes, 360 hours, 15 days) are all that same horizon. Fractional
/// durations are not representable: express 1.5h as `PayTimeout::new(90)`
/// minutes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PayTimeout {
    value: i32,
}

impl PayTimeout {
    /// Close the order at the end of the calendar day it was created on,
    /// regardless of creation time.
    pub const CURRENT_DAY: &'static str = "1c";

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Renders minutes, e.g. `"15m"`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the value is outside `[1, 21600]`.
    pub fn minute(self) -> Result<String> {
        self.render(UNIT_MINUTE, 21_600)
    }

    /// Renders hours, e.g. `"2h"`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the value is outside `[1, 360]`.
    pub fn hour(self) -> Result<String> {
        self.render(UNIT_HOUR, 360)
    }

    /// Renders days, e.g. `"1d"`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the value is outside `[1, 15]`.
    pub fn day(self) -> Result<String> {
        self.render(UNIT_DAY, 15)
    }

    fn render(self, unit: &str, max: i32) -> Result<String> {
        if self.value < 1 || self.value > max {
            return Err(Error::validation(format!(
                "invalid timeout value {}: expected within [1{unit}, {max}{unit}]",
                self.value
            )));
        }
        Ok(format!("{}{unit}", self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::PayTimeout;
    use crate::error::Kind;

    #[test]
    fn minute_bounds_are_inclusive() {
        assert_eq!(PayTimeout::new(1).minute().unwrap(), "1m");
        assert_eq!(PayTimeout::new(21_600).minute().unwrap(), "21600m");
        assert_eq!(PayTimeout::new(0).minute().unwrap_err().kind(), Kind::Validation);
        assert_eq!(PayTimeout::new(21_601).minute().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn hour_bounds_are_inclusive() {
        assert_eq!(PayTimeout::new(1).hour().unwrap(), "1h");
        assert_eq!(PayTimeout::new(360).hour().unwrap(), "360h");
        assert_eq!(PayTimeout::new(361).hour().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn day_bounds_are_inclusive() {
        assert_eq!(PayTimeout::new(1).day().unwrap(), "1d");
        assert_eq!(PayTimeout::new(15).day().unwrap(), "15d");
        assert_eq!(PayTimeout::new(16).day().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(PayTimeout::new(-5).minute().is_err());
    }

    #[test]
    fn current_day_sentinel() {
        assert_eq!(PayTimeout::CURRENT_DAY, "1c");
    }

    #[test]
    fn range_error_names_value_and_bounds() {
        let err = PayTimeout::new(16).day().unwrap_err();
        assert!(err.message().contains("16"));
        assert!(err.message().contains("[1d, 15d]"));
    }
}
