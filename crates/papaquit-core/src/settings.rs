//! User settings: quit date and cigarette pricing.
//!
//! Exactly one active settings record exists at a time; re-saving
//! overwrites the previous record (the storage layer enforces that).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Cigarettes per pack when the user leaves the field at its default.
pub const DEFAULT_CIGARETTES_PER_PACK: u32 = 20;

/// The quit date plus the tobacco facts every derived metric depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// First smoke-free day of the current attempt.
    pub quit_date: NaiveDate,
    /// Cigarettes smoked per day before quitting.
    pub cigarettes_per_day: u32,
    /// Price of one pack, in yen.
    pub price_per_pack: u32,
    /// Cigarettes in one pack (usually 20).
    #[serde(default = "default_cigarettes_per_pack")]
    pub cigarettes_per_pack: u32,
}

fn default_cigarettes_per_pack() -> u32 {
    DEFAULT_CIGARETTES_PER_PACK
}

impl Settings {
    /// Reject configurations that would make the savings math meaningless.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if any count or price is zero.
    pub fn validate(&self) -> Result<()> {
        if self.cigarettes_per_day == 0 {
            return Err(CoreError::invalid(
                "cigarettes_per_day",
                "must be a positive number of cigarettes",
            ));
        }
        if self.price_per_pack == 0 {
            return Err(CoreError::invalid(
                "price_per_pack",
                "must be a positive price in yen",
            ));
        }
        if self.cigarettes_per_pack == 0 {
            return Err(CoreError::invalid(
                "cigarettes_per_pack",
                "must be a positive pack size",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn settings() -> Settings {
        Settings {
            quit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cigarettes_per_day: 20,
            price_per_pack: 600,
            cigarettes_per_pack: 20,
        }
    }

    #[test]
    fn valid_settings_pass() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn zero_pack_size_is_rejected() {
        let mut s = settings();
        s.cigarettes_per_pack = 0;
        let err = s.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfiguration {
                field: "cigarettes_per_pack",
                ..
            }
        ));
    }

    #[test]
    fn zero_daily_count_is_rejected() {
        let mut s = settings();
        s.cigarettes_per_day = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut s = settings();
        s.price_per_pack = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn pack_size_defaults_to_twenty_when_absent() {
        let s: Settings = serde_json::from_str(
            r#"{"quit_date":"2024-01-01","cigarettes_per_day":15,"price_per_pack":580}"#,
        )
        .unwrap();
        assert_eq!(s.cigarettes_per_pack, 20);
    }
}
