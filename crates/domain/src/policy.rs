// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Issuance policy configuration.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Studio-wide settings consulted when issuing passes.
///
/// Hosts typically deserialize this from their own configuration; missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuancePolicy {
    /// Length in days of the validity window of fixed-window products.
    pub validity_days: u32,
    /// How many days before today a pass may still start.
    pub past_start_tolerance_days: u32,
    /// IANA timezone the studio's calendar runs in.
    pub timezone: String,
}

impl Default for IssuancePolicy {
    fn default() -> Self {
        Self {
            validity_days: 28,
            past_start_tolerance_days: 1,
            timezone: String::from("UTC"),
        }
    }
}

impl IssuancePolicy {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz, DomainError> {
        self.timezone
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(self.timezone.clone()))
    }

    /// The studio's local calendar date at instant `now`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the configured zone is unknown.
    pub fn today(&self, now: DateTime<Utc>) -> Result<NaiveDate, DomainError> {
        let tz: Tz = self.tz()?;
        Ok(now.with_timezone(&tz).date_naive())
    }

    /// The earliest start date accepted when issuing on `today`.
    #[must_use]
    pub fn earliest_start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(chrono::Days::new(u64::from(self.past_start_tolerance_days)))
            .unwrap_or(NaiveDate::MIN)
    }
}
