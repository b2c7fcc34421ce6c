//! Limits for the forecast request controls.

use chrono::NaiveDate;

pub struct ControlLimits {
    pub months_min: u32,
    pub months_max: u32,
    /// Earliest selectable start month (dataset coverage begins here).
    pub earliest: (i32, u32),
    /// Latest selectable start month.
    pub latest: (i32, u32),
}

pub const CONTROLS: ControlLimits = ControlLimits {
    months_min: 1,
    months_max: 36,
    earliest: (2008, 1),
    latest: (2025, 5),
};

impl ControlLimits {
    pub fn earliest_date(&self) -> NaiveDate {
        let (year, month) = self.earliest;
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid earliest control date")
    }

    pub fn latest_date(&self) -> NaiveDate {
        let (year, month) = self.latest;
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid latest control date")
    }

    pub fn clamp_day(&self, day: NaiveDate) -> NaiveDate {
        day.clamp(self.earliest_date(), self.latest_date())
    }

    pub fn clamp_months(&self, months: u32) -> u32 {
        months.clamp(self.months_min, self.months_max)
    }
}
