use serde::{Deserialize, Serialize};

use super::super::domain::EmploymentStatus;

/// Policy coefficients for capacity estimation.
///
/// The estimate is `floor(gross_income * income_multiplier * age_factor)`:
/// - `income_multiplier` reflects income reliability per employment category;
///   steadier categories lend against more multiples of income.
/// - `age_factor` is 1.0 through `taper_start_age`, then declines linearly to
///   `taper_floor` at `taper_end_age`, reflecting the shorter remaining
///   earning horizon of older applicants.
///
/// Every coefficient is a plain field so the formula can be audited and the
/// policy revised without touching the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPolicy {
    pub full_time_multiplier: f64,
    pub part_time_multiplier: f64,
    pub self_employed_multiplier: f64,
    pub casual_multiplier: f64,
    pub taper_start_age: i32,
    pub taper_end_age: i32,
    pub taper_floor: f64,
}

impl CapacityPolicy {
    pub fn income_multiplier(&self, status: EmploymentStatus) -> f64 {
        match status {
            EmploymentStatus::FullTime => self.full_time_multiplier,
            EmploymentStatus::PartTime => self.part_time_multiplier,
            EmploymentStatus::SelfEmployed => self.self_employed_multiplier,
            EmploymentStatus::Casual => self.casual_multiplier,
        }
    }

    /// Fraction of base capacity retained at a given age.
    pub fn age_factor(&self, age: i32) -> f64 {
        if age <= self.taper_start_age {
            return 1.0;
        }
        if age >= self.taper_end_age {
            return self.taper_floor;
        }

        let span = (self.taper_end_age - self.taper_start_age) as f64;
        let progressed = (age - self.taper_start_age) as f64;
        1.0 - (progressed / span) * (1.0 - self.taper_floor)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            full_time_multiplier: 5.0,
            part_time_multiplier: 4.0,
            self_employed_multiplier: 3.5,
            casual_multiplier: 3.0,
            taper_start_age: 55,
            taper_end_age: 75,
            taper_floor: 0.4,
        }
    }
}
