//! BMI engine.
//!
//! Pure functions from body measurements to a BMI value, its category
//! and a healthy-weight target. Every function is total over its numeric
//! inputs: undefined results are reported with sentinel values, never
//! with errors or panics.

use crate::{BmiCategory, HistoryRecord, TargetAction, UserProfile, WeightTarget};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// BMI used as the midpoint of the healthy range when deriving a target
pub const HEALTHY_BMI_TARGET: f64 = 22.0;

/// Differences within this many kg of the target recommend "maintain"
pub const MAINTAIN_DEADBAND_KG: f64 = 0.5;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

/// Round to one decimal place, halves away from zero
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute BMI from kilograms and centimeters, rounded to one decimal.
///
/// Returns `0.0` when `height_cm <= 0`, meaning "not computable".
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 || height_cm.is_nan() {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round_tenth(weight_kg / (height_m * height_m))
}

/// Classify a BMI value.
///
/// Bands are lower-inclusive, so 18.5, 25.0 and 30.0 belong to the
/// higher category.
pub fn category_of(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Weight implied by a BMI of 22 at the given height, and how far the
/// current weight is from it.
pub fn target_weight(height_cm: f64, current_weight_kg: f64) -> WeightTarget {
    let height_m = height_cm / 100.0;
    let target = round_tenth(HEALTHY_BMI_TARGET * (height_m * height_m));
    let diff = round_tenth(current_weight_kg - target);

    let action = if diff > MAINTAIN_DEADBAND_KG {
        TargetAction::Lose
    } else if diff < -MAINTAIN_DEADBAND_KG {
        TargetAction::Gain
    } else {
        TargetAction::Maintain
    };

    WeightTarget {
        target_weight: target,
        difference: diff.abs(),
        action,
    }
}

impl UserProfile {
    /// BMI of the profile's current measurements
    pub fn bmi(&self) -> f64 {
        compute_bmi(self.weight, self.height)
    }

    pub fn category(&self) -> BmiCategory {
        category_of(self.bmi())
    }

    pub fn weight_target(&self) -> WeightTarget {
        target_weight(self.height, self.weight)
    }
}

impl HistoryRecord {
    /// Snapshot the profile's weight, BMI and category at `at`
    pub fn capture(profile: &UserProfile, at: DateTime<Utc>) -> Self {
        let bmi = profile.bmi();
        Self {
            id: Uuid::new_v4().to_string(),
            date: at,
            weight: profile.weight,
            bmi,
            category: category_of(bmi),
        }
    }
}
