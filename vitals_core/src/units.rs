//! Metric/imperial conversion.
//!
//! Profiles are stored in centimeters and kilograms. Imperial values are
//! a view computed on demand and converted back (rounded to whole cm and
//! kg) when the user edits in imperial.

use crate::{Imperial, Metric, UserProfile};

pub const CM_PER_INCH: f64 = 2.54;
pub const LBS_PER_KG: f64 = 2.20462;
const INCHES_PER_FOOT: f64 = 12.0;

/// Convert centimeters and kilograms to whole feet, inches and pounds.
///
/// Inches that round up to 12 are carried into the next foot, so the
/// result always has `inches < 12` for non-negative input.
pub fn metric_to_imperial(cm: f64, kg: f64) -> Imperial {
    let total_inches = cm / CM_PER_INCH;
    let mut feet = (total_inches / INCHES_PER_FOOT).floor();
    let mut inches = (total_inches % INCHES_PER_FOOT).round();
    if inches >= INCHES_PER_FOOT {
        feet += 1.0;
        inches -= INCHES_PER_FOOT;
    }

    Imperial {
        feet,
        inches,
        pounds: (kg * LBS_PER_KG).round(),
    }
}

/// Convert feet, inches and pounds to centimeters and kilograms, unrounded
pub fn imperial_to_metric(feet: f64, inches: f64, pounds: f64) -> Metric {
    Metric {
        cm: (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH,
        kg: pounds / LBS_PER_KG,
    }
}

impl UserProfile {
    /// Imperial view of the stored measurements
    pub fn imperial(&self) -> Imperial {
        metric_to_imperial(self.height, self.weight)
    }

    /// Store imperial input as whole centimeters and kilograms
    pub fn apply_imperial(&mut self, feet: f64, inches: f64, pounds: f64) {
        let metric = imperial_to_metric(feet, inches, pounds);
        self.height = metric.cm.round();
        self.weight = metric.kg.round();
    }
}
