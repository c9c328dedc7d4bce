//! Core domain types for the Vitals tracker.
//!
//! This module defines the records that flow between the BMI engine,
//! the persistence gateway and the command line:
//! - The user profile and its enumerations
//! - History records (frozen BMI snapshots)
//! - Derived, never-persisted values (weight target, imperial view)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Types
// ============================================================================

/// Self-reported gender. Informational only, never used in a calculation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.write_str(s)
    }
}

/// Display preference for measurements.
///
/// Storage is always metric; this only selects how values are shown.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

/// The single user profile of an installation.
///
/// `height` is centimeters and `weight` is kilograms, whatever the
/// `unit_system` says.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub unit_system: UnitSystem,
}

// ============================================================================
// BMI Types
// ============================================================================

/// BMI classification bands
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Human-readable label, identical to the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended direction of weight change
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetAction {
    Lose,
    Gain,
    Maintain,
}

impl fmt::Display for TargetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetAction::Lose => f.write_str("lose"),
            TargetAction::Gain => f.write_str("gain"),
            TargetAction::Maintain => f.write_str("maintain"),
        }
    }
}

/// Healthy-BMI weight target derived from the current profile. Never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightTarget {
    pub target_weight: f64,
    /// Absolute distance from the target, kg
    pub difference: f64,
    pub action: TargetAction,
}

// ============================================================================
// Unit View Types
// ============================================================================

/// Imperial rendition of a height/weight pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Imperial {
    pub feet: f64,
    pub inches: f64,
    pub pounds: f64,
}

/// Metric height/weight pair, unrounded
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub cm: f64,
    pub kg: f64,
}

// ============================================================================
// History Types
// ============================================================================

/// A logged BMI measurement.
///
/// Weight, BMI and category are frozen at the time of logging and are
/// never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    /// Opaque identity token, used only to tell records apart
    pub id: String,
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}
