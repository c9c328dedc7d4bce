//! Derived views over BMI values and history: the gauge position, the
//! trend series and the shareable summary.

use crate::bmi::category_of;
use crate::{BmiCategory, HistoryRecord, UserProfile};
use chrono::{DateTime, Utc};
use std::fmt;

/// BMI shown at the left edge of the gauge
pub const GAUGE_MIN_BMI: f64 = 15.0;
/// BMI shown at the right edge of the gauge
pub const GAUGE_MAX_BMI: f64 = 40.0;

/// Position of `bmi` along the gauge, as a percentage clamped to 0..=100
pub fn gauge_percent(bmi: f64) -> f64 {
    let percent = (bmi - GAUGE_MIN_BMI) / (GAUGE_MAX_BMI - GAUGE_MIN_BMI) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// One point of the BMI trend
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    /// Short day label such as "Oct 19"
    pub label: String,
    pub date: DateTime<Utc>,
    pub bmi: f64,
    pub weight: f64,
}

/// History in chronological order (oldest first), ready for charting
pub fn trend_points(history: &[HistoryRecord]) -> Vec<TrendPoint> {
    history
        .iter()
        .rev()
        .map(|record| TrendPoint {
            label: record.date.format("%b %-d").to_string(),
            date: record.date,
            bmi: record.bmi,
            weight: record.weight,
        })
        .collect()
}

/// Name shown on a summary when the profile has none
pub const ANONYMOUS_NAME: &str = "Zenith Member";

/// A shareable snapshot of the current result
#[derive(Clone, Debug, PartialEq)]
pub struct ShareSummary {
    pub name: String,
    pub bmi: f64,
    pub category: BmiCategory,
    pub date: DateTime<Utc>,
}

impl ShareSummary {
    pub fn for_profile(profile: &UserProfile, date: DateTime<Utc>) -> Self {
        let bmi = profile.bmi();
        let name = if profile.name.trim().is_empty() {
            ANONYMOUS_NAME.to_string()
        } else {
            profile.name.trim().to_string()
        };

        Self {
            name,
            bmi,
            category: category_of(bmi),
            date,
        }
    }
}

impl fmt::Display for ShareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Zenith Wellness - Daily Performance Card")?;
        writeln!(f, "BMI:      {:.1} ({})", self.bmi, self.category)?;
        writeln!(f, "Athlete:  {}", self.name)?;
        write!(f, "Date:     {}", self.date.format("%b %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::default_profile;
    use chrono::TimeZone;

    fn record(id: &str, day: u32, bmi: f64) -> HistoryRecord {
        HistoryRecord {
            id: id.into(),
            date: Utc.with_ymd_and_hms(2026, 10, day, 9, 30, 0).unwrap(),
            weight: 70.0,
            bmi,
            category: category_of(bmi),
        }
    }

    #[test]
    fn test_gauge_percent() {
        assert_eq!(gauge_percent(15.0), 0.0);
        assert_eq!(gauge_percent(27.5), 50.0);
        assert_eq!(gauge_percent(40.0), 100.0);
        assert_eq!(gauge_percent(0.0), 0.0);
        assert_eq!(gauge_percent(55.0), 100.0);
    }

    #[test]
    fn test_trend_is_oldest_first() {
        let history = vec![record("b", 19, 24.0), record("a", 5, 24.6)];
        let points = trend_points(&history);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Oct 5");
        assert_eq!(points[0].bmi, 24.6);
        assert_eq!(points[1].label, "Oct 19");
    }

    #[test]
    fn test_trend_of_empty_history() {
        assert!(trend_points(&[]).is_empty());
    }

    #[test]
    fn test_share_summary_anonymous() {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let summary = ShareSummary::for_profile(&default_profile(), date);

        assert_eq!(summary.name, ANONYMOUS_NAME);
        assert_eq!(summary.category, BmiCategory::Normal);

        let text = summary.to_string();
        assert!(text.contains("BMI:      24.2 (Normal)"));
        assert!(text.contains("Oct 19, 2026"));
    }

    #[test]
    fn test_share_summary_uses_name() {
        let mut profile = default_profile();
        profile.name = " Ada ".into();
        let summary = ShareSummary::for_profile(&profile, Utc::now());
        assert_eq!(summary.name, "Ada");
    }
}
