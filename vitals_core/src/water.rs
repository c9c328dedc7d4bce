//! Daily water-intake counter.
//!
//! One integer per calendar day, stored under a date-bearing key so the
//! count starts over each day without any reset logic. These keys are
//! independent of the profile and history and survive `clear_all_data`.

use crate::gateway::VitalsGateway;
use crate::store::KeyValueStore;
use crate::Result;
use chrono::NaiveDate;

/// Default daily goal, in glasses
pub const DAILY_WATER_GOAL: u32 = 8;

/// Store key for the given day, e.g. `water_Mon Oct 19 2026`
pub fn water_key(date: NaiveDate) -> String {
    format!("water_{}", date.format("%a %b %d %Y"))
}

impl<S: KeyValueStore> VitalsGateway<S> {
    /// Glasses logged on `date`. Absent or unparsable counts read as 0.
    pub fn water_count(&self, date: NaiveDate) -> u32 {
        let key = water_key(date);
        match self.store().get(&key) {
            Ok(current) => parse_count(&key, current.as_deref()),
            Err(e) => {
                tracing::warn!("Unable to read {}: {}. Treating as 0.", key, e);
                0
            }
        }
    }

    pub fn set_water_count(&mut self, date: NaiveDate, count: u32) -> Result<u32> {
        self.store_mut()
            .set(&water_key(date), &count.to_string())?;
        tracing::debug!("Water count for {} set to {}", date, count);
        Ok(count)
    }

    /// Adjust the day's count by `delta`, never going below zero
    pub fn add_water(&mut self, date: NaiveDate, delta: i64) -> Result<u32> {
        let key = water_key(date);
        let mut next = 0;
        self.store_mut().update(&key, |current| {
            let count = parse_count(&key, current.as_deref()) as i64;
            next = (count + delta).clamp(0, u32::MAX as i64) as u32;
            Ok(next.to_string())
        })?;
        tracing::debug!("Water count for {} set to {}", date, next);
        Ok(next)
    }
}

/// Absent or unparsable counts read as 0
fn parse_count(key: &str, raw: Option<&str>) -> u32 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}. Treating as 0.", key, e);
            0
        }),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_water_key_matches_date_string() {
        assert_eq!(water_key(day(19)), "water_Mon Oct 19 2026");
        assert_eq!(water_key(day(5)), "water_Mon Oct 05 2026");
    }

    #[test]
    fn test_count_is_per_day() {
        let mut gateway = VitalsGateway::new(MemoryStore::new());
        assert_eq!(gateway.water_count(day(19)), 0);

        gateway.add_water(day(19), 1).unwrap();
        gateway.add_water(day(19), 2).unwrap();

        assert_eq!(gateway.water_count(day(19)), 3);
        assert_eq!(gateway.water_count(day(20)), 0);
    }

    #[test]
    fn test_add_water_clamps_at_zero() {
        let mut gateway = VitalsGateway::new(MemoryStore::new());
        gateway.set_water_count(day(19), 2).unwrap();

        assert_eq!(gateway.add_water(day(19), -5).unwrap(), 0);
        assert_eq!(gateway.water_count(day(19)), 0);
    }

    #[test]
    fn test_garbage_count_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(&water_key(day(19)), "lots").unwrap();
        let gateway = VitalsGateway::new(store);
        assert_eq!(gateway.water_count(day(19)), 0);
    }

    #[test]
    fn test_add_water_over_garbage_starts_from_zero() {
        let mut store = MemoryStore::new();
        store.set(&water_key(day(19)), "lots").unwrap();
        let mut gateway = VitalsGateway::new(store);
        assert_eq!(gateway.add_water(day(19), 2).unwrap(), 2);
    }

    #[test]
    fn test_concurrent_add_water_loses_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_path_buf();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dir = dir.clone();
                std::thread::spawn(move || {
                    let mut gateway = VitalsGateway::new(FileStore::new(dir));
                    for _ in 0..20 {
                        gateway.add_water(day(19), 1).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let gateway = VitalsGateway::new(FileStore::new(dir));
        assert_eq!(gateway.water_count(day(19)), 160);
    }

    #[test]
    fn test_clear_all_data_keeps_water() {
        let mut gateway = VitalsGateway::new(MemoryStore::new());
        gateway.set_water_count(day(19), 4).unwrap();
        gateway.clear_all_data().unwrap();
        assert_eq!(gateway.water_count(day(19)), 4);
    }
}
