//! Mortality/survival probability table with boundary-clamped lookup
//!
//! The table maps an integer age to an annual (qx, px) pair, where qx is the
//! probability of death within the year and px the probability of survival.
//! The default data replicates the lookup sheet of the Excel model: ages
//! 20-73 in bands that share one pair across a contiguous age range, with
//! mortality fixed at zero from age 60 onward. No interpolation between ages.

use std::collections::BTreeMap;

/// Annual (death, survival) probabilities keyed by integer age.
///
/// Each run builds its own table value, so concurrent runs never share
/// mutable state.
#[derive(Debug, Clone)]
pub struct ProbabilityTable {
    entries: BTreeMap<i32, (f64, f64)>,
}

/// Default bands as (first age, last age, qx, px), both ages inclusive.
///
/// The irregular singleton bands (25, 32, 45) and the 0.001491/0.001492
/// split across ages 26-34 are carried over from the Excel lookup sheet
/// as-is.
const DEFAULT_BANDS: &[(i32, i32, f64, f64)] = &[
    (20, 24, 0.001152, 0.998848),
    (25, 25, 0.001413, 0.998587),
    (26, 28, 0.001491, 0.998509),
    (29, 31, 0.001492, 0.998509),
    (32, 32, 0.001491, 0.998509),
    (33, 34, 0.001492, 0.998509),
    (35, 39, 0.002290, 0.997710),
    (40, 44, 0.003211, 0.996789),
    (45, 45, 0.004627, 0.995374),
    (46, 49, 0.004748, 0.995252),
    (50, 54, 0.007059, 0.992941),
    (55, 59, 0.010286, 0.989714),
    (60, 73, 0.000000, 1.000000),
];

impl ProbabilityTable {
    /// Build the default table matching the Excel lookup sheet.
    pub fn default_table() -> Self {
        Self::from_bands(DEFAULT_BANDS)
    }

    /// Build a table from inclusive (first age, last age, qx, px) bands.
    pub fn from_bands(bands: &[(i32, i32, f64, f64)]) -> Self {
        let mut entries = BTreeMap::new();
        for &(first, last, qx, px) in bands {
            for age in first..=last {
                entries.insert(age, (qx, px));
            }
        }
        Self { entries }
    }

    /// Look up the (qx, px) pair for an age.
    ///
    /// Never fails: an exact key returns its pair, an age below the minimum
    /// key clamps to the minimum key's pair, and any other miss clamps to
    /// the maximum key's pair. An empty table behaves as "no mortality".
    pub fn lookup(&self, age: i32) -> (f64, f64) {
        if let Some(&pair) = self.entries.get(&age) {
            return pair;
        }
        let Some((&min_age, &min_pair)) = self.entries.iter().next() else {
            return (0.0, 1.0);
        };
        if age < min_age {
            return min_pair;
        }
        self.entries
            .iter()
            .next_back()
            .map(|(_, &pair)| pair)
            .unwrap_or((0.0, 1.0))
    }

    /// Number of ages with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_spans_20_to_73() {
        let table = ProbabilityTable::default_table();
        assert_eq!(table.len(), 54);
    }

    #[test]
    fn test_band_constant_probabilities() {
        let table = ProbabilityTable::default_table();
        // Every age in the 50-54 band shares one pair
        for age in 50..=54 {
            assert_eq!(table.lookup(age), (0.007059, 0.992941));
        }
        // Band edge: 55 belongs to the next band
        assert_eq!(table.lookup(55), (0.010286, 0.989714));
    }

    #[test]
    fn test_singleton_bands() {
        let table = ProbabilityTable::default_table();
        assert_eq!(table.lookup(25), (0.001413, 0.998587));
        assert_eq!(table.lookup(45), (0.004627, 0.995374));
        // Age 32 dips back to 0.001491 between the 0.001492 bands
        assert_eq!(table.lookup(32), (0.001491, 0.998509));
        assert_eq!(table.lookup(33), (0.001492, 0.998509));
    }

    #[test]
    fn test_clamp_below_minimum() {
        let table = ProbabilityTable::default_table();
        assert_eq!(table.lookup(19), table.lookup(20));
        assert_eq!(table.lookup(0), table.lookup(20));
        assert_eq!(table.lookup(-5), table.lookup(20));
    }

    #[test]
    fn test_clamp_above_maximum() {
        let table = ProbabilityTable::default_table();
        assert_eq!(table.lookup(74), (0.0, 1.0));
        assert_eq!(table.lookup(120), (0.0, 1.0));
    }

    #[test]
    fn test_zero_mortality_from_sixty() {
        let table = ProbabilityTable::default_table();
        for age in 60..=73 {
            assert_eq!(table.lookup(age), (0.0, 1.0));
        }
    }

    #[test]
    fn test_in_range_gap_clamps_to_maximum() {
        // Sparse custom table: a missing age inside the range falls through
        // to the maximum key, matching the legacy lookup
        let table = ProbabilityTable::from_bands(&[
            (30, 30, 0.001, 0.999),
            (40, 40, 0.003, 0.997),
        ]);
        assert_eq!(table.lookup(35), (0.003, 0.997));
    }

    #[test]
    fn test_empty_table_is_safe() {
        let table = ProbabilityTable::from_bands(&[]);
        assert!(table.is_empty());
        assert_eq!(table.lookup(40), (0.0, 1.0));
    }
}
