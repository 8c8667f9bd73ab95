//! Weight tables for quote pricing.
//!
//! Each table maps one raw input dimension to a dimensionless multiplier
//! applied to the base rate. Lookups are total: a value outside every tier
//! resolves to the table's fallback weight.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Service location relative to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Near,
    Remote,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Near => "Near",
            Location::Remote => "Remote",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inclusive step of a weight table
#[derive(Debug, Clone)]
pub struct WeightTier {
    pub range: RangeInclusive<u32>,
    pub weight: Decimal,
}

/// Ordered step function with an explicit fallback
#[derive(Debug, Clone)]
pub struct WeightTable {
    pub name: &'static str,
    pub tiers: &'static [WeightTier],
    pub fallback: Decimal,
}

impl WeightTable {
    /// Resolve the weight for `value`, first matching tier wins.
    pub fn resolve(&self, value: u32) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.range.contains(&value))
            .map(|tier| tier.weight)
            .unwrap_or(self.fallback)
    }
}

/// Active member count weights.
///
/// NOTE: counts above 40000 fall back to 1.0, below the 1.8 of the last
/// tier. This is kept as-is until product decides whether the last tier
/// should extend or such requests should be rejected.
pub const MEMBER_WEIGHTS: WeightTable = WeightTable {
    name: "members",
    tiers: &[
        WeightTier { range: 0..=50, weight: dec!(1.0) },
        WeightTier { range: 51..=100, weight: dec!(1.1) },
        WeightTier { range: 101..=200, weight: dec!(1.2) },
        WeightTier { range: 201..=500, weight: dec!(1.3) },
        WeightTier { range: 501..=1000, weight: dec!(1.4) },
        WeightTier { range: 1001..=5000, weight: dec!(1.5) },
        WeightTier { range: 5001..=10000, weight: dec!(1.6) },
        WeightTier { range: 10001..=20000, weight: dec!(1.7) },
        WeightTier { range: 20001..=40000, weight: dec!(1.8) },
    ],
    fallback: dec!(1.0),
};

/// Weekly visit frequency weights. Six or more visits (and zero) hit the fallback.
pub const VISIT_WEIGHTS: WeightTable = WeightTable {
    name: "weekly_visits",
    tiers: &[
        WeightTier { range: 1..=1, weight: dec!(1.0) },
        WeightTier { range: 2..=3, weight: dec!(1.15) },
        WeightTier { range: 4..=5, weight: dec!(1.35) },
    ],
    fallback: dec!(1.45),
};

/// Hours per visit weights. Seventeen hours or more hit the fallback.
pub const HOUR_WEIGHTS: WeightTable = WeightTable {
    name: "hours_per_visit",
    tiers: &[
        WeightTier { range: 0..=2, weight: dec!(1.0) },
        WeightTier { range: 3..=4, weight: dec!(1.2) },
        WeightTier { range: 5..=8, weight: dec!(1.4) },
        WeightTier { range: 9..=16, weight: dec!(1.6) },
    ],
    fallback: dec!(1.8),
};

pub const NEAR_LOCATION_WEIGHT: Decimal = dec!(1.0);
pub const REMOTE_LOCATION_WEIGHT: Decimal = dec!(1.35);

/// Weight for the number of active members
pub fn member_weight(members: u32) -> Decimal {
    MEMBER_WEIGHTS.resolve(members)
}

/// Weight for the number of visits per week
pub fn visit_weight(weekly_visits: u32) -> Decimal {
    VISIT_WEIGHTS.resolve(weekly_visits)
}

/// Weight for the length of one visit in hours
pub fn hour_weight(hours_per_visit: u32) -> Decimal {
    HOUR_WEIGHTS.resolve(hours_per_visit)
}

/// Weight for the service location
pub fn location_weight(location: Location) -> Decimal {
    match location {
        Location::Near => NEAR_LOCATION_WEIGHT,
        Location::Remote => REMOTE_LOCATION_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== member_weight tests ====================

    #[test]
    fn test_member_weight_tier_boundaries() {
        let cases = [
            (1, dec!(1.0)),
            (50, dec!(1.0)),
            (51, dec!(1.1)),
            (100, dec!(1.1)),
            (101, dec!(1.2)),
            (200, dec!(1.2)),
            (201, dec!(1.3)),
            (500, dec!(1.3)),
            (501, dec!(1.4)),
            (1000, dec!(1.4)),
            (1001, dec!(1.5)),
            (5000, dec!(1.5)),
            (5001, dec!(1.6)),
            (10000, dec!(1.6)),
            (10001, dec!(1.7)),
            (20000, dec!(1.7)),
            (20001, dec!(1.8)),
            (40000, dec!(1.8)),
        ];

        for (members, expected) in cases {
            assert_eq!(member_weight(members), expected, "members = {}", members);
        }
    }

    #[test]
    fn test_member_weight_above_last_tier_falls_back_to_one() {
        // Lower than the 20001-40000 tier; kept until product decides otherwise
        assert_eq!(member_weight(40001), dec!(1.0));
        assert_eq!(member_weight(u32::MAX), dec!(1.0));
        assert!(member_weight(40001) < member_weight(40000));
    }

    #[test]
    fn test_member_weight_zero() {
        assert_eq!(member_weight(0), dec!(1.0));
    }

    // ==================== visit_weight tests ====================

    #[test]
    fn test_visit_weight_tiers() {
        assert_eq!(visit_weight(1), dec!(1.0));
        assert_eq!(visit_weight(2), dec!(1.15));
        assert_eq!(visit_weight(3), dec!(1.15));
        assert_eq!(visit_weight(4), dec!(1.35));
        assert_eq!(visit_weight(5), dec!(1.35));
        assert_eq!(visit_weight(6), dec!(1.45));
        assert_eq!(visit_weight(7), dec!(1.45));
    }

    #[test]
    fn test_visit_weight_out_of_range_uses_fallback() {
        assert_eq!(visit_weight(0), dec!(1.45));
        assert_eq!(visit_weight(8), dec!(1.45));
    }

    // ==================== hour_weight tests ====================

    #[test]
    fn test_hour_weight_tiers() {
        assert_eq!(hour_weight(1), dec!(1.0));
        assert_eq!(hour_weight(2), dec!(1.0));
        assert_eq!(hour_weight(3), dec!(1.2));
        assert_eq!(hour_weight(4), dec!(1.2));
        assert_eq!(hour_weight(5), dec!(1.4));
        assert_eq!(hour_weight(8), dec!(1.4));
        assert_eq!(hour_weight(9), dec!(1.6));
        assert_eq!(hour_weight(16), dec!(1.6));
        assert_eq!(hour_weight(17), dec!(1.8));
        assert_eq!(hour_weight(24), dec!(1.8));
    }

    #[test]
    fn test_hour_weight_out_of_range() {
        assert_eq!(hour_weight(0), dec!(1.0));
        assert_eq!(hour_weight(100), dec!(1.8));
    }

    // ==================== location_weight tests ====================

    #[test]
    fn test_location_weight() {
        assert_eq!(location_weight(Location::Near), dec!(1.0));
        assert_eq!(location_weight(Location::Remote), dec!(1.35));
    }

    #[test]
    fn test_tables_are_non_decreasing_within_domain() {
        for table in [&MEMBER_WEIGHTS, &VISIT_WEIGHTS, &HOUR_WEIGHTS] {
            let weights: Vec<Decimal> = table.tiers.iter().map(|t| t.weight).collect();
            assert!(
                weights.windows(2).all(|w| w[0] <= w[1]),
                "{} tiers out of order",
                table.name
            );
        }
    }
}
