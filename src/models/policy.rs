//! Asset-class allocation policy
//!
//! The fixed table driving allocation suggestions: one row per asset class
//! with a target share of available capital and an expected annual return
//! rate. The table is ordered; suggestion reports iterate it in definition
//! order. Investment kinds outside the table are tolerated everywhere and
//! simply carry no expected return.

/// Policy row for one asset class
#[derive(Debug, Clone, PartialEq)]
pub struct AssetClassPolicy {
    /// Asset-class name, matched against `InvestmentRecord::kind`
    pub name: &'static str,
    /// Share of available capital to allocate (fraction, table sums to 1.0)
    pub ratio: f64,
    /// Expected annual return rate in percent
    pub expected_return: f64,
}

impl AssetClassPolicy {
    const fn new(name: &'static str, ratio: f64, expected_return: f64) -> Self {
        Self {
            name,
            ratio,
            expected_return,
        }
    }

    /// The standard allocation policy table, in suggestion order
    pub fn standard() -> Vec<AssetClassPolicy> {
        vec![
            Self::new("emergency fund", 0.10, 2.0),
            Self::new("time deposit", 0.15, 3.0),
            Self::new("government bond", 0.10, 3.5),
            Self::new("bond fund", 0.10, 5.0),
            Self::new("balanced fund", 0.15, 7.0),
            Self::new("equity fund", 0.20, 10.0),
            Self::new("stocks", 0.15, 12.0),
            Self::new("other", 0.05, 4.0),
        ]
    }

    /// Expected annual rate for a kind, 0.0 when the kind is not in the table
    pub fn expected_rate_for(policy: &[AssetClassPolicy], kind: &str) -> f64 {
        policy
            .iter()
            .find(|p| p.name == kind)
            .map(|p| p.expected_return)
            .unwrap_or(0.0)
    }
}
