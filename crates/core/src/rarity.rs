//! Rarity tiers and draw weights.

use serde::{Deserialize, Serialize};

/// Rarity tiers, ordered from rarest to most common.
///
/// The ordering `SSR > SR > R > N` is load-bearing: the weighted draw
/// walks tiers in this order when accumulating cumulative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    SSR,
    SR,
    R,
    N,
}

/// All tiers in draw order.
pub const ALL_RARITIES: [Rarity; 4] = [Rarity::SSR, Rarity::SR, Rarity::R, Rarity::N];

impl Rarity {
    /// Stable string form, matching the persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::SSR => "SSR",
            Rarity::SR => "SR",
            Rarity::R => "R",
            Rarity::N => "N",
        }
    }

    /// Parse the persisted string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SSR" => Some(Rarity::SSR),
            "SR" => Some(Rarity::SR),
            "R" => Some(Rarity::R),
            "N" => Some(Rarity::N),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weight vector over the four tiers.
///
/// Weights are non-negative and need not sum to any particular total;
/// only their ratios matter. The quiz flow biases these before the draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    #[serde(rename = "SSR")]
    pub ssr: f64,
    #[serde(rename = "SR")]
    pub sr: f64,
    #[serde(rename = "R")]
    pub r: f64,
    #[serde(rename = "N")]
    pub n: f64,
}

impl RarityWeights {
    /// Weight for a single tier.
    pub fn get(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::SSR => self.ssr,
            Rarity::SR => self.sr,
            Rarity::R => self.r,
            Rarity::N => self.n,
        }
    }

    /// Sum of all tier weights.
    pub fn total(&self) -> f64 {
        self.ssr + self.sr + self.r + self.n
    }
}

impl Default for RarityWeights {
    /// The baseline distribution: 5% SSR, 15% SR, 30% R, 50% N.
    fn default() -> Self {
        Self {
            ssr: 5.0,
            sr: 15.0,
            r: 30.0,
            n: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_round_trips_through_strings() {
        for rarity in ALL_RARITIES {
            assert_eq!(Rarity::parse(rarity.as_str()), Some(rarity));
        }
        assert_eq!(Rarity::parse("UR"), None);
    }

    #[test]
    fn default_weights_sum_to_hundred() {
        assert_eq!(RarityWeights::default().total(), 100.0);
    }

    #[test]
    fn weights_deserialize_from_tier_keys() {
        let w: RarityWeights =
            serde_json::from_str(r#"{"SSR":1.0,"SR":2.0,"R":3.0,"N":4.0}"#).unwrap();
        assert_eq!(w.get(Rarity::SSR), 1.0);
        assert_eq!(w.total(), 10.0);
    }
}
