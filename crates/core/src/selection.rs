//! Rarity/title selection.
//!
//! Two deliberate, separately-exposed modes:
//!
//! - **Weighted** ([`draw_weighted`]): roll a rarity tier from a weight
//!   vector, then pick uniformly among that tier's applicable titles.
//! - **Equal probability** ([`draw_equal`]): ignore tier weights and pick
//!   uniformly among *all* applicable titles; the rarity is whatever the
//!   chosen title carries. Used by the primary flow.
//!
//! Selection uses the process-wide random source; there is no seeding
//! contract.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::{TitleRecord, TITLES};
use crate::error::{CoreError, CoreResult};
use crate::pet::Species;
use crate::rarity::{Rarity, RarityWeights, ALL_RARITIES};

/// Roll a rarity tier from a weight vector.
///
/// Draws `r` uniformly from `[0, total)` and walks the tiers in fixed
/// order `SSR, SR, R, N`, returning the first tier whose cumulative
/// boundary exceeds `r`.
pub fn roll_rarity_with_bonus(weights: &RarityWeights) -> CoreResult<Rarity> {
    let total = weights.total();
    if !(total > 0.0) || weights.ssr < 0.0 || weights.sr < 0.0 || weights.r < 0.0 || weights.n < 0.0
    {
        return Err(CoreError::InvalidRequest(
            "Rarity weights must be non-negative with a positive total".into(),
        ));
    }

    let roll = rand::rng().random_range(0.0..total);
    let mut cumulative = 0.0;
    for rarity in ALL_RARITIES {
        cumulative += weights.get(rarity);
        if roll < cumulative {
            return Ok(rarity);
        }
    }
    // Floating-point accumulation can leave `roll` at the very top edge.
    Ok(Rarity::N)
}

/// Titles applicable to `species` within one rarity tier.
fn tier_candidates(rarity: Rarity, species: Species) -> Vec<&'static TitleRecord> {
    TITLES
        .iter()
        .filter(|t| t.rarity == rarity && t.pet.matches(species))
        .collect()
}

/// Weighted mode: roll a tier, then pick uniformly within it.
pub fn draw_weighted(
    weights: &RarityWeights,
    species: Species,
) -> CoreResult<&'static TitleRecord> {
    let rarity = roll_rarity_with_bonus(weights)?;
    let candidates = tier_candidates(rarity, species);
    candidates
        .choose(&mut rand::rng())
        .copied()
        .ok_or_else(|| {
            CoreError::InvalidRequest(format!(
                "No {rarity} titles applicable to {}",
                species.word()
            ))
        })
}

/// Equal-probability mode: pick uniformly among every applicable title,
/// regardless of tier. The job's rarity is derived from the chosen title.
pub fn draw_equal(species: Species) -> CoreResult<&'static TitleRecord> {
    let candidates: Vec<&'static TitleRecord> =
        TITLES.iter().filter(|t| t.pet.matches(species)).collect();
    candidates
        .choose(&mut rand::rng())
        .copied()
        .ok_or_else(|| {
            CoreError::InvalidRequest(format!("No titles applicable to {}", species.word()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TRIALS: usize = 40_000;

    #[test]
    fn weighted_roll_converges_to_weight_ratios() {
        let weights = RarityWeights {
            ssr: 10.0,
            sr: 20.0,
            r: 30.0,
            n: 40.0,
        };
        let mut counts: HashMap<Rarity, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *counts
                .entry(roll_rarity_with_bonus(&weights).unwrap())
                .or_default() += 1;
        }
        for rarity in ALL_RARITIES {
            let expected = weights.get(rarity) / weights.total();
            let observed = counts.get(&rarity).copied().unwrap_or(0) as f64 / TRIALS as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "{rarity}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn weighted_roll_respects_zeroed_tiers() {
        let weights = RarityWeights {
            ssr: 0.0,
            sr: 0.0,
            r: 0.0,
            n: 1.0,
        };
        for _ in 0..1_000 {
            assert_eq!(roll_rarity_with_bonus(&weights).unwrap(), Rarity::N);
        }
    }

    #[test]
    fn weighted_roll_rejects_degenerate_weights() {
        let zero = RarityWeights {
            ssr: 0.0,
            sr: 0.0,
            r: 0.0,
            n: 0.0,
        };
        assert!(roll_rarity_with_bonus(&zero).is_err());

        let negative = RarityWeights {
            ssr: -1.0,
            sr: 2.0,
            r: 0.0,
            n: 0.0,
        };
        assert!(roll_rarity_with_bonus(&negative).is_err());
    }

    #[test]
    fn weighted_draw_only_returns_applicable_titles() {
        let weights = RarityWeights::default();
        for _ in 0..500 {
            let title = draw_weighted(&weights, Species::Cat).unwrap();
            assert!(title.pet.matches(Species::Cat));
        }
    }

    #[test]
    fn equal_draw_reaches_every_applicable_title_uniformly() {
        let applicable: Vec<u16> = TITLES
            .iter()
            .filter(|t| t.pet.matches(Species::Cat))
            .map(|t| t.id)
            .collect();
        let expected = 1.0 / applicable.len() as f64;

        let mut counts: HashMap<u16, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let title = draw_equal(Species::Cat).unwrap();
            assert!(title.pet.matches(Species::Cat));
            *counts.entry(title.id).or_default() += 1;
        }

        for id in applicable {
            let observed = counts.get(&id).copied().unwrap_or(0) as f64 / TRIALS as f64;
            assert!(
                (observed - expected).abs() < expected,
                "title {id}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn equal_draw_never_returns_other_species_titles() {
        for _ in 0..1_000 {
            let title = draw_equal(Species::Dog).unwrap();
            assert_ne!(title.pet, crate::catalog::TitlePet::Cat);
        }
    }
}
