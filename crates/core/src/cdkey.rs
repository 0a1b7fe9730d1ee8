//! Redemption-code (cdkey) rules.
//!
//! The canonical lifecycle is a three-state machine:
//! `available --redeem--> pending --reportSuccess--> used`, with
//! `pending --reportFailure--> available`. A legacy schema instead counts
//! uses against a ceiling with no pending middle state; both are modeled
//! here as pure decision logic. Atomicity of the actual transitions is
//! the store's responsibility.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Timestamp;

/// The administrative code: always valid, unlimited uses, never touches
/// the store and is exempt from outcome reporting.
pub const ADMIN_CODE: &str = "DIANZI123";

/// Reported remaining uses for the admin code.
pub const ADMIN_REMAINING_USES: i32 = 999;

/// Characters used in generated codes. Excludes `I`, `O`, `0`, `1`,
/// which are easy to misread when typed from a printed card.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Bulk generation bounds.
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Canonical three-state code lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    Available,
    Pending,
    Used,
}

impl CodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeStatus::Available => "available",
            CodeStatus::Pending => "pending",
            CodeStatus::Used => "used",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(CodeStatus::Available),
            "pending" => Some(CodeStatus::Pending),
            "used" => Some(CodeStatus::Used),
            _ => None,
        }
    }
}

/// Normalize a human-entered code: trim whitespace, uppercase.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Whether a (normalized) code is the administrative code.
pub fn is_admin_code(code: &str) -> bool {
    code == ADMIN_CODE
}

/// Map the status observed by a losing redeem attempt to its error.
///
/// The store's atomic `available -> pending` update either wins or
/// reports the state that beat it; this converts that state into the
/// business-rule error the caller sees.
pub fn redeem_conflict_error(observed: CodeStatus) -> CoreError {
    match observed {
        CodeStatus::Pending => CoreError::CodePending,
        CodeStatus::Used => CoreError::AlreadyUsed,
        // A concurrent failure report can revert the code between our
        // update and the re-read; treat it as a retryable conflict.
        CodeStatus::Available => CoreError::CodePending,
    }
}

/// Snapshot of a legacy-schema code row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCodeSnapshot {
    pub is_active: bool,
    pub used_count: i32,
    pub total_uses: i32,
    pub expires_at: Option<Timestamp>,
}

impl LegacyCodeSnapshot {
    /// Check redeemability under the legacy rules. Returns the number of
    /// uses that would remain after a successful redemption.
    pub fn check_redeemable(&self, now: Timestamp) -> CoreResult<i32> {
        if !self.is_active {
            return Err(CoreError::InvalidCode);
        }
        if let Some(expires_at) = self.expires_at {
            if expires_at <= now {
                return Err(CoreError::Expired);
            }
        }
        if self.used_count >= self.total_uses {
            return Err(CoreError::Exhausted);
        }
        Ok(self.total_uses - self.used_count - 1)
    }
}

/// Generate one code of the form `PREFIX-XXXX-XXXX-XXXX`.
pub fn generate_code(prefix: &str) -> String {
    let mut rng = rand::rng();
    let mut segment = || -> String {
        (0..4)
            .map(|_| *CODE_ALPHABET.choose(&mut rng).expect("non-empty alphabet") as char)
            .collect()
    };
    format!("{prefix}-{}-{}-{}", segment(), segment(), segment())
}

/// Generate `count` codes unique among themselves and against
/// `existing`. Gives up after `2 * count` attempts, so a pathologically
/// saturated code space returns fewer codes rather than spinning.
pub fn generate_batch<S: std::hash::BuildHasher>(
    prefix: &str,
    count: usize,
    existing: &std::collections::HashSet<String, S>,
) -> CoreResult<Vec<String>> {
    if count < 1 || count > MAX_BATCH_SIZE {
        return Err(CoreError::InvalidRequest(format!(
            "Batch size must be between 1 and {MAX_BATCH_SIZE}"
        )));
    }

    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut codes = Vec::with_capacity(count);
    let mut attempts = 0;
    while codes.len() < count && attempts < count * 2 {
        let code = generate_code(prefix);
        if !existing.contains(&code) && seen.insert(code.clone()) {
            codes.push(code);
        }
        attempts += 1;
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::collections::HashSet;

    #[test]
    fn normalization_trims_and_uppercases() {
        assert_eq!(normalize_code("  pet-ab12 "), "PET-AB12");
    }

    #[test]
    fn admin_code_is_recognized_after_normalization() {
        assert!(is_admin_code(&normalize_code(" dianzi123 ")));
        assert!(!is_admin_code("PET-AAAA-BBBB-CCCC"));
    }

    #[test]
    fn generated_codes_match_format() {
        let code = generate_code("PET");
        let parts: Vec<&str> = code.split('-').collect();
        assert_eq!(parts[0], "PET");
        assert_eq!(parts.len(), 4);
        for segment in &parts[1..] {
            assert_eq!(segment.len(), 4);
            assert!(segment.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn batch_generation_avoids_existing_codes() {
        let existing: HashSet<String> = (0..50).map(|_| generate_code("PET")).collect();
        let batch = generate_batch("PET", 200, &existing).unwrap();
        assert_eq!(batch.len(), 200);
        let unique: HashSet<&String> = batch.iter().collect();
        assert_eq!(unique.len(), 200);
        for code in &batch {
            assert!(!existing.contains(code));
        }
    }

    #[test]
    fn batch_generation_rejects_out_of_range_counts() {
        let existing: HashSet<String> = HashSet::new();
        assert!(generate_batch("PET", 0, &existing).is_err());
        assert!(generate_batch("PET", MAX_BATCH_SIZE + 1, &existing).is_err());
    }

    #[test]
    fn conflict_errors_map_observed_state() {
        assert!(matches!(
            redeem_conflict_error(CodeStatus::Pending),
            CoreError::CodePending
        ));
        assert!(matches!(
            redeem_conflict_error(CodeStatus::Used),
            CoreError::AlreadyUsed
        ));
    }

    #[test]
    fn legacy_check_walks_the_rule_chain() {
        let now = Utc::now();
        let base = LegacyCodeSnapshot {
            is_active: true,
            used_count: 0,
            total_uses: 5,
            expires_at: None,
        };

        assert_eq!(base.check_redeemable(now).unwrap(), 4);

        let inactive = LegacyCodeSnapshot {
            is_active: false,
            ..base.clone()
        };
        assert!(matches!(
            inactive.check_redeemable(now),
            Err(CoreError::InvalidCode)
        ));

        let expired = LegacyCodeSnapshot {
            expires_at: Some(now - Duration::hours(1)),
            ..base.clone()
        };
        assert!(matches!(
            expired.check_redeemable(now),
            Err(CoreError::Expired)
        ));

        let exhausted = LegacyCodeSnapshot {
            used_count: 5,
            ..base
        };
        assert!(matches!(
            exhausted.check_redeemable(now),
            Err(CoreError::Exhausted)
        ));
    }
}
