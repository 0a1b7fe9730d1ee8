//! Redemption code entities, both schema generations.

use pawsona_core::cdkey::CodeStatus;
use pawsona_core::types::Timestamp;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A row from the canonical `cdkeys` table (status schema).
#[derive(Debug, Clone, Serialize)]
pub struct Cdkey {
    pub code: String,
    pub status: CodeStatus,
    pub created_at: Timestamp,
    pub used_at: Option<Timestamp>,
}

impl FromRow<'_, PgRow> for Cdkey {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let status_raw: String = row.try_get("status")?;
        let status = CodeStatus::parse(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "status".into(),
            source: format!("unknown code status '{status_raw}'").into(),
        })?;
        Ok(Cdkey {
            code: row.try_get("code")?,
            status,
            created_at: row.try_get("created_at")?,
            used_at: row.try_get("used_at")?,
        })
    }
}

/// A row from a legacy-schema `cdkeys` table.
#[derive(Debug, Clone, FromRow)]
pub struct LegacyCdkey {
    pub code: String,
    pub is_active: bool,
    pub used_count: i32,
    pub total_uses: i32,
    pub expires_at: Option<Timestamp>,
}

/// What a successful redemption grants the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedeemGrant {
    pub code: String,
    /// `admin`, `single_use`, or `multi_use`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "remainingUses")]
    pub remaining_uses: i32,
}

/// Schema-agnostic listing entry for the admin view.
#[derive(Debug, Clone, Serialize)]
pub struct CdkeySummary {
    pub code: String,
    pub status: CodeStatus,
    #[serde(rename = "createdAt")]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "usedAt")]
    pub used_at: Option<Timestamp>,
}

/// Aggregate counts for the admin view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CdkeyStats {
    pub total: usize,
    pub used: usize,
    pub available: usize,
}

impl CdkeyStats {
    /// Tally a list of summaries. Pending codes count toward neither
    /// bucket; they are in flight.
    pub fn from_summaries(summaries: &[CdkeySummary]) -> Self {
        let used = summaries
            .iter()
            .filter(|c| c.status == CodeStatus::Used)
            .count();
        let available = summaries
            .iter()
            .filter(|c| c.status == CodeStatus::Available)
            .count();
        Self {
            total: summaries.len(),
            used,
            available,
        }
    }
}
