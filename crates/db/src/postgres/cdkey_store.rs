//! Postgres adapters for [`RedemptionStore`].
//!
//! Two deployments exist in the wild. The canonical one has a `status`
//! column driving the three-state lifecycle; the legacy one counts
//! `used_count` against `total_uses` with an activity flag and optional
//! expiry. [`probe_redemption_schema`] inspects the live table once at
//! startup and the matching adapter is used for the process lifetime.

use std::collections::HashSet;

use async_trait::async_trait;
use pawsona_core::cdkey::{redeem_conflict_error, CodeStatus, LegacyCodeSnapshot};
use pawsona_core::error::{CoreError, CoreResult};
use pawsona_core::types::Timestamp;

use crate::models::cdkey::{Cdkey, CdkeySummary, LegacyCdkey, RedeemGrant};
use crate::store::RedemptionStore;
use crate::{storage_error, DbPool};

/// Which generation of the `cdkeys` table the database carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionSchema {
    Status,
    Legacy,
}

/// Detect the schema generation by looking for the `status` column.
pub async fn probe_redemption_schema(pool: &DbPool) -> CoreResult<RedemptionSchema> {
    let has_status: bool = sqlx::query_scalar(
        "SELECT EXISTS ( \
             SELECT 1 FROM information_schema.columns \
             WHERE table_name = 'cdkeys' AND column_name = 'status' \
         )",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| storage_error("failed to probe cdkeys schema", e))?;

    Ok(if has_status {
        RedemptionSchema::Status
    } else {
        RedemptionSchema::Legacy
    })
}

// ---------------------------------------------------------------------------
// Status schema
// ---------------------------------------------------------------------------

/// Adapter for the canonical status-column schema.
pub struct StatusCdkeyStore {
    pool: DbPool,
}

impl StatusCdkeyStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedemptionStore for StatusCdkeyStore {
    async fn redeem(&self, code: &str, _now: Timestamp) -> CoreResult<RedeemGrant> {
        // Winner takes the code into `pending` in one statement.
        let claimed = sqlx::query(
            "UPDATE cdkeys SET status = $2 WHERE code = $1 AND status = $3",
        )
        .bind(code)
        .bind(CodeStatus::Pending.as_str())
        .bind(CodeStatus::Available.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to claim code", e))?;

        if claimed.rows_affected() == 1 {
            return Ok(RedeemGrant {
                code: code.to_string(),
                kind: "single_use",
                remaining_uses: 1,
            });
        }

        // Lost the race or the code does not exist; report what we see.
        let row = sqlx::query_as::<_, Cdkey>(
            "SELECT code, status, created_at, used_at FROM cdkeys WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("failed to fetch code", e))?;

        match row {
            None => Err(CoreError::InvalidCode),
            Some(cdkey) => Err(redeem_conflict_error(cdkey.status)),
        }
    }

    async fn report_success(&self, code: &str, now: Timestamp) -> CoreResult<()> {
        sqlx::query(
            "UPDATE cdkeys SET status = $2, used_at = $3 \
             WHERE code = $1 AND status = $4",
        )
        .bind(code)
        .bind(CodeStatus::Used.as_str())
        .bind(now)
        .bind(CodeStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to finalize code", e))?;
        Ok(())
    }

    async fn report_failure(&self, code: &str) -> CoreResult<()> {
        // Only a pending code goes back; a used code stays used.
        sqlx::query("UPDATE cdkeys SET status = $2 WHERE code = $1 AND status = $3")
            .bind(code)
            .bind(CodeStatus::Available.as_str())
            .bind(CodeStatus::Pending.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to release code", e))?;
        Ok(())
    }

    async fn existing_codes(&self) -> CoreResult<HashSet<String>> {
        let codes: Vec<String> = sqlx::query_scalar("SELECT code FROM cdkeys")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to list code strings", e))?;
        Ok(codes.into_iter().collect())
    }

    async fn insert_batch(&self, codes: &[String], now: Timestamp) -> CoreResult<usize> {
        let mut inserted = 0;
        for code in codes {
            let result = sqlx::query(
                "INSERT INTO cdkeys (code, status, created_at) \
                 VALUES ($1, $2, $3) ON CONFLICT (code) DO NOTHING",
            )
            .bind(code)
            .bind(CodeStatus::Available.as_str())
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to insert code", e))?;
            inserted += result.rows_affected() as usize;
        }
        Ok(inserted)
    }

    async fn list(&self) -> CoreResult<Vec<CdkeySummary>> {
        let rows = sqlx::query_as::<_, Cdkey>(
            "SELECT code, status, created_at, used_at FROM cdkeys \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("failed to list codes", e))?;

        Ok(rows
            .into_iter()
            .map(|c| CdkeySummary {
                code: c.code,
                status: c.status,
                created_at: Some(c.created_at),
                used_at: c.used_at,
            })
            .collect())
    }

    async fn purge_used(&self) -> CoreResult<u64> {
        let result = sqlx::query("DELETE FROM cdkeys WHERE status = $1")
            .bind(CodeStatus::Used.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to purge used codes", e))?;
        Ok(result.rows_affected())
    }
}

// ---------------------------------------------------------------------------
// Legacy schema
// ---------------------------------------------------------------------------

const LEGACY_COLUMNS: &str = "code, is_active, used_count, total_uses, expires_at";

/// Adapter for the legacy counting schema.
///
/// The legacy table has no pending state, so a redemption consumes a use
/// immediately and a failure report refunds it.
pub struct LegacyCdkeyStore {
    pool: DbPool,
}

impl LegacyCdkeyStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedemptionStore for LegacyCdkeyStore {
    async fn redeem(&self, code: &str, now: Timestamp) -> CoreResult<RedeemGrant> {
        // The increment and every redeemability rule live in one
        // statement, so two racing calls cannot both consume the last use.
        let query = format!(
            "UPDATE cdkeys SET used_count = used_count + 1 \
             WHERE code = $1 AND is_active \
               AND (expires_at IS NULL OR expires_at > $2) \
               AND used_count < total_uses \
             RETURNING {LEGACY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LegacyCdkey>(&query)
            .bind(code)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to redeem code", e))?;

        if let Some(cdkey) = row {
            let kind = if cdkey.total_uses == 1 {
                "single_use"
            } else {
                "multi_use"
            };
            return Ok(RedeemGrant {
                code: cdkey.code,
                kind,
                remaining_uses: cdkey.total_uses - cdkey.used_count,
            });
        }

        // Re-read to name the rule that blocked the update.
        let query = format!("SELECT {LEGACY_COLUMNS} FROM cdkeys WHERE code = $1");
        let row = sqlx::query_as::<_, LegacyCdkey>(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to fetch code", e))?;

        match row {
            None => Err(CoreError::InvalidCode),
            Some(cdkey) => {
                let snapshot = LegacyCodeSnapshot {
                    is_active: cdkey.is_active,
                    used_count: cdkey.used_count,
                    total_uses: cdkey.total_uses,
                    expires_at: cdkey.expires_at,
                };
                match snapshot.check_redeemable(now) {
                    // The row became redeemable again between our two
                    // statements; surface it as a transient conflict.
                    Ok(_) => Err(CoreError::CodePending),
                    Err(e) => Err(e),
                }
            }
        }
    }

    async fn report_success(&self, _code: &str, _now: Timestamp) -> CoreResult<()> {
        // Usage was already counted at redeem time.
        Ok(())
    }

    async fn report_failure(&self, code: &str) -> CoreResult<()> {
        sqlx::query(
            "UPDATE cdkeys SET used_count = used_count - 1 \
             WHERE code = $1 AND used_count > 0",
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to refund code use", e))?;
        Ok(())
    }

    async fn existing_codes(&self) -> CoreResult<HashSet<String>> {
        let codes: Vec<String> = sqlx::query_scalar("SELECT code FROM cdkeys")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to list code strings", e))?;
        Ok(codes.into_iter().collect())
    }

    async fn insert_batch(&self, codes: &[String], _now: Timestamp) -> CoreResult<usize> {
        let mut inserted = 0;
        for code in codes {
            let result = sqlx::query(
                "INSERT INTO cdkeys (code, is_active, used_count, total_uses) \
                 VALUES ($1, TRUE, 0, 1) ON CONFLICT (code) DO NOTHING",
            )
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to insert code", e))?;
            inserted += result.rows_affected() as usize;
        }
        Ok(inserted)
    }

    async fn list(&self) -> CoreResult<Vec<CdkeySummary>> {
        let query = format!("SELECT {LEGACY_COLUMNS} FROM cdkeys ORDER BY code");
        let rows = sqlx::query_as::<_, LegacyCdkey>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to list codes", e))?;

        Ok(rows
            .into_iter()
            .map(|c| {
                let status = if !c.is_active || c.used_count >= c.total_uses {
                    CodeStatus::Used
                } else {
                    CodeStatus::Available
                };
                CdkeySummary {
                    code: c.code,
                    status,
                    created_at: None,
                    used_at: None,
                }
            })
            .collect())
    }

    async fn purge_used(&self) -> CoreResult<u64> {
        let result =
            sqlx::query("DELETE FROM cdkeys WHERE NOT is_active OR used_count >= total_uses")
                .execute(&self.pool)
                .await
                .map_err(|e| storage_error("failed to purge used codes", e))?;
        Ok(result.rows_affected())
    }
}
