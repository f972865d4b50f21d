use std::str::FromStr;

use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::{instrument, warn};

use crate::corpus::{KeywordCorpus, KeywordRule, RuleCategory, RulePolarity};
use crate::db::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum CorpusLoadError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map keyword rule row: {0}")]
    Mapping(String),
}

fn map_rule_row(row: &Row) -> Result<KeywordRule, CorpusLoadError> {
    let phrase: String = row.get("phrase");
    let category: String = row.get("category");
    let polarity: String = row.get("polarity");
    let weight: f64 = row.get("weight");

    let category = RuleCategory::from_str(&category)
        .map_err(|_| CorpusLoadError::Mapping(format!("unknown category '{category}'")))?;
    let polarity = RulePolarity::from_str(&polarity)
        .map_err(|_| CorpusLoadError::Mapping(format!("unknown polarity '{polarity}'")))?;

    Ok(KeywordRule::new(phrase, category, polarity, weight))
}

/// Fetch every persisted keyword rule, in insertion order.
#[instrument(skip(pool))]
pub async fn fetch_keyword_rules(pool: &PgPool) -> Result<Vec<KeywordRule>, CorpusLoadError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT phrase, category, polarity, weight
             FROM visa_keywords
             ORDER BY id",
            &[],
        )
        .await?;

    rows.iter().map(map_rule_row).collect()
}

/// Load the scoring corpus from the store.
///
/// A confirmed-empty store falls back to the built-in default table; a
/// connectivity or mapping failure propagates instead, so the scorer never
/// silently runs against a partial rule set.
#[instrument(skip(pool))]
pub async fn load_corpus(pool: &PgPool) -> Result<KeywordCorpus, CorpusLoadError> {
    let rules = fetch_keyword_rules(pool).await?;

    if rules.is_empty() {
        warn!("keyword store is empty; using built-in default rules");
        return Ok(KeywordCorpus::with_default_rules());
    }

    Ok(KeywordCorpus::from_rules(rules))
}

/// Insert or update one rule; a duplicate `(phrase, category, polarity)`
/// overwrites the weight.
#[instrument(skip(pool, rule))]
pub async fn upsert_keyword_rule(
    pool: &PgPool,
    rule: &KeywordRule,
) -> Result<u64, CorpusLoadError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(
            "INSERT INTO visa_keywords (phrase, category, polarity, weight, updated_at)
             VALUES (lower($1), $2, $3, $4, now())
             ON CONFLICT (phrase, category, polarity)
             DO UPDATE SET weight = EXCLUDED.weight, updated_at = now()",
        )
        .await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &rule.phrase,
                &rule.category.as_ref(),
                &rule.polarity.as_ref(),
                &rule.weight,
            ],
        )
        .await?;

    Ok(rows)
}

/// Delete a rule if present; deleting an absent rule affects zero rows.
#[instrument(skip(pool))]
pub async fn delete_keyword_rule(
    pool: &PgPool,
    phrase: &str,
    category: RuleCategory,
    polarity: RulePolarity,
) -> Result<u64, CorpusLoadError> {
    let client = pool.get().await?;

    let rows = client
        .execute(
            "DELETE FROM visa_keywords
             WHERE phrase = lower($1) AND category = $2 AND polarity = $3",
            &[&phrase, &category.as_ref(), &polarity.as_ref()],
        )
        .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_error_names_the_bad_value() {
        let err = CorpusLoadError::Mapping("unknown category 'sponsership'".into());
        assert!(err.to_string().contains("sponsership"));
    }

    #[test]
    fn category_and_polarity_round_trip_through_store_strings() {
        for category in [
            RuleCategory::Sponsorship,
            RuleCategory::StudentFriendly,
            RuleCategory::Experience,
            RuleCategory::Openness,
            RuleCategory::Programs,
        ] {
            assert_eq!(
                RuleCategory::from_str(category.as_ref()).unwrap(),
                category
            );
        }

        for polarity in [RulePolarity::Positive, RulePolarity::Negative] {
            assert_eq!(
                RulePolarity::from_str(polarity.as_ref()).unwrap(),
                polarity
            );
        }
    }
}
