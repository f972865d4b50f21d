pub mod keyword_rules;
pub mod pool;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use keyword_rules::{
    delete_keyword_rule, fetch_keyword_rules, load_corpus, upsert_keyword_rule, CorpusLoadError,
};
pub use pool::{create_pool_from_env, create_pool_from_url, DbPoolError, PgPool};
