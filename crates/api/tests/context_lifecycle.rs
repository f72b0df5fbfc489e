//! Integration tests for the application context and command handlers
//!
//! Each test writes a dataset into a temporary directory and points the
//! file fetcher at it, so the full stack runs without network access.

use suggest_cli::commands::{NO_MATCH, NO_MATCHES};
use suggest_cli::{execute, AppContext, Commands};
use suggest_core::SourceState;
use suggest_domain::{SourceDescriptor, SuggestConfig, SuggestError};
use tempfile::TempDir;

const CITIES_JSON: &str = r#"["Bangui", "Banjul", "Abidjan", "Accra", "Addis_Ababa",
    "Algiers", "Asmara", "Bamako"]"#;

fn context_with_dataset(payload: &str) -> (TempDir, AppContext) {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("tz.json"), payload).expect("write dataset");

    let mut config = SuggestConfig::default();
    config.source = SourceDescriptor::new("tz.json");
    config.fetch.root_dir = Some(dir.path().to_path_buf());

    let ctx = AppContext::new(config).expect("context");
    (dir, ctx)
}

fn query(text: &str, max: Option<usize>, exclude: &[&str]) -> Commands {
    Commands::Query {
        text: text.to_string(),
        max,
        exclude: exclude.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Validates the `query` command end to end.
///
/// # Test Steps
/// 1. Build a context over a file dataset
/// 2. Run the reference queries
/// 3. Verify the printed lines and that the source loaded once
#[tokio::test]
async fn query_command_prints_suggestions() {
    let (_dir, ctx) = context_with_dataset(CITIES_JSON);

    let lines = execute(&ctx, &query("ba", None, &[])).await.unwrap();
    assert_eq!(lines, ["Bamako", "Bangui", "Banjul", "Addis_Ababa"]);

    let lines = execute(&ctx, &query("an", Some(10), &["Bangui"])).await.unwrap();
    assert_eq!(lines, ["Banjul", "Abidjan"]);

    let lines = execute(&ctx, &query("aab", None, &[])).await.unwrap();
    assert_eq!(lines, [NO_MATCHES]);

    assert_eq!(ctx.sources.state("tz.json"), SourceState::Ready);
}

/// Validates the `exact` command prints the stored spelling or `no match`.
#[tokio::test]
async fn exact_command_prints_match() {
    let (_dir, ctx) = context_with_dataset(CITIES_JSON);

    let exact = |text: &str| Commands::Exact { text: text.to_string() };
    assert_eq!(execute(&ctx, &exact("ACCRA")).await.unwrap(), ["Accra"]);
    assert_eq!(execute(&ctx, &exact("Acc")).await.unwrap(), [NO_MATCH]);
}

/// Validates errors reach the caller instead of being printed as output.
///
/// # Test Steps
/// 1. Run an empty query and expect `InvalidQuery`
/// 2. Point the context at a malformed dataset and expect `Parse`
#[tokio::test]
async fn command_errors_are_returned() {
    let (_dir, ctx) = context_with_dataset(CITIES_JSON);
    let err = execute(&ctx, &query("", None, &[])).await.unwrap_err();
    assert!(matches!(err, SuggestError::InvalidQuery(_)));

    let (_dir, broken) = context_with_dataset(r#"{"not": "an array"}"#);
    let err = execute(&broken, &query("a", None, &[])).await.unwrap_err();
    assert!(matches!(err, SuggestError::Parse { ref identifier, .. } if identifier == "tz.json"));
}

/// Validates a missing dataset file surfaces as a retryable fetch failure.
#[tokio::test]
async fn missing_dataset_is_a_fetch_failure() {
    let dir = TempDir::new().unwrap();
    let mut config = SuggestConfig::default();
    config.fetch.root_dir = Some(dir.path().to_path_buf());
    let ctx = AppContext::new(config).unwrap();

    let err = execute(&ctx, &query("a", None, &[])).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(ctx.sources.state("dataset/tz.json"), SourceState::Unloaded);
}

/// Validates invalid configuration is rejected when the context is built.
#[test]
fn invalid_config_is_rejected() {
    let mut config = SuggestConfig::default();
    config.source.default_max_results = 0;

    assert!(matches!(AppContext::new(config), Err(SuggestError::Config(_))));
}
