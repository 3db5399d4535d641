//! End-to-end auto-fill lookups against a mocked recipe provider.

use larder_core::autofill::AutofillConfig;
use larder_core::{AutofillDraft, AutofillResolver, MockClient};
use std::sync::Arc;

const KEY: &str = "test-key";

fn config() -> AutofillConfig {
    AutofillConfig::with_api_key(KEY)
}

/// Resolver used only to compute the URLs the real one will request.
fn urls(config: &AutofillConfig) -> AutofillResolver {
    AutofillResolver::new(Arc::new(MockClient::new()), config.clone())
}

fn search_body(ids: &[i64]) -> String {
    let results: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "title": format!("Recipe {}", id)}))
        .collect();
    serde_json::json!({"results": results, "totalResults": ids.len()}).to_string()
}

fn details_body(summary: &str, ingredients: &[&str]) -> String {
    let ingredients: Vec<serde_json::Value> = ingredients
        .iter()
        .map(|line| serde_json::json!({"original": line, "name": "x"}))
        .collect();
    serde_json::json!({
        "summary": summary,
        "readyInMinutes": 40,
        "pricePerServing": 1050,
        "extendedIngredients": ingredients,
    })
    .to_string()
}

async fn resolve_with(
    client: MockClient,
    config: AutofillConfig,
    name: &str,
) -> (AutofillDraft, Vec<String>) {
    let client = Arc::new(client);
    let resolver = AutofillResolver::new(client.clone(), config);
    let draft = resolver.resolve(name).await;
    (draft, client.requests())
}

#[tokio::test]
async fn blank_names_make_no_requests() {
    for name in ["", "   ", "\t\n"] {
        let (draft, requests) = resolve_with(MockClient::new(), config(), name).await;
        assert_eq!(draft, AutofillDraft::failed());
        assert!(!draft.success);
        assert!(requests.is_empty(), "requests for {:?}: {:?}", name, requests);
    }
}

#[tokio::test]
async fn missing_api_key_makes_no_requests() {
    let (draft, requests) =
        resolve_with(MockClient::new(), AutofillConfig::default(), "tacos").await;
    assert!(!draft.success);
    assert!(requests.is_empty());
}

#[tokio::test]
async fn zero_search_results_fail() {
    let config = config();
    let search = urls(&config).search_url(KEY, "tacos", None).unwrap();
    let client = MockClient::new().with_body(&search, &search_body(&[]));

    let (draft, requests) = resolve_with(client, config, "tacos").await;
    assert!(!draft.success);
    assert_eq!(requests, vec![search]);
}

#[tokio::test]
async fn first_candidate_with_ingredients_wins() {
    let config = config();
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();
    let client = MockClient::new()
        .with_body(&search, &search_body(&[1, 2, 3]))
        .with_body(&u.details_url(KEY, 1).unwrap(), &details_body("stub", &[]))
        .with_body(&u.details_url(KEY, 2).unwrap(), r#"{"summary": "also a stub"}"#)
        .with_body(
            &u.details_url(KEY, 3).unwrap(),
            &details_body(
                "<b>Spicy &amp; Sweet</b> tacos",
                &["2 tortillas", "1 cup beans"],
            ),
        );

    let (draft, requests) = resolve_with(client, config, "  tacos ").await;
    assert_eq!(
        draft,
        AutofillDraft {
            description: "Spicy & Sweet tacos".to_string(),
            ingredients: "2 tortillas, 1 cup beans".to_string(),
            time: 40,
            cost: 11,
            success: true,
        }
    );
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn stops_after_first_qualifying_candidate() {
    let config = config();
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();
    let client = MockClient::new()
        .with_body(&search, &search_body(&[7, 8]))
        .with_body(&u.details_url(KEY, 7).unwrap(), &details_body("first", &["salt"]));

    let (draft, requests) = resolve_with(client, config, "tacos").await;
    assert!(draft.success);
    assert_eq!(draft.description, "first");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn no_qualifying_candidate_fails() {
    let config = config();
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();
    let client = MockClient::new()
        .with_body(&search, &search_body(&[1, 2]))
        .with_body(&u.details_url(KEY, 1).unwrap(), &details_body("a", &[]))
        .with_body(&u.details_url(KEY, 2).unwrap(), &details_body("b", &[]));

    let (draft, _) = resolve_with(client, config, "tacos").await;
    assert_eq!(draft, AutofillDraft::failed());
}

#[tokio::test]
async fn candidates_are_bounded() {
    let config = AutofillConfig {
        candidates: 1,
        ..config()
    };
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();
    // Provider ignores `number` and returns more than asked for.
    let client = MockClient::new()
        .with_body(&search, &search_body(&[1, 2, 3]))
        .with_body(&u.details_url(KEY, 1).unwrap(), &details_body("a", &[]))
        .with_body(&u.details_url(KEY, 2).unwrap(), &details_body("b", &["salt"]));

    let (draft, requests) = resolve_with(client, config, "tacos").await;
    assert!(!draft.success);
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn search_failures_fail_without_retry() {
    let config = config();
    let search = urls(&config).search_url(KEY, "tacos", None).unwrap();

    for client in [
        MockClient::new().with_status(&search, 402),
        MockClient::new().with_error(&search, "connection reset"),
        MockClient::new().with_body(&search, "<html>oops</html>"),
        MockClient::new().with_body(&search, r#"{"results": [{"title": "no id"}]}"#),
    ] {
        let (draft, requests) = resolve_with(client, config.clone(), "tacos").await;
        assert_eq!(draft, AutofillDraft::failed());
        assert_eq!(requests, vec![search.clone()]);
    }
}

#[tokio::test]
async fn details_failure_fails_whole_lookup() {
    let config = config();
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();
    let client = MockClient::new()
        .with_body(&search, &search_body(&[1, 2]))
        .with_status(&u.details_url(KEY, 1).unwrap(), 500)
        .with_body(&u.details_url(KEY, 2).unwrap(), &details_body("b", &["salt"]));

    let (draft, requests) = resolve_with(client, config, "tacos").await;
    assert_eq!(draft, AutofillDraft::failed());
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn malformed_details_fail_whole_lookup() {
    let config = config();
    let u = urls(&config);
    let search = u.search_url(KEY, "tacos", None).unwrap();

    for bad in [
        "<html>rate limited</html>",
        r#"{"extendedIngredients": "2 tortillas"}"#,
        r#"{"extendedIngredients": [{"original": 7}]}"#,
    ] {
        let client = MockClient::new()
            .with_body(&search, &search_body(&[1, 2, 3]))
            .with_body(&u.details_url(KEY, 1).unwrap(), &details_body("a", &[]))
            .with_body(&u.details_url(KEY, 2).unwrap(), bad)
            .with_body(&u.details_url(KEY, 3).unwrap(), &details_body("c", &["salt"]));

        let (draft, requests) = resolve_with(client, config.clone(), "tacos").await;
        assert_eq!(draft, AutofillDraft::failed(), "details body {:?}", bad);
        assert_eq!(requests.len(), 3, "details body {:?}", bad);
    }
}

#[tokio::test]
async fn ingredient_hint_refines_search() {
    let config = config();
    let u = urls(&config);
    let search = u
        .search_url(KEY, "Creamy Mushroom Risotto", Some("mushroom"))
        .unwrap();
    assert!(search.contains("titleMatch=mushroom"));
    assert!(search.contains("query=Creamy+Mushroom+Risotto"));

    let client = MockClient::new()
        .with_body(&search, &search_body(&[5]))
        .with_body(
            &u.details_url(KEY, 5).unwrap(),
            &details_body("Risotto", &["1 cup arborio rice"]),
        );

    let (draft, requests) = resolve_with(client, config, "Creamy Mushroom Risotto").await;
    assert!(draft.success);
    assert_eq!(requests[0], search);
}
