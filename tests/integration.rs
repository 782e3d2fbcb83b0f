//! Comprehensive integration tests for the compensation engine API.
//!
//! This test suite covers the full computation surface including:
//! - The four scenario breakdowns for a single year
//! - Itemized reconciliation of every breakdown
//! - Equity vesting across the yearly series
//! - Income-tax bracket clamping through the API
//! - Shareable parameter decoding
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/argentina").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a Decimal out of a JSON field serialized as a string.
fn decimal_field(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("expected decimal string")).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn params_body(salary: u64, monthly_health: u64, contractor_rate: u64) -> Value {
    json!({
        "annual_gross_salary": salary,
        "monthly_health_contribution": monthly_health,
        "contractor_tax_rate_percent": contractor_rate
    })
}

fn unit_grant(unit_count: u64, unit_fair_value: u64, vesting_period_years: u32) -> Value {
    json!({
        "mode": "unit_based",
        "unit_count": unit_count,
        "unit_fair_value": unit_fair_value,
        "vesting_period_years": vesting_period_years
    })
}

/// Asserts that a breakdown's items sum to its total, with the terminal
/// line carrying the total itself.
fn assert_reconciles(breakdown: &Value) {
    let items = breakdown["items"].as_array().unwrap();
    assert!(items.len() >= 2, "breakdown must have items");

    let total = decimal_field(&breakdown["total"]);
    let contributions: Decimal = items[..items.len() - 1]
        .iter()
        .map(|item| decimal_field(&item["value"]))
        .sum();
    let terminal = decimal_field(&items[items.len() - 1]["value"]);

    assert_eq!(
        contributions, total,
        "items do not reconcile for {}",
        breakdown["scenario"]
    );
    assert_eq!(terminal, total);
}

// =============================================================================
// Breakdown scenarios
// =============================================================================

#[tokio::test]
async fn test_breakdowns_returns_all_four_scenarios() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 1 });

    let (status, result) = post_json(router, "/breakdowns", body).await;

    assert_eq!(status, StatusCode::OK);
    let map = result.as_object().unwrap();
    assert_eq!(map.len(), 4);
    for scenario in ["eor-employer", "eor-worker", "aor-employer", "aor-worker"] {
        assert!(map.contains_key(scenario), "missing scenario {}", scenario);
        assert_eq!(map[scenario]["scenario"], scenario);
    }
}

#[tokio::test]
async fn test_concrete_no_equity_totals() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 1 });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    // 100,000 x 0.85 and 100,000 + 300 x 12.
    assert_eq!(decimal_field(&result["aor-worker"]["total"]), decimal("85000"));
    assert_eq!(
        decimal_field(&result["aor-employer"]["total"]),
        decimal("103600")
    );
}

#[tokio::test]
async fn test_eor_employer_total_for_concrete_scenario() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 1 });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    // total gross 1,300,000/12, 27.8% employer contributions, 1,200 health:
    // 1,300,000 x 1.278 / 12 + 1,200 = 139,650.
    let total = decimal_field(&result["eor-employer"]["total"]);
    assert_eq!(total.round_dp(2), decimal("139650.00"));
}

#[tokio::test]
async fn test_every_breakdown_reconciles_on_the_wire() {
    let router = create_router_for_test();
    let body = json!({
        "params": {
            "annual_gross_salary": 100000,
            "monthly_health_contribution": 100,
            "contractor_tax_rate_percent": 15,
            "equity_grants": [unit_grant(1000, 50, 4)]
        },
        "year": 1
    });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    for scenario in ["eor-employer", "eor-worker", "aor-employer", "aor-worker"] {
        assert_reconciles(&result[scenario]);
    }
}

#[tokio::test]
async fn test_equity_appears_only_while_vesting() {
    let router = create_router_for_test();
    let params = json!({
        "annual_gross_salary": 100000,
        "monthly_health_contribution": 100,
        "contractor_tax_rate_percent": 15,
        "equity_grants": [unit_grant(1000, 50, 4)]
    });

    let body = json!({ "params": params.clone(), "year": 1 });
    let (_, year1) = post_json(create_router_for_test(), "/breakdowns", body).await;

    // salary_with_equity = 112,500 under AOR.
    assert_eq!(
        decimal_field(&year1["aor-employer"]["total"]),
        decimal("116100")
    );
    let items = year1["aor-employer"]["items"].as_array().unwrap();
    assert_eq!(items[1]["label"], "Vested Equity");
    assert_eq!(decimal_field(&items[1]["value"]), decimal("12500"));

    let body = json!({ "params": params, "year": 5 });
    let (_, year5) = post_json(router, "/breakdowns", body).await;

    assert_eq!(
        decimal_field(&year5["aor-employer"]["total"]),
        decimal("103600")
    );
    let items = year5["aor-employer"]["items"].as_array().unwrap();
    assert!(!items.iter().any(|item| item["label"] == "Vested Equity"));
}

#[tokio::test]
async fn test_labels_embed_schedule_percentages() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 1 });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    let labels: Vec<String> = result["eor-employer"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap().to_string())
        .collect();

    assert!(labels.contains(&"Pension (+16%)".to_string()));
    assert!(labels.contains(&"Employment Fund (+1.5%)".to_string()));
    assert!(labels.contains(&"Life Insurance (+0.3%)".to_string()));

    let worker_labels: Vec<String> = result["eor-worker"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap().to_string())
        .collect();

    assert!(worker_labels.contains(&"Pension (-11%*)".to_string()));
    // 108,333.33 rounds to the 110,000 bracket.
    assert!(worker_labels.contains(&"Income Tax (-27.5%)".to_string()));
}

#[tokio::test]
async fn test_income_tax_clamps_below_and_above_the_table() {
    // 40,000 gross stays below the 50,000 floor: no income tax.
    let body = json!({ "params": params_body(40_000, 0, 15), "year": 1 });
    let (_, low) = post_json(create_router_for_test(), "/breakdowns", body).await;
    let low_labels: Vec<&str> = low["eor-worker"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert!(low_labels.contains(&"Income Tax (-0%)"));

    // 400,000 gross is far above the 150,000 ceiling: flat 35%.
    let body = json!({ "params": params_body(400_000, 0, 15), "year": 1 });
    let (_, high) = post_json(create_router_for_test(), "/breakdowns", body).await;
    let high_labels: Vec<&str> = high["eor-worker"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert!(high_labels.contains(&"Income Tax (-35%)"));
}

#[tokio::test]
async fn test_contractor_rate_defaults_when_absent() {
    let router = create_router_for_test();
    let body = json!({
        "params": {
            "annual_gross_salary": 100000,
            "monthly_health_contribution": 100
        },
        "year": 1
    });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    // Schedule default is 15%.
    assert_eq!(decimal_field(&result["aor-worker"]["total"]), decimal("85000"));
}

#[tokio::test]
async fn test_breakdowns_carry_sources() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 1 });

    let (_, result) = post_json(router, "/breakdowns", body).await;

    for scenario in ["eor-employer", "eor-worker", "aor-employer", "aor-worker"] {
        let sources = result[scenario]["sources"].as_array().unwrap();
        assert!(!sources.is_empty(), "{} has no sources", scenario);
    }
    assert_eq!(
        result["aor-employer"]["sources"][0],
        "https://silver.dev/aor#pricing"
    );
}

// =============================================================================
// Yearly series
// =============================================================================

#[tokio::test]
async fn test_series_spans_the_vesting_horizon() {
    let router = create_router_for_test();
    let body = json!({
        "params": {
            "annual_gross_salary": 100000,
            "monthly_health_contribution": 100,
            "contractor_tax_rate_percent": 15,
            "equity_grants": [
                unit_grant(1000, 50, 4),
                { "mode": "dollar_based", "dollar_value": 10000, "vesting_period_years": 2 }
            ]
        }
    });

    let (status, result) = post_json(router, "/series", body).await;

    assert_eq!(status, StatusCode::OK);
    let series = result.as_array().unwrap();
    assert_eq!(series.len(), 4);

    let years: Vec<u64> = series
        .iter()
        .map(|datum| datum["year"].as_u64().unwrap())
        .collect();
    assert_eq!(years, vec![1, 2, 3, 4]);

    // Years 1-2 vest 12,500 + 5,000; years 3-4 only 12,500.
    let worker_year2 = decimal_field(&series[1]["aor"]["worker"]);
    let worker_year3 = decimal_field(&series[2]["aor"]["worker"]);
    assert!(worker_year2 > worker_year3);
}

#[tokio::test]
async fn test_series_without_grants_has_one_year() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15) });

    let (status, result) = post_json(router, "/series", body).await;

    assert_eq!(status, StatusCode::OK);
    let series = result.as_array().unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["year"], 1);
    assert_eq!(decimal_field(&series[0]["aor"]["worker"]), decimal("85000"));
}

#[tokio::test]
async fn test_series_is_idempotent() {
    let body = json!({
        "params": {
            "annual_gross_salary": 100000,
            "monthly_health_contribution": 100,
            "contractor_tax_rate_percent": 15,
            "equity_grants": [unit_grant(1000, 50, 4)]
        }
    });

    let (_, first) = post_json(create_router_for_test(), "/series", body.clone()).await;
    let (_, second) = post_json(create_router_for_test(), "/series", body).await;

    assert_eq!(first, second);
}

// =============================================================================
// Shareable parameter decoding
// =============================================================================

#[tokio::test]
async fn test_params_decoding_resolves_shared_link() {
    let router = create_router_for_test();
    let (status, result) =
        get_json(router, "/params?s=120000&h=150&c=20&fmv=50&rsu=u.1000-4_d.20000-2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result["annual_gross_salary"]), decimal("120000"));
    assert_eq!(
        decimal_field(&result["monthly_health_contribution"]),
        decimal("150")
    );
    assert_eq!(
        decimal_field(&result["contractor_tax_rate_percent"]),
        decimal("20")
    );

    let grants = result["equity_grants"].as_array().unwrap();
    assert_eq!(grants.len(), 2);
    assert_eq!(grants[0]["mode"], "unit_based");
    assert_eq!(decimal_field(&grants[0]["unit_count"]), decimal("1000"));
    assert_eq!(decimal_field(&grants[0]["unit_fair_value"]), decimal("50"));
    assert_eq!(grants[1]["mode"], "dollar_based");
    assert_eq!(decimal_field(&grants[1]["dollar_value"]), decimal("20000"));
}

#[tokio::test]
async fn test_params_decoding_falls_back_field_by_field() {
    let router = create_router_for_test();
    let (status, result) = get_json(router, "/params?s=bogus&h=150&c=900&rsu=u.10-4").await;

    assert_eq!(status, StatusCode::OK);
    // Bogus salary -> default; valid health survives; out-of-range rate ->
    // absent; unit grant without fmv -> dropped.
    assert_eq!(decimal_field(&result["annual_gross_salary"]), decimal("100000"));
    assert_eq!(
        decimal_field(&result["monthly_health_contribution"]),
        decimal("150")
    );
    assert!(result["contractor_tax_rate_percent"].is_null());
    assert!(result["equity_grants"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_params_decoding_with_empty_query_returns_defaults() {
    let router = create_router_for_test();
    let (status, result) = get_json(router, "/params").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result["annual_gross_salary"]), decimal("100000"));
    assert_eq!(
        decimal_field(&result["monthly_health_contribution"]),
        decimal("100")
    );
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/breakdowns")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_negative_salary_returns_invalid_param() {
    let router = create_router_for_test();
    let body = json!({
        "params": {
            "annual_gross_salary": -1,
            "monthly_health_contribution": 100
        },
        "year": 1
    });

    let (status, error) = post_json(router, "/breakdowns", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PARAM");
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("annual_gross_salary")
    );
}

#[tokio::test]
async fn test_zero_vesting_period_returns_invalid_grant() {
    let router = create_router_for_test();
    let body = json!({
        "params": {
            "annual_gross_salary": 100000,
            "monthly_health_contribution": 100,
            "equity_grants": [
                { "mode": "dollar_based", "dollar_value": 10000, "vesting_period_years": 0 }
            ]
        },
        "year": 1
    });

    let (status, error) = post_json(router, "/breakdowns", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_GRANT");
}

#[tokio::test]
async fn test_year_zero_returns_invalid_param() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 15), "year": 0 });

    let (status, error) = post_json(router, "/breakdowns", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PARAM");
    assert!(error["message"].as_str().unwrap().contains("year"));
}

#[tokio::test]
async fn test_contractor_rate_above_100_returns_invalid_param() {
    let router = create_router_for_test();
    let body = json!({ "params": params_body(100_000, 100, 101), "year": 1 });

    let (status, error) = post_json(router, "/breakdowns", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PARAM");
}
