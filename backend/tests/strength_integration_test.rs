//! Integration tests for the strength grading endpoints
//!
//! Seeds categories, evaluation standards and age coefficients through the
//! API, then exercises the stateless calculation, the transactional batch,
//! and the measurement history endpoints.

mod common;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

fn dec(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::String(s) => Decimal::from_str_exact(s).unwrap(),
        serde_json::Value::Number(n) => Decimal::from_str_exact(&n.to_string()).unwrap(),
        other => panic!("not a decimal: {:?}", other),
    }
}

/// Seed one graded category: thresholds {50, 70, 90} from bodyweight 0,
/// coefficient 1.1 at age 25 and 1.0 at age 35
async fn seed_category(app: &common::TestApp, token: &str, name: &str) -> i64 {
    let category_id = app.create_category(token, name, "kg").await;

    let standard = json!({
        "gender": "M",
        "category_id": category_id,
        "body_weight": "0",
        "beginner": "50",
        "novice": "70",
        "intermediate": "90",
    });
    let response = app
        .post_auth("/api/v1/evaluation-standards", &standard.to_string(), token)
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

    for (age, coefficient) in [(25, "1.1"), (35, "1.0")] {
        let body = json!({
            "gender": "M",
            "category_id": category_id,
            "age": age,
            "coefficient": coefficient,
        });
        let response = app
            .post_auth("/api/v1/age-coefficients", &body.to_string(), token)
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }

    category_id
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_calculate_strength_level_worked_example() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("strength"), "SecurePassword123!")
        .await;
    let category_id = seed_category(&app, &token, "Bench Press").await;

    // age 30 is equidistant from 25 and 35; the tie goes to the lower age,
    // so the coefficient is 1.1 and the thresholds become {55, 77, 99}
    let body = json!({
        "gender": "M",
        "age": 30,
        "body_weight": "80",
        "measured_weight": "80",
        "category_id": category_id,
    });

    let response = app
        .post_auth(
            "/api/v1/members/calculate-strength-level",
            &body.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);

    let result = response.json();
    assert_eq!(result["grade"], "Novice");
    assert_eq!(dec(&result["next_level_target"]), Decimal::from(99));
    assert_eq!(dec(&result["remaining"]), Decimal::from(19));
    assert_eq!(
        dec(&result["adjusted_thresholds"]["intermediate"]),
        Decimal::from(99)
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_standard_selection_uses_largest_bracket_at_or_below_bodyweight() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("brackets"), "SecurePassword123!")
        .await;
    let category_id = app.create_category(&token, "Bench Press", "kg").await;

    // Three bodyweight brackets; a 90 kg lifter falls in the 75 kg bracket,
    // not the 100 kg one above them and not the 0 kg catch-all
    for (body_weight, beginner, novice) in
        [("0", "40", "50"), ("75", "60", "70"), ("100", "80", "90")]
    {
        let standard = json!({
            "gender": "M",
            "category_id": category_id,
            "body_weight": body_weight,
            "beginner": beginner,
            "novice": novice,
        });
        let response = app
            .post_auth("/api/v1/evaluation-standards", &standard.to_string(), &token)
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }

    let coefficient = json!({
        "gender": "M",
        "category_id": category_id,
        "age": 30,
        "coefficient": "1.0",
    });
    app.post_auth("/api/v1/age-coefficients", &coefficient.to_string(), &token)
        .await;

    let body = json!({
        "gender": "M",
        "age": 30,
        "body_weight": "90",
        "measured_weight": "65",
        "category_id": category_id,
    });
    let response = app
        .post_auth(
            "/api/v1/members/calculate-strength-level",
            &body.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);

    // 65 clears the 75 kg bracket's beginner threshold (60) and the next
    // target is that bracket's novice threshold (70)
    let result = response.json();
    assert_eq!(result["grade"], "Beginner");
    assert_eq!(dec(&result["next_level_target"]), Decimal::from(70));
    assert_eq!(dec(&result["remaining"]), Decimal::from(5));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_calculate_strength_level_missing_standard() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("no_standard"), "SecurePassword123!")
        .await;
    // category exists but has no standards or coefficients
    let category_id = app.create_category(&token, "Deadlift", "kg").await;

    let body = json!({
        "gender": "M",
        "age": 30,
        "body_weight": "80",
        "measured_weight": "100",
        "category_id": category_id,
    });

    let response = app
        .post_auth(
            "/api/v1/members/calculate-strength-level",
            &body.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_calculate_strength_level_missing_coefficient() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("no_coeff"), "SecurePassword123!")
        .await;
    let category_id = app.create_category(&token, "Squat", "kg").await;

    // standard exists, coefficients do not
    let standard = json!({
        "gender": "M",
        "category_id": category_id,
        "body_weight": "0",
        "beginner": "50",
    });
    app.post_auth("/api/v1/evaluation-standards", &standard.to_string(), &token)
        .await;

    let body = json!({
        "gender": "M",
        "age": 30,
        "body_weight": "80",
        "measured_weight": "100",
        "category_id": category_id,
    });

    let response = app
        .post_auth(
            "/api/v1/members/calculate-strength-level",
            &body.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_calculate_measurements_batch_and_history() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("batch"), "SecurePassword123!")
        .await;
    let bench = seed_category(&app, &token, "Bench Press").await;
    let squat = seed_category(&app, &token, "Squat").await;

    let member = json!({
        "name": "Lee",
        "gender": "M",
        "age": 30,
        "height": "178.0",
        "weight": "80.0",
    });
    let response = app
        .post_auth("/api/v1/members", &member.to_string(), &token)
        .await;
    let member_id = response.json()["id"].as_i64().unwrap();

    let batch = json!({
        "member_id": member_id,
        "measurements": [
            { "category_id": bench, "value": "80" },
            { "category_id": squat, "value": "120" },
        ],
    });
    let response = app
        .post_auth(
            "/api/v1/members/calculate-measurements",
            &batch.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

    let result = response.json();
    let results = result["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["grade"], "Novice");
    // 120 clears the adjusted intermediate threshold (99), the top defined level
    assert_eq!(results[1]["grade"], "Intermediate");

    // Full history shows both records with the member snapshot
    let response = app
        .get_auth(&format!("/api/v1/members/{}/measurements", member_id), &token)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let history = response.json();
    let records = history.as_array().unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        assert_eq!(record["age"], 30);
        assert_eq!(dec(&record["weight"]), Decimal::from(80));
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_calculate_measurements_is_atomic() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("atomic"), "SecurePassword123!")
        .await;
    let bench = seed_category(&app, &token, "Bench Press").await;

    let member = json!({
        "name": "Park",
        "gender": "M",
        "age": 30,
        "height": "178.0",
        "weight": "80.0",
    });
    let response = app
        .post_auth("/api/v1/members", &member.to_string(), &token)
        .await;
    let member_id = response.json()["id"].as_i64().unwrap();

    // Second measurement references a category that does not exist, so the
    // whole batch must fail and nothing may be written
    let batch = json!({
        "member_id": member_id,
        "measurements": [
            { "category_id": bench, "value": "80" },
            { "category_id": 999999, "value": "50" },
        ],
    });
    let response = app
        .post_auth(
            "/api/v1/members/calculate-measurements",
            &batch.to_string(),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .get_auth(&format!("/api/v1/members/{}/measurements", member_id), &token)
        .await;
    assert!(response.json().as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_latest_measurements_returns_newest_per_category() {
    let app = common::TestApp::new().await;
    let token = app
        .signup_and_login(&unique_email("latest"), "SecurePassword123!")
        .await;
    let bench = seed_category(&app, &token, "Bench Press").await;

    let member = json!({
        "name": "Choi",
        "gender": "M",
        "age": 30,
        "height": "178.0",
        "weight": "80.0",
    });
    let response = app
        .post_auth("/api/v1/members", &member.to_string(), &token)
        .await;
    let member_id = response.json()["id"].as_i64().unwrap();

    for value in ["60", "80"] {
        let batch = json!({
            "member_id": member_id,
            "measurements": [{ "category_id": bench, "value": value }],
        });
        let response = app
            .post_auth(
                "/api/v1/members/calculate-measurements",
                &batch.to_string(),
                &token,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .get_auth(
            &format!("/api/v1/members/{}/measurements/latest", member_id),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let latest = response.json();
    let records = latest.as_array().unwrap();
    // one record per category, and it is the most recent one
    assert_eq!(records.len(), 1);
    assert_eq!(dec(&records[0]["value"]), Decimal::from(80));

    // full history still has both
    let response = app
        .get_auth(&format!("/api/v1/members/{}/measurements", member_id), &token)
        .await;
    assert_eq!(response.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_measurements_for_foreign_member_not_found() {
    let app = common::TestApp::new().await;
    let token_a = app
        .signup_and_login(&unique_email("owner"), "SecurePassword123!")
        .await;
    let token_b = app
        .signup_and_login(&unique_email("intruder"), "SecurePassword123!")
        .await;

    let member = json!({
        "name": "Jung",
        "gender": "F",
        "age": 28,
        "height": "165.0",
        "weight": "58.0",
    });
    let response = app
        .post_auth("/api/v1/members", &member.to_string(), &token_a)
        .await;
    let member_id = response.json()["id"].as_i64().unwrap();

    let response = app
        .get_auth(
            &format!("/api/v1/members/{}/measurements", member_id),
            &token_b,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
