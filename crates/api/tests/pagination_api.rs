//! Integration tests for `?page=&perpage=` handling on the list endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, get};

async fn seeded_app(count: usize) -> axum::Router {
    let app = common::build_test_app();
    for i in 0..count {
        create(&app, "teachers", &format!("t{i:02}")).await;
    }
    app
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["teachers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name_en"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn defaults_to_first_page_of_ten() {
    let app = seeded_app(12).await;
    let json = body_json(get(app, "/teachers/en").await).await;

    assert_eq!(json["totalPages"], 2);
    assert_eq!(names(&json).len(), 10);
    assert_eq!(names(&json)[0], "t00");
}

#[tokio::test]
async fn second_page_holds_the_remainder() {
    let app = seeded_app(12).await;
    let json = body_json(get(app, "/teachers/en?page=2").await).await;

    assert_eq!(json["totalPages"], 2);
    assert_eq!(names(&json), ["t10", "t11"]);
}

#[tokio::test]
async fn total_pages_is_ceiling_of_count_over_per_page() {
    let app = seeded_app(7).await;

    for (perpage, expected) in [(1, 7), (2, 4), (3, 3), (7, 1), (50, 1)] {
        let json = body_json(get(app.clone(), &format!("/teachers/en?perpage={perpage}")).await)
            .await;
        assert_eq!(json["totalPages"], expected, "perpage={perpage}");
    }
}

#[tokio::test]
async fn page_and_perpage_slice_the_collection() {
    let app = seeded_app(7).await;
    let json = body_json(get(app, "/teachers/ru?page=3&perpage=2").await).await;

    let ids: Vec<_> = json["teachers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name_ru"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["t04 (ru)", "t05 (ru)"]);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let app = seeded_app(3).await;
    let response = get(app, "/teachers/en?page=9").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalPages"], 1);
    assert!(json["teachers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn huge_page_is_an_empty_page() {
    let app = seeded_app(3).await;
    let response = get(app, "/teachers/en?page=9223372036854775807&perpage=100").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalPages"], 1);
    assert!(json["teachers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_positive_values_are_rejected() {
    let app = common::build_test_app();

    for query in ["page=0", "page=-1", "perpage=0", "perpage=-5", "perpage=101"] {
        let response = get(app.clone(), &format!("/teachers/en?{query}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{query}");
    }
}

#[tokio::test]
async fn non_numeric_values_are_rejected() {
    let app = common::build_test_app();

    for query in ["page=abc", "perpage=ten", "perpage=1.5"] {
        let response = get(app.clone(), &format!("/courses/en?{query}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "{query}");
    }
}

#[tokio::test]
async fn invalid_language_is_reported_before_pagination() {
    let app = common::build_test_app();
    let response = get(app, "/teachers/de?page=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_text(response).await, "Invalid language");
}
