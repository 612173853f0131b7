use crate::common::TestClient;
use axum::http::StatusCode;

fn question_ids(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .expect("Response should be an array")
        .iter()
        .map(|q| q["question"]["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_question_bank_is_deduplicated() {
    let client = TestClient::seeded();

    let response = client.get("/questions").await;
    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    assert_eq!(question_ids(&json), vec!["q1", "q2", "q3", "q4", "q6", "q8"]);

    // The repeated URL shortener question keeps its first company
    let url = json
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["question"]["text"] == "Design a URL shortener")
        .unwrap();
    assert_eq!(url["company"], "Google");
}

#[tokio::test]
async fn test_question_bank_filters() {
    let client = TestClient::seeded();

    let json: serde_json::Value = client.get("/questions?company=Amazon").await.json();
    assert_eq!(question_ids(&json), vec!["q5", "q6"]);

    let json: serde_json::Value = client.get("/questions?difficulty=hard").await.json();
    assert_eq!(question_ids(&json), vec!["q2"]);

    let json: serde_json::Value = client
        .get("/questions?topic=behavioral&search=TEAMMATE")
        .await
        .json();
    assert_eq!(question_ids(&json), vec!["q3"]);
}

#[tokio::test]
async fn test_question_bank_rejects_unknown_difficulty() {
    let client = TestClient::seeded();

    let response = client.get("/questions?difficulty=impossible").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_companies() {
    let client = TestClient::seeded();

    let response = client.get("/companies").await;
    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    let companies: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["company"].as_str().unwrap().to_string(),
                c["post_count"].as_u64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        companies,
        vec![
            ("Flipkart".to_string(), 1),
            ("Microsoft".to_string(), 1),
            ("Google".to_string(), 2),
            ("Amazon".to_string(), 1),
        ]
    );
}
