use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use pw_feed::{BankQuestion, CompanyCount, QuestionFilter, companies, question_bank};

use crate::ApiState;

/// Create the question bank routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/companies", get(list_companies))
}

/// Deduplicated questions across all posts
async fn list_questions(
    State(state): State<ApiState>,
    Query(filter): Query<QuestionFilter>,
) -> Json<Vec<BankQuestion>> {
    Json(question_bank(&state.store, &filter))
}

async fn list_companies(State(state): State<ApiState>) -> Json<Vec<CompanyCount>> {
    Json(companies(&state.store))
}
