use super::query::{rank_reviews, ReviewFilter};
use crate::error::ReviewError;
use crate::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use common::requests::ReviewQuery;

/// `GET`: filtered reviews as a pretty-printed JSON array, best sentiment first.
pub(crate) async fn process(query_string: &str, state: &AppState) -> Result<HttpResponse, ReviewError> {
    let body = list_reviews(query_string, state).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

pub async fn list_reviews(query_string: &str, state: &AppState) -> Result<Vec<u8>, ReviewError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
        .map_err(|e| ReviewError::InvalidForm(e.to_string()))?;
    let filter = ReviewFilter::from_query(&ReviewQuery::from_pairs(&pairs))?;

    let reviews = state.store.snapshot().await;
    let ranked = rank_reviews(reviews, &filter, state.scorer.as_ref());

    Ok(serde_json::to_vec_pretty(&ranked)?)
}
