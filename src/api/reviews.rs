use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{Review, ReviewFilters, ReviewStatus};
use reqwest::Method;
use serde_json::json;

const REVIEWS: &str = "/reviews";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["review"];

impl ApiClient {
    /// Public review form; the backend stores it as pending
    pub async fn submit_review(&self, review: &Review) -> Result<Review> {
        self.send_entity(Method::POST, REVIEWS, RequestBody::json(review)?, WRAPPERS, None)
            .await
    }

    pub async fn get_reviews(&self, filters: &ReviewFilters) -> Result<ListPage<Review>> {
        self.fetch_list(REVIEWS, filters, None).await
    }

    /// Moderation: approve or reject
    pub async fn update_review_status(&self, auth: &AuthContext, id: &str, status: ReviewStatus) -> Result<Review> {
        let path = format!("{}/status", item_path(REVIEWS, id));
        let body = RequestBody::Json(json!({ "status": status }));
        self.send_entity(Method::PUT, &path, body, WRAPPERS, Some(auth)).await
    }

    pub async fn update_review(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<Review> {
        self.send_entity(Method::PUT, &item_path(REVIEWS, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_review(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(REVIEWS, id), auth).await
    }
}
