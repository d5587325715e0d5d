use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::{
    Course, CriterionScores, NewReview, Review, Stats, UnverifiedReview, UsageStats, UserReview,
};
use super::rating::{rating_to_request, StarRatings};
use super::requests::{
    IdRequest, InsertReviewRequest, RejectReviewRequest, ScrapeCoursesRequest,
    SemesterListRequest, SemesterRequest, SetModeratorRequest, UpdateRatingRequest,
    UpdateReviewRequest,
};
use crate::config::ClientConfig;
use crate::session::TokenProvider;
use crate::shared::ClientError;

/// Query parameter the backend reads the bearer token from on GET endpoints
const TOKEN_PARAM: &str = "token";

/// Typed client for the course-review REST backend.
///
/// Each method issues exactly one request. Non-success statuses, transport
/// failures and undecodable bodies are returned to the caller as they are;
/// nothing is retried or cached.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_http_client(Client::new(), base_url, tokens)
    }

    pub fn with_http_client(
        http: Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn from_config(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::new(config.api_url.clone(), tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = %method, path = %path, "Dispatching API request");
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Reads the session token fresh for every authenticated call
    fn token(&self) -> Result<String, ClientError> {
        self.tokens.token().ok_or(ClientError::MissingToken)
    }

    async fn get_body(&self, path: &str, query: &[(&str, &str)]) -> Result<String, reqwest::Error> {
        self.request(Method::GET, path)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// GET returning the raw body; errors drop their URL when it carries the token
    async fn get_checked(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ClientError> {
        self.get_body(path, query).await.map_err(|e| {
            if query.iter().any(|(key, _)| *key == TOKEN_PARAM) {
                ClientError::Http(e.without_url())
            } else {
                ClientError::Http(e)
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let body = self.get_checked(path, query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ClientError> {
        Ok(decode_text(self.get_checked(path, query).await?))
    }

    async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ClientError> {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(decode_text(response.text().await?))
    }

    // Public endpoints

    #[instrument(skip(self))]
    pub async fn api_health(&self) -> Result<String, ClientError> {
        self.get_text("/", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.get_json("/courses", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_reviews(&self, course_number: &str) -> Result<Vec<Review>, ClientError> {
        self.get_json("/getReviews", &[("course", course_number)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_ratings(
        &self,
        course_number: &str,
    ) -> Result<Vec<CriterionScores>, ClientError> {
        self.get_json("/getRatings", &[("course", course_number)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_latest_reviews(&self) -> Result<Vec<Course>, ClientError> {
        self.get_json("/latestReviews", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_course_name(&self, course_number: &str) -> Result<String, ClientError> {
        self.get_text("/courseName", &[("course", course_number)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_semesters(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/currentSemesters", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_stats(&self) -> Result<Stats, ClientError> {
        self.get_json("/stats", &[]).await
    }

    // Token-bearing queries

    #[instrument(skip(self))]
    pub async fn fetch_user_data(&self) -> Result<Vec<UserReview>, ClientError> {
        let token = self.token()?;
        self.get_json("/auth/getUserData", &[(TOKEN_PARAM, token.as_str())])
            .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_unverified(&self) -> Result<Vec<UnverifiedReview>, ClientError> {
        let token = self.token()?;
        self.get_json("/auth/moderator/getUnverifiedReviews", &[(TOKEN_PARAM, token.as_str())])
            .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_usage_stats(&self) -> Result<UsageStats, ClientError> {
        let token = self.token()?;
        self.get_json("/auth/moderator/usageStats", &[(TOKEN_PARAM, token.as_str())])
            .await
    }

    // Moderation

    #[instrument(skip(self))]
    pub async fn verify_review(&self, id: i64) -> Result<String, ClientError> {
        let token = self.token()?;
        self.post_text("/auth/moderator/verifyReview", &IdRequest { id, token: &token })
            .await
    }

    #[instrument(skip(self))]
    pub async fn reject_review(
        &self,
        id: i64,
        requested_changes: &str,
    ) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = RejectReviewRequest {
            id,
            token: &token,
            requested_changes,
        };
        self.post_text("/auth/moderator/rejectReview", &body).await
    }

    #[instrument(skip(self))]
    pub async fn set_current_semesters(&self, semesters: &[String]) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = SemesterListRequest {
            list: semesters,
            token: &token,
        };
        self.post_text("/auth/moderator/setCurrentSemester", &body)
            .await
    }

    #[instrument(skip(self))]
    pub async fn scrape_courses(&self, semester: &str) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = ScrapeCoursesRequest {
            semester,
            token: &token,
        };
        self.post_text("/auth/moderator/scrapeCourses", &body).await
    }

    #[instrument(skip(self))]
    pub async fn set_moderator(&self, user: &str) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = SetModeratorRequest {
            user,
            token: &token,
        };
        self.post_text("/auth/admin/setModerator", &body).await
    }

    // Review authoring

    #[instrument(skip(self, review))]
    pub async fn update_review(&self, id: i64, review: &str) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = UpdateReviewRequest {
            id,
            review,
            token: &token,
        };
        self.post_text("/auth/updateReview", &body).await
    }

    #[instrument(skip(self))]
    pub async fn delete_review(&self, id: i64) -> Result<String, ClientError> {
        let token = self.token()?;
        self.post_text("/auth/deleteReview", &IdRequest { id, token: &token })
            .await
    }

    #[instrument(skip(self, ratings))]
    pub async fn update_rating(
        &self,
        id: i64,
        ratings: &StarRatings,
    ) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = UpdateRatingRequest {
            id,
            token: &token,
            ratings: rating_to_request(ratings),
        };
        self.post_text("/auth/updateRating", &body).await
    }

    #[instrument(skip(self, review), fields(course = %review.course_number))]
    pub async fn insert_review(&self, review: &NewReview) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = InsertReviewRequest {
            review: &review.review,
            course_number: &review.course_number,
            token: &token,
            semester: &review.semester,
            random_string: &review.random_string,
            ratings: rating_to_request(&review.ratings),
        };
        self.post_text("/insertReview", &body).await
    }

    #[instrument(skip(self))]
    pub async fn update_semester(&self, semester: &str, id: i64) -> Result<String, ClientError> {
        let token = self.token()?;
        let body = SemesterRequest {
            semester,
            id,
            token: &token,
        };
        self.post_text("/auth/updateSemester", &body).await
    }

    #[instrument(skip(self))]
    pub async fn delete_rating(&self, id: i64) -> Result<String, ClientError> {
        let token = self.token()?;
        self.post_text("/auth/deleteRating", &IdRequest { id, token: &token })
            .await
    }
}

/// Unwraps bodies that arrive as a JSON string literal; anything else is kept verbatim
fn decode_text(body: String) -> String {
    match serde_json::from_str::<String>(&body) {
        Ok(text) => text,
        Err(_) => body,
    }
}
