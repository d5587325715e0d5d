//! Request bodies for the POST endpoints. Every body carries the bearer
//! token alongside its payload fields.

use serde::Serialize;

use super::rating::RatingRequest;

#[derive(Debug, Serialize)]
pub(crate) struct IdRequest<'a> {
    pub id: i64,
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RejectReviewRequest<'a> {
    pub id: i64,
    pub token: &'a str,
    pub requested_changes: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SemesterListRequest<'a> {
    pub list: &'a [String],
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SetModeratorRequest<'a> {
    pub user: &'a str,
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateReviewRequest<'a> {
    pub id: i64,
    pub review: &'a str,
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateRatingRequest<'a> {
    pub id: i64,
    pub token: &'a str,
    #[serde(flatten)]
    pub ratings: RatingRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsertReviewRequest<'a> {
    pub review: &'a str,
    pub course_number: &'a str,
    pub token: &'a str,
    pub semester: &'a str,
    pub random_string: &'a str,
    #[serde(flatten)]
    pub ratings: RatingRequest,
}

#[derive(Debug, Serialize)]
pub(crate) struct SemesterRequest<'a> {
    pub semester: &'a str,
    pub id: i64,
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrapeCoursesRequest<'a> {
    pub semester: &'a str,
    pub token: &'a str,
}
