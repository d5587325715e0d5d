use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::rating::StarRatings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Course {
    pub course_number: String,
    pub course_name: String,
    pub date: String,
}

/// Public review text shown on a course page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    pub review: String,
    pub semester: String,
}

/// Moderation state of a user's review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Published {
    pub status: String,
    pub valid: bool,
}

/// A review as seen by its own author, with moderation status and scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserReview {
    pub review: String,
    pub published: Published,
    pub requested_changes: String,
    pub recommended: f64,
    pub engaging: f64,
    pub difficulty: f64,
    pub effort: f64,
    pub resources: f64,
    pub semester: String,
    pub course_number: String,
    pub course_name: String,
    pub evaluationid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<StarRatings>,
}

/// A review waiting for a moderator decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnverifiedReview {
    pub review: String,
    pub old_review: String,
    pub requested_changes: String,
    pub course_number: String,
    pub course_name: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "ID")]
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageData {
    pub time: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    pub paths: Vec<UsageData>,
    pub users: Vec<UsageData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stats {
    pub total_courses: u64,
    pub total_reviews: u64,
}

/// Aggregated score per criterion key, as returned by `/getRatings`
pub type CriterionScores = BTreeMap<String, f64>;

/// Everything needed to submit a new review
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub review: String,
    pub course_number: String,
    pub semester: String,
    /// Client-generated nonce that lets the backend drop duplicate submissions
    pub random_string: String,
    pub ratings: StarRatings,
}

impl NewReview {
    pub fn new(
        review: impl Into<String>,
        course_number: impl Into<String>,
        semester: impl Into<String>,
        ratings: StarRatings,
    ) -> Self {
        Self {
            review: review.into(),
            course_number: course_number.into(),
            semester: semester.into(),
            random_string: Uuid::new_v4().to_string(),
            ratings,
        }
    }

    pub fn with_random_string(mut self, random_string: impl Into<String>) -> Self {
        self.random_string = random_string.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rating::default_star_ratings;
    use serde_json::json;

    #[test]
    fn test_user_review_deserialization() {
        let review: UserReview = serde_json::from_value(json!({
            "Review": "Great course",
            "Published": {"Status": "pending", "Valid": true},
            "RequestedChanges": "",
            "Recommended": 5,
            "Engaging": 4,
            "Difficulty": 3,
            "Effort": 3,
            "Resources": 4,
            "Semester": "F24",
            "CourseNumber": "CS101",
            "CourseName": "Intro to CS",
            "Evaluationid": 17
        }))
        .unwrap();

        assert_eq!(review.published.status, "pending");
        assert_eq!(review.evaluationid, 17);
        assert_eq!(review.recommended, 5.0);
        assert!(review.rating.is_none());
    }

    #[test]
    fn test_unverified_review_field_names() {
        let review: UnverifiedReview = serde_json::from_value(json!({
            "Review": "new text",
            "OldReview": "old text",
            "RequestedChanges": "",
            "CourseNumber": "CS101",
            "CourseName": "Intro to CS",
            "UserID": "jdoe42",
            "ID": 9
        }))
        .unwrap();

        assert_eq!(review.user_id, "jdoe42");
        assert_eq!(review.id, 9);
        assert_eq!(review.old_review, "old text");
    }

    #[test]
    fn test_course_and_stats_shapes() {
        let course: Course = serde_json::from_value(json!({
            "CourseNumber": "CS101",
            "CourseName": "Intro to CS",
            "Date": "2024-09-01"
        }))
        .unwrap();
        assert_eq!(course.course_number, "CS101");

        let stats: Stats =
            serde_json::from_value(json!({"TotalCourses": 120, "TotalReviews": 845})).unwrap();
        assert_eq!(stats.total_reviews, 845);
    }

    #[test]
    fn test_new_review_generates_distinct_nonces() {
        let first = NewReview::new("text", "CS101", "F24", default_star_ratings());
        let second = NewReview::new("text", "CS101", "F24", default_star_ratings());
        assert_ne!(first.random_string, second.random_string);

        let fixed = first.with_random_string("abc");
        assert_eq!(fixed.random_string, "abc");
    }
}
