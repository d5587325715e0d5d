// Public API - what other modules can use
pub use client::ApiClient;
pub use models::{
    Course, CriterionScores, NewReview, Published, Review, Stats, UnverifiedReview, UsageData,
    UsageStats, UserReview,
};
pub use rating::{
    default_star_ratings, rating_to_request, Criterion, Rating, RatingRequest, StarDetails,
    StarRatings,
};

// Internal modules
mod client;
pub mod models;
pub mod rating;
mod requests;
