use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::shared::ClientError;

/// The five axes every review is scored on, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Criterion {
    Recommended,
    Engaging,
    Difficulty,
    Effort,
    Resources,
}

impl Criterion {
    /// Key used in rating structures, e.g. `Recommended`
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// How many reviews gave each star count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarDetails {
    pub one_star_ratings: u32,
    pub two_star_ratings: u32,
    pub three_star_ratings: u32,
    pub four_star_ratings: u32,
    pub five_star_ratings: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rating: f64,
    pub details: StarDetails,
}

/// A rating for each of the five criteria.
///
/// Every criterion is a required field, so incomplete input is rejected when
/// it is deserialized or converted, never later when a request is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StarRatings {
    pub recommended: Rating,
    pub engaging: Rating,
    pub difficulty: Rating,
    pub effort: Rating,
    pub resources: Rating,
}

impl StarRatings {
    /// Builds the structure from a loosely keyed map, failing on the first absent criterion
    pub fn from_map(mut map: HashMap<String, Rating>) -> Result<Self, ClientError> {
        let mut take = |criterion: Criterion| {
            map.remove(criterion.key())
                .ok_or(ClientError::MissingCriterion(criterion.key()))
        };

        Ok(Self {
            recommended: take(Criterion::Recommended)?,
            engaging: take(Criterion::Engaging)?,
            difficulty: take(Criterion::Difficulty)?,
            effort: take(Criterion::Effort)?,
            resources: take(Criterion::Resources)?,
        })
    }

    pub fn get(&self, criterion: Criterion) -> &Rating {
        match criterion {
            Criterion::Recommended => &self.recommended,
            Criterion::Engaging => &self.engaging,
            Criterion::Difficulty => &self.difficulty,
            Criterion::Effort => &self.effort,
            Criterion::Resources => &self.resources,
        }
    }

    pub fn get_mut(&mut self, criterion: Criterion) -> &mut Rating {
        match criterion {
            Criterion::Recommended => &mut self.recommended,
            Criterion::Engaging => &mut self.engaging,
            Criterion::Difficulty => &mut self.difficulty,
            Criterion::Effort => &mut self.effort,
            Criterion::Resources => &mut self.resources,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &Rating)> + '_ {
        Criterion::iter().map(move |criterion| (criterion, self.get(criterion)))
    }
}

/// Flat rating fields merged into review and rating request bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingRequest {
    #[serde(serialize_with = "whole_number")]
    pub recommended: f64,
    #[serde(serialize_with = "whole_number")]
    pub engaging: f64,
    #[serde(serialize_with = "whole_number")]
    pub difficulty: f64,
    #[serde(serialize_with = "whole_number")]
    pub effort: f64,
    #[serde(serialize_with = "whole_number")]
    pub resources: f64,
}

impl From<&StarRatings> for RatingRequest {
    fn from(ratings: &StarRatings) -> Self {
        rating_to_request(ratings)
    }
}

/// Star scores are whole numbers; send them as JSON integers when they are
fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Picks the numeric score of each criterion
pub fn rating_to_request(ratings: &StarRatings) -> RatingRequest {
    RatingRequest {
        recommended: ratings.recommended.rating,
        engaging: ratings.engaging.rating,
        difficulty: ratings.difficulty.rating,
        effort: ratings.effort.rating,
        resources: ratings.resources.rating,
    }
}

/// Zeroed ratings used to seed a new review form
pub fn default_star_ratings() -> StarRatings {
    StarRatings::default()
}
