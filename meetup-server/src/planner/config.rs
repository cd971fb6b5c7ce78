//! Configuration for the recommendation pipeline.

/// Parameters for request validation, attraction scoring and paging.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Weight of the tag-match score in the total.
    pub tag_weight: f64,

    /// Weight of the walking-distance score in the total.
    pub walk_weight: f64,

    /// Weight of the price score in the total.
    pub price_weight: f64,

    /// Weight of the rating score in the total.
    pub rating_weight: f64,

    /// Walks this short or shorter score 1.0 (minutes).
    pub walk_best_mins: f64,

    /// Walks this long or longer score 0.0 (minutes).
    pub walk_worst_mins: f64,

    /// Fewest participants a request may have.
    pub min_participants: usize,

    /// Most participants a request may have.
    pub max_participants: usize,

    /// Ranked attractions shown per page.
    pub page_size: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given scoring weights and
    /// default limits.
    pub fn with_weights(tag: f64, walk: f64, price: f64, rating: f64) -> Self {
        Self {
            tag_weight: tag,
            walk_weight: walk,
            price_weight: price,
            rating_weight: rating,
            ..Self::default()
        }
    }

    /// Width of the linear part of the walk score (minutes).
    pub fn walk_range(&self) -> f64 {
        self.walk_worst_mins - self.walk_best_mins
    }

    /// Whether `count` participants is an acceptable group size.
    pub fn participants_in_range(&self, count: usize) -> bool {
        (self.min_participants..=self.max_participants).contains(&count)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tag_weight: 0.4,
            walk_weight: 0.3,
            price_weight: 0.2,
            rating_weight: 0.1,
            walk_best_mins: 2.0,
            walk_worst_mins: 13.0,
            min_participants: 2,
            max_participants: 10,
            page_size: 3,
        }
    }
}
