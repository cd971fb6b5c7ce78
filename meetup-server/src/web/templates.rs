//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::PreferenceTag;
use crate::planner::{Participant, Recommendation, ScoredAttraction};
use crate::present::{format_score, pages};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the participant form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Choices for the group-size selector
    pub counts: Vec<CountOption>,

    /// One row per participant
    pub rows: Vec<usize>,

    pub stations: Vec<String>,
    pub tags: Vec<TagOption>,
}

impl IndexTemplate {
    /// Build the form for `count` participants.
    pub fn new(count: usize, min: usize, max: usize, stations: Vec<String>) -> Self {
        Self {
            counts: (min..=max)
                .map(|value| CountOption {
                    value,
                    selected: value == count,
                })
                .collect(),
            rows: (1..=count).collect(),
            stations,
            tags: PreferenceTag::ALL.iter().copied().map(TagOption::from).collect(),
        }
    }
}

/// Results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub participants: Vec<ParticipantView>,

    /// No station is reachable by everyone
    pub no_fair_station: bool,

    /// Fair stations joined for display
    pub fair_stations: String,

    pub bound_mins: u32,

    /// Ranked attractions, grouped into pages
    pub pages: Vec<PageView>,
}

impl ResultsTemplate {
    /// Build the results page.
    pub fn new(
        participants: &[Participant],
        recommendation: &Recommendation,
        page_size: usize,
    ) -> Self {
        let fair = recommendation.fair_stations();
        Self {
            participants: participants.iter().map(ParticipantView::from).collect(),
            no_fair_station: fair.is_none(),
            fair_stations: fair.map(|f| f.joined("、")).unwrap_or_default(),
            bound_mins: fair.map(|f| f.bound_mins).unwrap_or_default(),
            pages: pages(recommendation.attractions(), page_size)
                .map(|page| PageView {
                    number: page.number,
                    rows: page.items.iter().map(AttractionView::from).collect(),
                })
                .collect(),
        }
    }

    /// Whether there is anything to list.
    pub fn has_attractions(&self) -> bool {
        !self.pages.is_empty()
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// An option in the group-size selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOption {
    pub value: usize,
    pub selected: bool,
}

/// A preference tag option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<PreferenceTag> for TagOption {
    fn from(tag: PreferenceTag) -> Self {
        Self {
            slug: tag.slug(),
            label: tag.label(),
        }
    }
}

/// A participant as submitted.
#[derive(Debug, Clone)]
pub struct ParticipantView {
    pub station: String,
    pub tag_label: &'static str,
}

impl From<&Participant> for ParticipantView {
    fn from(p: &Participant) -> Self {
        Self {
            station: p.start.to_string(),
            tag_label: p.tag.label(),
        }
    }
}

/// A page of ranked attractions.
#[derive(Debug, Clone)]
pub struct PageView {
    pub number: usize,
    pub rows: Vec<AttractionView>,
}

/// A ranked attraction with preformatted scores.
#[derive(Debug, Clone)]
pub struct AttractionView {
    pub rank: usize,
    pub name: String,
    pub station: String,
    pub walk_min: String,
    pub rating: String,
    pub price: String,
    pub tags: String,
    pub total: String,
    pub tag: String,
    pub walk: String,
    pub price_score: String,
    pub rating_score: String,
}

impl From<&ScoredAttraction> for AttractionView {
    fn from(s: &ScoredAttraction) -> Self {
        let a = &s.attraction;
        Self {
            rank: s.rank,
            name: a.name.clone(),
            station: a.mrt_station.to_string(),
            walk_min: a.walk_min.to_string(),
            rating: a.rating.to_string(),
            price: a.price_display(),
            tags: a.tags_display(),
            total: format_score(s.total_score),
            tag: format_score(s.tag_score),
            walk: format_score(s.walk_score),
            price_score: format_score(s.price_score),
            rating_score: format_score(s.rating_score),
        }
    }
}
