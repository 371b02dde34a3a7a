use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownSortMode;

/// A single dish as it appears in the startup document.
///
/// Fields missing from a record fall back to blanks so that a sparse record
/// still renders; see [`crate::store::parse_recipes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    #[serde(rename = "desc", alias = "description")]
    pub description: String,
    /// Path or URL of the display image
    pub image: String,
    /// Total time in minutes
    pub time: u32,
    pub cuisine: String,
    pub meal: String,
    pub ingredients: Vec<String>,
    /// Steps in execution order
    pub instructions: Vec<String>,
}

/// Position of a recipe in the store's load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(pub usize);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Original load order. No ranking is performed.
    #[default]
    Relevance,
    TimeAscending,
    TimeDescending,
    Alphabetical,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Relevance,
        SortMode::TimeAscending,
        SortMode::TimeDescending,
        SortMode::Alphabetical,
    ];

    /// Value used by the sort control
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::TimeAscending => "time-asc",
            SortMode::TimeDescending => "time-desc",
            SortMode::Alphabetical => "alpha",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}

/// The search text, selected tags and sort mode driving one query.
///
/// Built fresh from the control values every time a query runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Matched case-insensitively as a substring of the title or any ingredient
    pub query: String,
    /// Empty means no cuisine restriction
    pub cuisines: BTreeSet<String>,
    /// Empty means no meal restriction
    pub meals: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.insert(cuisine.into());
        self
    }

    pub fn meal(mut self, meal: impl Into<String>) -> Self {
        self.meals.insert(meal.into());
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// True when the recipe passes the text, cuisine and meal predicates.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && (self.cuisines.is_empty() || self.cuisines.contains(&recipe.cuisine))
            && (self.meals.is_empty() || self.meals.contains(&recipe.meal))
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        recipe.title.to_lowercase().contains(&needle)
            || recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    }
}
