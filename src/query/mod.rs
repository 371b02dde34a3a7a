mod collation;

pub use collation::{locale_compare, TitleCollator};

use log::debug;

use crate::model::{FilterCriteria, Recipe, RecipeId, SortMode};

/// Filter `recipes` by `criteria` and order the survivors.
///
/// Returns the ids (load-order positions) of the matching recipes. All sorts
/// are stable, so ties keep their load order and `Relevance` is simply load
/// order.
pub fn query_ids(recipes: &[Recipe], criteria: &FilterCriteria) -> Vec<RecipeId> {
    let mut matched: Vec<RecipeId> = recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| criteria.matches(recipe))
        .map(|(index, _)| RecipeId(index))
        .collect();

    match criteria.sort {
        SortMode::Relevance => {}
        SortMode::TimeAscending => matched.sort_by_key(|id| recipes[id.0].time),
        SortMode::TimeDescending => {
            matched.sort_by(|a, b| recipes[b.0].time.cmp(&recipes[a.0].time))
        }
        SortMode::Alphabetical => {
            let mut collator = TitleCollator::new();
            matched.sort_by(|a, b| collator.compare(&recipes[a.0].title, &recipes[b.0].title))
        }
    }

    debug!(
        "Query {:?} matched {} of {} recipes",
        criteria,
        matched.len(),
        recipes.len()
    );
    matched
}

/// Same as [`query_ids`], resolved to the recipes themselves.
pub fn query<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    query_ids(recipes, criteria)
        .into_iter()
        .map(|id| &recipes[id.0])
        .collect()
}
