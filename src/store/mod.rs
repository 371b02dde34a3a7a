pub mod fetchers;

use log::{info, warn};
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::LoadError;
use crate::model::{Recipe, RecipeId};
use fetchers::fetcher_for;

/// The full set of loaded recipes.
///
/// The store starts out empty and is populated exactly once; an unpopulated
/// store behaves like an empty collection.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: OnceLock<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already populated with `recipes`
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let store = Self::new();
        let _ = store.recipes.set(recipes);
        store
    }

    /// Fill the store. Only the first call succeeds; later calls hand the
    /// rejected recipes back and leave the store untouched.
    pub fn populate(&self, recipes: Vec<Recipe>) -> Result<(), Vec<Recipe>> {
        self.recipes.set(recipes)
    }

    pub fn is_loaded(&self) -> bool {
        self.recipes.get().is_some()
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes().get(id.0)
    }

    pub fn len(&self) -> usize {
        self.recipes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> {
        self.recipes()
            .iter()
            .enumerate()
            .map(|(index, recipe)| (RecipeId(index), recipe))
    }

    /// Find a recipe by exact title, ignoring surrounding whitespace and case
    pub fn find_by_title(&self, title: &str) -> Option<(RecipeId, &Recipe)> {
        let wanted = title.trim().to_lowercase();
        self.iter()
            .find(|(_, recipe)| recipe.title.trim().to_lowercase() == wanted)
    }

    /// Distinct cuisines in first-seen order
    pub fn cuisines(&self) -> Vec<String> {
        distinct(self.recipes().iter().map(|recipe| recipe.cuisine.as_str()))
    }

    /// Distinct meals in first-seen order
    pub fn meals(&self) -> Vec<String> {
        distinct(self.recipes().iter().map(|recipe| recipe.meal.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|known| known == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Parse the startup document.
///
/// The document must be a JSON array. Missing fields in a record default to
/// blanks; records that are not objects or carry a field of the wrong type are
/// skipped with a warning.
pub fn parse_recipes(document: &str) -> Result<Vec<Recipe>, LoadError> {
    let records: Vec<Value> = serde_json::from_str(document)?;
    let mut recipes = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        if !record.is_object() {
            warn!("Skipping recipe record {}: not an object", index);
            continue;
        }

        match serde_json::from_value::<Recipe>(record) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => warn!("Skipping recipe record {}: {}", index, e),
        }
    }

    Ok(recipes)
}

/// Fetch and parse the recipe document at `location` (an http(s) URL or a file path)
pub async fn load(location: &str, timeout: Option<Duration>) -> Result<Vec<Recipe>, LoadError> {
    let fetcher = fetcher_for(location, timeout)?;
    let document = fetcher.fetch(location).await?;
    let recipes = parse_recipes(&document)?;
    info!("Loaded {} recipes from {}", recipes.len(), location);
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, cuisine: &str, meal: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            cuisine: cuisine.to_string(),
            meal: meal.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unpopulated_store_is_empty() {
        let store = RecipeStore::new();
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(RecipeId(0)).is_none());
    }

    #[test]
    fn test_store_is_write_once() {
        let store = RecipeStore::new();
        store
            .populate(vec![recipe("Pasta", "Italian", "dinner")])
            .unwrap();

        let rejected = store
            .populate(vec![recipe("Curry", "Indian", "dinner")])
            .unwrap_err();

        assert_eq!(rejected[0].title, "Curry");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(RecipeId(0)).unwrap().title, "Pasta");
    }

    #[test]
    fn test_distinct_tags_keep_first_seen_order() {
        let store = RecipeStore::with_recipes(vec![
            recipe("Pasta", "Italian", "dinner"),
            recipe("Pancakes", "American", "breakfast"),
            recipe("Risotto", "Italian", "dinner"),
            recipe("Mystery", "", ""),
        ]);

        assert_eq!(store.cuisines(), vec!["Italian", "American"]);
        assert_eq!(store.meals(), vec!["dinner", "breakfast"]);
    }

    #[test]
    fn test_find_by_title() {
        let store = RecipeStore::with_recipes(vec![
            recipe("Pasta", "Italian", "dinner"),
            recipe("Apple Pie", "American", "dessert"),
        ]);

        let (id, found) = store.find_by_title("  apple pie ").unwrap();
        assert_eq!(id, RecipeId(1));
        assert_eq!(found.title, "Apple Pie");
        assert!(store.find_by_title("Apple").is_none());
    }

    #[test]
    fn test_parse_recipes_reads_wire_format() {
        let recipes = parse_recipes(
            r#"[{
                "title": "Pasta",
                "desc": "Quick weeknight pasta",
                "image": "images/pasta.jpg",
                "time": 20,
                "cuisine": "Italian",
                "meal": "dinner",
                "ingredients": ["Spaghetti", "Tomatoes"],
                "instructions": ["Boil water", "Cook pasta", "Add sauce"]
            }]"#,
        )
        .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].description, "Quick weeknight pasta");
        assert_eq!(recipes[0].image, "images/pasta.jpg");
        assert_eq!(
            recipes[0].instructions,
            vec!["Boil water", "Cook pasta", "Add sauce"]
        );
    }

    #[test]
    fn test_parse_recipes_defaults_missing_fields() {
        let recipes = parse_recipes(r#"[{"title": "Toast"}]"#).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Toast");
        assert_eq!(recipes[0].time, 0);
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_parse_recipes_skips_malformed_records() {
        let recipes = parse_recipes(
            r#"[
                {"title": "Good", "time": 5},
                "not a recipe",
                {"title": "Negative", "time": -5},
                {"title": "Stringly", "time": "ten"},
                ["Array", "Shaped"],
                {"title": "Also good"}
            ]"#,
        )
        .unwrap();

        let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Also good"]);
    }

    #[test]
    fn test_parse_recipes_requires_array() {
        assert!(matches!(
            parse_recipes(r#"{"title": "Pasta"}"#),
            Err(LoadError::ParseError(_))
        ));
        assert!(matches!(
            parse_recipes("not json"),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_recipes("[]").unwrap().is_empty());
    }
}
