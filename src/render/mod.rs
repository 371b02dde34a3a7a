mod html;
mod terminal;

pub use html::{render_html, HtmlPainter};
pub use terminal::TerminalPainter;

use async_trait::async_trait;
use log::debug;

use crate::controller::Controls;
use crate::error::BrowserError;
use crate::model::{Recipe, RecipeId};

/// One result card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Recipe opened by this card's activation affordance
    pub recipe: RecipeId,
    pub title: String,
    pub description: String,
    pub time: String,
    pub cuisine: String,
    pub image: String,
    pub image_alt: String,
}

impl Card {
    fn project(id: RecipeId, recipe: &Recipe) -> Self {
        Self {
            recipe: id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            time: format_time(recipe.time),
            cuisine: recipe.cuisine.clone(),
            image: recipe.image.clone(),
            image_alt: recipe.title.clone(),
        }
    }
}

/// Contents of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub recipe: RecipeId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub image_alt: String,
    pub time: String,
    pub cuisine: String,
    pub meal: String,
    pub ingredients: Vec<String>,
    /// Steps in their original order
    pub instructions: Vec<String>,
}

impl Detail {
    fn project(id: RecipeId, recipe: &Recipe) -> Self {
        Self {
            recipe: id,
            title: recipe.title.clone(),
            subtitle: recipe.description.clone(),
            image: recipe.image.clone(),
            image_alt: recipe.title.clone(),
            time: format_time(recipe.time),
            cuisine: recipe.cuisine.clone(),
            meal: recipe.meal.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Display label for a duration in minutes
pub fn format_time(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// What the user currently sees: the card grid, result count, empty-state
/// indicator and the detail overlay.
///
/// Painters present a surface; the surface itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    cards: Vec<Card>,
    results_count: usize,
    empty_state_visible: bool,
    list_rendered: bool,
    detail: Option<Detail>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid with one card per recipe and update the result count.
    pub fn render_list<'a>(
        &mut self,
        recipes: impl IntoIterator<Item = (RecipeId, &'a Recipe)>,
    ) {
        self.cards = recipes
            .into_iter()
            .map(|(id, recipe)| Card::project(id, recipe))
            .collect();
        self.results_count = self.cards.len();
        self.empty_state_visible = self.cards.is_empty();
        self.list_rendered = true;
        debug!("Rendered {} cards", self.results_count);
    }

    /// Show the overlay for `recipe`, replacing whatever it showed before.
    pub fn render_detail(&mut self, id: RecipeId, recipe: &Recipe) {
        debug!("Opening detail for {}", id);
        self.detail = Some(Detail::project(id, recipe));
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a zero-based grid position
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn results_count(&self) -> usize {
        self.results_count
    }

    pub fn is_empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    /// False until the first list render (i.e. while recipes are loading)
    pub fn has_rendered_list(&self) -> bool {
        self.list_rendered
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail.is_some()
    }
}

/// Presents a surface and the form controls to the user
#[async_trait]
pub trait Painter: Send {
    async fn paint(&mut self, surface: &Surface, controls: &Controls) -> Result<(), BrowserError>;
}
