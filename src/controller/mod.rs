mod controls;

pub use controls::{Checkbox, Controls};

use log::{debug, error, info, warn};

use crate::error::LoadError;
use crate::model::{Recipe, RecipeId, SortMode};
use crate::query::query_ids;
use crate::render::Surface;
use crate::store::RecipeStore;

/// A key pressed while the browser has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

/// User input delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text typed into the search field. Does not run a query by itself.
    SearchInput(String),
    /// Search form submitted
    Submit,
    ToggleCuisine(String),
    ToggleMeal(String),
    SortChanged(SortMode),
    Clear,
    /// Activation affordance of the card at this zero-based grid position
    ActivateCard(usize),
    CloseDetail,
    BackdropClick,
    KeyDown(Key),
}

/// Detail overlay state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Hidden,
    Visible(RecipeId),
}

/// Wires user events to the query engine and the render surface.
///
/// The controller is the only mutator of browser state and handles one event
/// at a time.
#[derive(Debug)]
pub struct Controller {
    store: RecipeStore,
    controls: Controls,
    surface: Surface,
    derive_cuisines: bool,
    derive_meals: bool,
}

impl Controller {
    /// A controller waiting for the recipe load to finish.
    ///
    /// Empty `cuisines` / `meals` option lists are filled from the store once it loads.
    pub fn new(cuisines: Vec<String>, meals: Vec<String>) -> Self {
        Self {
            derive_cuisines: cuisines.is_empty(),
            derive_meals: meals.is_empty(),
            store: RecipeStore::new(),
            controls: Controls::new(cuisines, meals),
            surface: Surface::new(),
        }
    }

    /// A controller over already loaded recipes, with the initial list rendered
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let mut controller = Self::new(Vec::new(), Vec::new());
        controller.finish_load(Ok(recipes));
        controller
    }

    /// Deliver the outcome of the startup load.
    ///
    /// On success the store is populated and the full set is rendered in load
    /// order. On failure the error is logged and the empty state is shown.
    pub fn finish_load(&mut self, result: Result<Vec<Recipe>, LoadError>) {
        match result {
            Ok(recipes) => {
                if self.store.populate(recipes).is_err() {
                    warn!("Recipes already loaded, ignoring second load");
                    return;
                }
                info!("Recipe store ready with {} recipes", self.store.len());

                if self.derive_cuisines {
                    self.controls.set_cuisine_options(self.store.cuisines());
                }
                if self.derive_meals {
                    self.controls.set_meal_options(self.store.meals());
                }
                self.surface.render_list(self.store.iter());
            }
            Err(e) => {
                error!("Failed to load recipes: {}", e);
                self.surface.render_list(std::iter::empty());
            }
        }
    }

    pub fn handle(&mut self, event: Event) {
        debug!("Handling {:?}", event);
        match event {
            Event::SearchInput(text) => self.controls.search = text,
            Event::Submit => self.apply_filters(),
            Event::ToggleCuisine(value) => {
                if self.controls.toggle_cuisine(&value) {
                    self.apply_filters();
                } else {
                    warn!("No cuisine filter named '{}'", value);
                }
            }
            Event::ToggleMeal(value) => {
                if self.controls.toggle_meal(&value) {
                    self.apply_filters();
                } else {
                    warn!("No meal filter named '{}'", value);
                }
            }
            Event::SortChanged(mode) => {
                self.controls.sort = mode;
                self.apply_filters();
            }
            Event::Clear => {
                self.controls.reset();
                self.apply_filters();
            }
            Event::ActivateCard(position) => self.open_card(position),
            Event::CloseDetail | Event::BackdropClick | Event::KeyDown(Key::Escape) => {
                self.close_detail()
            }
            Event::KeyDown(Key::Other(_)) => {}
        }
    }

    /// Run the current control values through the query engine and re-render the list
    fn apply_filters(&mut self) {
        let criteria = self.controls.criteria();
        let ids = query_ids(self.store.recipes(), &criteria);
        let store = &self.store;
        self.surface.render_list(
            ids.into_iter()
                .filter_map(|id| store.get(id).map(|recipe| (id, recipe))),
        );
    }

    fn open_card(&mut self, position: usize) {
        let Some(id) = self.surface.card(position).map(|card| card.recipe) else {
            warn!("No card at position {}", position + 1);
            return;
        };
        let Some(recipe) = self.store.get(id) else {
            warn!("Card points at missing recipe {}", id);
            return;
        };

        self.surface.render_detail(id, recipe);
    }

    fn close_detail(&mut self) {
        self.surface.close_detail();
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Overlay state, read off the surface's detail projection
    pub fn overlay(&self) -> Overlay {
        self.surface
            .detail()
            .map_or(Overlay::Hidden, |detail| Overlay::Visible(detail.recipe))
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }
}
