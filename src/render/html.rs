use async_trait::async_trait;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use log::debug;
use std::fmt::Write;
use std::path::PathBuf;

use super::{Card, Detail, Painter, Surface};
use crate::controller::{Checkbox, Controls};
use crate::error::BrowserError;
use crate::model::SortMode;

const HIDDEN: &str = "visually-hidden";

/// Mirrors the surface into a static HTML page on every paint
pub struct HtmlPainter {
    path: PathBuf,
}

impl HtmlPainter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Painter for HtmlPainter {
    async fn paint(&mut self, surface: &Surface, controls: &Controls) -> Result<(), BrowserError> {
        tokio::fs::write(&self.path, render_html(surface, controls)).await?;
        debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

/// Render the full page for the given surface and control values.
///
/// Every piece of recipe text is escaped, ingredient and instruction lines
/// included.
pub fn render_html(surface: &Surface, controls: &Controls) -> String {
    let mut page = String::new();
    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Recipes</title>\n</head>\n<body>\n",
    );

    push_form(&mut page, controls);

    let _ = writeln!(
        page,
        "<p><span data-results-count>{}</span> recipes</p>",
        surface.results_count()
    );
    let _ = writeln!(
        page,
        "<p data-empty-state class=\"{}\">No recipes match your search.</p>",
        if surface.is_empty_state_visible() {
            ""
        } else {
            HIDDEN
        }
    );

    page.push_str("<div data-recipe-grid>\n");
    for (position, card) in surface.cards().iter().enumerate() {
        push_card(&mut page, position + 1, card);
    }
    page.push_str("</div>\n");

    push_modal(&mut page, surface.detail());

    page.push_str("</body>\n</html>\n");
    page
}

fn push_form(page: &mut String, controls: &Controls) {
    page.push_str("<form id=\"search-form\">\n");
    let _ = writeln!(
        page,
        "<input type=\"search\" data-search-input value=\"{}\">",
        attr(&controls.search)
    );
    page.push_str("<button type=\"submit\">Search</button>\n");
    page.push_str("<button type=\"button\" data-clear-btn>Clear</button>\n");

    push_checkboxes(page, "data-filter-cuisine", &controls.cuisines);
    push_checkboxes(page, "data-filter-meal", &controls.meals);

    page.push_str("<select data-sort>\n");
    for mode in SortMode::ALL {
        let _ = writeln!(
            page,
            "<option value=\"{}\"{}>{}</option>",
            mode.as_str(),
            if mode == controls.sort { " selected" } else { "" },
            sort_label(mode)
        );
    }
    page.push_str("</select>\n</form>\n");
}

fn push_checkboxes(page: &mut String, hook: &str, boxes: &[Checkbox]) {
    for cb in boxes {
        let _ = writeln!(
            page,
            "<label><input type=\"checkbox\" {} value=\"{}\"{}> {}</label>",
            hook,
            attr(&cb.value),
            if cb.checked { " checked" } else { "" },
            text(&cb.value)
        );
    }
}

fn sort_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Relevance => "Relevance",
        SortMode::TimeAscending => "Time: shortest first",
        SortMode::TimeDescending => "Time: longest first",
        SortMode::Alphabetical => "A to Z",
    }
}

fn push_card(page: &mut String, number: usize, card: &Card) {
    let _ = write!(
        page,
        "<article class=\"recipe-card\" data-recipe-id=\"{}\">\n\
         <img data-card-image src=\"{}\" alt=\"{}\">\n\
         <h3 data-card-title>{}</h3>\n\
         <p data-card-desc>{}</p>\n\
         <span data-card-time>{}</span>\n\
         <span data-card-cuisine>{}</span>\n\
         <button type=\"button\" data-card-open value=\"{}\">View recipe</button>\n\
         </article>\n",
        card.recipe.0,
        attr(&card.image),
        attr(&card.image_alt),
        text(&card.title),
        text(&card.description),
        text(&card.time),
        text(&card.cuisine),
        number
    );
}

fn push_modal(page: &mut String, detail: Option<&Detail>) {
    let _ = writeln!(
        page,
        "<div data-modal class=\"{}\">",
        if detail.is_some() { "" } else { HIDDEN }
    );
    page.push_str("<div data-modal-backdrop></div>\n");
    page.push_str("<div role=\"dialog\" aria-modal=\"true\">\n");
    page.push_str("<button type=\"button\" data-modal-close>Close</button>\n");

    if let Some(detail) = detail {
        let _ = write!(
            page,
            "<h2 data-modal-title>{}</h2>\n\
             <p data-modal-subtitle>{}</p>\n\
             <img data-modal-image src=\"{}\" alt=\"{}\">\n\
             <span data-modal-time>{}</span>\n\
             <span data-modal-cuisine>{}</span>\n\
             <span data-modal-meal>{}</span>\n",
            text(&detail.title),
            text(&detail.subtitle),
            attr(&detail.image),
            attr(&detail.image_alt),
            text(&detail.time),
            text(&detail.cuisine),
            text(&detail.meal)
        );
        push_items(page, "ul", "data-modal-ingredients", &detail.ingredients);
        push_items(page, "ol", "data-modal-instructions", &detail.instructions);
    }

    page.push_str("</div>\n</div>\n");
}

fn push_items(page: &mut String, tag: &str, hook: &str, items: &[String]) {
    let _ = writeln!(page, "<{} {}>", tag, hook);
    for item in items {
        let _ = writeln!(page, "<li>{}</li>", text(item));
    }
    let _ = writeln!(page, "</{}>", tag);
}
