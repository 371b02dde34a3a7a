use async_trait::async_trait;
use std::io::Write;

use super::{Card, Detail, Painter, Surface};
use crate::controller::{Checkbox, Controls};
use crate::error::BrowserError;

/// Text rendition of the browser for a terminal or any other writer.
///
/// While the overlay is open only the overlay is painted.
pub struct TerminalPainter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPainter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint_controls(&mut self, controls: &Controls) -> std::io::Result<()> {
        writeln!(
            self.out,
            "Search: \"{}\"   Sort: {}",
            controls.search, controls.sort
        )?;
        writeln!(self.out, "Cuisine: {}", checkboxes(&controls.cuisines))?;
        writeln!(self.out, "Meal:    {}", checkboxes(&controls.meals))?;
        Ok(())
    }

    fn paint_list(&mut self, surface: &Surface) -> std::io::Result<()> {
        if !surface.has_rendered_list() {
            return writeln!(self.out, "Loading recipes...");
        }

        let noun = if surface.results_count() == 1 {
            "recipe"
        } else {
            "recipes"
        };
        writeln!(self.out, "{} {}", surface.results_count(), noun)?;

        if surface.is_empty_state_visible() {
            writeln!(self.out, "No recipes match your search.")?;
        }

        for (position, card) in surface.cards().iter().enumerate() {
            self.paint_card(position + 1, card)?;
        }
        Ok(())
    }

    fn paint_card(&mut self, number: usize, card: &Card) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{:>3}. {}  ({}, {})",
            number, card.title, card.time, card.cuisine
        )?;
        if !card.description.is_empty() {
            writeln!(self.out, "     {}", card.description)?;
        }
        if !card.image.is_empty() {
            writeln!(self.out, "     image: {}", card.image)?;
        }
        Ok(())
    }

    fn paint_detail(&mut self, detail: &Detail) -> std::io::Result<()> {
        writeln!(self.out, "==== {} ====", detail.title)?;
        if !detail.subtitle.is_empty() {
            writeln!(self.out, "{}", detail.subtitle)?;
        }
        writeln!(
            self.out,
            "Time: {} | Cuisine: {} | Meal: {}",
            detail.time, detail.cuisine, detail.meal
        )?;
        if !detail.image.is_empty() {
            writeln!(self.out, "Image: {}", detail.image)?;
        }

        writeln!(self.out, "Ingredients:")?;
        for ingredient in &detail.ingredients {
            writeln!(self.out, "  - {}", ingredient)?;
        }

        writeln!(self.out, "Instructions:")?;
        for (step, instruction) in detail.instructions.iter().enumerate() {
            writeln!(self.out, "  {}. {}", step + 1, instruction)?;
        }

        writeln!(self.out, "(close, backdrop or esc to dismiss)")
    }
}

fn checkboxes(boxes: &[Checkbox]) -> String {
    if boxes.is_empty() {
        return "-".to_string();
    }

    boxes
        .iter()
        .map(|cb| format!("[{}] {}", if cb.checked { "x" } else { " " }, cb.value))
        .collect::<Vec<_>>()
        .join("  ")
}

#[async_trait]
impl<W: Write + Send> Painter for TerminalPainter<W> {
    async fn paint(&mut self, surface: &Surface, controls: &Controls) -> Result<(), BrowserError> {
        match surface.detail() {
            Some(detail) => self.paint_detail(detail)?,
            None => {
                self.paint_controls(controls)?;
                self.paint_list(surface)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recipe, RecipeId};

    async fn paint(surface: &Surface, controls: &Controls) -> String {
        let mut painter = TerminalPainter::new(Vec::new());
        painter.paint(surface, controls).await.unwrap();
        String::from_utf8(painter.into_inner()).unwrap()
    }

    fn pasta() -> Recipe {
        Recipe {
            title: "Pasta".to_string(),
            description: "Quick weeknight pasta".to_string(),
            time: 20,
            cuisine: "Italian".to_string(),
            meal: "dinner".to_string(),
            ingredients: vec!["Spaghetti".to_string()],
            instructions: vec!["Boil water".to_string(), "Cook pasta".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_paints_loading_before_first_render() {
        let output = paint(&Surface::new(), &Controls::default()).await;
        assert!(output.contains("Loading recipes..."));
    }

    #[tokio::test]
    async fn test_paints_numbered_cards() {
        let recipe = pasta();
        let mut surface = Surface::new();
        surface.render_list([(RecipeId(0), &recipe)]);

        let mut controls = Controls::new(vec!["Italian".to_string()], Vec::new());
        controls.toggle_cuisine("Italian");

        let output = paint(&surface, &controls).await;
        assert!(output.contains("Cuisine: [x] Italian"));
        assert!(output.contains("1 recipe\n"));
        assert!(output.contains("  1. Pasta  (20 min, Italian)"));
        assert!(output.contains("Quick weeknight pasta"));
        assert!(!output.contains("No recipes match"));
    }

    #[tokio::test]
    async fn test_paints_empty_state() {
        let mut surface = Surface::new();
        surface.render_list(std::iter::empty());

        let output = paint(&surface, &Controls::default()).await;
        assert!(output.contains("0 recipes"));
        assert!(output.contains("No recipes match your search."));
    }

    #[tokio::test]
    async fn test_paints_only_overlay_when_open() {
        let recipe = pasta();
        let mut surface = Surface::new();
        surface.render_list([(RecipeId(0), &recipe)]);
        surface.render_detail(RecipeId(0), &recipe);

        let output = paint(&surface, &Controls::default()).await;
        assert!(output.starts_with("==== Pasta ===="));
        assert!(output.contains("Time: 20 min | Cuisine: Italian | Meal: dinner"));
        assert!(output.contains("  - Spaghetti"));
        assert!(output.contains("  1. Boil water\n  2. Cook pasta"));
        assert!(!output.contains("1 recipe"));
    }
}
