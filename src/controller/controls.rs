use crate::model::{FilterCriteria, SortMode};

/// One tag checkbox in the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub value: String,
    pub checked: bool,
}

impl Checkbox {
    fn unchecked(value: String) -> Self {
        Self {
            value,
            checked: false,
        }
    }
}

/// Current values of the search field, tag checkboxes and sort control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub search: String,
    pub cuisines: Vec<Checkbox>,
    pub meals: Vec<Checkbox>,
    pub sort: SortMode,
}

impl Controls {
    pub fn new(cuisines: Vec<String>, meals: Vec<String>) -> Self {
        Self {
            search: String::new(),
            cuisines: cuisines.into_iter().map(Checkbox::unchecked).collect(),
            meals: meals.into_iter().map(Checkbox::unchecked).collect(),
            sort: SortMode::default(),
        }
    }

    /// Replace the cuisine options, keeping the checked state of values that survive
    pub fn set_cuisine_options(&mut self, cuisines: Vec<String>) {
        self.cuisines = carry_over(&self.cuisines, cuisines);
    }

    /// Replace the meal options, keeping the checked state of values that survive
    pub fn set_meal_options(&mut self, meals: Vec<String>) {
        self.meals = carry_over(&self.meals, meals);
    }

    /// Build the criteria for one query from the current values
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.search.clone(),
            cuisines: checked_values(&self.cuisines),
            meals: checked_values(&self.meals),
            sort: self.sort,
        }
    }

    /// Flip the cuisine checkbox labelled `value`. Returns false if there is none.
    pub fn toggle_cuisine(&mut self, value: &str) -> bool {
        toggle(&mut self.cuisines, value)
    }

    /// Flip the meal checkbox labelled `value`. Returns false if there is none.
    pub fn toggle_meal(&mut self, value: &str) -> bool {
        toggle(&mut self.meals, value)
    }

    /// Empty search text, nothing checked, default sort
    pub fn reset(&mut self) {
        self.search.clear();
        self.cuisines.iter_mut().for_each(|cb| cb.checked = false);
        self.meals.iter_mut().for_each(|cb| cb.checked = false);
        self.sort = SortMode::default();
    }
}

fn checked_values(boxes: &[Checkbox]) -> std::collections::BTreeSet<String> {
    boxes
        .iter()
        .filter(|cb| cb.checked)
        .map(|cb| cb.value.clone())
        .collect()
}

// Exact label first, then a case-insensitive match
fn toggle(boxes: &mut [Checkbox], value: &str) -> bool {
    let position = boxes
        .iter()
        .position(|cb| cb.value == value)
        .or_else(|| {
            boxes
                .iter()
                .position(|cb| cb.value.to_lowercase() == value.to_lowercase())
        });

    match position {
        Some(index) => {
            boxes[index].checked = !boxes[index].checked;
            true
        }
        None => false,
    }
}

fn carry_over(old: &[Checkbox], values: Vec<String>) -> Vec<Checkbox> {
    values
        .into_iter()
        .map(|value| {
            let checked = old.iter().any(|cb| cb.checked && cb.value == value);
            Checkbox { value, checked }
        })
        .collect()
}
