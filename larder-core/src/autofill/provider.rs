//! Payloads of the recipe search provider. Only the fields auto-fill reads
//! are modelled; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecipeDetails {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<f64>,
    /// Minor currency units (cents).
    #[serde(default)]
    pub price_per_serving: Option<f64>,
    #[serde(default)]
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtendedIngredient {
    #[serde(default)]
    pub original: Option<String>,
}

impl RecipeDetails {
    /// Human-readable ingredient lines, blanks dropped, provider order kept.
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.extended_ingredients
            .iter()
            .flatten()
            .filter_map(|i| i.original.as_deref())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
