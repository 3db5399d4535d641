//! Visibility-filtered, whitelisted-sort recipe listings.
//!
//! Raw `sort`/`dir` query values never reach an ordering expression: they are
//! mapped onto [`SortField`] and [`Direction`], and each field owns an explicit
//! comparator. Unknown values silently fall back to the defaults.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::recipe::Recipe;

/// Fields a listing may be ordered by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Description,
    #[default]
    Cost,
    Time,
    IsPublic,
}

impl SortField {
    /// Every sortable field, in table-column order.
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Description,
        SortField::Cost,
        SortField::Time,
        SortField::IsPublic,
    ];

    /// Map a raw query value onto the whitelist, falling back to `cost`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => SortField::Name,
            "description" => SortField::Description,
            "cost" => SortField::Cost,
            "time" => SortField::Time,
            "is_public" => SortField::IsPublic,
            _ => SortField::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::Cost => "cost",
            SortField::Time => "time",
            SortField::IsPublic => "is_public",
        }
    }

    /// Column heading for the table view.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Description => "Description",
            SortField::Cost => "Cost",
            SortField::Time => "Time",
            SortField::IsPublic => "Public",
        }
    }

    fn compare(self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Cost => a.cost.cmp(&b.cost),
            SortField::Time => a.time.cmp(&b.time),
            SortField::IsPublic => a.is_public.cmp(&b.is_public),
        }
    }
}

/// Sort direction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Only the literal `"desc"` selects descending order.
    pub fn parse(raw: &str) -> Self {
        if raw == "desc" {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A validated ordering request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    /// Build from untrusted query parameters. Never fails.
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        Self {
            field: sort.map(SortField::parse).unwrap_or_default(),
            direction: dir.map(Direction::parse).unwrap_or_default(),
        }
    }

    fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

fn visible_in_creation_order<I>(viewer: Option<Uuid>, recipes: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    let mut visible: Vec<Recipe> = recipes
        .into_iter()
        .filter(|r| r.is_visible_to(viewer))
        .collect();
    // Stable: rows sharing a timestamp keep the repository's order.
    visible.sort_by_key(|r| r.created_at);
    visible
}

/// Recipes `viewer` may see, ordered by `sort_field`/`sort_dir`.
///
/// Equal sort keys keep creation order.
pub fn build_listing<I>(
    viewer: Option<Uuid>,
    sort_field: &str,
    sort_dir: &str,
    recipes: I,
) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    let spec = SortSpec::from_params(Some(sort_field), Some(sort_dir));
    build_sorted_listing(viewer, spec, recipes)
}

/// Same as [`build_listing`] for an already validated [`SortSpec`].
pub fn build_sorted_listing<I>(viewer: Option<Uuid>, spec: SortSpec, recipes: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    let mut listing = visible_in_creation_order(viewer, recipes);
    listing.sort_by(|a, b| spec.compare(a, b));
    listing
}

/// Recipes `viewer` may see, most recently created first.
pub fn build_recent_listing<I>(viewer: Option<Uuid>, recipes: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    let mut listing: Vec<Recipe> = recipes
        .into_iter()
        .filter(|r| r.is_visible_to(viewer))
        .collect();
    listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listing
}

/// Link state for one sortable table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SortColumn {
    pub field: SortField,
    pub label: String,
    /// Query string that sorts by this column, e.g. `?sort=cost&dir=desc`.
    pub href: String,
    /// `↑`/`↓` on the active column, empty otherwise.
    pub arrow: String,
}

impl SortColumn {
    pub fn new(field: SortField, current: SortSpec) -> Self {
        let active = current.field == field;
        let toggle = if active && current.direction == Direction::Asc {
            Direction::Desc
        } else {
            Direction::Asc
        };
        let arrow = match (active, current.direction) {
            (false, _) => "",
            (true, Direction::Asc) => "↑",
            (true, Direction::Desc) => "↓",
        };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("sort", field.as_str())
            .append_pair("dir", toggle.as_str())
            .finish();

        Self {
            field,
            label: field.label().to_string(),
            href: format!("?{}", query),
            arrow: arrow.to_string(),
        }
    }
}

/// One [`SortColumn`] per whitelisted field.
pub fn sort_columns(current: SortSpec) -> Vec<SortColumn> {
    SortField::ALL
        .iter()
        .map(|&field| SortColumn::new(field, current))
        .collect()
}
