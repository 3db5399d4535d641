//! The recipe record and the editable subset of it accepted from clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Longest name a recipe may carry.
pub const MAX_NAME_LEN: usize = 100;

/// A stored recipe as handed out by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Estimated preparation cost.
    pub cost: i32,
    /// Estimated preparation time in minutes.
    pub time: i32,
    /// Comma-joined ingredient list.
    pub ingredients: String,
    pub diet: String,
    /// Author of the recipe. `None` for anonymous submissions.
    pub owner: Option<Uuid>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Whether `viewer` may see this recipe in listings and on its detail page.
    pub fn is_visible_to(&self, viewer: Option<Uuid>) -> bool {
        self.is_public || (viewer.is_some() && self.owner == viewer)
    }

    /// Whether `editor` may update or delete this recipe.
    ///
    /// Owned recipes are editable by their owner only; anonymous recipes by
    /// any signed-in user.
    pub fn is_editable_by(&self, editor: Uuid) -> bool {
        match self.owner {
            Some(owner) => owner == editor,
            None => true,
        }
    }
}

fn default_public() -> bool {
    true
}

/// Client-editable recipe fields. Owner and creation time are assigned
/// server-side and never read from this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: i32,
    #[serde(default)]
    pub time: i32,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl RecipeFields {
    /// Check the fields and return them with the name trimmed.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
        }
        if self.cost < 0 {
            return Err(ValidationError::Negative { field: "cost" });
        }
        if self.time < 0 {
            return Err(ValidationError::Negative { field: "time" });
        }
        self.name = name.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> RecipeFields {
        RecipeFields {
            name: name.to_string(),
            description: "Delicious and spicy tacos.".to_string(),
            cost: 12,
            time: 30,
            ingredients: "Tortilla, Beans, Avocado".to_string(),
            diet: "Vegan".to_string(),
            is_public: true,
        }
    }

    fn recipe(owner: Option<Uuid>, is_public: bool) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: "Chocolate Cake".to_string(),
            description: String::new(),
            cost: 10,
            time: 45,
            ingredients: "Flour, Sugar, Cocoa, Eggs".to_string(),
            diet: "Vegetarian".to_string(),
            owner,
            is_public,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_trims_name() {
        let validated = fields("  Vegan Tacos ").validate().unwrap();
        assert_eq!(validated.name, "Vegan Tacos");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert_eq!(fields("   ").validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_long_name() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            fields(&long).validate(),
            Err(ValidationError::NameTooLong { max: MAX_NAME_LEN })
        );
        assert!(fields(&"a".repeat(MAX_NAME_LEN)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_numbers() {
        let mut f = fields("Tacos");
        f.time = -1;
        assert_eq!(f.validate(), Err(ValidationError::Negative { field: "time" }));
    }

    #[test]
    fn test_fields_default_public_and_empty_text() {
        let f: RecipeFields = serde_json::from_str(r#"{"name": "Toast"}"#).unwrap();
        assert!(f.is_public);
        assert_eq!(f.description, "");
        assert_eq!(f.cost, 0);
    }

    #[test]
    fn test_private_recipe_visible_only_to_owner() {
        let owner = Uuid::new_v4();
        let private = recipe(Some(owner), false);
        assert!(private.is_visible_to(Some(owner)));
        assert!(!private.is_visible_to(Some(Uuid::new_v4())));
        assert!(!private.is_visible_to(None));
    }

    #[test]
    fn test_ownerless_private_recipe_visible_to_nobody() {
        let r = recipe(None, false);
        assert!(!r.is_visible_to(None));
        assert!(!r.is_visible_to(Some(Uuid::new_v4())));
    }

    #[test]
    fn test_editable_by_owner_only() {
        let owner = Uuid::new_v4();
        assert!(recipe(Some(owner), true).is_editable_by(owner));
        assert!(!recipe(Some(owner), true).is_editable_by(Uuid::new_v4()));
        assert!(recipe(None, true).is_editable_by(Uuid::new_v4()));
    }
}
