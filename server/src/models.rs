use chrono::{DateTime, Utc};
use diesel::prelude::*;
use larder_core::{Recipe, RecipeFields};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cost: i32,
    pub time: i32,
    pub ingredients: String,
    pub diet: String,
    pub owner_id: Option<Uuid>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            description: row.description,
            cost: row.cost,
            time: row.time,
            ingredients: row.ingredients,
            diet: row.diet,
            owner: row.owner_id,
            is_public: row.is_public,
            created_at: row.created_at,
        }
    }
}

/// Insert values; `created_at` comes from the column default.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub cost: i32,
    pub time: i32,
    pub ingredients: &'a str,
    pub diet: &'a str,
    pub owner_id: Option<Uuid>,
    pub is_public: bool,
}

impl<'a> NewRecipe<'a> {
    pub fn new(fields: &'a RecipeFields, owner_id: Option<Uuid>) -> Self {
        Self {
            name: &fields.name,
            description: &fields.description,
            cost: fields.cost,
            time: fields.time,
            ingredients: &fields.ingredients,
            diet: &fields.diet,
            owner_id,
            is_public: fields.is_public,
        }
    }
}

/// Update values. Owner and creation time are never changed.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChanges<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub cost: i32,
    pub time: i32,
    pub ingredients: &'a str,
    pub diet: &'a str,
    pub is_public: bool,
}

impl<'a> From<&'a RecipeFields> for RecipeChanges<'a> {
    fn from(fields: &'a RecipeFields) -> Self {
        Self {
            name: &fields.name,
            description: &fields.description,
            cost: fields.cost,
            time: fields.time,
            ingredients: &fields.ingredients,
            diet: &fields.diet,
            is_public: fields.is_public,
        }
    }
}
