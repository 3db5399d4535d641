//! Recipe persistence. Access rules live in `larder_core`; these queries
//! only narrow the rows loaded.

use diesel::prelude::*;
use larder_core::{Recipe, RecipeFields};
use uuid::Uuid;

use crate::models::{NewRecipe, RecipeChanges, RecipeRow};
use crate::schema::recipes;

/// Recipes `viewer` may see, oldest first.
pub fn find_visible(conn: &mut PgConnection, viewer: Option<Uuid>) -> QueryResult<Vec<Recipe>> {
    let mut query = recipes::table.into_boxed();
    query = match viewer {
        Some(viewer) => query.filter(recipes::is_public.or(recipes::owner_id.eq(viewer))),
        None => query.filter(recipes::is_public),
    };

    let rows: Vec<RecipeRow> = query
        .order((recipes::created_at.asc(), recipes::id.asc()))
        .select(RecipeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Recipe::from).collect())
}

pub fn get_by_id(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Recipe>> {
    let row: Option<RecipeRow> = recipes::table
        .find(id)
        .select(RecipeRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Recipe::from))
}

pub fn create(
    conn: &mut PgConnection,
    fields: &RecipeFields,
    owner: Option<Uuid>,
) -> QueryResult<Recipe> {
    let row: RecipeRow = diesel::insert_into(recipes::table)
        .values(NewRecipe::new(fields, owner))
        .returning(RecipeRow::as_returning())
        .get_result(conn)?;
    Ok(row.into())
}

pub fn update(conn: &mut PgConnection, id: Uuid, fields: &RecipeFields) -> QueryResult<Recipe> {
    let row: RecipeRow = diesel::update(recipes::table.find(id))
        .set(RecipeChanges::from(fields))
        .returning(RecipeRow::as_returning())
        .get_result(conn)?;
    Ok(row.into())
}

/// Returns the number of rows removed (0 or 1).
pub fn delete(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
    diesel::delete(recipes::table.find(id)).execute(conn)
}
