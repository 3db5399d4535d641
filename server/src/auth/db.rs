use crate::db::DbPool;
use crate::models::{NewSession, User};
use crate::schema::{sessions, users};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel::sql_types::Text;

use super::crypto::{generate_token, hash_token, verify_password};

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// How long a login stays valid.
const SESSION_DAYS: i64 = 30;

/// Create a session for `user_id` and return the plaintext bearer token.
pub fn create_session(
    conn: &mut PgConnection,
    user_id: uuid::Uuid,
) -> Result<String, diesel::result::Error> {
    let token = generate_token();
    let token_hash = hash_token(&token);

    let new_session = NewSession {
        user_id,
        token_hash: &token_hash,
        expires_at: Utc::now() + Duration::days(SESSION_DAYS),
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(token)
}

pub async fn get_user_from_token(pool: &DbPool, token: &str) -> Option<User> {
    let mut conn = pool.get().ok()?;
    let token_hash = hash_token(token);

    sessions::table
        .inner_join(users::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now()))
        .select(User::as_select())
        .first(&mut conn)
        .ok()
}

/// Look a user up by case-insensitive username and check the password.
///
/// Unknown users and wrong passwords are indistinguishable to the caller.
pub fn authenticate(
    conn: &mut PgConnection,
    username: &str,
    password: &str,
) -> QueryResult<Option<User>> {
    let user = users::table
        .filter(lower(users::username).eq(lower(username.trim())))
        .select(User::as_select())
        .first(conn)
        .optional()?;

    Ok(user.filter(|u| verify_password(password, &u.password_hash)))
}
