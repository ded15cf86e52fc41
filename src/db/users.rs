use crate::db::models::User;
use crate::error::AppResult;
use sqlx::SqlitePool;

/// Insert a new user. No check for an existing username is made.
pub async fn create_user(pool: &SqlitePool, username: &str, password_hash: &str) -> AppResult<User> {
    let user = User::new(username.to_string(), password_hash.to_string());

    sqlx::query(
        "INSERT INTO users (id, username, password_hash, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.created_at)
    .execute(pool)
    .await?;

    Ok(user)
}

/// First user with this username, in insertion order.
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, created_at FROM users
         WHERE username = ?
         ORDER BY rowid
         LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{test_state, test_state_on_disk};

    #[tokio::test]
    async fn created_user_is_found_by_username_and_id() -> anyhow::Result<()> {
        let state = test_state().await?;

        let created = create_user(&state.db, "alice", "hash").await?;

        let by_name = find_by_username(&state.db, "alice").await?;
        let by_id = find_by_id(&state.db, &created.id).await?;

        assert_eq!(by_name.map(|u| u.id), Some(created.id.clone()));
        assert_eq!(by_id.map(|u| u.username), Some("alice".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn missing_users_are_none() -> anyhow::Result<()> {
        let state = test_state().await?;

        assert!(find_by_username(&state.db, "nobody").await?.is_none());
        assert!(find_by_id(&state.db, "00000000-0000-0000-0000-000000000000")
            .await?
            .is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_usernames_are_allowed_and_first_wins() -> anyhow::Result<()> {
        let state = test_state().await?;

        let first = create_user(&state.db, "alice", "first-hash").await?;
        let second = create_user(&state.db, "alice", "second-hash").await?;
        assert_ne!(first.id, second.id);

        let found = find_by_username(&state.db, "alice").await?;
        assert_eq!(found.map(|u| u.password_hash), Some("first-hash".to_string()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_signups_with_same_username_both_succeed() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let state = test_state_on_disk(dir.path()).await?;

        let first = tokio::spawn({
            let pool = state.db.clone();
            async move { create_user(&pool, "bob", "h1").await }
        });
        let second = tokio::spawn({
            let pool = state.db.clone();
            async move { create_user(&pool, "bob", "h2").await }
        });
        let (a, b) = tokio::try_join!(first, second)?;
        let (a, b) = (a?, b?);
        assert_ne!(a.id, b.id);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind("bob")
            .fetch_one(&state.db)
            .await?;
        assert_eq!(count, 2);

        state.shutdown().await;
        Ok(())
    }
}
