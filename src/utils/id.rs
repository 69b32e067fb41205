//! Short random identifiers with collision retry

use std::future::Future;

use rand::Rng;

use crate::{
    constants::{GENERATED_ID_ALPHABET, MAX_ID_ATTEMPTS},
    error::{AppError, AppResult},
};

/// Generate a random lowercase alphanumeric string
///
/// Not cryptographically meaningful; identifiers are public.
pub fn random_id(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..GENERATED_ID_ALPHABET.len());
            GENERATED_ID_ALPHABET[idx] as char
        })
        .collect()
}

/// Allocate an identifier that `exists` reports as free
///
/// Each candidate is checked against the store before being returned.
/// Gives up with [`AppError::IdentifierExhausted`] after `MAX_ID_ATTEMPTS` collisions.
pub async fn allocate_unique_id<F, Fut>(length: usize, mut exists: F) -> AppResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let candidate = random_id(length);

        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }

        tracing::debug!(attempt, candidate = %candidate, "Generated identifier already taken");
    }

    Err(AppError::IdentifierExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_uses_lowercase_alphanumerics() {
        let id = random_id(10);

        assert_eq!(id.len(), 10);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_allocation_retries_until_free() {
        let mut calls = 0;

        let id = allocate_unique_id(10, |_| {
            calls += 1;
            let taken = calls < 3;
            async move { Ok(taken) }
        })
        .await
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(id.len(), 10);
    }

    #[tokio::test]
    async fn test_allocation_gives_up_when_everything_collides() {
        let result = allocate_unique_id(4, |_| async { Ok(true) }).await;

        assert!(matches!(result, Err(AppError::IdentifierExhausted)));
    }

    #[tokio::test]
    async fn test_allocation_propagates_lookup_errors() {
        let result =
            allocate_unique_id(4, |_| async { Err(AppError::Database("down".to_string())) }).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
