//! Business logic services
//!
//! Each service applies the catalog's write policy on top of its repository:
//! natural-key lookups answer with the existing record instead of writing a
//! duplicate, and a unique violation raised by the store (two writers racing
//! past the lookup) is folded into the same duplicate outcome.

pub mod country_service;
pub mod entry_service;
pub mod event_service;
pub mod participant_service;
pub mod performance_service;

pub use country_service::CountryService;
pub use entry_service::EntryService;
pub use event_service::EventService;
pub use participant_service::ParticipantService;
pub use performance_service::PerformanceService;

use std::future::Future;

use futures::{stream, StreamExt, TryStreamExt};

use crate::{
    constants::messages,
    error::{AppError, AppResult, FieldErrors},
};

/// Rows whose rollups are read at the same time while listing
const LISTING_CONCURRENCY: usize = 8;

/// Result of a create or update
#[derive(Debug)]
pub enum Mutation<T> {
    /// The write went through; carries the stored record
    Applied(T),
    /// Another record already owns the natural key; carries that record
    Duplicate(T),
}

/// Result of a delete on an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    /// The store refused the delete; reported to the client as a soft error
    Failed,
}

impl Deletion {
    pub(crate) fn from_result(resource: &str, id: &str, result: AppResult<bool>) -> AppResult<Self> {
        match result {
            Ok(true) => {
                tracing::info!(resource, id, "Resource deleted");
                Ok(Self::Deleted)
            }
            Ok(false) => Err(not_found(resource, id)),
            Err(e) => {
                tracing::error!(resource, id, error = %e, "Failed to delete resource");
                Ok(Self::Failed)
            }
        }
    }
}

/// 404 for a missing record
pub(crate) fn not_found(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("There is no {} with id {}.", resource, id))
}

/// Render listed rows, dropping any that was deleted before its rollups were read
pub(crate) async fn render_listing<R, T, F, Fut>(rows: Vec<R>, render: F) -> AppResult<Vec<T>>
where
    F: FnMut(R) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let rendered: Vec<Option<T>> = stream::iter(rows)
        .map(render)
        .buffered(LISTING_CONCURRENCY)
        .map(|result| match result {
            Ok(item) => Ok(Some(item)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        })
        .try_collect()
        .await?;

    Ok(rendered.into_iter().flatten().collect())
}

/// Collects unknown foreign references into per-field errors
#[derive(Debug, Default)]
pub(crate) struct ReferenceCheck {
    errors: FieldErrors,
}

impl ReferenceCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as invalid unless the referenced row exists
    pub fn require(&mut self, field: &str, exists: bool) -> &mut Self {
        if !exists {
            self.errors
                .entry(field.to_string())
                .or_default()
                .push(messages::INVALID_CHOICE.to_string());
        }
        self
    }

    pub fn finish(&mut self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_check_reports_each_missing_field() {
        let result = ReferenceCheck::new()
            .require("participant_id", false)
            .require("country_id", true)
            .finish();

        let Err(AppError::Validation(errors)) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["participant_id"], vec![messages::INVALID_CHOICE.to_string()]);
    }

    #[test]
    fn test_reference_check_passes_when_all_exist() {
        assert!(ReferenceCheck::new().require("event_id", true).finish().is_ok());
    }

    #[tokio::test]
    async fn test_render_listing_drops_vanished_rows() {
        let rendered = render_listing(vec!["a", "gone", "b"], |id| async move {
            if id == "gone" {
                Err(not_found("entry", id))
            } else {
                Ok(id.to_uppercase())
            }
        })
        .await
        .unwrap();

        assert_eq!(rendered, vec!["A".to_string(), "B".to_string()]);
    }

    #[tokio::test]
    async fn test_render_listing_propagates_store_errors() {
        let result = render_listing(vec![1, 2], |n| async move {
            if n == 2 {
                Err(AppError::Database("connection reset".to_string()))
            } else {
                Ok(n)
            }
        })
        .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[test]
    fn test_deletion_from_result() {
        assert_eq!(
            Deletion::from_result("entry", "abc", Ok(true)).unwrap(),
            Deletion::Deleted
        );
        assert_eq!(
            Deletion::from_result("entry", "abc", Err(AppError::Database("gone".into()))).unwrap(),
            Deletion::Failed
        );
        assert!(matches!(
            Deletion::from_result("entry", "abc", Ok(false)),
            Err(AppError::NotFound(_))
        ));
    }
}
