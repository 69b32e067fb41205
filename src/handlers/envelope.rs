//! JSON response envelopes
//!
//! Every collection answers with the same shapes, keyed by the resource's
//! singular or plural name:
//!
//! - `{"<entity>": {...}}` for a single record
//! - `{"<entities>": [...]}` for a listing
//! - `{"status": ..., "<entity>": {...}, "message": ...}` after a write
//! - `{"deleted": id, "status": "success", "message": ...}` after a delete

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    constants::status,
    error::{AppError, StatusBody},
    services::{Deletion, Mutation},
};

/// A serializable record exposed under its own collection
pub trait Resource: Serialize {
    /// Key used for one record, e.g. `participant`
    const SINGULAR: &'static str;
    /// Key used for a listing, e.g. `participants`
    const PLURAL: &'static str;
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.into()))
}

/// A single record: `{"<entity>": {...}}`
pub struct Found<T>(pub T);

impl<T: Resource> IntoResponse for Found<T> {
    fn into_response(self) -> Response {
        match to_value(&self.0) {
            Ok(record) => {
                let mut body = Map::new();
                body.insert(T::SINGULAR.to_string(), record);
                Json(Value::Object(body)).into_response()
            }
            Err(e) => e.into_response(),
        }
    }
}

/// A full collection: `{"<entities>": [...]}`
pub struct Listing<T>(pub Vec<T>);

impl<T: Resource> IntoResponse for Listing<T> {
    fn into_response(self) -> Response {
        match to_value(&self.0) {
            Ok(records) => {
                let mut body = Map::new();
                body.insert(T::PLURAL.to_string(), records);
                Json(Value::Object(body)).into_response()
            }
            Err(e) => e.into_response(),
        }
    }
}

/// Result of a create or update, carrying the record it concerns
#[derive(Debug)]
pub struct Outcome<T> {
    code: StatusCode,
    status: &'static str,
    message: String,
    record: T,
}

impl<T: Resource> Outcome<T> {
    /// 201 for a new record, 200 `duplicate` when the natural key was taken
    pub fn created(
        mutation: Mutation<T>,
        applied: impl FnOnce(&T) -> String,
        duplicate: impl FnOnce(&T) -> String,
    ) -> Self {
        Self::build(StatusCode::CREATED, mutation, applied, duplicate)
    }

    /// 200 for an overwrite, 200 `duplicate` when the natural key was taken
    pub fn updated(
        mutation: Mutation<T>,
        applied: impl FnOnce(&T) -> String,
        duplicate: impl FnOnce(&T) -> String,
    ) -> Self {
        Self::build(StatusCode::OK, mutation, applied, duplicate)
    }

    fn build(
        applied_code: StatusCode,
        mutation: Mutation<T>,
        applied: impl FnOnce(&T) -> String,
        duplicate: impl FnOnce(&T) -> String,
    ) -> Self {
        match mutation {
            Mutation::Applied(record) => Self {
                code: applied_code,
                status: status::SUCCESS,
                message: applied(&record),
                record,
            },
            Mutation::Duplicate(record) => Self {
                code: StatusCode::OK,
                status: status::DUPLICATE,
                message: duplicate(&record),
                record,
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: Resource> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let record = match to_value(&self.record) {
            Ok(record) => record,
            Err(e) => return e.into_response(),
        };

        let mut body = Map::new();
        body.insert("status".to_string(), Value::from(self.status));
        body.insert(T::SINGULAR.to_string(), record);
        body.insert("message".to_string(), Value::from(self.message));

        (self.code, Json(Value::Object(body))).into_response()
    }
}

/// Delete confirmation, or the soft error reported when the store refused it
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Removal {
    Deleted {
        deleted: String,
        status: &'static str,
        message: String,
    },
    Failed(StatusBody),
}

impl Removal {
    /// `label` is the capitalised resource name used in the success message
    pub fn new(deletion: Deletion, label: &str, id: &str) -> Self {
        match deletion {
            Deletion::Deleted => Self::Deleted {
                deleted: id.to_string(),
                status: status::SUCCESS,
                message: format!("{} with id {} has been deleted.", label, id),
            },
            Deletion::Failed => Self::Failed(StatusBody {
                status: status::ERROR,
                message: format!(
                    "There was an error deleting {} with id {}.",
                    label.to_lowercase(),
                    id
                ),
            }),
        }
    }
}

impl IntoResponse for Removal {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
