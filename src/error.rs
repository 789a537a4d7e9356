use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No eligible {0} foods in catalog")]
    EmptyCategory(Category),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
