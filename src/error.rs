use thiserror::Error;

use crate::models::{Location, Time};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{file}, line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("Travel time between {from} and {to} must be finite and non-negative, got {weight}")]
    InvalidWeight {
        from: Location,
        to: Location,
        weight: Time,
    },

    #[error("Order lists {products} products but {quantities} quantities")]
    MismatchedOrder { products: usize, quantities: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
