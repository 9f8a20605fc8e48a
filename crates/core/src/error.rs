use crate::validation::aggregator::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Internal error: {0}")]
    Internal(String),
}
