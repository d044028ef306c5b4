#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_price")]
    InvalidPrice,
    #[error("item.invalid_quantity")]
    InvalidQuantity,
    #[error("item.invalid_max_price")]
    InvalidMaxPrice,
    #[error("item.invalid_max_quantity")]
    InvalidMaxQuantity,
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
