use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
