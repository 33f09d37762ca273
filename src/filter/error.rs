use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid status selector: {0}")]
    InvalidStatusSelector(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
}
