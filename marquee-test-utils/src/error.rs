use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A row the test expected to exist was not found
    #[error("Expected {0} to exist")]
    Missing(&'static str),
}
