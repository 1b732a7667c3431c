use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating or seeding the scratch directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
