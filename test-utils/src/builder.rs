use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{context::TestContext, error::TestError};

static NEXT_CONTEXT: AtomicUsize = AtomicUsize::new(0);

/// Builder for creating test contexts backed by a scratch directory.
///
/// Every built context gets its own directory below the system temp dir, so
/// tests running in parallel never share a message id file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_message_id("987654321")
///     .build()?;
///
/// assert!(test.message_id_file().exists());
/// ```
pub struct TestBuilder {
    /// Contents written to the message id file during `build()`, if any.
    ///
    /// Stored verbatim, so malformed contents can be seeded as well.
    message_id: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no message id file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self { message_id: None }
    }

    /// Seeds the message id file with the provided contents.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, e.g. `"1234"` or `"garbage"`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_message_id(mut self, contents: &str) -> Self {
        self.message_id = Some(contents.to_string());
        self
    }

    /// Creates the scratch directory and writes any seeded files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the directory
    /// - `Err(TestError::Io)` - Directory or file could not be created
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = std::env::temp_dir().join(format!(
            "rift-status-test-{}-{}",
            std::process::id(),
            NEXT_CONTEXT.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir)?;

        let context = TestContext::new(dir);

        if let Some(contents) = self.message_id {
            std::fs::write(context.message_id_file(), contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a path inside the temp dir that no test context will ever create.
pub fn missing_dir() -> PathBuf {
    std::env::temp_dir()
        .join("rift-status-test-missing")
        .join(format!("{}", std::process::id()))
}
