use std::path::PathBuf;

/// Test context owning a scratch directory.
///
/// The directory and everything in it is removed when the context is dropped,
/// so tests do not leave message id files behind.
pub struct TestContext {
    dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the message id file inside the scratch directory.
    ///
    /// The file only exists if the builder seeded it or the code under test
    /// wrote it.
    pub fn message_id_file(&self) -> PathBuf {
        self.dir.join("message_id.txt")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
