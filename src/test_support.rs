use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Path to a file shipped in `demos/`.
pub(crate) fn demo_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

/// A temporary directory holding copies of the demo corpus, schema and config.
pub(crate) fn create_demo_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in ["patcov.yaml", "patterns.yaml", "schema.yaml"] {
        std::fs::copy(demo_path(name), temp_dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to copy demo file {}: {}", name, e));
    }
    temp_dir
}

/// Rewrite a file in the workspace through `edit`.
pub(crate) fn rewrite_file(dir: &Path, name: &str, edit: impl FnOnce(String) -> String) {
    let path = dir.join(name);
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, edit(content)).unwrap();
}
