use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};
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

/// A repository on `main` with a single commit and no remote.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// A working repository with a bare `origin` it was cloned into.
pub(crate) struct DevRepo {
    work: TempDir,
    _remote: TempDir,
}

impl DevRepo {
    pub(crate) fn path(&self) -> &Path {
        self.work.path()
    }
}

/// A repository on `main` plus a `dev` branch carrying `dev_files`, pushed to
/// a bare `origin` so `git fetch origin` populates `origin/main` and
/// `origin/dev`.
///
/// The working tree is left on `main` without any of the dev files.
pub(crate) fn create_test_repo_with_dev(dev_files: &[(&str, &str)]) -> DevRepo {
    let work = create_test_repo();
    let path = work.path();

    git(path, &["checkout", "-q", "-b", "dev"]);
    for (file, content) in dev_files {
        let target = path.join(file);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(target, content).unwrap();
    }
    git(path, &["add", "."]);
    git(path, &["commit", "--allow-empty", "-m", "Dev files"]);
    git(path, &["checkout", "-q", "main"]);

    let remote = TempDir::new().unwrap();
    let remote_path = remote.path().join("origin.git");
    let remote_str = remote_path.to_string_lossy().to_string();
    git(remote.path(), &["init", "-q", "--bare", &remote_str]);
    git(path, &["remote", "add", "origin", &remote_str]);
    git(path, &["push", "-q", "origin", "main", "dev"]);

    DevRepo {
        work,
        _remote: remote,
    }
}

/// Run `f` with a log subscriber installed and return everything it logged.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogSink(sink.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.lock().unwrap_or_else(|p| p.into_inner()).clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
