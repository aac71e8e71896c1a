//! Sysfs writes: the trait seam plus the kernel-backed writer.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

// ── Trait ──

/// Sink for integer writes to sysfs attribute files.
///
/// All hardware access in this crate goes through this one operation, so
/// tests swap in [`mock::MockSysfs`] and assert on the exact write traffic.
pub trait Sysfs {
    /// Write `value` as a decimal line to the attribute at `path`.
    fn write_int(&self, path: &Path, value: i32) -> std::io::Result<()>;
}

// ── Kernel implementation ──

/// Writer backed by the real sysfs tree.
///
/// Every call opens the attribute read-write, writes one decimal line and
/// closes it again; no descriptors are cached. The first failed open over
/// the process lifetime is logged, later open failures are returned
/// without logging.
#[derive(Debug, Default)]
pub struct KernelSysfs {
    warned_open: AtomicBool,
}

impl KernelSysfs {
    pub fn new() -> Self {
        KernelSysfs {
            warned_open: AtomicBool::new(false),
        }
    }
}

impl Sysfs for KernelSysfs {
    fn write_int(&self, path: &Path, value: i32) -> std::io::Result<()> {
        let mut file = match OpenOptions::new().read(true).write(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                if !self.warned_open.swap(true, Ordering::Relaxed) {
                    log::warn!("failed to open {}: {e}", path.display());
                }
                return Err(e);
            }
        };
        file.write_all(format!("{value}\n").as_bytes())
    }
}

// ── Mock writer for testing ──

/// In-memory sysfs for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Records every write in call order and can fail chosen paths.
    ///
    /// Interior mutability is `Mutex`-based so the mock stays `Send + Sync`
    /// behind shared control handles.
    #[derive(Debug, Default)]
    pub struct MockSysfs {
        /// Full write log: (path, value) in call order.
        writes: Mutex<Vec<(PathBuf, i32)>>,
        /// Paths whose writes fail, with the error kind to return.
        fail: Mutex<HashMap<PathBuf, std::io::ErrorKind>>,
    }

    impl MockSysfs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make writes to `path` fail with `kind`. Failed writes are not
        /// recorded in the log.
        pub fn fail_path(&self, path: impl Into<PathBuf>, kind: std::io::ErrorKind) {
            self.fail.lock().unwrap().insert(path.into(), kind);
        }

        /// Snapshot of the full write log in call order.
        pub fn writes(&self) -> Vec<(PathBuf, i32)> {
            self.writes.lock().unwrap().clone()
        }

        /// Every value written to `path`, in order.
        pub fn values(&self, path: &Path) -> Vec<i32> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .filter(|(p, _)| p == path)
                .map(|&(_, v)| v)
                .collect()
        }

        /// The last value written to `path`, if any.
        pub fn value(&self, path: &Path) -> Option<i32> {
            self.values(path).last().copied()
        }

        /// Total number of recorded writes across all paths.
        pub fn write_count(&self) -> usize {
            self.writes.lock().unwrap().len()
        }

        /// Forget all recorded writes. Failure injection stays in place.
        pub fn clear(&self) {
            self.writes.lock().unwrap().clear();
        }
    }

    impl Sysfs for MockSysfs {
        fn write_int(&self, path: &Path, value: i32) -> std::io::Result<()> {
            if let Some(kind) = self.fail.lock().unwrap().get(path) {
                return Err(std::io::Error::from(*kind));
            }
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), value));
            Ok(())
        }
    }
}
