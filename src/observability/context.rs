//! Thread-local context tracking for crash reports.
//!
//! Records which operation ecoscore was performing and which file it was
//! touching, so a panic report can say more than the panic message. Context
//! guards use RAII and restore the previous context on drop.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Entries held by the active session, for the crash report
static SESSION_ENTRIES: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<OperationContext> = const { RefCell::new(OperationContext::new()) };
}

/// Snapshot of what ecoscore was doing
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    pub operation: Option<Operation>,
    /// File being read or written, if any
    pub current_file: Option<PathBuf>,
}

impl OperationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operation: None,
            current_file: None,
        }
    }
}

/// Top-level operations, used to locate crashes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadingConfig,
    LoadingEntries,
    InteractiveSession,
    Scoring,
    Exporting,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingConfig => write!(f, "loading_config"),
            Self::LoadingEntries => write!(f, "loading_entries"),
            Self::InteractiveSession => write!(f, "interactive_session"),
            Self::Scoring => write!(f, "scoring"),
            Self::Exporting => write!(f, "exporting"),
        }
    }
}

/// Restores the previous context when dropped
pub struct ContextGuard {
    previous: OperationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current operation until the guard drops
#[must_use]
pub fn set_operation(operation: Operation) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().operation = Some(operation);
        ContextGuard { previous }
    })
}

/// Set the file being processed until the guard drops
#[must_use]
pub fn set_current_file(path: &Path) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.to_path_buf());
        ContextGuard { previous }
    })
}

pub fn get_current_context() -> OperationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

pub fn set_session_entries(count: usize) {
    SESSION_ENTRIES.store(count, Ordering::Relaxed);
}

pub fn get_session_entries() -> usize {
    SESSION_ENTRIES.load(Ordering::Relaxed)
}
