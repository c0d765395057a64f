//! Observability infrastructure: logging setup, crash reports and context tracking.
//!
//! ## Usage
//!
//! ```ignore
//! use ecoscore::observability::{init_logging, install_panic_hook, LogTarget};
//!
//! fn main() -> anyhow::Result<()> {
//!     install_panic_hook();
//!     init_logging(1, LogTarget::Stderr)?;
//!     // ... rest of application
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    get_current_context, get_session_entries, set_current_file, set_operation,
    set_session_entries, ContextGuard, Operation, OperationContext,
};
pub use logging::{
    init_logging, is_tui_active, level_for_verbosity, set_tui_active, LogTarget, LOG_ENV_VAR,
};
pub use panic_hook::install_panic_hook;
