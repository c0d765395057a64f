//! Custom panic hook for structured crash reports.
//!
//! The hook leaves TUI mode (alternate screen, raw mode) before printing, so
//! the report is visible after a crash inside the interactive session.

use super::context::{get_current_context, get_session_entries, OperationContext};
use super::logging::{is_tui_active, set_tui_active};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main()`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    let context = get_current_context();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context, get_session_entries());
    print_backtrace_section();
}

/// Restore the terminal if the TUI owns it. Returns whether anything was restored.
fn exit_tui_mode() -> bool {
    if !is_tui_active() {
        return false;
    }
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen);
    true
}

fn print_header() {
    let platform = std::env::consts::OS;
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("╔══════════════════════════════════════════════════════════════════════════════╗");
    eprintln!("║                          ECOSCORE CRASH REPORT                               ║");
    eprintln!("╠══════════════════════════════════════════════════════════════════════════════╣");
    eprintln!("║  Version: {:<67} ║", VERSION);
    eprintln!("║  Platform: {:<66} ║", platform);
    eprintln!("║  Time: {:<70} ║", timestamp);
    eprintln!("╠══════════════════════════════════════════════════════════════════════════════╣");
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    let message = extract_panic_message(info);
    eprintln!("║  PANIC: {:<68} ║", truncate(&message, 68));

    if let Some(location) = info.location() {
        let loc_str = format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        eprintln!("║  Location: {:<66} ║", truncate(&loc_str, 66));
    }
}

fn print_context_section(context: &OperationContext, entries: usize) {
    eprintln!("╠══════════════════════════════════════════════════════════════════════════════╣");
    eprintln!("║  OPERATION CONTEXT:                                                          ║");

    match &context.operation {
        Some(operation) => eprintln!("║    Operation: {:<62} ║", operation),
        None => eprintln!("║    Operation: (not set)                                                      ║"),
    }

    if let Some(file) = &context.current_file {
        let file_str = file.display().to_string();
        eprintln!("║    File: {:<67} ║", truncate(&file_str, 67));
    }

    eprintln!("║    Session entries: {:<56} ║", entries);
}

fn print_backtrace_section() {
    eprintln!("╠══════════════════════════════════════════════════════════════════════════════╣");

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!(
            "║  STACK TRACE:                                                                ║"
        );
        eprintln!(
            "╚══════════════════════════════════════════════════════════════════════════════╝"
        );
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!(
            "║  Run with RUST_BACKTRACE=1 for stack trace                                   ║"
        );
        eprintln!(
            "╚══════════════════════════════════════════════════════════════════════════════╝"
        );
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
