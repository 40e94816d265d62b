//! Terminal setup and restoration

use std::any::Any;
use std::panic::Location;

use audit_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter the alternate screen, restoring it again if the audit panics
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init()
        .map_err(|e| Error::terminal(format!("Failed to initialize terminal: {}", e)))
}

/// Leave the alternate screen; failures are logged since the audit is ending anyway
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

/// Restore the terminal and record the panic in the log file before the
/// default hook prints it
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("{}", panic_summary(panic_info.payload(), panic_info.location()));
        original_hook(panic_info);
    }));
}

/// One-line description of a panic: message plus source location
fn panic_summary(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string payload");

    match location {
        Some(loc) => format!(
            "Audit panicked at {}:{}: {}",
            loc.file(),
            loc.line(),
            message
        ),
        None => format!("Audit panicked: {}", message),
    }
}
