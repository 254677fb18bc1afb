use leptos::logging::log;
use std::panic;

/// Installs `console_error_panic_hook` and adds a hint when a relay handler or signal
/// update outlives the component that owned it.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive owner was used after disposal. Common causes:");
            log!("[PANIC] 1. A relay handler fired for a review list that was unmounted without unsubscribing");
            log!("[PANIC] 2. A cart callback ran after the product card was removed");
        }
    }));
}

/// Call once from the client entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
