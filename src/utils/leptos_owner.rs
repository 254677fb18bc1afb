use leptos::Owner;

/// Runs `f` under `owner`, typically one captured when a relay subscription was made.
/// If the owner has been disposed, logs and returns None.
pub fn run_in_owner<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(err) => {
                leptos::logging::log!("[OWNER] Owner gone for {}: {:?}", log_context, err);
                None
            }
        },
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner captured for {}", log_context);
            None
        }
    }
}
