//! Purchase history commands.

use shopfront_storefront::PurchaseHistory;
use shopfront_storefront::store::KeyValueStore;

use super::CliError;

/// List previously purchased product IDs, most recent first.
pub fn show<S: KeyValueStore>(history: &PurchaseHistory<S>) -> String {
    let ids = history.load();
    if ids.is_empty() {
        return "No purchases recorded.".to_string();
    }
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Forget all recorded purchases.
///
/// # Errors
///
/// Returns `CliError` if the history slot cannot be removed.
pub fn clear<S: KeyValueStore>(history: &PurchaseHistory<S>) -> Result<String, CliError> {
    history
        .clear()
        .map_err(shopfront_storefront::Error::from)?;
    tracing::info!("Purchase history cleared");
    Ok("Purchase history cleared.".to_string())
}
