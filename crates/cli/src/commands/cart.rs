//! Cart commands.

use core::fmt::Write as _;

use chrono::{DateTime, Utc};
use shopfront_core::{Price, Product};
use shopfront_storefront::store::KeyValueStore;
use shopfront_storefront::{CartItemKey, CartService, OrderSummary, PurchaseHistory};

use super::CliError;

/// Render every line plus the unit count and total.
pub fn show<S: KeyValueStore>(cart: &CartService<S>) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let currency = cart.currency();
    let mut out = String::new();
    for line in cart.items() {
        let _ = writeln!(
            out,
            "{:<16} {:<28} {:>4} x {:>10} = {:>10}",
            line.id,
            line.name,
            line.quantity,
            Price::new(line.price, currency).display(),
            Price::new(line.line_total(), currency).display(),
        );
    }
    let _ = writeln!(out, "Items: {}", cart.item_count());
    let _ = write!(out, "Total: {}", cart.total().display());
    out
}

/// Add one unit of `product`.
pub fn add<S: KeyValueStore>(
    cart: &mut CartService<S>,
    product: Product,
    size: Option<String>,
) -> String {
    let key = CartItemKey::for_product(&product.id, size.as_deref());
    let name = product.name.clone();
    cart.add_item(product, size);
    let quantity = cart.get(&key).map_or(0, |line| line.quantity.get());
    format!("Added {name} ({key}); now {quantity} in cart.")
}

/// Remove a line. Unknown keys are reported, not treated as errors.
pub fn remove<S: KeyValueStore>(cart: &mut CartService<S>, key: &CartItemKey) -> String {
    let present = cart.get(key).is_some();
    cart.remove_item(key);
    if present {
        format!("Removed {key}.")
    } else {
        format!("{key} is not in the cart.")
    }
}

/// Set a line's quantity.
pub fn set_quantity<S: KeyValueStore>(
    cart: &mut CartService<S>,
    key: &CartItemKey,
    quantity: i64,
) -> String {
    let present = cart.get(key).is_some();
    cart.update_quantity(key, quantity);
    match (present, cart.get(key)) {
        (false, _) => format!("{key} is not in the cart."),
        (true, Some(line)) => format!("{key} quantity set to {}.", line.quantity),
        (true, None) => format!("Removed {key}."),
    }
}

/// Empty the cart.
pub fn clear<S: KeyValueStore>(cart: &mut CartService<S>) -> String {
    cart.clear_cart();
    "Cart cleared.".to_string()
}

/// Summarize the cart, record history, and empty the cart.
///
/// # Errors
///
/// Returns `CliError::Json` if `json` is set and encoding fails.
pub fn checkout<S: KeyValueStore, H: KeyValueStore>(
    cart: &mut CartService<S>,
    history: &PurchaseHistory<H>,
    now: DateTime<Utc>,
    json: bool,
) -> Result<String, CliError> {
    let Some(summary) = cart.complete_checkout(history, now) else {
        return Ok("Your cart is empty; nothing to check out.".to_string());
    };
    if json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(render_summary(&summary))
    }
}

fn render_summary(summary: &OrderSummary) -> String {
    let currency = summary.total.currency_code;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Order placed {} ({})",
        summary.order_date.format("%Y-%m-%d %H:%M UTC"),
        summary.status
    );
    for item in &summary.items {
        let _ = writeln!(
            out,
            "- {} (Size: {}) x{} - {}",
            item.name,
            item.size,
            item.quantity,
            Price::new(item.line_total(), currency).display()
        );
    }
    let _ = write!(out, "Total Amount: {}", summary.total.display());
    out
}

/// Report whether the stored cart decodes.
///
/// # Errors
///
/// Returns `CliError` if the stored cart is unreadable or corrupt.
pub fn inspect<S: KeyValueStore>(cart: &CartService<S>) -> Result<String, CliError> {
    let storage = cart.storage();
    let loaded = storage
        .try_load()
        .map_err(shopfront_storefront::Error::from)?;
    Ok(match loaded {
        Some(state) => format!(
            "Slot {:?} OK: {} lines, {} items.",
            storage.key(),
            state.len(),
            state.item_count()
        ),
        None => format!("Slot {:?} is empty.", storage.key()),
    })
}
