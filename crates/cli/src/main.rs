use std::path::PathBuf;

use stocktrack_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Journal, Store};

/// Demonstration driver: exercises every store operation once against the
/// configured inventory file.
fn main() -> anyhow::Result<()> {
    stocktrack_observability::init();

    let path = std::env::var("INVENTORY_FILE")
        .unwrap_or_else(|_| "inventory.json".to_string());
    let path = PathBuf::from(path);

    let mut store = Store::new();
    store.load(&path)?;

    let mut journal = Journal::new();
    store.add("apple", 10, Some(&mut journal))?;
    store.add("banana", 5, Some(&mut journal))?;

    // Intentionally invalid: shows that add validation reaches the caller.
    if let Err(err) = store.add("cherry", -10, Some(&mut journal)) {
        tracing::error!("AddItem error: {err}");
    }

    store.remove("apple", 3);
    store.remove("orange", 1);

    tracing::info!("Apple stock: {}", store.get_quantity("apple")?);
    tracing::info!(
        "Low items: {:?}",
        store.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD)?
    );

    store.save(&path);
    store.report();

    for entry in journal.entries() {
        tracing::debug!("{entry}");
    }
    tracing::info!("Finished inventory operations.");
    Ok(())
}
