//! Value-frequency aggregation (COUNTS).

use pizdb_core::Value;
use pizdb_storage::CommittedStore;
use pizdb_txn::Overlay;
use rustc_hash::FxHashSet;

use crate::config::CountsMode;

/// Keys in the committed store mapping to `target`.
pub fn committed(store: &CommittedStore, target: Value) -> u64 {
    store.value_frequency(target)
}

/// Keys mapping to `target` as seen through an open transaction.
pub fn with_overlay(
    store: &CommittedStore,
    overlay: &Overlay,
    target: Value,
    mode: CountsMode,
) -> u64 {
    match mode {
        CountsMode::Exact => exact(store, overlay, target),
        CountsMode::Legacy => legacy(store, overlay, target),
    }
}

fn exact(store: &CommittedStore, overlay: &Overlay, target: Value) -> u64 {
    let buffered = overlay.buffered().filter(|(_, v)| *v == target).count();
    let committed = store
        .iter()
        .filter(|(k, v)| *v == target && !overlay.is_buffered(k) && !overlay.is_tombstoned(k))
        .count();
    (buffered + committed) as u64
}

fn legacy(store: &CommittedStore, overlay: &Overlay, target: Value) -> u64 {
    let deleted: FxHashSet<&str> = overlay
        .tombstoned()
        .filter(|(_, v)| *v == target)
        .map(|(k, _)| k)
        .collect();
    let live: FxHashSet<&str> = store
        .iter()
        .chain(overlay.buffered())
        .filter(|(_, v)| *v == target)
        .map(|(k, _)| k)
        .collect();
    live.difference(&deleted).count() as u64
}
