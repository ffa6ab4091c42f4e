// Runtime-mutable settings: a key/value table read fresh on every analysis
// call, written through the settings endpoints. Last write wins per key.

pub mod handlers;
pub mod store;
