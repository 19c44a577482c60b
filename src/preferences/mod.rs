//! User preferences. See [store::PreferencesStore].

pub mod field;
pub mod store;
pub mod theme;
