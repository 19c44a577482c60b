//!  Storage is organized through [key_value::KeyValueStore].
//!  The basic idea is:
//!   - Every component owns a namespace, a flat map of keys to simple values.
//!   - [file_store::FileStore] keeps each namespace as a single json document on disk.
//!   - [memory_store::MemoryStore] keeps a namespace in memory. Used for tests and as a
//!     fallback when the application directory can't be used.
//!   - Every write touches exactly one key. There are no transactions across keys.

pub mod entities;
pub mod file_store;
pub mod key_value;
pub mod memory_store;

/// Namespace holding minutes and notes for every day of the week.
pub const PRACTICE_NAMESPACE: &str = "PracticeData";

/// Namespace holding user preferences.
pub const PREFERENCES_NAMESPACE: &str = "MyMusicTimePrefs";
