//! File record registry
//!
//! The in-memory record index, its snapshot persistence, and the record
//! type itself.

pub mod persistence;
pub mod record;
pub mod store;

pub use record::{FILE_OBJECT, FileRecord};
pub use store::FileRegistry;
