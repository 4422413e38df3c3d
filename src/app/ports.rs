//! Capability interfaces for the pipeline's external collaborators
//!
//! The category registry and the goods persistence layer live outside this
//! pipeline. They are consumed through these traits so the orchestrator can
//! be wired against the real system or against deterministic fakes in tests.

use crate::Result;
use crate::app::models::{Category, GoodsRecord};

/// Lookup of known categories by name
pub trait CategoryResolver {
    /// Resolve a category by its exact name, or `None` if no such
    /// category exists. Called once per decoded row.
    fn find_by_name(&self, name: &str) -> Option<Category>;
}

/// Persistence of the aggregated goods batch
pub trait GoodsPersister {
    /// Persist the whole batch in one call. Success or failure applies to
    /// the batch as a unit; a failure aborts the surrounding run before any
    /// archiving or reporting happens.
    fn add_list_of_goods(&self, goods: &[GoodsRecord]) -> Result<()>;
}
