//! In-memory catalog logic: filtering, sorting, windowing and
//! related-product ranking. Pure functions over an already-fetched
//! snapshot; nothing here touches the database.

mod engine;
mod related;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{apply, FilterSpec, SortOption, VisibleWindow, PAGE_SIZE};
pub use related::rank;
