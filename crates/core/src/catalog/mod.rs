//! Program units and compatible member search.
//!
//! The runtime layer that attaches to a process and enumerates its loaded
//! units lives outside this crate. It hands units over through
//! [`IdentifierSource`]; [`UnitCatalog`] is the in-memory implementation.

mod memory;
mod search;
mod traits;
mod types;

pub use memory::UnitCatalog;
pub use search::search_compatible_member;
pub use traits::IdentifierSource;
pub use types::{MemberMatch, ProgramUnit};
