//! Source of program units.

use super::types::ProgramUnit;

/// Anything that can enumerate loaded program units.
///
/// This is the seam to the runtime introspection layer. Implementations hand
/// over plain names; nothing here depends on how they were obtained.
pub trait IdentifierSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &str;

    /// Loaded units, in load order.
    fn units(&self) -> Vec<ProgramUnit>;
}
