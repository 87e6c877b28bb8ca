//! In-memory unit catalog.

use super::traits::IdentifierSource;
use super::types::ProgramUnit;

/// Program units held in memory, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    units: Vec<ProgramUnit>,
}

impl UnitCatalog {
    pub fn new(units: Vec<ProgramUnit>) -> Self {
        Self { units }
    }

    /// Append a unit after those already loaded.
    pub fn push(&mut self, unit: ProgramUnit) {
        self.units.push(unit);
    }

    /// Unit names in load order.
    pub fn unit_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<ProgramUnit> for UnitCatalog {
    fn from_iter<I: IntoIterator<Item = ProgramUnit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IdentifierSource for UnitCatalog {
    fn name(&self) -> &str {
        "memory"
    }

    fn units(&self) -> Vec<ProgramUnit> {
        self.units.clone()
    }
}
