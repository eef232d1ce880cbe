use crate::geometry::{SECTOR_COUNT, Sector};
use crate::numbers::DartNumber;

/// Per-sector assignment and lock state.
///
/// Readers are public; writes go through [`crate::board::Board`], which
/// validates them first. A locked sector keeps its value until
/// [`AssignmentStore::reset_all`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentStore {
    values: [Option<DartNumber>; SECTOR_COUNT],
    locked: [bool; SECTOR_COUNT],
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sector: Sector) -> Option<DartNumber> {
        self.values[sector.index()]
    }

    pub fn is_locked(&self, sector: Sector) -> bool {
        self.locked[sector.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none) && !self.locked.iter().any(|&l| l)
    }

    /// Filled sectors in board order.
    pub fn assigned(&self) -> impl Iterator<Item = (Sector, DartNumber)> + '_ {
        Sector::all().filter_map(|s| self.get(s).map(|n| (s, n)))
    }

    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|&&l| l).count()
    }

    /// Overwrites whatever the sector held. The displaced number is not
    /// tracked here.
    pub(crate) fn set(&mut self, sector: Sector, number: DartNumber) {
        self.values[sector.index()] = Some(number);
    }

    /// Empties the sector and returns what it held. Locked sectors are left
    /// untouched and yield `None`.
    pub(crate) fn clear(&mut self, sector: Sector) -> Option<DartNumber> {
        if self.is_locked(sector) {
            return None;
        }
        self.values[sector.index()].take()
    }

    pub(crate) fn lock(&mut self, sector: Sector) {
        self.locked[sector.index()] = true;
    }

    pub(crate) fn reset_all(&mut self) {
        self.values = [None; SECTOR_COUNT];
        self.locked = [false; SECTOR_COUNT];
    }
}
