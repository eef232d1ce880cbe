use crate::geometry::{Point, Sector, sector_at};
use crate::mode::{Mode, Modes};
use crate::numbers::{DartNumber, official_number};
use crate::store::AssignmentStore;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum RejectReason {
    #[strum(to_string = "sector is locked")]
    SectorLocked,
    #[strum(to_string = "wrong number for sector")]
    WrongNumberForSector,
    #[strum(to_string = "number is not in the tray")]
    NotInTray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed { sector: Sector, number: DartNumber },
    Cleared { sector: Sector, number: DartNumber },
    Rejected(RejectReason),
    NoOp,
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// True when the caller should give tactile feedback.
    pub fn is_wrong_number(&self) -> bool {
        matches!(self, Self::Rejected(RejectReason::WrongNumberForSector))
    }

    pub fn changed_board(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::Cleared { .. })
    }
}

/// One practice board: assignments, locks and the active modes.
///
/// [`Board::place`] and [`Board::clear_at`] are the only ways to change
/// assignments; mode transitions may wipe them.
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: AssignmentStore,
    modes: Modes,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modes(modes: Modes) -> Self {
        Self {
            store: AssignmentStore::new(),
            modes,
        }
    }

    pub fn place(&mut self, point: Point, number: DartNumber) -> Outcome {
        self.place_in(sector_at(point), number)
    }

    pub fn place_in(&mut self, sector: Sector, number: DartNumber) -> Outcome {
        if self.store.is_locked(sector) {
            log::debug!("Rejected {} on sector {}: locked", number, sector);
            return Outcome::Rejected(RejectReason::SectorLocked);
        }

        if self.modes.hardcore && official_number(sector) != number {
            log::debug!(
                "Rejected {} on sector {}: expected {}",
                number,
                sector,
                official_number(sector)
            );
            return Outcome::Rejected(RejectReason::WrongNumberForSector);
        }

        self.store.set(sector, number);
        if self.modes.hardcore {
            self.store.lock(sector);
        }
        log::debug!("Placed {} on sector {}", number, sector);

        Outcome::Committed { sector, number }
    }

    pub fn clear_at(&mut self, point: Point) -> Outcome {
        self.clear_sector(sector_at(point))
    }

    pub fn clear_sector(&mut self, sector: Sector) -> Outcome {
        if self.store.get(sector).is_none() {
            return Outcome::NoOp;
        }
        if self.store.is_locked(sector) {
            return Outcome::Rejected(RejectReason::SectorLocked);
        }

        match self.store.clear(sector) {
            Some(number) => {
                log::debug!("Cleared {} from sector {}", number, sector);
                Outcome::Cleared { sector, number }
            }
            None => Outcome::NoOp,
        }
    }

    pub fn toggle_training(&mut self) -> bool {
        self.modes.flip(Mode::Training)
    }

    /// Entering or leaving hardcore both wipe the board.
    pub fn toggle_hardcore(&mut self) -> bool {
        let active = self.modes.flip(Mode::Hardcore);
        self.store.reset_all();
        log::info!("Hardcore {}", if active { "on" } else { "off" });
        active
    }

    pub fn toggle(&mut self, mode: Mode) -> bool {
        match mode {
            Mode::Training => self.toggle_training(),
            Mode::Hardcore => self.toggle_hardcore(),
        }
    }

    pub fn reset(&mut self) {
        self.modes = Modes::default();
        self.store.reset_all();
        log::info!("Board reset");
    }

    pub fn get(&self, sector: Sector) -> Option<DartNumber> {
        self.store.get(sector)
    }

    pub fn is_locked(&self, sector: Sector) -> bool {
        self.store.is_locked(sector)
    }

    pub fn store(&self) -> &AssignmentStore {
        &self.store
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn is_training(&self) -> bool {
        self.modes.training
    }

    pub fn is_hardcore(&self) -> bool {
        self.modes.hardcore
    }

    pub fn is_correct(&self, sector: Sector) -> bool {
        self.store.get(sector) == Some(official_number(sector))
    }

    /// Empty sector that shows its official number as a ghost.
    pub fn is_hint_candidate(&self, sector: Sector) -> bool {
        self.modes.training && self.store.get(sector).is_none()
    }

    pub fn correct_count(&self) -> usize {
        Sector::all().filter(|&s| self.is_correct(s)).count()
    }

    pub fn is_solved(&self) -> bool {
        Sector::all().all(|s| self.is_correct(s))
    }
}
