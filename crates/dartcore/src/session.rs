//! A practice session: the board plus the tray of numbers not yet placed.
//!
//! In free mode the tray starts with all twenty numbers. Hardcore mode deals
//! a random drill of official numbers instead, and every correct placement
//! locks its sector.

use crate::board::{Board, Outcome, RejectReason};
use crate::geometry::{Point, SECTOR_COUNT, sector_at};
use crate::mode::{Mode, Modes};
use crate::numbers::DartNumber;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

pub const DEFAULT_DRILL_SIZE: usize = 5;

/// Numbers available to drag onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tray {
    available: [bool; SECTOR_COUNT],
}

impl Tray {
    pub fn full() -> Self {
        Self {
            available: [true; SECTOR_COUNT],
        }
    }

    pub fn only(numbers: impl IntoIterator<Item = DartNumber>) -> Self {
        let mut tray = Self {
            available: [false; SECTOR_COUNT],
        };
        numbers.into_iter().for_each(|n| tray.give_back(n));
        tray
    }

    pub fn contains(&self, number: DartNumber) -> bool {
        self.available[number.slot()]
    }

    /// Returns false if the number was not in the tray.
    pub fn take(&mut self, number: DartNumber) -> bool {
        std::mem::replace(&mut self.available[number.slot()], false)
    }

    pub fn give_back(&mut self, number: DartNumber) {
        self.available[number.slot()] = true;
    }

    /// Available numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DartNumber> + '_ {
        DartNumber::all().filter(|&n| self.contains(n))
    }

    pub fn len(&self) -> usize {
        self.available.iter().filter(|&&a| a).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Tray {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub modes: Modes,
    pub drill_size: usize,
    /// Fixed seed for the drill deal; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            modes: Modes::default(),
            drill_size: DEFAULT_DRILL_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    tray: Tray,
    drill: Vec<DartNumber>,
    drill_size: usize,
    rng: StdRng,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let rng = options
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);

        let mut session = Self {
            board: Board::with_modes(options.modes),
            tray: Tray::full(),
            drill: Vec::new(),
            drill_size: options.drill_size.clamp(1, SECTOR_COUNT),
            rng,
        };
        session.refill_tray();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// Numbers dealt for the current hardcore round; empty in free mode.
    pub fn drill_targets(&self) -> &[DartNumber] {
        &self.drill
    }

    /// Takes effect the next time the tray is refilled.
    pub fn set_drill_size(&mut self, size: usize) {
        self.drill_size = size.clamp(1, SECTOR_COUNT);
    }

    pub fn drop_number(&mut self, point: Point, number: DartNumber) -> Outcome {
        if !self.tray.contains(number) {
            log::debug!("Rejected {}: not in the tray", number);
            return Outcome::Rejected(RejectReason::NotInTray);
        }

        let displaced = self.board.get(sector_at(point));
        let outcome = self.board.place(point, number);
        if let Outcome::Committed { .. } = outcome {
            self.tray.take(number);
            if let Some(previous) = displaced {
                self.tray.give_back(previous);
            }
        }
        outcome
    }

    pub fn pick_up(&mut self, point: Point) -> Outcome {
        let outcome = self.board.clear_at(point);
        if let Outcome::Cleared { number, .. } = outcome {
            self.tray.give_back(number);
        }
        outcome
    }

    pub fn toggle_training(&mut self) -> bool {
        self.board.toggle_training()
    }

    pub fn toggle_hardcore(&mut self) -> bool {
        let active = self.board.toggle_hardcore();
        self.refill_tray();
        active
    }

    pub fn toggle(&mut self, mode: Mode) -> bool {
        match mode {
            Mode::Training => self.toggle_training(),
            Mode::Hardcore => self.toggle_hardcore(),
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.refill_tray();
    }

    /// `(locked, dealt)` for the hardcore drill.
    pub fn drill_progress(&self) -> (usize, usize) {
        (self.board.store().locked_count(), self.drill.len())
    }

    pub fn is_drill_complete(&self) -> bool {
        self.board.is_hardcore() && !self.drill.is_empty() && self.tray.is_empty()
    }

    fn refill_tray(&mut self) {
        if self.board.is_hardcore() {
            let mut drill = DartNumber::all().choose_multiple(&mut self.rng, self.drill_size);
            drill.sort_unstable();
            log::info!(
                "Dealt hardcore drill: {}",
                drill
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.tray = Tray::only(drill.iter().copied());
            self.drill = drill;
        } else {
            self.tray = Tray::full();
            self.drill.clear();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sector;
    use crate::numbers::{official_number, official_sector};
    use rand::Rng;

    fn num(n: u8) -> DartNumber {
        DartNumber::try_from(n).unwrap()
    }

    fn point_in(i: usize) -> Point {
        Sector::wrapping(i).point_at(150.0)
    }

    fn seeded(modes: Modes) -> Session {
        Session::new(SessionOptions {
            modes,
            seed: Some(7),
            ..SessionOptions::default()
        })
    }

    fn hardcore() -> Modes {
        Modes {
            training: false,
            hardcore: true,
        }
    }

    /// Free mode: every number is either in the tray or on exactly one sector.
    fn assert_numbers_conserved(session: &Session) {
        let mut seen = [0usize; SECTOR_COUNT];
        for n in session.tray().iter() {
            seen[n.slot()] += 1;
        }
        for (_, n) in session.board().store().assigned() {
            seen[n.slot()] += 1;
        }
        assert!(seen.iter().all(|&c| c == 1), "{seen:?}");
    }

    #[test]
    fn test_tray_take_and_give_back() {
        let mut tray = Tray::full();
        assert_eq!(tray.len(), 20);
        assert!(tray.take(num(3)));
        assert!(!tray.take(num(3)));
        assert!(!tray.contains(num(3)));
        tray.give_back(num(3));
        assert_eq!(tray.iter().next(), Some(num(1)));
        assert_eq!(Tray::only([num(4), num(9)]).len(), 2);
    }

    #[test]
    fn test_drop_moves_number_from_tray_to_board() {
        let mut session = Session::default();
        let outcome = session.drop_number(point_in(0), num(5));
        assert!(outcome.changed_board());
        assert!(!session.tray().contains(num(5)));
        assert_eq!(
            session.drop_number(point_in(1), num(5)),
            Outcome::Rejected(RejectReason::NotInTray)
        );
        assert_numbers_conserved(&session);
    }

    #[test]
    fn test_overwrite_returns_displaced_number() {
        let mut session = Session::default();
        session.drop_number(point_in(2), num(8));
        session.drop_number(point_in(2), num(18));
        assert!(session.tray().contains(num(8)));
        assert!(!session.tray().contains(num(18)));
        assert_numbers_conserved(&session);
    }

    #[test]
    fn test_pick_up_returns_number() {
        let mut session = Session::default();
        session.drop_number(point_in(4), num(13));
        assert_eq!(
            session.pick_up(point_in(4)),
            Outcome::Cleared {
                sector: Sector::wrapping(4),
                number: num(13)
            }
        );
        assert!(session.tray().contains(num(13)));
        assert_eq!(session.pick_up(point_in(4)), Outcome::NoOp);
        assert_eq!(session.tray().len(), 20);
    }

    #[test]
    fn test_random_play_conserves_numbers() {
        let mut session = seeded(Modes::default());
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2000 {
            let point = Point::new(rng.gen_range(-300.0..300.0), rng.gen_range(-300.0..300.0));
            if rng.gen_bool(0.6) {
                let n = num(rng.gen_range(1..=20));
                session.drop_number(point, n);
            } else {
                session.pick_up(point);
            }
            assert_numbers_conserved(&session);
        }
    }

    #[test]
    fn test_hardcore_deals_drill() {
        let session = seeded(hardcore());
        let drill = session.drill_targets();
        assert_eq!(drill.len(), DEFAULT_DRILL_SIZE);
        assert!(drill.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(session.tray().iter().collect::<Vec<_>>(), drill);
        assert_eq!(session.drill_progress(), (0, 5));
    }

    #[test]
    fn test_same_seed_same_drill() {
        let a = seeded(hardcore());
        let b = seeded(hardcore());
        assert_eq!(a.drill_targets(), b.drill_targets());
    }

    #[test]
    fn test_completing_the_drill() {
        let mut session = seeded(hardcore());
        let drill = session.drill_targets().to_vec();

        // wrong sector keeps the number in the tray
        let first = drill[0];
        let wrong = official_sector(first).next();
        let outcome = session.drop_number(wrong.point_at(100.0), first);
        assert!(outcome.is_wrong_number());
        assert!(session.tray().contains(first));

        for n in &drill {
            let sector = official_sector(*n);
            assert!(session.drop_number(sector.point_at(100.0), *n).changed_board());
            assert!(session.board().is_locked(sector));
            assert_eq!(
                session.pick_up(sector.point_at(100.0)),
                Outcome::Rejected(RejectReason::SectorLocked)
            );
        }
        assert!(session.is_drill_complete());
        assert_eq!(session.drill_progress(), (5, 5));
    }

    #[test]
    fn test_leaving_hardcore_restores_full_tray() {
        let mut session = seeded(hardcore());
        let n = session.drill_targets()[0];
        session.drop_number(official_sector(n).point_at(50.0), n);

        assert!(!session.toggle(Mode::Hardcore));
        assert!(session.drill_targets().is_empty());
        assert_eq!(session.tray().len(), 20);
        assert!(session.board().store().is_empty());
        assert!(!session.is_drill_complete());
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut session = seeded(Modes {
            training: true,
            hardcore: false,
        });
        session.drop_number(point_in(0), official_number(Sector::wrapping(0)));
        session.toggle_hardcore();
        session.reset();
        assert_eq!(session.board().modes(), Modes::default());
        assert_eq!(session.tray().len(), 20);
        assert_numbers_conserved(&session);
    }

    #[test]
    fn test_drill_size_is_clamped_and_deferred() {
        let mut session = seeded(hardcore());
        session.set_drill_size(50);
        assert_eq!(session.drill_targets().len(), 5);
        session.reset();
        session.toggle_hardcore();
        assert_eq!(session.drill_targets().len(), 20);
        session.set_drill_size(0);
        session.toggle_training();
        assert_eq!(session.drill_targets().len(), 20);
    }
}
