use crate::geometry::{SECTOR_COUNT, Sector};
use derive_more::{Display, Into};

/// The canonical dartboard numbering, clockwise from the top wedge.
pub const OFFICIAL_ORDER: [u8; SECTOR_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into)]
pub struct DartNumber(u8);

crate::impl_bounded_newtype!(DartNumber, u8, 1..=SECTOR_COUNT as u8, Number);

impl DartNumber {
    pub fn all() -> impl Iterator<Item = DartNumber> {
        (1..=SECTOR_COUNT as u8).map(DartNumber)
    }

    /// Zero-based position, `number - 1`.
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

pub fn official_number(sector: Sector) -> DartNumber {
    DartNumber(OFFICIAL_ORDER[sector.index()])
}

// inverse of OFFICIAL_ORDER, indexed by `number - 1`
const OFFICIAL_SECTORS: [usize; SECTOR_COUNT] = {
    let mut table = [0; SECTOR_COUNT];
    let mut i = 0;
    while i < SECTOR_COUNT {
        table[OFFICIAL_ORDER[i] as usize - 1] = i;
        i += 1;
    }
    table
};

pub fn official_sector(number: DartNumber) -> Sector {
    Sector::wrapping(OFFICIAL_SECTORS[number.slot()])
}
