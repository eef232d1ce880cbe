//! Board geometry and placement engine for a dartboard numbering trainer.

pub mod board;
pub mod error;
pub mod geometry;
pub mod macros;
pub mod mode;
pub mod numbers;
pub mod session;
pub mod store;

pub use board::{Board, Outcome, RejectReason};
pub use error::BoundsError;
pub use geometry::{Point, RingRadii, Sector, SectorBounds, sector_at, sector_bounds};
pub use mode::{Mode, Modes};
pub use numbers::{DartNumber, OFFICIAL_ORDER, official_number, official_sector};
pub use session::{Session, SessionOptions, Tray};
pub use store::AssignmentStore;
