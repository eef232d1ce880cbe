use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("Sector index {0} is outside 0..20")]
    Sector(usize),
    #[error("Dart number {0} is outside 1..=20")]
    Number(u8),
}
