use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ghost numbers on empty sectors, glow on correct ones.
    #[strum(to_string = "training", serialize = "t", serialize = "hints")]
    Training,
    /// Only the official number is accepted and correct placements lock.
    #[strum(to_string = "hardcore", serialize = "h", serialize = "lock")]
    Hardcore,
}

/// Two independent flags; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modes {
    pub training: bool,
    pub hardcore: bool,
}

impl Modes {
    pub fn is_active(&self, mode: Mode) -> bool {
        match mode {
            Mode::Training => self.training,
            Mode::Hardcore => self.hardcore,
        }
    }

    pub(crate) fn flip(&mut self, mode: Mode) -> bool {
        let flag = match mode {
            Mode::Training => &mut self.training,
            Mode::Hardcore => &mut self.hardcore,
        };
        *flag = !*flag;
        *flag
    }
}

impl FromIterator<Mode> for Modes {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut modes, mode| {
            match mode {
                Mode::Training => modes.training = true,
                Mode::Hardcore => modes.hardcore = true,
            }
            modes
        })
    }
}
