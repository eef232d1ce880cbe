pub mod model;
pub mod view;

pub use model::{BoardModel, ClickAction};
pub use view::draw;

pub const LABEL_RADIUS: f64 = 0.7; // number labels, fraction of board radius
pub const FONT_SIZE: f64 = 0.08; // fraction of board radius
pub const GHOST_ALPHA: f64 = 0.25;
pub const PULSE_STEP: f64 = 0.05; // glow phase per frame
pub const GLOW_WIDTH: f64 = 0.08; // fraction of board radius
pub const GLOW_LAYERS: usize = 6;
pub const SEPARATOR_WIDTH: f64 = 1.0;
