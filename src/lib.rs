mod clock;
mod editor_fit;
mod error;
mod grid;
mod gui;
mod pattern;
mod placement;
mod session;
mod utils;

pub use clock::{Phase, SimulationState};
pub use editor_fit::{compute_scale, MIN_EDITOR_SCALE};
pub use error::ImportError;
pub use grid::Grid;
pub use gui::{App, Config};
pub use pattern::PatternBuffer;
pub use placement::stamp;
pub use session::{Session, SessionConfig};
pub use utils::{load_pattern_file, parse_plaintext, parse_rle, LexiconEntry, ParsedPattern};
