pub mod observation;
pub mod stats;

pub use observation::{Observation, ObservationKind};
pub use stats::{LanguageShare, ModelShare, StatsSnapshot, ToolCount};
