mod analyzer;
pub mod fsm;
pub mod upload;

pub use analyzer::{Analysis, Analyzer};
pub use fsm::{AnalysisEvent, AnalysisState, AnalysisStateMachine, Outcome};
pub use upload::{ALLOWED_EXTENSIONS, Upload, is_allowed_file};
