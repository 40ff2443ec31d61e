pub mod chart;
pub mod checks;
pub mod config;
pub mod extract;
pub mod record;

// Re-export specific items if needed for convenient access
pub use checks::{AnalysisReport, Analyzer};
pub use extract::ChannelSet;
