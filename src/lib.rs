pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod report;
pub mod types;

pub use engine::{compute_manager_score, compute_manager_score_with, ScoringRules};
pub use error::{Result, ScoreError};
