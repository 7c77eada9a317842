pub mod json;
pub mod md;

use crate::batch::GameweekRun;
use crate::error::ScoreError;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(run: &GameweekRun, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(run).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(run)),
    }
}
