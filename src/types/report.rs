use serde::Serialize;

/// A data-quality observation about a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    /// Manager or player the finding is about.
    pub subject: Option<String>,
}
