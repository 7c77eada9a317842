use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSubRecord {
    pub out_id: String,
    pub in_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptainActivation {
    Captain,
    Vice,
    None,
}

impl CaptainActivation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Vice => "vice",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerGameweekResult {
    pub manager_id: String,
    pub total_points: i32,
    pub auto_subs: Vec<AutoSubRecord>,
    pub captain_activated: CaptainActivation,
    pub bench_boost: bool,
}
