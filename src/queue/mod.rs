use serde::{Deserialize, Serialize};

pub mod model;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Ringing,
    Missed,
    Answered,
}

impl CallStatus {
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Ringing => "ringing",
            Self::Missed => "missed",
            Self::Answered => "answered",
        }
    }
}
