use serde::{Deserialize, Serialize};

/// Lifecycle state of a schedule entry as rendered on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Done,
    Milestone,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Done => "done",
            Status::Milestone => "milestone",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a completion percentage to a status.
///
/// Two-state classification: only fully complete packages count as done;
/// everything else, including missing or unparseable values, renders as
/// active. 0% and in-progress deliberately share the same visual state.
pub fn classify(percent_complete: Option<f64>) -> Status {
    match percent_complete {
        Some(percent) if percent >= 100.0 => Status::Done,
        _ => Status::Active,
    }
}
