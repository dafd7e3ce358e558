use serde::{Deserialize, Serialize};

/// Severity of a coherence finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unusual but possible — a real device could look like this.
    Warning,
    /// Physically or statistically implausible — betrays spoofing.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One diagnostic result from the coherence validator.
///
/// `id` is stable per rule and unique within a validation run, since each
/// rule emits at most one finding. Findings are produced fresh per call
/// and never persisted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceFinding {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub affected_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CoherenceFinding {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Overall status of a validated attribute bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoherenceStatus {
    Ok,
    Warning,
    Error,
}

impl CoherenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoherenceStatus::Ok => "ok",
            CoherenceStatus::Warning => "warning",
            CoherenceStatus::Error => "error",
        }
    }
}

/// A list of findings folded into one overall verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceSummary {
    pub status: CoherenceStatus,
    pub error_count: usize,
    pub warning_count: usize,
    pub message: String,
}

impl CoherenceSummary {
    pub fn is_clean(&self) -> bool {
        self.status == CoherenceStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
        assert!(CoherenceStatus::Ok < CoherenceStatus::Warning);
        assert!(CoherenceStatus::Warning < CoherenceStatus::Error);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&CoherenceStatus::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn finding_omits_absent_suggestion() {
        let finding = CoherenceFinding {
            id: "touch-mac".into(),
            severity: Severity::Warning,
            title: "Touch on a Mac".into(),
            message: "macOS devices do not report touch points".into(),
            affected_fields: vec!["max_touch_points".into()],
            suggestion: None,
        };
        let json = serde_json::to_string(&finding).unwrap();
        assert!(!json.contains("suggestion"));
        assert!(!finding.is_error());
    }
}
