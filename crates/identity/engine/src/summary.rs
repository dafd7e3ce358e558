//! Folding findings into one overall verdict.

use cloak_identity_types::{CoherenceFinding, CoherenceStatus, CoherenceSummary, Severity};

/// Reduce a finding list to a status plus counts.
///
/// Status is `error` when any error-severity finding is present, then
/// `warning`, then `ok`. Pure function of the list; never fails.
pub fn summarize(findings: &[CoherenceFinding]) -> CoherenceSummary {
    let error_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warning_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .count();

    let status = if error_count > 0 {
        CoherenceStatus::Error
    } else if warning_count > 0 {
        CoherenceStatus::Warning
    } else {
        CoherenceStatus::Ok
    };

    let message = match (error_count, warning_count) {
        (0, 0) => "No coherence issues detected.".to_string(),
        (0, w) => format!("{} detected.", count(w, "warning")),
        (e, 0) => format!("{} detected.", count(e, "error")),
        (e, w) => format!("{} and {} detected.", count(e, "error"), count(w, "warning")),
    };

    CoherenceSummary {
        status,
        error_count,
        warning_count,
        message,
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: &str, severity: Severity) -> CoherenceFinding {
        CoherenceFinding {
            id: id.to_string(),
            severity,
            title: String::new(),
            message: String::new(),
            affected_fields: vec![],
            suggestion: None,
        }
    }

    #[test]
    fn empty_list_is_ok() {
        let summary = summarize(&[]);
        assert_eq!(summary.status, CoherenceStatus::Ok);
        assert_eq!(summary.error_count, 0);
        assert_eq!(summary.warning_count, 0);
        assert!(summary.is_clean());
        assert_eq!(summary.message, "No coherence issues detected.");
    }

    #[test]
    fn one_error_two_warnings() {
        let findings = vec![
            finding("a", Severity::Error),
            finding("b", Severity::Warning),
            finding("c", Severity::Warning),
        ];
        let summary = summarize(&findings);
        assert_eq!(summary.status, CoherenceStatus::Error);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 2);
        assert_eq!(summary.message, "1 error and 2 warnings detected.");
    }

    #[test]
    fn warnings_alone_do_not_escalate() {
        let findings = vec![finding("a", Severity::Warning)];
        let summary = summarize(&findings);
        assert_eq!(summary.status, CoherenceStatus::Warning);
        assert_eq!(summary.message, "1 warning detected.");
    }

    #[test]
    fn errors_alone_pluralize() {
        let findings = vec![finding("a", Severity::Error), finding("b", Severity::Error)];
        let summary = summarize(&findings);
        assert_eq!(summary.status, CoherenceStatus::Error);
        assert_eq!(summary.message, "2 errors detected.");
    }
}
