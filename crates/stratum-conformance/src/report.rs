//! Conformance report assembly and rendering.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Outcome of one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub function: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parity_note: Option<String>,
}

/// Aggregated results for one campaign, digest-stamped.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub campaign: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub digest: String,
    pub results: Vec<CaseResult>,
}

impl ConformanceReport {
    /// Builds a report, computing counters and the digest over the
    /// canonical result body.
    pub fn from_results(campaign: &str, results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let digest = digest_results(&results);
        Self {
            campaign: campaign.to_string(),
            total,
            passed,
            failed: total - passed,
            digest,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Human-readable rendering: one line per case, summary last.
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        for r in &self.results {
            let mark = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("{mark}  {:<32} {}\n", r.name, r.function));
            if let Some(diff) = &r.diff {
                for line in diff.lines() {
                    out.push_str(&format!("      {line}\n"));
                }
            }
            if let Some(note) = &r.parity_note {
                out.push_str(&format!("      host: {note}\n"));
            }
        }
        out.push_str(&format!(
            "\n{}: {} passed, {} failed of {} (digest {})\n",
            self.campaign, self.passed, self.failed, self.total, self.digest
        ));
        out
    }
}

fn digest_results(results: &[CaseResult]) -> String {
    let body = serde_json::to_vec(results).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&body);
    let raw = hasher.finalize();
    let mut hex = String::with_capacity(raw.len() * 2);
    for byte in raw {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(passed: bool) -> CaseResult {
        CaseResult {
            name: "n".into(),
            function: "f".into(),
            passed,
            expected: "1".into(),
            actual: if passed { "1".into() } else { "2".into() },
            diff: None,
            parity_note: None,
        }
    }

    #[test]
    fn test_counters() {
        let report = ConformanceReport::from_results("c", vec![sample(true), sample(false)]);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_digest_is_stable_and_content_bound() {
        let a = ConformanceReport::from_results("c", vec![sample(true)]);
        let b = ConformanceReport::from_results("c", vec![sample(true)]);
        let c = ConformanceReport::from_results("c", vec![sample(false)]);
        assert_eq!(a.digest, b.digest);
        assert_ne!(a.digest, c.digest);
        assert_eq!(a.digest.len(), 64);
    }

    #[test]
    fn test_human_rendering_mentions_failures() {
        let report = ConformanceReport::from_results("c", vec![sample(false)]);
        let text = report.render_human();
        assert!(text.contains("FAIL"));
        assert!(text.contains("1 failed"));
    }
}
