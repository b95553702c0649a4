use crate::record::{KnownExploited, VulnerabilityRecord};

/// Scores at or above this are high severity (CVSS scale 0..10).
pub const SCORE_THRESHOLD: f64 = 7.0;
/// Probabilities strictly above this are high (EPSS scale 0..1).
pub const PROBABILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    /// Below threshold, or no value at all.
    Low,
}

pub fn classify_score(score: Option<f64>) -> Severity {
    match score {
        Some(s) if s >= SCORE_THRESHOLD => Severity::High,
        _ => Severity::Low,
    }
}

pub fn classify_probability(probability: Option<f64>) -> Severity {
    match probability {
        Some(p) if p > PROBABILITY_THRESHOLD => Severity::High,
        _ => Severity::Low,
    }
}

pub fn classify_known_exploited(kev: KnownExploited) -> Severity {
    if kev.is_yes() {
        Severity::High
    } else {
        Severity::Low
    }
}

/// Per-field severity of a record, for presenters to style with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityProfile {
    pub cvss: Severity,
    pub cvss_v2: Severity,
    pub cvss_v3: Severity,
    pub epss: Severity,
    pub ranking_epss: Severity,
    pub kev: Severity,
}

impl SeverityProfile {
    pub fn of(record: &VulnerabilityRecord) -> Self {
        Self {
            cvss: classify_score(record.cvss),
            cvss_v2: classify_score(record.cvss_v2),
            cvss_v3: classify_score(record.cvss_v3),
            epss: classify_probability(record.epss),
            ranking_epss: classify_probability(record.ranking_epss),
            kev: classify_known_exploited(record.kev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(6.9), Severity::Low ; "just below")]
    #[test_case(Some(7.0), Severity::High ; "at threshold")]
    #[test_case(Some(10.0), Severity::High ; "critical")]
    #[test_case(Some(0.0), Severity::Low ; "zero")]
    #[test_case(None, Severity::Low ; "absent")]
    fn scores(value: Option<f64>, expected: Severity) {
        assert_eq!(classify_score(value), expected);
    }

    #[test_case(Some(0.5), Severity::Low ; "at threshold")]
    #[test_case(Some(0.51), Severity::High ; "above")]
    #[test_case(None, Severity::Low ; "absent")]
    fn probabilities(value: Option<f64>, expected: Severity) {
        assert_eq!(classify_probability(value), expected);
    }

    #[test_case(KnownExploited::Yes, Severity::High)]
    #[test_case(KnownExploited::No, Severity::Low)]
    #[test_case(KnownExploited::Unknown, Severity::Low)]
    fn known_exploited(kev: KnownExploited, expected: Severity) {
        assert_eq!(classify_known_exploited(kev), expected);
    }

    #[test]
    fn profile_leaves_values_untouched() {
        let record = VulnerabilityRecord {
            cvss: Some(10.0),
            cvss_v2: Some(6.9),
            epss: Some(0.97),
            kev: KnownExploited::Yes,
            ..Default::default()
        };

        let profile = SeverityProfile::of(&record);

        assert_eq!(profile.cvss, Severity::High);
        assert_eq!(profile.cvss_v2, Severity::Low);
        assert_eq!(profile.cvss_v3, Severity::Low);
        assert_eq!(profile.epss, Severity::High);
        assert_eq!(profile.ranking_epss, Severity::Low);
        assert_eq!(profile.kev, Severity::High);
        assert_eq!(record.cvss_v2, Some(6.9));
    }
}
