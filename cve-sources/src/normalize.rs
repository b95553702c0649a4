use crate::links::{self, ExploitSearch, ReferenceLinks};
use crate::record::{present, VulnerabilityRecord};
use crate::severity::SeverityProfile;
use crate::sources::nist::NO_DESCRIPTION;

/// Shown for a keyword match the provider sent without an id.
pub const MISSING_ID: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    Cve(CveReport),
    Keyword(KeywordReport),
}

impl NormalizedResult {
    /// A single looked-up CVE, with its derived links and severities.
    pub fn from_record(cve_id: &str, record: VulnerabilityRecord) -> Self {
        Self::Cve(CveReport {
            cve_id: cve_id.to_string(),
            links: ReferenceLinks::for_cve(cve_id),
            exploit_searches: links::exploit_searches(cve_id),
            exploit_db: links::exploit_db_by_cve(cve_id),
            severity: SeverityProfile::of(&record),
            record,
        })
    }

    /// Keyword matches reduced to summaries, provider order preserved.
    pub fn from_matches(keyword: &str, records: Vec<VulnerabilityRecord>) -> Self {
        let matches = records.into_iter().map(KeywordMatch::from).collect();

        Self::Keyword(KeywordReport {
            search_more: links::exploit_db_by_keyword(keyword),
            matches,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CveReport {
    /// The id as queried.
    pub cve_id: String,
    pub record: VulnerabilityRecord,
    pub links: ReferenceLinks,
    pub exploit_searches: Vec<ExploitSearch>,
    pub exploit_db: String,
    pub severity: SeverityProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub matches: Vec<KeywordMatch>,
    pub search_more: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub cve_id: String,
    pub short_description: String,
    pub exploit_db: String,
}

impl From<VulnerabilityRecord> for KeywordMatch {
    fn from(record: VulnerabilityRecord) -> Self {
        let cve_id = record.cve_id.unwrap_or_else(|| MISSING_ID.to_string());
        let short_description =
            present(record.summary).unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Self {
            exploit_db: links::exploit_db_by_cve(&cve_id),
            cve_id,
            short_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::KnownExploited;
    use crate::severity::Severity;

    fn record(id: &str, summary: Option<&str>) -> VulnerabilityRecord {
        VulnerabilityRecord {
            cve_id: Some(id.to_string()),
            summary: summary.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn cve_report_carries_links_and_severity() {
        let rec = VulnerabilityRecord {
            cvss: Some(10.0),
            kev: KnownExploited::Yes,
            ..record("CVE-2021-44228", Some("Log4Shell"))
        };

        let NormalizedResult::Cve(report) = NormalizedResult::from_record("CVE-2021-44228", rec)
        else {
            panic!("expected a cve report");
        };

        assert_eq!(report.cve_id, "CVE-2021-44228");
        assert_eq!(
            report.links.nvd,
            "https://nvd.nist.gov/vuln/detail/CVE-2021-44228"
        );
        assert_eq!(report.exploit_searches.len(), 4);
        assert_eq!(
            report.exploit_db,
            "https://www.exploit-db.com/search?cve=CVE-2021-44228"
        );
        assert_eq!(report.severity.cvss, Severity::High);
        assert_eq!(report.severity.kev, Severity::High);
        assert_eq!(report.record.cvss, Some(10.0));
    }

    #[test]
    fn keyword_report_preserves_order_and_fills_gaps() {
        let records = vec![
            record("CVE-2021-45046", Some("Incomplete fix")),
            VulnerabilityRecord::default(),
            record("CVE-2021-44228", Some("string")),
        ];

        let NormalizedResult::Keyword(report) =
            NormalizedResult::from_matches("apache log4j", records)
        else {
            panic!("expected a keyword report");
        };

        assert_eq!(
            report.matches,
            vec![
                KeywordMatch {
                    cve_id: "CVE-2021-45046".into(),
                    short_description: "Incomplete fix".into(),
                    exploit_db: "https://www.exploit-db.com/search?cve=CVE-2021-45046".into(),
                },
                KeywordMatch {
                    cve_id: MISSING_ID.into(),
                    short_description: NO_DESCRIPTION.into(),
                    exploit_db: "https://www.exploit-db.com/search?cve=N%2FA".into(),
                },
                KeywordMatch {
                    cve_id: "CVE-2021-44228".into(),
                    short_description: NO_DESCRIPTION.into(),
                    exploit_db: "https://www.exploit-db.com/search?cve=CVE-2021-44228".into(),
                },
            ]
        );
        assert_eq!(
            report.search_more,
            "https://www.exploit-db.com/search?q=apache%20log4j"
        );
    }

    #[test]
    fn empty_keyword_report() {
        let NormalizedResult::Keyword(report) = NormalizedResult::from_matches("zzz", Vec::new())
        else {
            panic!("expected a keyword report");
        };
        assert!(report.matches.is_empty());
    }
}
