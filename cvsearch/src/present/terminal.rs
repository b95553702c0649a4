use colored::Colorize;
use cve_sources::{
    normalize::{CveReport, KeywordReport},
    severity::Severity,
    KnownExploited, NormalizedResult,
};

/// Styling role of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Notice,
    Link,
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => Self::Success,
            Severity::Low => Self::Failure,
        }
    }
}

const NONE: &str = "None";

/// CVSS scores keep one decimal, `10.0` rather than `10`.
fn cvss(score: Option<f64>) -> Option<String> {
    score.map(|s| format!("{s:.1}"))
}

fn probability(value: Option<f64>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Renders lookup results as lines of terminal text.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Failure => text.red().to_string(),
            Tone::Notice => text.yellow().to_string(),
            Tone::Link => text.cyan().to_string(),
        }
    }

    pub fn render(&self, result: &NormalizedResult) -> Vec<String> {
        match result {
            NormalizedResult::Cve(report) => self.render_cve(report),
            NormalizedResult::Keyword(report) => self.render_keyword(report),
        }
    }

    fn text_field(&self, label: &str, value: Option<&str>) -> String {
        match value {
            Some(v) => format!("{}: {}", label, self.paint(v, Tone::Success)),
            None => format!("{}: {}", label, self.paint(NONE, Tone::Failure)),
        }
    }

    fn scored_field(&self, label: &str, text: Option<String>, severity: Severity) -> String {
        let text = text.unwrap_or_else(|| NONE.to_string());
        format!("{}: {}", label, self.paint(&text, severity.into()))
    }

    fn list_field(&self, label: &str, items: &[String], lines: &mut Vec<String>) {
        if items.is_empty() {
            lines.push(format!("{}: {}", label, self.paint(NONE, Tone::Failure)));
            return;
        }

        lines.push(format!("{label}:"));
        for (i, item) in items.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, self.paint(item, Tone::Success)));
        }
    }

    fn render_cve(&self, report: &CveReport) -> Vec<String> {
        let record = &report.record;
        let severity = &report.severity;
        let mut lines = Vec::new();

        lines.push(self.text_field("CVE ID", record.cve_id.as_deref()));
        lines.push(self.text_field("Title", record.title.as_deref()));
        lines.push(self.text_field("Summary", record.summary.as_deref()));
        lines.push(String::new());

        lines.push(format!(
            "ExploitDB: {}",
            self.paint(&report.exploit_db, Tone::Link)
        ));
        lines.push(String::new());

        lines.push(self.scored_field("CVSS", cvss(record.cvss), severity.cvss));
        lines.push(self.scored_field("CVSS v2", cvss(record.cvss_v2), severity.cvss_v2));
        lines.push(self.scored_field("CVSS v3", cvss(record.cvss_v3), severity.cvss_v3));
        lines.push(self.scored_field("EPSS", probability(record.epss), severity.epss));
        lines.push(self.scored_field(
            "Ranking EPSS",
            probability(record.ranking_epss),
            severity.ranking_epss,
        ));

        let kev = match record.kev {
            KnownExploited::Yes => "True",
            KnownExploited::No | KnownExploited::Unknown => "False",
        };
        lines.push(format!("KEV: {}", self.paint(kev, severity.kev.into())));

        lines.push(self.text_field("Proposed Action", record.propose_action.as_deref()));
        lines.push(self.text_field(
            "Ransomware Campaign",
            record.ransomware_campaign.as_deref(),
        ));

        self.list_field("References", &record.references, &mut lines);
        self.list_field("CPEs", &record.cpes, &mut lines);

        lines.push(self.text_field("Published", record.published_time.as_deref()));

        lines.push(String::new());
        lines.push("Exploit searches:".to_string());
        for search in &report.exploit_searches {
            lines.push(format!(
                "  - {}: {}",
                self.paint(search.source, Tone::Notice),
                self.paint(&search.url, Tone::Link)
            ));
        }

        lines.push(String::new());
        lines.push("For more, access:".to_string());
        for link in report.links.iter() {
            lines.push(format!(
                "{}{}",
                self.paint("  - ", Tone::Failure),
                self.paint(link, Tone::Success)
            ));
        }

        lines
    }

    fn render_keyword(&self, report: &KeywordReport) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!(
                "{}: {}",
                self.paint("Total vulnerabilities found", Tone::Success),
                report.matches.len()
            ),
            format!(
                "{}: {}",
                self.paint("Search for more vulns and exploits here", Tone::Notice),
                self.paint(&report.search_more, Tone::Link)
            ),
            String::new(),
        ];

        for item in &report.matches {
            lines.push(format!(
                "{}: {}",
                self.paint(&item.cve_id, Tone::Success),
                self.paint(&item.short_description, Tone::Failure)
            ));
            lines.push(format!(
                "{}: {}",
                self.paint("Possible Exploits", Tone::Notice),
                self.paint(&item.exploit_db, Tone::Link)
            ));
            lines.push(String::new());
        }

        lines
    }
}
