//! External pages derived from a CVE id or a keyword. Nothing here is fetched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLinks {
    pub nvd: String,
    pub cve_org: String,
    pub cvedb: String,
}

impl ReferenceLinks {
    pub fn for_cve(cve_id: &str) -> Self {
        Self {
            nvd: format!("https://nvd.nist.gov/vuln/detail/{cve_id}"),
            cve_org: format!("https://www.cve.org/CVERecord?id={cve_id}"),
            cvedb: format!("https://cvedb.shodan.io/cve/{cve_id}"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.nvd.as_str(), self.cve_org.as_str(), self.cvedb.as_str()].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploitSearch {
    pub source: &'static str,
    pub url: String,
}

/// Third-party pages worth checking for public exploits, in display order.
pub fn exploit_searches(cve_id: &str) -> Vec<ExploitSearch> {
    vec![
        ExploitSearch {
            source: "Medium",
            url: format!("https://medium.com/search?q={cve_id}+exploit"),
        },
        ExploitSearch {
            source: "OffSec Blog",
            url: format!("https://www.offsec.com/blog/{cve_id}"),
        },
        ExploitSearch {
            source: "Exploit-DB",
            url: format!("https://www.exploit-db.com/search?q={cve_id}"),
        },
        ExploitSearch {
            source: "Cyberhub",
            url: format!("https://www.cyberhub.blog/cves/{cve_id}"),
        },
    ]
}

pub fn exploit_db_by_cve(cve_id: &str) -> String {
    format!(
        "https://www.exploit-db.com/search?cve={}",
        urlencoding::encode(cve_id)
    )
}

pub fn exploit_db_by_keyword(keyword: &str) -> String {
    format!(
        "https://www.exploit-db.com/search?q={}",
        urlencoding::encode(keyword)
    )
}
