//! Static jurisdiction catalog.
//!
//! Every [`RegionCode`] maps to exactly one [`RegionConfig`]. The catalog is
//! compiled in and never mutated; the law list of each region feeds the
//! analysis prompt, the source list is display-only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown region `{0}` (expected one of {expected})", expected = known_codes())]
    UnknownRegion(String),
}

fn known_codes() -> String {
    RegionCode::ALL
        .iter()
        .map(RegionCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Jurisdiction identifier, serialised as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "SG")]
    Singapore,
    #[serde(rename = "MY")]
    Malaysia,
    #[serde(rename = "AE")]
    Uae,
    #[serde(rename = "HK")]
    HongKong,
}

impl RegionCode {
    /// All codes in catalog display order.
    pub const ALL: [RegionCode; 5] = [
        RegionCode::India,
        RegionCode::Singapore,
        RegionCode::Malaysia,
        RegionCode::Uae,
        RegionCode::HongKong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::Singapore => "SG",
            Self::Malaysia => "MY",
            Self::Uae => "AE",
            Self::HongKong => "HK",
        }
    }

    /// The catalog entry for this code.
    pub fn config(&self) -> &'static RegionConfig {
        region(*self)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RegionCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RegionCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownRegion(wanted.to_string()))
    }
}

/// Display metadata and legal framework for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionConfig {
    pub code: RegionCode,
    pub name: &'static str,
    pub flag: &'static str,
    pub currency: &'static str,
    /// Statutes enumerated in the analysis prompt, in catalog order.
    pub laws: &'static [&'static str],
    /// Source authorities (display only).
    pub sources: &'static [&'static str],
}

// ── Catalog entries ──

static INDIA: RegionConfig = RegionConfig {
    code: RegionCode::India,
    name: "India",
    flag: "🇮🇳",
    currency: "INR",
    laws: &[
        "Indian Contract Act 1872",
        "Data Protection Act 2023",
        "Companies Act 2013",
        "GST Rules",
    ],
    sources: &["mca.gov.in", "meity.gov.in", "gst.gov.in"],
};

static SINGAPORE: RegionConfig = RegionConfig {
    code: RegionCode::Singapore,
    name: "Singapore",
    flag: "🇸🇬",
    currency: "SGD",
    laws: &[
        "Contract Act (Cap. 23)",
        "PDPA 2012",
        "Employment Act (Cap. 91)",
    ],
    sources: &["agc.gov.sg", "pdpc.gov.sg", "mom.gov.sg"],
};

static MALAYSIA: RegionConfig = RegionConfig {
    code: RegionCode::Malaysia,
    name: "Malaysia",
    flag: "🇲🇾",
    currency: "MYR",
    laws: &["Contract Act 1950", "PDPA 2010", "Employment Act 1955"],
    sources: &["agc.gov.my", "pdp.gov.my", "ssm.com.my"],
};

static UAE: RegionConfig = RegionConfig {
    code: RegionCode::Uae,
    name: "UAE",
    flag: "🇦🇪",
    currency: "AED",
    laws: &[
        "UAE Civil Code 1985",
        "PDPL 2021",
        "Labor Law 1980",
        "Sharia Compliance Principles",
    ],
    sources: &["moj.gov.ae", "u.ae"],
};

static HONG_KONG: RegionConfig = RegionConfig {
    code: RegionCode::HongKong,
    name: "Hong Kong",
    flag: "🇭🇰",
    currency: "HKD",
    laws: &[
        "Sale of Goods Ordinance",
        "PDPO (Privacy)",
        "Employment Ordinance",
    ],
    sources: &["doj.gov.hk", "pcpd.org.hk", "labour.gov.hk"],
};

// ── Public API ──

/// Catalog entry for a code. Total over [`RegionCode`].
pub fn region(code: RegionCode) -> &'static RegionConfig {
    match code {
        RegionCode::India => &INDIA,
        RegionCode::Singapore => &SINGAPORE,
        RegionCode::Malaysia => &MALAYSIA,
        RegionCode::Uae => &UAE,
        RegionCode::HongKong => &HONG_KONG,
    }
}

/// Resolve a user-supplied identifier such as `"sg"` or `" HK "`.
///
/// Unknown identifiers are an error, never a default region.
pub fn lookup(identifier: &str) -> Result<&'static RegionConfig, CatalogError> {
    let code: RegionCode = identifier.parse().inspect_err(|err| {
        tracing::warn!(identifier, error = %err, "region lookup failed");
    })?;
    Ok(region(code))
}

/// All codes in display order.
pub fn codes() -> &'static [RegionCode] {
    &RegionCode::ALL
}

/// All catalog entries in display order.
pub fn all() -> impl Iterator<Item = &'static RegionConfig> {
    RegionCode::ALL.into_iter().map(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_returns_matching_code() {
        for code in codes() {
            let config = lookup(code.as_str()).unwrap();
            assert_eq!(config.code, *code);
            assert_eq!(config.code.as_str(), code.as_str());
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(lookup("sg").unwrap().name, "Singapore");
        assert_eq!(lookup("  hk ").unwrap().name, "Hong Kong");
    }

    #[test]
    fn unknown_region_fails_loudly() {
        assert_eq!(
            lookup("UK").unwrap_err(),
            CatalogError::UnknownRegion("UK".into())
        );
        assert!(lookup("").is_err());
    }

    #[test]
    fn unknown_region_message_lists_catalog_codes() {
        let message = lookup("UK").unwrap_err().to_string();
        assert_eq!(
            message,
            "unknown region `UK` (expected one of IN, SG, MY, AE, HK)"
        );
        for code in codes() {
            assert!(message.contains(code.as_str()));
        }
    }

    #[test]
    fn codes_are_unique() {
        let seen: HashSet<&str> = all().map(|r| r.code.as_str()).collect();
        assert_eq!(seen.len(), RegionCode::ALL.len());
    }

    #[test]
    fn every_region_has_laws_and_sources() {
        for config in all() {
            assert!(!config.laws.is_empty(), "{} has no laws", config.name);
            assert!(!config.sources.is_empty(), "{} has no sources", config.name);
        }
    }

    #[test]
    fn singapore_law_order() {
        assert_eq!(
            region(RegionCode::Singapore).laws,
            &["Contract Act (Cap. 23)", "PDPA 2012", "Employment Act (Cap. 91)"]
        );
    }

    #[test]
    fn code_serialises_as_two_letters() {
        let json = serde_json::to_string(&RegionCode::Uae).unwrap();
        assert_eq!(json, "\"AE\"");
        let parsed: RegionCode = serde_json::from_str("\"IN\"").unwrap();
        assert_eq!(parsed, RegionCode::India);
    }
}
