//! Static regulation catalog: the reference table of EU regulations the
//! analysis prompt is built against, plus the allow-list of codes the
//! product has dedicated workflow support for.

use serde::Serialize;

/// Catalog entry for one regulation. Loaded once per process, never
/// mutated at runtime; safe for concurrent reads.
#[derive(Debug, Clone, Serialize)]
pub struct RegulationDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Keyword hints the model should look for in the assessment narrative.
    pub keywords: &'static [&'static str],
    /// Threshold hints (company size, turnover, deployment scope, …).
    pub thresholds: &'static [&'static str],
}

pub const CATALOG: &[RegulationDescriptor] = &[
    RegulationDescriptor {
        code: "GDPR",
        name: "General Data Protection Regulation",
        category: "data_protection",
        keywords: &[
            "personal data", "EU data subjects", "special category data",
            "third-country transfers", "profiling", "consent",
        ],
        thresholds: &[
            "processes personal data of people in the EU",
            "offers goods or services to EU residents",
            "monitors behaviour of EU residents",
        ],
    },
    RegulationDescriptor {
        code: "EPRIVACY",
        name: "ePrivacy Directive",
        category: "data_protection",
        keywords: &["cookies", "electronic marketing", "tracking", "direct marketing"],
        thresholds: &[
            "sends electronic marketing to EU recipients",
            "places cookies or trackers on EU users' devices",
        ],
    },
    RegulationDescriptor {
        code: "CSRD",
        name: "Corporate Sustainability Reporting Directive",
        category: "sustainability_reporting",
        keywords: &[
            "sustainability reporting", "ESG disclosure", "double materiality",
            "consolidated group reporting",
        ],
        thresholds: &[
            "more than 250 employees",
            "net turnover above EUR 50M",
            "balance sheet total above EUR 25M",
            "non-EU parent with EUR 150M EU turnover",
        ],
    },
    RegulationDescriptor {
        code: "AI_ACT",
        name: "EU Artificial Intelligence Act",
        category: "ai_governance",
        keywords: &[
            "AI system", "high-risk AI", "general-purpose AI",
            "biometric identification", "transparency obligations",
        ],
        thresholds: &[
            "places an AI system on the EU market",
            "deploys AI affecting people in the EU",
            "AI used in a high-risk annex III area",
        ],
    },
    RegulationDescriptor {
        code: "NIS2",
        name: "Network and Information Security Directive 2",
        category: "cybersecurity",
        keywords: &["essential entity", "important entity", "incident reporting", "supply chain security"],
        thresholds: &[
            "operates in an annex I or II sector",
            "at least 50 employees or EUR 10M turnover",
        ],
    },
    RegulationDescriptor {
        code: "DORA",
        name: "Digital Operational Resilience Act",
        category: "financial_services",
        keywords: &["financial entity", "ICT risk", "operational resilience", "ICT third-party provider"],
        thresholds: &[
            "is a regulated financial entity in the EU",
            "provides ICT services to EU financial entities",
        ],
    },
];

/// Codes the product currently ships dedicated compliance workflows for.
/// A policy decision, independent of the analysis algorithm: codes outside
/// this set are still surfaced to the caller, just marked unsupported.
pub const SUPPORTED_REGULATIONS: &[&str] = &["GDPR", "CSRD", "AI_ACT"];

pub fn descriptor(code: &str) -> Option<&'static RegulationDescriptor> {
    CATALOG.iter().find(|d| d.code == code)
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_REGULATIONS.contains(&code)
}

/// Split finding codes into supported / unsupported, preserving order.
/// Together the two halves partition the input exactly.
pub fn partition_supported(codes: &[String]) -> (Vec<String>, Vec<String>) {
    let mut supported = Vec::new();
    let mut unsupported = Vec::new();
    for code in codes {
        if is_supported(code) {
            supported.push(code.clone());
        } else {
            unsupported.push(code.clone());
        }
    }
    (supported, unsupported)
}
