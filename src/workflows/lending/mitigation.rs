//! Static catalog of bias mitigation strategies and its report renderer.
//!
//! The catalog is fixed at compile time and never mutated; the reporter is
//! pure formatting over it plus the probe verdict.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const BANNER: &str =
    "================================================================================";
const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Remediation priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Priority::High => "[HIGH]",
            Priority::Medium => "[MED]",
            Priority::Low => "[LOW]",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A remediation strategy from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MitigationStrategy {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub implementation: &'static str,
    pub priority: Priority,
}

/// Process-wide catalog, constructed once and read-only thereafter.
pub static CATALOG: &[MitigationStrategy] = &[
    MitigationStrategy {
        category: "Policy & Prompting",
        title: "Explicit Constraint Enforcement",
        description: "Add explicit constraints to prevent use of protected attributes",
        implementation: "\
1. State in the decision policy that protected attributes (gender, race, \
ethnicity, religion, disability, age where legally protected) must be ignored \
if present and never requested.
2. Validate inputs and reject requests that require protected attributes.
3. Refuse instructions to consider protected attributes and proceed without them.",
        priority: Priority::High,
    },
    MitigationStrategy {
        category: "Data & Modeling",
        title: "Feature Engineering",
        description: "Remove protected attributes and known proxies from features",
        implementation: "\
1. Audit the feature list and remove direct protected attributes and proxy \
variables (ZIP code, name-derived features, certain occupations).
2. Validate features in the preprocessing pipeline.
3. Augment with counterfactual records (swapped names/pronouns) and enforce \
invariant outputs.",
        priority: Priority::High,
    },
    MitigationStrategy {
        category: "Data & Modeling",
        title: "Fairness-Aware Training",
        description: "Apply fairness constraints during model training",
        implementation: "\
1. Use fairness-aware objectives such as equalized odds or demographic parity.
2. Apply post-processing: per-group threshold optimization and score calibration.
3. Monitor group-wise metrics throughout training.",
        priority: Priority::Medium,
    },
    MitigationStrategy {
        category: "Evaluation & Monitoring",
        title: "Counterfactual Testing",
        description: "Implement automated bias testing in the CI pipeline",
        implementation: "\
1. Maintain a counterfactual suite: identical financials with varied names, \
genders, and other protected attributes.
2. Fail the build if decisions differ or risk scores vary by more than 0.01 \
for identical cases.
3. Run the suite on every code and model change.",
        priority: Priority::High,
    },
    MitigationStrategy {
        category: "Evaluation & Monitoring",
        title: "Bias Dashboard",
        description: "Create a monitoring dashboard for ongoing bias detection",
        implementation: "\
1. Track approval rates, average risk scores, and error rates by group.
2. Alert on disparate impact (80% rule violations) and significant score \
distribution differences.
3. Schedule recurring bias audits.",
        priority: Priority::Medium,
    },
    MitigationStrategy {
        category: "Implementation Controls",
        title: "Input Schema Validation",
        description: "Enforce strict input schemas to prevent protected attribute usage",
        implementation: "\
1. Whitelist allowed inputs: credit score, income, DTI, loan amount, \
employment length, delinquencies, credit history.
2. Reject inputs containing protected attributes and redact protected terms \
from free text.
3. Log all inputs for audit purposes.",
        priority: Priority::High,
    },
    MitigationStrategy {
        category: "Implementation Controls",
        title: "Standardized Rationales",
        description: "Generate decision rationales using only allowed features",
        implementation: "\
1. Template rationales so they reference only approved financial factors and \
their thresholds.
2. Prohibit free-form text that might reference demographics.
3. Validate that emitted rationales contain no protected attribute references.",
        priority: Priority::Medium,
    },
    MitigationStrategy {
        category: "Governance",
        title: "Model Cards & Documentation",
        description: "Maintain comprehensive documentation of system behavior",
        implementation: "\
1. Document which features are used, why protected attributes are excluded, \
and how fairness is measured.
2. Record performance metrics by group and known limitations.
3. Keep audit logs available for regulatory review.",
        priority: Priority::Medium,
    },
    MitigationStrategy {
        category: "Governance",
        title: "Appeals Process",
        description: "Implement an appeals mechanism for rejected applications",
        implementation: "\
1. Let applicants request an explanation or challenge a decision they believe \
was biased.
2. Route appeals flagged for potential bias to human review.
3. Track appeals by demographic group and feed patterns back into the system.",
        priority: Priority::Low,
    },
];

/// Render the mitigation report for a probe verdict.
///
/// Strategies are grouped by category (alphabetical), ordered within a
/// category by priority tier then title, followed by a flat checklist
/// bucketed by priority.
pub fn mitigation_report(bias_detected: bool, bias_details: &[String]) -> String {
    let mut lines = Vec::new();

    lines.push(BANNER.to_string());
    lines.push("BIAS MITIGATION STRATEGIES REPORT".to_string());
    lines.push(BANNER.to_string());
    lines.push(String::new());

    if bias_detected {
        lines.push("[!] BIAS DETECTED - Mitigation Required".to_string());
        lines.push(String::new());
        lines.push("Detected Issues:".to_string());
        for detail in bias_details {
            lines.push(format!("  - {detail}"));
        }
        lines.push(String::new());
    } else {
        lines.push("[OK] No bias detected in current tests.".to_string());
        lines.push(String::new());
        lines.push("However, it's recommended to implement preventive measures".to_string());
        lines.push("to ensure bias doesn't emerge in the future.".to_string());
        lines.push(String::new());
    }

    lines.push(BANNER.to_string());
    lines.push("RECOMMENDED MITIGATION STRATEGIES".to_string());
    lines.push(BANNER.to_string());
    lines.push(String::new());

    let mut by_category: BTreeMap<&'static str, Vec<&MitigationStrategy>> = BTreeMap::new();
    for strategy in CATALOG {
        by_category.entry(strategy.category).or_default().push(strategy);
    }

    for (category, mut strategies) in by_category {
        strategies.sort_by_key(|strategy| (strategy.priority.rank(), strategy.title));

        lines.push(String::new());
        lines.push(format!("{category}:"));
        lines.push(RULE.to_string());

        for strategy in strategies {
            lines.push(String::new());
            lines.push(format!(
                "{} {} ({} Priority)",
                strategy.priority.marker(),
                strategy.title,
                strategy.priority.label()
            ));
            lines.push(format!("   Description: {}", strategy.description));
            lines.push("   Implementation:".to_string());
            for line in strategy.implementation.lines() {
                lines.push(format!("   {line}"));
            }
        }
        lines.push(String::new());
    }

    lines.push(BANNER.to_string());
    lines.push("IMPLEMENTATION CHECKLIST".to_string());
    lines.push(BANNER.to_string());
    lines.push(String::new());

    push_checklist(&mut lines, "High Priority (Implement First):", Priority::High);
    lines.push(String::new());
    push_checklist(&mut lines, "Medium Priority (Implement Next):", Priority::Medium);
    lines.push(String::new());
    push_checklist(&mut lines, "Low Priority (Consider for Future):", Priority::Low);

    lines.push(String::new());
    lines.push(BANNER.to_string());

    lines.join("\n")
}

fn push_checklist(lines: &mut Vec<String>, heading: &str, tier: Priority) {
    lines.push(heading.to_string());
    for (index, strategy) in CATALOG
        .iter()
        .filter(|strategy| strategy.priority == tier)
        .enumerate()
    {
        lines.push(format!(
            "  {}. [{}] {}",
            index + 1,
            strategy.category,
            strategy.title
        ));
    }
}
