//! Compliance templates and the checks derived from them

use crate::models::{Advisory, AdvisoryKind, ComplianceStandard, Configuration};

/// Requirements and recommendations of one regulatory regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceTemplate {
    pub standard: ComplianceStandard,
    pub name: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub min_retention_days: u32,
    pub max_retention_days: u32,
    pub default_retention_days: u32,
    pub encryption_required: bool,
    pub data_locality_required: bool,
    pub right_to_erasure: bool,
    pub recommended_hot_days: u32,
    pub recommended_replication: u32,
    pub high_availability: bool,
    pub notes: &'static [&'static str],
    pub related_standards: &'static [&'static str],
}

const GDPR: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::Gdpr,
    name: "GDPR (General Data Protection Regulation)",
    region: "European Union",
    description: "EU data protection and privacy regulation",
    min_retention_days: 180,
    max_retention_days: 365,
    default_retention_days: 180,
    encryption_required: true,
    data_locality_required: true,
    right_to_erasure: true,
    recommended_hot_days: 30,
    recommended_replication: 2,
    high_availability: true,
    notes: &[
        "Data must be stored within EU boundaries or equivalent protection",
        "Implement data encryption at rest and in transit",
        "Enable audit logging for all data access",
        "Implement automated data retention policies",
    ],
    related_standards: &["ISO 27001", "ISO 27018"],
};

const CCPA: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::Ccpa,
    name: "CCPA (California Consumer Privacy Act)",
    region: "California, USA",
    description: "California consumer data privacy law",
    min_retention_days: 180,
    max_retention_days: 365,
    default_retention_days: 180,
    encryption_required: true,
    data_locality_required: false,
    right_to_erasure: true,
    recommended_hot_days: 30,
    recommended_replication: 2,
    high_availability: true,
    notes: &[
        "Consumers have right to know what data is collected",
        "Implement mechanisms for data deletion requests",
        "Enable opt-out functionality for data sales",
        "Maintain detailed data processing records",
    ],
    related_standards: &["NIST Cybersecurity Framework"],
};

const PIPEDA: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::Pipeda,
    name: "PIPEDA (Personal Information Protection)",
    region: "Canada",
    description: "Canadian privacy law for private sector",
    min_retention_days: 365,
    max_retention_days: 730,
    default_retention_days: 365,
    encryption_required: true,
    data_locality_required: true,
    right_to_erasure: true,
    recommended_hot_days: 60,
    recommended_replication: 2,
    high_availability: true,
    notes: &[
        "Data must be stored in Canada or with adequate protection",
        "Obtain consent for data collection and use",
        "Implement breach notification procedures",
        "Maintain data inventory and processing records",
    ],
    related_standards: &["ISO 27001", "CSA Privacy Code"],
};

const HIPAA: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::Hipaa,
    name: "HIPAA (Health Insurance Portability)",
    region: "United States",
    description: "US healthcare data protection standard",
    min_retention_days: 365,
    max_retention_days: 2555,
    default_retention_days: 365,
    encryption_required: true,
    data_locality_required: false,
    right_to_erasure: false,
    recommended_hot_days: 90,
    recommended_replication: 3,
    high_availability: true,
    notes: &[
        "PHI must be encrypted at rest and in transit (AES-256)",
        "Implement comprehensive audit logging (6 years retention)",
        "Business Associate Agreements required for vendors",
        "Regular security risk assessments mandatory",
        "Implement access controls and authentication",
    ],
    related_standards: &["NIST 800-53", "HITRUST CSF"],
};

const PCI_DSS: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::PciDss,
    name: "PCI-DSS (Payment Card Industry)",
    region: "Global",
    description: "Payment card data security standard",
    min_retention_days: 90,
    max_retention_days: 365,
    default_retention_days: 90,
    encryption_required: true,
    data_locality_required: false,
    right_to_erasure: false,
    recommended_hot_days: 90,
    recommended_replication: 2,
    high_availability: true,
    notes: &[
        "Cardholder data must be encrypted (AES-256 minimum)",
        "Implement network segmentation for cardholder data",
        "Log and monitor all access to cardholder data",
        "Quarterly vulnerability scans required",
        "Annual penetration testing required",
        "File integrity monitoring for critical files",
    ],
    related_standards: &["PCI-DSS v4.0", "PA-DSS"],
};

const SOC2: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::Soc2,
    name: "SOC 2 (Service Organization Control)",
    region: "Global",
    description: "Cloud service provider security standard",
    min_retention_days: 365,
    max_retention_days: 1095,
    default_retention_days: 365,
    encryption_required: true,
    data_locality_required: false,
    right_to_erasure: true,
    recommended_hot_days: 90,
    recommended_replication: 3,
    high_availability: true,
    notes: &[
        "Implement comprehensive logging for all trust services",
        "Maintain audit trail for 3 years minimum",
        "Document security policies and procedures",
        "Regular third-party security assessments required",
        "Incident response procedures must be documented",
        "Change management process required",
    ],
    related_standards: &["AICPA TSC", "ISO 27001", "NIST CSF"],
};

const NONE: ComplianceTemplate = ComplianceTemplate {
    standard: ComplianceStandard::None,
    name: "Custom / No Specific Compliance",
    region: "Global",
    description: "General best practices without specific compliance",
    min_retention_days: 30,
    max_retention_days: 3650,
    default_retention_days: 90,
    encryption_required: false,
    data_locality_required: false,
    right_to_erasure: false,
    recommended_hot_days: 30,
    recommended_replication: 1,
    high_availability: false,
    notes: &[
        "Consider implementing encryption for sensitive data",
        "Establish data retention policies",
        "Implement access controls and authentication",
    ],
    related_standards: &["ISO 27001", "NIST CSF"],
};

/// Template for a standard.
#[must_use]
pub fn template(standard: ComplianceStandard) -> &'static ComplianceTemplate {
    match standard {
        ComplianceStandard::Gdpr => &GDPR,
        ComplianceStandard::Ccpa => &CCPA,
        ComplianceStandard::Pipeda => &PIPEDA,
        ComplianceStandard::Hipaa => &HIPAA,
        ComplianceStandard::PciDss => &PCI_DSS,
        ComplianceStandard::Soc2 => &SOC2,
        ComplianceStandard::None => &NONE,
    }
}

/// Adopt a standard's retention, replication and control defaults.
pub fn apply(standard: ComplianceStandard, config: &mut Configuration) {
    let t = template(standard);

    config.compliance = standard;
    config.retention_period = t.default_retention_days;
    config.replication_factor = config.replication_factor.max(t.recommended_replication);
    config.hot_storage_days = t.recommended_hot_days.min(t.default_retention_days);
    if t.encryption_required {
        config.encryption = true;
    }
    if t.high_availability {
        config.high_availability = true;
    }
}

/// A check of a configuration against its selected template
pub struct ComplianceRule {
    pub name: &'static str,
    pub applies: fn(&ComplianceTemplate, &Configuration) -> bool,
    pub render: fn(&ComplianceTemplate, &Configuration) -> Advisory,
}

pub const COMPLIANCE_RULES: &[ComplianceRule] = &[
    ComplianceRule {
        name: "retention-below-minimum",
        applies: |t, c| c.retention_period < t.min_retention_days,
        render: |t, c| {
            Advisory::new(
                AdvisoryKind::Warning,
                "Retention below compliance minimum",
                format!(
                    "{} requires minimum {} days retention. Current: {} days.",
                    t.name, t.min_retention_days, c.retention_period
                ),
            )
            .for_standard(t.standard)
        },
    },
    ComplianceRule {
        name: "retention-above-maximum",
        applies: |t, c| c.retention_period > t.max_retention_days,
        render: |t, c| {
            Advisory::new(
                AdvisoryKind::Info,
                "Retention above typical maximum",
                format!(
                    "{} typically uses maximum {} days retention. \
                     Current: {} days may increase costs.",
                    t.name, t.max_retention_days, c.retention_period
                ),
            )
            .for_standard(t.standard)
        },
    },
    ComplianceRule {
        name: "encryption-required",
        applies: |t, c| t.encryption_required && !c.encryption,
        render: |t, _| {
            Advisory::new(
                AdvisoryKind::Warning,
                "Encryption required",
                format!(
                    "{} requires data encryption. Enable encryption in your configuration.",
                    t.name
                ),
            )
            .for_standard(t.standard)
        },
    },
    ComplianceRule {
        name: "high-availability-recommended",
        applies: |t, c| t.high_availability && !c.high_availability,
        render: |t, _| {
            Advisory::compliance(
                t.standard,
                "High availability recommended",
                format!(
                    "{} recommends high availability configuration for production environments.",
                    t.name
                ),
            )
        },
    },
    ComplianceRule {
        name: "replication-below-recommendation",
        applies: |t, c| c.replication_factor < t.recommended_replication,
        render: |t, c| {
            Advisory::compliance(
                t.standard,
                "Replication below recommendation",
                format!(
                    "{} deployments typically keep {} copies of log data. Current: {}.",
                    t.name, t.recommended_replication, c.replication_factor
                ),
            )
        },
    },
    ComplianceRule {
        name: "data-locality",
        applies: |t, _| t.data_locality_required,
        render: |t, _| {
            Advisory::compliance(
                t.standard,
                "Data locality",
                format!("{} restricts where log data may be stored ({}).", t.name, t.region),
            )
        },
    },
];

/// Evaluate every compliance rule for the configured standard.
///
/// Template notes are appended for any standard other than `NONE`.
#[must_use]
pub fn compliance_advisories(config: &Configuration) -> Vec<Advisory> {
    let t = template(config.compliance);

    let mut advisories: Vec<Advisory> = COMPLIANCE_RULES
        .iter()
        .filter(|rule| (rule.applies)(t, config))
        .map(|rule| {
            log::trace!("Compliance rule {} fired for {}", rule.name, t.standard);
            (rule.render)(t, config)
        })
        .collect();

    if t.standard != ComplianceStandard::None {
        advisories.extend(
            t.notes
                .iter()
                .map(|note| Advisory::compliance(t.standard, t.standard.id(), *note)),
        );
    }

    advisories
}
