//! Metric-name vocabularies for the two datasets.
//!
//! Each table is an ordered list of `(patterns, field)` rules evaluated top to
//! bottom against the lower-cased metric name; the first rule with any
//! matching pattern wins. Order matters where names overlap, e.g. the `A1`
//! overtime row must be tested before the `A.` total row, and "lost time
//! accident" before the general "accidents".

use crate::models::{AdminMetric, EhsMetric, MetricField};

/// A single test against a lower-cased metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Contains(&'static str),
    StartsWith(&'static str),
}

impl Pattern {
    pub fn matches(self, name: &str) -> bool {
        match self {
            Pattern::Contains(needle) => name.contains(needle),
            Pattern::StartsWith(prefix) => name.starts_with(prefix),
        }
    }
}

/// Maps any of `patterns` to `field`.
#[derive(Debug, Clone, Copy)]
pub struct MetricRule<F: 'static> {
    pub patterns: &'static [Pattern],
    pub field: F,
}

impl<F: Copy> MetricRule<F> {
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(lowered_name))
    }
}

/// A field type with a metric-name vocabulary.
pub trait Vocabulary: MetricField {
    fn rules() -> &'static [MetricRule<Self>];
}

impl Vocabulary for AdminMetric {
    fn rules() -> &'static [MetricRule<Self>] {
        ADMIN_RULES
    }
}

impl Vocabulary for EhsMetric {
    fn rules() -> &'static [MetricRule<Self>] {
        EHS_RULES
    }
}

/// First field whose rule matches `metric_name` (case-insensitive).
pub fn match_metric<F: Vocabulary>(metric_name: &str) -> Option<F> {
    let lowered = metric_name.trim().to_lowercase();
    F::rules()
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.field)
}

use Pattern::{Contains, StartsWith};

pub const ADMIN_RULES: &[MetricRule<AdminMetric>] = &[
    MetricRule {
        patterns: &[Contains("total working hours of site")],
        field: AdminMetric::TotalSite,
    },
    // A: management (MDM)
    MetricRule {
        patterns: &[
            StartsWith("a1"),
            Contains("overtime working hours management (mdm)"),
        ],
        field: AdminMetric::ManagementMdmOvertime,
    },
    MetricRule {
        patterns: &[
            StartsWith("a2"),
            Contains("routine working hours management (mdm)"),
        ],
        field: AdminMetric::ManagementMdmRoutine,
    },
    MetricRule {
        patterns: &[
            StartsWith("a."),
            Contains("total working hours management (mdm)"),
        ],
        field: AdminMetric::ManagementMdmTotal,
    },
    // B: management (contractual)
    MetricRule {
        patterns: &[
            StartsWith("b1"),
            Contains("overtime working hours management (contractual)"),
        ],
        field: AdminMetric::ManagementContractualOvertime,
    },
    MetricRule {
        patterns: &[
            StartsWith("b2"),
            Contains("routine working hours management (contractual)"),
        ],
        field: AdminMetric::ManagementContractualRoutine,
    },
    MetricRule {
        patterns: &[
            StartsWith("b."),
            Contains("total working hours management (contractual)"),
        ],
        field: AdminMetric::ManagementContractualTotal,
    },
    // C: non-management (MDM)
    MetricRule {
        patterns: &[
            StartsWith("c1"),
            Contains("overtime working hours non-management (mdm)"),
        ],
        field: AdminMetric::NonManagementMdmOvertime,
    },
    MetricRule {
        patterns: &[
            StartsWith("c2"),
            Contains("routine working hours non-management (mdm)"),
        ],
        field: AdminMetric::NonManagementMdmRoutine,
    },
    MetricRule {
        patterns: &[
            StartsWith("c."),
            Contains("total working hours non-management (mdm)"),
        ],
        field: AdminMetric::NonManagementMdmTotal,
    },
    // D: non-management (contractual)
    MetricRule {
        patterns: &[
            StartsWith("d1"),
            Contains("overtime working hours non-management (contractual)"),
        ],
        field: AdminMetric::NonManagementContractualOvertime,
    },
    MetricRule {
        patterns: &[
            StartsWith("d2"),
            Contains("routine working hours non-management (contractual)"),
        ],
        field: AdminMetric::NonManagementContractualRoutine,
    },
    MetricRule {
        patterns: &[
            StartsWith("d."),
            Contains("total working hours non-management (contractual)"),
        ],
        field: AdminMetric::NonManagementContractualTotal,
    },
    // HR
    MetricRule {
        patterns: &[Contains("resignations")],
        field: AdminMetric::Resignations,
    },
    MetricRule {
        patterns: &[Contains("vacant positions")],
        field: AdminMetric::VacantPositions,
    },
    MetricRule {
        patterns: &[Contains("staff turnover")],
        field: AdminMetric::StaffTurnover,
    },
];

pub const EHS_RULES: &[MetricRule<EhsMetric>] = &[
    MetricRule {
        patterns: &[
            Contains("training hours target"),
            Contains("target training hours"),
        ],
        field: EhsMetric::TrainingHoursTarget,
    },
    MetricRule {
        patterns: &[
            Contains("training hours actual"),
            Contains("actual training hours"),
        ],
        field: EhsMetric::TrainingHoursActual,
    },
    MetricRule {
        patterns: &[
            Contains("hazard reporting target"),
            Contains("target hazard reporting"),
        ],
        field: EhsMetric::HazardReportingTarget,
    },
    MetricRule {
        patterns: &[
            Contains("hazard reporting actual"),
            Contains("hazards reported"),
        ],
        field: EhsMetric::HazardReportingActual,
    },
    MetricRule {
        patterns: &[Contains("near misses")],
        field: EhsMetric::NearMisses,
    },
    MetricRule {
        patterns: &[
            Contains("leading indicator index target"),
            Contains("target leading indicator index"),
        ],
        field: EhsMetric::LeadingIndicatorIndexTarget,
    },
    MetricRule {
        patterns: &[Contains("lost time accident")],
        field: EhsMetric::LostTimeAccidents,
    },
    MetricRule {
        patterns: &[Contains("accidents")],
        field: EhsMetric::Accidents,
    },
    MetricRule {
        patterns: &[Contains("first aid cases")],
        field: EhsMetric::FirstAidCases,
    },
    MetricRule {
        patterns: &[Contains("medical cases")],
        field: EhsMetric::MedicalCases,
    },
    MetricRule {
        patterns: &[Contains("ill health cases")],
        field: EhsMetric::IllHealthCases,
    },
    MetricRule {
        patterns: &[Contains("ehs walks")],
        field: EhsMetric::EhsWalks,
    },
    MetricRule {
        patterns: &[Contains("ehs risk assessments")],
        field: EhsMetric::EhsRiskAssessments,
    },
    MetricRule {
        patterns: &[Contains("electricity consumed")],
        field: EhsMetric::ElectricityConsumed,
    },
    MetricRule {
        patterns: &[Contains("gas consumed")],
        field: EhsMetric::GasConsumed,
    },
    MetricRule {
        patterns: &[Contains("water consumption")],
        field: EhsMetric::WaterConsumption,
    },
    MetricRule {
        patterns: &[Contains("paper sheets consumed")],
        field: EhsMetric::PaperSheetsConsumed,
    },
    MetricRule {
        patterns: &[Contains("carbon footprint")],
        field: EhsMetric::CarbonFootprint,
    },
];
