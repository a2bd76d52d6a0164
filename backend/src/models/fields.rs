//! Field addressing for records and their partial updates.
//!
//! Every monthly-series leaf of a record is named by a variant of
//! [`AdminMetric`] or [`EhsMetric`]. The [`MetricField`] trait gives generic
//! code (CSV mapping, merging, export) uniform access to a leaf in the full
//! record and in the partial update, so none of it walks the nested structs
//! by hand.

use serde::{Deserialize, Serialize};

use super::admin::{AdminRecord, AdminUpdate};
use super::ehs::{EhsRecord, EhsUpdate};
use super::monthly::{MonthlySeries, PartialMonthlySeries};

/// A monthly-series leaf of a record type.
pub trait MetricField: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    type Record: Clone + Send + Sync;
    type Update: Default + Clone + Send + Sync;

    /// Every leaf, in export order.
    fn all() -> &'static [Self];

    /// Row label used on export. Mapping the label back through the
    /// dataset's rule table yields this same field.
    fn label(self) -> &'static str;

    /// Section heading in the combined dashboard report.
    fn category(self) -> &'static str;

    /// Dotted JSON path, e.g. `workingHours.managementMDM.overtime`.
    fn path(self) -> &'static str;

    fn series(self, record: &Self::Record) -> &MonthlySeries;

    fn series_mut(self, record: &mut Self::Record) -> &mut MonthlySeries;

    fn update_slot(self, update: &Self::Update) -> Option<&PartialMonthlySeries>;

    /// Slot in the partial record, creating intermediate levels on first use.
    fn update_slot_mut(self, update: &mut Self::Update) -> &mut Option<PartialMonthlySeries>;
}

/// Outcome of merging a partial record into a live one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Leaves present in the update
    pub fields_updated: usize,
    /// Month slots whose value changed
    pub months_changed: usize,
}

/// Merge `update` into `record` leaf by leaf and month by month.
///
/// Leaves absent from `update` are left untouched; within a present leaf,
/// only the supplied months are overwritten.
pub fn merge_update<F: MetricField>(record: &mut F::Record, update: &F::Update) -> MergeReport {
    let mut report = MergeReport::default();
    for field in F::all() {
        if let Some(partial) = field.update_slot(update) {
            report.fields_updated += 1;
            report.months_changed += partial.merge_into(field.series_mut(record));
        }
    }
    report
}

/// Leaves populated in `update`.
pub fn populated_fields<F: MetricField>(update: &F::Update) -> Vec<F> {
    F::all()
        .iter()
        .copied()
        .filter(|f| f.update_slot(update).is_some())
        .collect()
}

// ==================== Admin ====================

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AdminMetric {
    TotalSite,
    ManagementMdmTotal,
    ManagementMdmOvertime,
    ManagementMdmRoutine,
    ManagementContractualTotal,
    ManagementContractualOvertime,
    ManagementContractualRoutine,
    NonManagementMdmTotal,
    NonManagementMdmOvertime,
    NonManagementMdmRoutine,
    NonManagementContractualTotal,
    NonManagementContractualOvertime,
    NonManagementContractualRoutine,
    Resignations,
    VacantPositions,
    StaffTurnover,
}

const ADMIN_METRICS: [AdminMetric; 16] = [
    AdminMetric::TotalSite,
    AdminMetric::ManagementMdmTotal,
    AdminMetric::ManagementMdmOvertime,
    AdminMetric::ManagementMdmRoutine,
    AdminMetric::ManagementContractualTotal,
    AdminMetric::ManagementContractualOvertime,
    AdminMetric::ManagementContractualRoutine,
    AdminMetric::NonManagementMdmTotal,
    AdminMetric::NonManagementMdmOvertime,
    AdminMetric::NonManagementMdmRoutine,
    AdminMetric::NonManagementContractualTotal,
    AdminMetric::NonManagementContractualOvertime,
    AdminMetric::NonManagementContractualRoutine,
    AdminMetric::Resignations,
    AdminMetric::VacantPositions,
    AdminMetric::StaffTurnover,
];

impl MetricField for AdminMetric {
    type Record = AdminRecord;
    type Update = AdminUpdate;

    fn all() -> &'static [Self] {
        &ADMIN_METRICS
    }

    fn label(self) -> &'static str {
        use AdminMetric::*;
        match self {
            TotalSite => "Total Working Hours of Site (Total of A+B+C+D)",
            ManagementMdmTotal => "A. Total Working Hours Management (Total of A1+A2)",
            ManagementMdmOvertime => "A1. Overtime Working Hours Management (MDM)",
            ManagementMdmRoutine => "A2. Routine Working Hours Management (MDM)",
            ManagementContractualTotal => "B. Total Working Hours Contractual (Total of B1+B2)",
            ManagementContractualOvertime => "B1. Overtime Working Hours Contractual",
            ManagementContractualRoutine => "B2. Routine Working Hours Contractual",
            NonManagementMdmTotal => {
                "C. Total Working Hours Non-Management (MDM) (Total of C1+C2)"
            }
            NonManagementMdmOvertime => "C1. Overtime Working Hours Non-Management (MDM)",
            NonManagementMdmRoutine => "C2. Routine Working Hours Non-Management (MDM)",
            NonManagementContractualTotal => {
                "D. Total Working Hours Non-Management Contractual (Total of D1+D2)"
            }
            NonManagementContractualOvertime => {
                "D1. Overtime Working Hours Non-Management Contractual"
            }
            NonManagementContractualRoutine => {
                "D2. Routine Working Hours Non-Management Contractual"
            }
            Resignations => "Number of Resignations",
            VacantPositions => "Vacant Positions",
            StaffTurnover => "Staff Turnover %",
        }
    }

    fn category(self) -> &'static str {
        match self {
            AdminMetric::Resignations | AdminMetric::VacantPositions | AdminMetric::StaffTurnover => {
                "HR Metrics"
            }
            _ => "Working Hours",
        }
    }

    fn path(self) -> &'static str {
        use AdminMetric::*;
        match self {
            TotalSite => "workingHours.totalSite",
            ManagementMdmTotal => "workingHours.managementMDM.total",
            ManagementMdmOvertime => "workingHours.managementMDM.overtime",
            ManagementMdmRoutine => "workingHours.managementMDM.routine",
            ManagementContractualTotal => "workingHours.managementContractual.total",
            ManagementContractualOvertime => "workingHours.managementContractual.overtime",
            ManagementContractualRoutine => "workingHours.managementContractual.routine",
            NonManagementMdmTotal => "workingHours.nonManagementMDM.total",
            NonManagementMdmOvertime => "workingHours.nonManagementMDM.overtime",
            NonManagementMdmRoutine => "workingHours.nonManagementMDM.routine",
            NonManagementContractualTotal => "workingHours.nonManagementContractual.total",
            NonManagementContractualOvertime => "workingHours.nonManagementContractual.overtime",
            NonManagementContractualRoutine => "workingHours.nonManagementContractual.routine",
            Resignations => "hrMetrics.resignations",
            VacantPositions => "hrMetrics.vacantPositions",
            StaffTurnover => "hrMetrics.staffTurnover",
        }
    }

    fn series(self, record: &AdminRecord) -> &MonthlySeries {
        use AdminMetric::*;
        let wh = &record.working_hours;
        let hr = &record.hr_metrics;
        match self {
            TotalSite => &wh.total_site,
            ManagementMdmTotal => &wh.management_mdm.total,
            ManagementMdmOvertime => &wh.management_mdm.overtime,
            ManagementMdmRoutine => &wh.management_mdm.routine,
            ManagementContractualTotal => &wh.management_contractual.total,
            ManagementContractualOvertime => &wh.management_contractual.overtime,
            ManagementContractualRoutine => &wh.management_contractual.routine,
            NonManagementMdmTotal => &wh.non_management_mdm.total,
            NonManagementMdmOvertime => &wh.non_management_mdm.overtime,
            NonManagementMdmRoutine => &wh.non_management_mdm.routine,
            NonManagementContractualTotal => &wh.non_management_contractual.total,
            NonManagementContractualOvertime => &wh.non_management_contractual.overtime,
            NonManagementContractualRoutine => &wh.non_management_contractual.routine,
            Resignations => &hr.resignations,
            VacantPositions => &hr.vacant_positions,
            StaffTurnover => &hr.staff_turnover,
        }
    }

    fn series_mut(self, record: &mut AdminRecord) -> &mut MonthlySeries {
        use AdminMetric::*;
        let wh = &mut record.working_hours;
        let hr = &mut record.hr_metrics;
        match self {
            TotalSite => &mut wh.total_site,
            ManagementMdmTotal => &mut wh.management_mdm.total,
            ManagementMdmOvertime => &mut wh.management_mdm.overtime,
            ManagementMdmRoutine => &mut wh.management_mdm.routine,
            ManagementContractualTotal => &mut wh.management_contractual.total,
            ManagementContractualOvertime => &mut wh.management_contractual.overtime,
            ManagementContractualRoutine => &mut wh.management_contractual.routine,
            NonManagementMdmTotal => &mut wh.non_management_mdm.total,
            NonManagementMdmOvertime => &mut wh.non_management_mdm.overtime,
            NonManagementMdmRoutine => &mut wh.non_management_mdm.routine,
            NonManagementContractualTotal => &mut wh.non_management_contractual.total,
            NonManagementContractualOvertime => &mut wh.non_management_contractual.overtime,
            NonManagementContractualRoutine => &mut wh.non_management_contractual.routine,
            Resignations => &mut hr.resignations,
            VacantPositions => &mut hr.vacant_positions,
            StaffTurnover => &mut hr.staff_turnover,
        }
    }

    fn update_slot(self, update: &AdminUpdate) -> Option<&PartialMonthlySeries> {
        use AdminMetric::*;
        match self {
            Resignations | VacantPositions | StaffTurnover => {
                let hr = update.hr_metrics.as_ref()?;
                match self {
                    Resignations => hr.resignations.as_ref(),
                    VacantPositions => hr.vacant_positions.as_ref(),
                    _ => hr.staff_turnover.as_ref(),
                }
            }
            TotalSite => update.working_hours.as_ref()?.total_site.as_ref(),
            _ => {
                let wh = update.working_hours.as_ref()?;
                let breakdown = match self {
                    ManagementMdmTotal | ManagementMdmOvertime | ManagementMdmRoutine => {
                        wh.management_mdm.as_ref()
                    }
                    ManagementContractualTotal
                    | ManagementContractualOvertime
                    | ManagementContractualRoutine => wh.management_contractual.as_ref(),
                    NonManagementMdmTotal | NonManagementMdmOvertime | NonManagementMdmRoutine => {
                        wh.non_management_mdm.as_ref()
                    }
                    _ => wh.non_management_contractual.as_ref(),
                }?;
                match self {
                    ManagementMdmTotal
                    | ManagementContractualTotal
                    | NonManagementMdmTotal
                    | NonManagementContractualTotal => breakdown.total.as_ref(),
                    ManagementMdmOvertime
                    | ManagementContractualOvertime
                    | NonManagementMdmOvertime
                    | NonManagementContractualOvertime => breakdown.overtime.as_ref(),
                    _ => breakdown.routine.as_ref(),
                }
            }
        }
    }

    fn update_slot_mut(self, update: &mut AdminUpdate) -> &mut Option<PartialMonthlySeries> {
        use AdminMetric::*;
        match self {
            Resignations | VacantPositions | StaffTurnover => {
                let hr = update.hr_metrics.get_or_insert_with(Default::default);
                match self {
                    Resignations => &mut hr.resignations,
                    VacantPositions => &mut hr.vacant_positions,
                    _ => &mut hr.staff_turnover,
                }
            }
            TotalSite => {
                &mut update
                    .working_hours
                    .get_or_insert_with(Default::default)
                    .total_site
            }
            _ => {
                let wh = update.working_hours.get_or_insert_with(Default::default);
                let breakdown = match self {
                    ManagementMdmTotal | ManagementMdmOvertime | ManagementMdmRoutine => {
                        &mut wh.management_mdm
                    }
                    ManagementContractualTotal
                    | ManagementContractualOvertime
                    | ManagementContractualRoutine => &mut wh.management_contractual,
                    NonManagementMdmTotal | NonManagementMdmOvertime | NonManagementMdmRoutine => {
                        &mut wh.non_management_mdm
                    }
                    _ => &mut wh.non_management_contractual,
                }
                .get_or_insert_with(Default::default);
                match self {
                    ManagementMdmTotal
                    | ManagementContractualTotal
                    | NonManagementMdmTotal
                    | NonManagementContractualTotal => &mut breakdown.total,
                    ManagementMdmOvertime
                    | ManagementContractualOvertime
                    | NonManagementMdmOvertime
                    | NonManagementContractualOvertime => &mut breakdown.overtime,
                    _ => &mut breakdown.routine,
                }
            }
        }
    }
}

// ==================== EHS ====================

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EhsMetric {
    TrainingHoursTarget,
    TrainingHoursActual,
    HazardReportingTarget,
    HazardReportingActual,
    NearMisses,
    LeadingIndicatorIndexTarget,
    Accidents,
    FirstAidCases,
    MedicalCases,
    IllHealthCases,
    LostTimeAccidents,
    EhsWalks,
    EhsRiskAssessments,
    ElectricityConsumed,
    GasConsumed,
    WaterConsumption,
    PaperSheetsConsumed,
    CarbonFootprint,
}

const EHS_METRICS: [EhsMetric; 18] = [
    EhsMetric::Accidents,
    EhsMetric::FirstAidCases,
    EhsMetric::MedicalCases,
    EhsMetric::IllHealthCases,
    EhsMetric::LostTimeAccidents,
    EhsMetric::EhsWalks,
    EhsMetric::EhsRiskAssessments,
    EhsMetric::TrainingHoursTarget,
    EhsMetric::TrainingHoursActual,
    EhsMetric::HazardReportingTarget,
    EhsMetric::HazardReportingActual,
    EhsMetric::NearMisses,
    EhsMetric::LeadingIndicatorIndexTarget,
    EhsMetric::ElectricityConsumed,
    EhsMetric::GasConsumed,
    EhsMetric::WaterConsumption,
    EhsMetric::PaperSheetsConsumed,
    EhsMetric::CarbonFootprint,
];

impl MetricField for EhsMetric {
    type Record = EhsRecord;
    type Update = EhsUpdate;

    fn all() -> &'static [Self] {
        &EHS_METRICS
    }

    fn label(self) -> &'static str {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => "Target Training Hours",
            TrainingHoursActual => "Actual Training Hours",
            HazardReportingTarget => "Target Hazard Reporting",
            HazardReportingActual => "Actual Number of Hazards Reported",
            NearMisses => "Actual Near Misses Reported",
            LeadingIndicatorIndexTarget => "Target Leading Indicator Index (LII)",
            Accidents => "Total Number of Accidents",
            FirstAidCases => "Number of First Aid Cases",
            MedicalCases => "Number of Medical Cases",
            IllHealthCases => "Number of Ill Health Cases",
            LostTimeAccidents => "Number of Lost Time Accident Cases",
            EhsWalks => "Number of EHS Walks",
            EhsRiskAssessments => "Number of EHS Risk Assessments",
            ElectricityConsumed => "Total Electricity Consumed (KWH)",
            GasConsumed => "Total Gas Consumed (meter cube)",
            WaterConsumption => "Water Consumption (US Gallons)",
            PaperSheetsConsumed => "Number of Paper Sheets Consumed",
            CarbonFootprint => "Carbon Footprint",
        }
    }

    fn category(self) -> &'static str {
        use EhsMetric::*;
        match self {
            Accidents | FirstAidCases | MedicalCases | IllHealthCases | LostTimeAccidents
            | EhsWalks | EhsRiskAssessments => "EHS Core Metrics",
            TrainingHoursTarget | TrainingHoursActual | HazardReportingTarget
            | HazardReportingActual | NearMisses | LeadingIndicatorIndexTarget => {
                "Training & Hazards"
            }
            ElectricityConsumed | GasConsumed | WaterConsumption | PaperSheetsConsumed
            | CarbonFootprint => "Resource Consumption",
        }
    }

    fn path(self) -> &'static str {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => "trainingHours.target",
            TrainingHoursActual => "trainingHours.actual",
            HazardReportingTarget => "hazardReporting.target",
            HazardReportingActual => "hazardReporting.actual",
            NearMisses => "nearMisses",
            LeadingIndicatorIndexTarget => "leadingIndicatorIndex.target",
            Accidents => "accidents",
            FirstAidCases => "firstAidCases",
            MedicalCases => "medicalCases",
            IllHealthCases => "illHealthCases",
            LostTimeAccidents => "lostTimeAccidents",
            EhsWalks => "ehsWalks",
            EhsRiskAssessments => "ehsRiskAssessments",
            ElectricityConsumed => "electricityConsumed",
            GasConsumed => "gasConsumed",
            WaterConsumption => "waterConsumption",
            PaperSheetsConsumed => "paperSheetsConsumed",
            CarbonFootprint => "carbonFootprint",
        }
    }

    fn series(self, record: &EhsRecord) -> &MonthlySeries {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => &record.training_hours.target,
            TrainingHoursActual => &record.training_hours.actual,
            HazardReportingTarget => &record.hazard_reporting.target,
            HazardReportingActual => &record.hazard_reporting.actual,
            NearMisses => &record.near_misses,
            LeadingIndicatorIndexTarget => &record.leading_indicator_index.target,
            Accidents => &record.accidents,
            FirstAidCases => &record.first_aid_cases,
            MedicalCases => &record.medical_cases,
            IllHealthCases => &record.ill_health_cases,
            LostTimeAccidents => &record.lost_time_accidents,
            EhsWalks => &record.ehs_walks,
            EhsRiskAssessments => &record.ehs_risk_assessments,
            ElectricityConsumed => &record.electricity_consumed,
            GasConsumed => &record.gas_consumed,
            WaterConsumption => &record.water_consumption,
            PaperSheetsConsumed => &record.paper_sheets_consumed,
            CarbonFootprint => &record.carbon_footprint,
        }
    }

    fn series_mut(self, record: &mut EhsRecord) -> &mut MonthlySeries {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => &mut record.training_hours.target,
            TrainingHoursActual => &mut record.training_hours.actual,
            HazardReportingTarget => &mut record.hazard_reporting.target,
            HazardReportingActual => &mut record.hazard_reporting.actual,
            NearMisses => &mut record.near_misses,
            LeadingIndicatorIndexTarget => &mut record.leading_indicator_index.target,
            Accidents => &mut record.accidents,
            FirstAidCases => &mut record.first_aid_cases,
            MedicalCases => &mut record.medical_cases,
            IllHealthCases => &mut record.ill_health_cases,
            LostTimeAccidents => &mut record.lost_time_accidents,
            EhsWalks => &mut record.ehs_walks,
            EhsRiskAssessments => &mut record.ehs_risk_assessments,
            ElectricityConsumed => &mut record.electricity_consumed,
            GasConsumed => &mut record.gas_consumed,
            WaterConsumption => &mut record.water_consumption,
            PaperSheetsConsumed => &mut record.paper_sheets_consumed,
            CarbonFootprint => &mut record.carbon_footprint,
        }
    }

    fn update_slot(self, update: &EhsUpdate) -> Option<&PartialMonthlySeries> {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => update.training_hours.as_ref()?.target.as_ref(),
            TrainingHoursActual => update.training_hours.as_ref()?.actual.as_ref(),
            HazardReportingTarget => update.hazard_reporting.as_ref()?.target.as_ref(),
            HazardReportingActual => update.hazard_reporting.as_ref()?.actual.as_ref(),
            LeadingIndicatorIndexTarget => {
                update.leading_indicator_index.as_ref()?.target.as_ref()
            }
            NearMisses => update.near_misses.as_ref(),
            Accidents => update.accidents.as_ref(),
            FirstAidCases => update.first_aid_cases.as_ref(),
            MedicalCases => update.medical_cases.as_ref(),
            IllHealthCases => update.ill_health_cases.as_ref(),
            LostTimeAccidents => update.lost_time_accidents.as_ref(),
            EhsWalks => update.ehs_walks.as_ref(),
            EhsRiskAssessments => update.ehs_risk_assessments.as_ref(),
            ElectricityConsumed => update.electricity_consumed.as_ref(),
            GasConsumed => update.gas_consumed.as_ref(),
            WaterConsumption => update.water_consumption.as_ref(),
            PaperSheetsConsumed => update.paper_sheets_consumed.as_ref(),
            CarbonFootprint => update.carbon_footprint.as_ref(),
        }
    }

    fn update_slot_mut(self, update: &mut EhsUpdate) -> &mut Option<PartialMonthlySeries> {
        use EhsMetric::*;
        match self {
            TrainingHoursTarget => {
                &mut update.training_hours.get_or_insert_with(Default::default).target
            }
            TrainingHoursActual => {
                &mut update.training_hours.get_or_insert_with(Default::default).actual
            }
            HazardReportingTarget => {
                &mut update.hazard_reporting.get_or_insert_with(Default::default).target
            }
            HazardReportingActual => {
                &mut update.hazard_reporting.get_or_insert_with(Default::default).actual
            }
            LeadingIndicatorIndexTarget => {
                &mut update
                    .leading_indicator_index
                    .get_or_insert_with(Default::default)
                    .target
            }
            NearMisses => &mut update.near_misses,
            Accidents => &mut update.accidents,
            FirstAidCases => &mut update.first_aid_cases,
            MedicalCases => &mut update.medical_cases,
            IllHealthCases => &mut update.ill_health_cases,
            LostTimeAccidents => &mut update.lost_time_accidents,
            EhsWalks => &mut update.ehs_walks,
            EhsRiskAssessments => &mut update.ehs_risk_assessments,
            ElectricityConsumed => &mut update.electricity_consumed,
            GasConsumed => &mut update.gas_consumed,
            WaterConsumption => &mut update.water_consumption,
            PaperSheetsConsumed => &mut update.paper_sheets_consumed,
            CarbonFootprint => &mut update.carbon_footprint,
        }
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod fields_tests;
