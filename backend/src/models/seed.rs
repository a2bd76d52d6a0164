//! Compiled-in figures the store starts from on every process start.

use super::admin::{AdminRecord, HoursBreakdown, HrMetrics, WorkingHours};
use super::ehs::{EhsRecord, TargetActual, TargetOnly};
use super::monthly::MonthlySeries;

fn series(values: [f64; 12]) -> MonthlySeries {
    MonthlySeries::from_array(values)
}

pub fn initial_ehs_record() -> EhsRecord {
    EhsRecord {
        training_hours: TargetActual {
            target: series([
                100.0, 150.0, 50.0, 25.0, 50.0, 75.0, 80.0, 86.0, 74.0, 63.0, 68.0, 75.0,
            ]),
            actual: MonthlySeries::zeroed(),
        },
        hazard_reporting: TargetActual {
            target: series([30.0; 12]),
            actual: series([
                35.0, 45.0, 68.0, 15.0, 65.0, 22.0, 35.0, 36.0, 90.0, 15.0, 65.0, 12.0,
            ]),
        },
        near_misses: series([2.0, 3.0, 4.0, 2.0, 6.0, 2.0, 1.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
        leading_indicator_index: TargetOnly {
            target: series([125.0; 12]),
        },
        accidents: series([
            12.0, 16.0, 16.0, 19.0, 20.0, 12.0, 16.0, 16.0, 19.0, 20.0, 16.0, 12.0,
        ]),
        first_aid_cases: series([
            12.0, 15.0, 13.0, 19.0, 20.0, 12.0, 15.0, 13.0, 19.0, 20.0, 15.0, 12.0,
        ]),
        medical_cases: series([0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]),
        ill_health_cases: series([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
        lost_time_accidents: series([
            0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0,
        ]),
        ehs_walks: series([1.0; 12]),
        ehs_risk_assessments: series([
            2.0, 4.0, 3.0, 4.0, 5.0, 7.0, 6.0, 9.0, 8.0, 1.0, 4.0, 6.0,
        ]),
        electricity_consumed: series([
            243486.0, 214348.0, 208456.0, 277102.0, 215053.0, 223283.0, 174251.0, 248982.0,
            295521.0, 191993.0, 201587.0, 186429.0,
        ]),
        gas_consumed: series([
            14598.0, 13307.0, 14302.0, 14744.0, 12605.0, 11311.0, 13342.0, 14973.0, 11271.0,
            13822.0, 12148.0, 14195.0,
        ]),
        water_consumption: series([
            250000.0, 300000.0, 350000.0, 350000.0, 250000.0, 200000.0, 300000.0, 280000.0,
            310000.0, 325000.0, 300000.0, 200000.0,
        ]),
        paper_sheets_consumed: series([
            5000.0, 7000.0, 6000.0, 4000.0, 2500.0, 4000.0, 10000.0, 3500.0, 6400.0, 6500.0,
            7000.0, 5000.0,
        ]),
        carbon_footprint: MonthlySeries::zeroed(),
    }
}

pub fn initial_admin_record() -> AdminRecord {
    AdminRecord {
        working_hours: WorkingHours {
            total_site: series([
                54650.0, 55780.0, 56890.0, 57900.0, 58010.0, 58120.0, 58230.0, 58340.0, 58450.0,
                58560.0, 58670.0, 59770.0,
            ]),
            management_mdm: HoursBreakdown {
                total: series([
                    10700.0, 10800.0, 10900.0, 11000.0, 11100.0, 11200.0, 11250.0, 11280.0,
                    11300.0, 11320.0, 11350.0, 11380.0,
                ]),
                overtime: series([
                    1200.0, 1220.0, 1240.0, 1260.0, 1280.0, 1300.0, 1310.0, 1320.0, 1325.0,
                    1328.0, 1330.0, 1330.0,
                ]),
                routine: series([
                    9500.0, 9580.0, 9660.0, 9740.0, 9820.0, 9900.0, 9940.0, 9960.0, 9975.0,
                    9992.0, 10020.0, 10050.0,
                ]),
            },
            management_contractual: HoursBreakdown {
                total: series([
                    41750.0, 42500.0, 43250.0, 44000.0, 44750.0, 45500.0, 44800.0, 44900.0,
                    45000.0, 45100.0, 45200.0, 45480.0,
                ]),
                overtime: series([
                    400.0, 420.0, 440.0, 460.0, 480.0, 500.0, 510.0, 520.0, 530.0, 540.0, 545.0,
                    550.0,
                ]),
                routine: series([
                    3500.0, 3600.0, 3700.0, 3800.0, 3900.0, 4000.0, 3800.0, 3850.0, 3900.0,
                    3900.0, 3900.0, 3900.0,
                ]),
            },
            non_management_mdm: HoursBreakdown {
                total: series([
                    38250.0, 39000.0, 39750.0, 40500.0, 41250.0, 42000.0, 41500.0, 41600.0,
                    41700.0, 41800.0, 41900.0, 41580.0,
                ]),
                overtime: series([
                    200.0, 220.0, 240.0, 260.0, 280.0, 300.0, 290.0, 300.0, 305.0, 308.0, 310.0,
                    310.0,
                ]),
                routine: series([
                    1250.0, 1280.0, 1310.0, 1340.0, 1370.0, 1400.0, 1380.0, 1385.0, 1390.0,
                    1392.0, 1395.0, 1380.0,
                ]),
            },
            non_management_contractual: HoursBreakdown {
                total: series([
                    37000.0, 37500.0, 38000.0, 38500.0, 39000.0, 39500.0, 39800.0, 40000.0,
                    40200.0, 40300.0, 40400.0, 40200.0,
                ]),
                overtime: series([
                    2000.0, 2100.0, 2200.0, 2300.0, 2400.0, 2500.0, 2550.0, 2580.0, 2600.0,
                    2600.0, 2600.0, 2600.0,
                ]),
                routine: series([
                    35000.0, 35400.0, 35800.0, 36200.0, 36600.0, 37000.0, 37250.0, 37420.0,
                    37600.0, 37700.0, 37800.0, 37600.0,
                ]),
            },
        },
        hr_metrics: HrMetrics {
            resignations: series([1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 4.0, 0.0, 2.0, 4.0, 6.0]),
            vacant_positions: series([
                1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 4.0, 0.0, 2.0, 4.0, 4.0,
            ]),
            staff_turnover: series([
                5.0, 6.0, 7.0, 10.0, 11.0, 12.0, 0.0, 12.0, 10.0, 5.0, 6.0, 8.0,
            ]),
        },
    }
}
