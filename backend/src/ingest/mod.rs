//! CSV ingestion.
//!
//! Uploaded sheets have one row per metric: a free-text name in the `Metric`
//! column and up to twelve month columns `Jan`..`Dec`. Rows are matched to
//! record fields by the dataset's ordered rule table; cells are parsed
//! leniently. Ingestion never fails: malformed input only means fewer fields
//! end up populated.

pub mod mapper;
pub mod number;
pub mod reader;
pub mod rules;

pub use mapper::{map_csv, map_rows, row_series, MappingOutcome};
pub use number::parse_lenient_number;
pub use reader::{read_rows, RawRow};
pub use rules::{match_metric, MetricRule, Pattern, Vocabulary, ADMIN_RULES, EHS_RULES};
