// Service exports
pub mod college_stats;
pub mod source;
pub mod static_table;

pub use college_stats::{parse_stats_page, CollegeStatsClient};
pub use source::{CriteriaSource, SourceError};
pub use static_table::StaticCriteria;
