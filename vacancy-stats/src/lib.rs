pub mod headhunter;
pub mod salary;
pub mod stats;
pub mod superjob;
pub mod table;
pub mod types;

pub use types::{Error, LanguageStats, LanguageStatsTable, Result};
