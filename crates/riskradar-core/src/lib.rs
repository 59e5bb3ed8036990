pub mod analysis;
pub mod region;
pub mod status;

pub use analysis::{AnalysisResult, RedFlag, RiskLevel};
pub use region::{CatalogError, RegionCode, RegionConfig};
pub use status::{ScraperStatus, SyncState};
