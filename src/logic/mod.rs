pub mod advisor;
pub mod recommend;
pub mod rules;
pub mod season;
pub mod thresholds;

pub use advisor::{AdvisoryService, QueryTicket};
pub use rules::AlertEngine;
pub use season::{classify_season, current_month, current_season};
