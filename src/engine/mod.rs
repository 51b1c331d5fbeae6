//! # Analytical Engine
//!
//! Pure, stateless estimators for a community water/solar micro-grid:
//! solar production, water demand, carbon credit valuation, and the
//! threshold classifier that turns the first two into an operating
//! recommendation. No function here performs I/O, holds state, or
//! validates domain bounds; callers constrain inputs before invoking.

pub mod carbon;
pub mod diagnostic;
pub mod recommend;
pub mod solar;
pub mod water;

pub use carbon::{calculate_carbon_credits, CarbonCredits};
pub use diagnostic::{run_diagnostic, Diagnostic, SiteConditions};
pub use recommend::{efficiency_ratio, Recommendation};
pub use solar::predict_energy;
pub use water::predict_water_demand;
