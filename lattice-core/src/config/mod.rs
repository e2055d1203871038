//! Planner configuration.

mod defaults;
mod planner_config;

pub use defaults::*;
pub use planner_config::{BudgetDefaults, PlannerConfig};
