pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::PlanConfig;
pub use crate::core::{
    session::{FeedingReport, FeedingSession},
    shared::SharedWalrus,
    walrus::{Digestion, Walrus},
};
pub use domain::model::{Meal, MealKind, WalrusFood};
pub use domain::ports::Food;
pub use utils::error::{FeedError, Result};
