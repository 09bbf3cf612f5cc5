pub mod session;
pub mod shared;
pub mod walrus;

pub use crate::domain::model::{Meal, MealKind, WalrusFood};
pub use crate::domain::ports::Food;
pub use crate::utils::error::Result;
