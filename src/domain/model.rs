use crate::domain::ports::Food;
use crate::utils::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food a walrus can digest. Two values are the same food when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalrusFood {
    name: String,
}

impl WalrusFood {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Food for WalrusFood {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_walrus_food(&self) -> Option<&WalrusFood> {
        Some(self)
    }
}

impl fmt::Display for WalrusFood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    #[default]
    Walrus,
    Inedible,
}

/// A food value as written in a feeding plan or on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meal {
    Walrus(WalrusFood),
    Inedible { name: String },
}

impl Meal {
    pub fn new(name: impl Into<String>, kind: MealKind) -> Self {
        match kind {
            MealKind::Walrus => Meal::Walrus(WalrusFood::new(name)),
            MealKind::Inedible => Meal::Inedible { name: name.into() },
        }
    }

    pub fn kind(&self) -> MealKind {
        match self {
            Meal::Walrus(_) => MealKind::Walrus,
            Meal::Inedible { .. } => MealKind::Inedible,
        }
    }
}

impl Food for Meal {
    fn name(&self) -> &str {
        match self {
            Meal::Walrus(food) => food.name(),
            Meal::Inedible { name } => name,
        }
    }

    fn as_walrus_food(&self) -> Option<&WalrusFood> {
        match self {
            Meal::Walrus(food) => Some(food),
            Meal::Inedible { .. } => None,
        }
    }
}

/// Parses `NAME`, `NAME:walrus` or `NAME:inedible`. Only the last `:` separates the kind.
impl FromStr for Meal {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, kind) = match s.rsplit_once(':').map(|(name, kind)| (name, kind.trim())) {
            Some((name, "walrus")) => (name, MealKind::Walrus),
            Some((name, "inedible")) => (name, MealKind::Inedible),
            Some((_, other)) => {
                return Err(FeedError::InvalidMealError {
                    value: s.to_string(),
                    reason: format!("Unknown meal kind: {}", other),
                })
            }
            None => (s, MealKind::Walrus),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(FeedError::InvalidMealError {
                value: s.to_string(),
                reason: "Meal name cannot be empty".to_string(),
            });
        }

        Ok(Meal::new(name, kind))
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 名稱含冒號時要寫出種類，否則解析會誤判
            Meal::Walrus(food) if food.name().contains(':') => write!(f, "{}:walrus", food),
            Meal::Walrus(food) => write!(f, "{}", food),
            Meal::Inedible { name } => write!(f, "{}:inedible", name),
        }
    }
}
