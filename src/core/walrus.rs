use crate::domain::model::WalrusFood;
use crate::domain::ports::Food;
use std::collections::HashSet;

/// What happened to a single piece of food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digestion {
    /// Kept in the stomach. `newly_eaten` is false when it was already there.
    Swallowed { newly_eaten: bool },
    /// Not walrus food: the whole stomach came back up.
    Puked { lost: usize },
}

#[derive(Debug, Clone)]
pub struct Walrus {
    name: String,
    stomach: HashSet<WalrusFood>,
}

impl Walrus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stomach: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_eaten(&self, food: &WalrusFood) -> bool {
        self.stomach.contains(food)
    }

    /// Feeds `food`. Anything that is not walrus food empties the stomach.
    pub fn eat<F: Food + ?Sized>(&mut self, food: &F) {
        self.digest(food);
    }

    pub fn digest<F: Food + ?Sized>(&mut self, food: &F) -> Digestion {
        match food.as_walrus_food() {
            Some(walrus_food) => {
                let newly_eaten = self.stomach.insert(walrus_food.clone());
                tracing::debug!(walrus = %self.name, food = %walrus_food, newly_eaten, "swallowed");
                Digestion::Swallowed { newly_eaten }
            }
            None => {
                let lost = self.stomach.len();
                tracing::info!(walrus = %self.name, food = food.name(), lost, "not walrus food, puking");
                self.puke();
                Digestion::Puked { lost }
            }
        }
    }

    pub fn puke(&mut self) {
        self.stomach.clear();
    }

    pub fn stomach_len(&self) -> usize {
        self.stomach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stomach.is_empty()
    }

    pub fn stomach(&self) -> impl Iterator<Item = &WalrusFood> {
        self.stomach.iter()
    }
}
