use crate::core::walrus::{Digestion, Walrus};
use crate::domain::ports::Food;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedingReport {
    pub walrus_name: String,
    pub meals_served: usize,
    pub swallowed: usize,
    pub pukes: usize,
    /// Final stomach contents, sorted by name.
    pub stomach: Vec<String>,
}

impl fmt::Display for FeedingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Walrus: {}", self.walrus_name)?;
        writeln!(f, "Meals served: {}", self.meals_served)?;
        writeln!(f, "Swallowed: {}", self.swallowed)?;
        writeln!(f, "Pukes: {}", self.pukes)?;
        if self.stomach.is_empty() {
            write!(f, "Stomach: (empty)")
        } else {
            write!(f, "Stomach: {}", self.stomach.join(", "))
        }
    }
}

/// Replays meals against a walrus in order and keeps score.
pub struct FeedingSession {
    walrus: Walrus,
    swallowed: usize,
    pukes: usize,
    meals_served: usize,
}

impl FeedingSession {
    pub fn new(walrus: Walrus) -> Self {
        Self {
            walrus,
            swallowed: 0,
            pukes: 0,
            meals_served: 0,
        }
    }

    pub fn walrus(&self) -> &Walrus {
        &self.walrus
    }

    pub fn feed<F: Food + ?Sized>(&mut self, food: &F) -> Digestion {
        self.meals_served += 1;
        let digestion = self.walrus.digest(food);
        match digestion {
            Digestion::Swallowed { .. } => self.swallowed += 1,
            Digestion::Puked { .. } => self.pukes += 1,
        }
        digestion
    }

    pub fn feed_all<I>(&mut self, meals: I) -> FeedingReport
    where
        I: IntoIterator,
        I::Item: Food,
    {
        for meal in meals {
            self.feed(&meal);
        }
        tracing::info!(
            walrus = %self.walrus.name(),
            meals = self.meals_served,
            pukes = self.pukes,
            "feeding finished"
        );
        self.report()
    }

    pub fn report(&self) -> FeedingReport {
        let mut stomach: Vec<String> = self
            .walrus
            .stomach()
            .map(|food| food.name().to_string())
            .collect();
        stomach.sort();

        FeedingReport {
            walrus_name: self.walrus.name().to_string(),
            meals_served: self.meals_served,
            swallowed: self.swallowed,
            pukes: self.pukes,
            stomach,
        }
    }

    pub fn into_walrus(self) -> Walrus {
        self.walrus
    }
}
