use crate::core::walrus::{Digestion, Walrus};
use crate::domain::model::WalrusFood;
use crate::domain::ports::Food;
use std::sync::{Arc, Mutex, MutexGuard};

/// A walrus fed from several threads. Each call holds the lock for one whole operation.
#[derive(Debug, Clone)]
pub struct SharedWalrus {
    inner: Arc<Mutex<Walrus>>,
}

impl SharedWalrus {
    pub fn new(walrus: Walrus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(walrus)),
        }
    }

    // A panic mid-operation cannot leave the set half-updated, so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, Walrus> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn name(&self) -> String {
        self.lock().name().to_string()
    }

    pub fn has_eaten(&self, food: &WalrusFood) -> bool {
        self.lock().has_eaten(food)
    }

    pub fn eat<F: Food + ?Sized>(&self, food: &F) {
        self.lock().eat(food);
    }

    pub fn digest<F: Food + ?Sized>(&self, food: &F) -> Digestion {
        self.lock().digest(food)
    }

    pub fn puke(&self) {
        self.lock().puke();
    }

    pub fn stomach_len(&self) -> usize {
        self.lock().stomach_len()
    }

    pub fn snapshot(&self) -> Walrus {
        self.lock().clone()
    }
}

impl From<Walrus> for SharedWalrus {
    fn from(walrus: Walrus) -> Self {
        Self::new(walrus)
    }
}
