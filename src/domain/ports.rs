use crate::domain::model::WalrusFood;

/// Something that can be offered to an animal.
///
/// Whether a walrus can digest it is answered by [`Food::as_walrus_food`];
/// anything returning `None` makes a walrus puke.
pub trait Food {
    fn name(&self) -> &str;

    fn as_walrus_food(&self) -> Option<&WalrusFood> {
        None
    }

    fn is_walrus_food(&self) -> bool {
        self.as_walrus_food().is_some()
    }
}

impl<F: Food + ?Sized> Food for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn as_walrus_food(&self) -> Option<&WalrusFood> {
        (**self).as_walrus_food()
    }
}

impl<F: Food + ?Sized> Food for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn as_walrus_food(&self) -> Option<&WalrusFood> {
        (**self).as_walrus_food()
    }
}
