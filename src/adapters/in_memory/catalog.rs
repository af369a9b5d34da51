use crate::domain::{Book, Borrowable, ItemHandle, Magazine};
use crate::ports::item_repository::ItemRepository;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory catalog of one item variant
///
/// Owns its items for the lifetime of the process and keeps them in
/// insertion order. Nothing is added or removed after construction.
pub struct Catalog<T> {
    items: Vec<Arc<Mutex<T>>>,
}

/// Catalog of books (BooksManager)
pub type BookCatalog = Catalog<Book>;

/// Catalog of magazines (MagazineManager)
pub type MagazineCatalog = Catalog<Magazine>;

impl<T: Borrowable + Clone + 'static> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| Arc::new(Mutex::new(item)))
                .collect(),
        }
    }

    /// Snapshot of every item, in insertion order
    pub fn items(&self) -> Vec<T> {
        self.items
            .iter()
            .map(|item| item.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .collect()
    }

    /// Snapshot of the first item with the given title
    #[cfg(test)]
    pub fn find(&self, title: &str) -> Option<T> {
        self.first_match(title)
            .map(|item| item.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn first_match(&self, title: &str) -> Option<&Arc<Mutex<T>>> {
        self.items
            .iter()
            .find(|item| item.lock().unwrap_or_else(PoisonError::into_inner).title() == title)
    }
}

impl<T: Borrowable + Clone + 'static> ItemRepository for Catalog<T> {
    /// Linear scan, first exact title match wins
    fn check_availability(&self, title: &str) -> Option<ItemHandle> {
        self.first_match(title)
            .map(|item| Arc::clone(item) as ItemHandle)
    }
}
