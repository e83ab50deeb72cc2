//! Explicit registry of open books.

use std::collections::BTreeMap;

use crate::book::Book;
use crate::error::{CoreError, Result};

/// Prefix of generated book IDs (`STG0`, `STG1`, ...).
pub const BOOK_ID_PREFIX: &str = "STG";

#[derive(Debug, Default)]
pub struct BookRegistry {
    books: BTreeMap<String, Book>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `book` under the first free generated ID and return it.
    pub fn register(&mut self, mut book: Book) -> String {
        let id = (0usize..)
            .map(|n| format!("{BOOK_ID_PREFIX}{n}"))
            .find(|id| !self.books.contains_key(id))
            .unwrap_or_default();
        book.set_uid(id.clone());
        self.books.insert(id.clone(), book);
        id
    }

    /// Move a book to a new ID. Fails if `to` is already taken.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        if self.books.contains_key(to) {
            return Err(CoreError::DuplicateBookId { id: to.to_string() });
        }
        let mut book = self
            .books
            .remove(from)
            .ok_or_else(|| CoreError::UnknownBook {
                id: from.to_string(),
            })?;
        book.set_uid(to.to_string());
        self.books.insert(to.to_string(), book);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Book> {
        self.books.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
