use crate::domain::{self, Book, BookAddedToInventory};
use crate::ports::inventory::{Inventory as InventoryTrait, NotFoundError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// インメモリ在庫
///
/// 書棚（`Vec<Book>`）を `Mutex` で保護して保持する。
/// 状態の変更はドメイン層の純粋関数に委ねる。
pub struct Inventory {
    shelf: Mutex<Vec<Book>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            shelf: Mutex::new(Vec::new()),
        }
    }

    /// 初期在庫を指定して作成
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            shelf: Mutex::new(books.into_iter().collect()),
        }
    }

    fn shelf(&self) -> Result<std::sync::MutexGuard<'_, Vec<Book>>> {
        self.shelf
            .lock()
            .map_err(|_| "inventory lock poisoned".into())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryTrait for Inventory {
    async fn add(&self, book: Book) -> Result<BookAddedToInventory> {
        let mut shelf = self.shelf()?;
        let (books, event) = domain::inventory::add_book(&shelf, book);
        *shelf = books;
        Ok(event)
    }

    async fn remove(&self, book: &Book) -> Result<()> {
        let mut shelf = self.shelf()?;
        let books = domain::inventory::remove_book(&shelf, book)
            .map_err(|_| NotFoundError(book.clone()))?;
        *shelf = books;
        Ok(())
    }

    async fn contains(&self, book: &Book) -> Result<bool> {
        let shelf = self.shelf()?;
        Ok(domain::inventory::contains(&shelf, book))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let shelf = self.shelf()?;
        Ok(domain::inventory::list_books(&shelf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_code() -> Book {
        Book::new("Clean Code", "Robert C. Martin", 2008)
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let inventory = Inventory::new();

        let event = inventory.add(clean_code()).await.unwrap();

        assert_eq!(event.book, clean_code());
        assert_eq!(
            inventory.list().await.unwrap(),
            vec!["Clean Code by Robert C. Martin".to_string()]
        );
    }

    #[tokio::test]
    async fn test_remove_missing_book_returns_not_found() {
        let inventory = Inventory::new();

        let err = inventory.remove(&clean_code()).await.unwrap_err();

        let not_found = err.downcast_ref::<NotFoundError>();
        assert_eq!(not_found, Some(&NotFoundError(clean_code())));
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let inventory = Inventory::with_books([clean_code()]);

        let snapshot = inventory.list().await.unwrap();
        inventory.remove(&clean_code()).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(inventory.list().await.unwrap().is_empty());
        assert!(!inventory.contains(&clean_code()).await.unwrap());
    }
}
