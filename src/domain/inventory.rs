use super::{Book, BookAddedToInventory, RemoveBookError};

/// 純粋関数：書棚に書籍を追加する
///
/// 末尾に追加するだけで、重複チェックは行わない。
/// 重複の扱いはアプリケーション層のポリシーで決める。
pub fn add_book(shelf: &[Book], book: Book) -> (Vec<Book>, BookAddedToInventory) {
    let mut books = shelf.to_vec();
    books.push(book.clone());
    (books, BookAddedToInventory { book })
}

/// 純粋関数：書棚から書籍を取り出す
///
/// 値が等しい最初の1冊だけを取り除く。
/// 見つからない場合は `RemoveBookError::NotOnShelf`。
pub fn remove_book(shelf: &[Book], book: &Book) -> Result<Vec<Book>, RemoveBookError> {
    let position = shelf
        .iter()
        .position(|b| b == book)
        .ok_or(RemoveBookError::NotOnShelf)?;

    let mut books = shelf.to_vec();
    books.remove(position);
    Ok(books)
}

/// 書棚に値が等しい書籍があるか
pub fn contains(shelf: &[Book], book: &Book) -> bool {
    shelf.iter().any(|b| b == book)
}

/// 現在の並び順で "title by author" の一覧を作る
pub fn list_books(shelf: &[Book]) -> Vec<String> {
    shelf.iter().map(Book::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_code() -> Book {
        Book::new("Clean Code", "Robert C. Martin", 2008)
    }

    fn pragmatic() -> Book {
        Book::new("The Pragmatic Programmer", "Andrew Hunt", 1999)
    }

    #[test]
    fn test_add_book_appends_to_end() {
        let (shelf, _) = add_book(&[], clean_code());
        let (shelf, event) = add_book(&shelf, pragmatic());

        assert_eq!(shelf, vec![clean_code(), pragmatic()]);
        assert_eq!(event.book, pragmatic());
    }

    #[test]
    fn test_add_book_keeps_duplicates() {
        let (shelf, _) = add_book(&[], clean_code());
        let (shelf, _) = add_book(&shelf, clean_code());

        assert_eq!(shelf.len(), 2);
    }

    #[test]
    fn test_remove_book_removes_first_match_only() {
        let shelf = vec![clean_code(), pragmatic(), clean_code()];

        let result = remove_book(&shelf, &clean_code());

        assert_eq!(result, Ok(vec![pragmatic(), clean_code()]));
    }

    #[test]
    fn test_remove_book_not_on_shelf() {
        let shelf = vec![pragmatic()];

        let result = remove_book(&shelf, &clean_code());

        assert_eq!(result, Err(RemoveBookError::NotOnShelf));
    }

    #[test]
    fn test_contains_uses_value_equality() {
        let shelf = vec![clean_code()];

        assert!(contains(&shelf, &Book::new("Clean Code", "Robert C. Martin", 2008)));
        assert!(!contains(&shelf, &Book::new("Clean Code", "Robert C. Martin", 2011)));
    }

    #[test]
    fn test_list_books_in_shelf_order() {
        let shelf = vec![pragmatic(), clean_code()];

        assert_eq!(
            list_books(&shelf),
            vec![
                "The Pragmatic Programmer by Andrew Hunt".to_string(),
                "Clean Code by Robert C. Martin".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_books_empty_shelf() {
        assert!(list_books(&[]).is_empty());
    }
}
