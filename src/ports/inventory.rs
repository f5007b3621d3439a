use crate::domain::{Book, BookAddedToInventory};
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 在庫から存在しない書籍を取り出そうとした
///
/// 呼び出し側が事前に `contains` で確認していれば発生しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Book not found in inventory: {0}")]
pub struct NotFoundError(pub Book);

/// 在庫ポート
///
/// 貸出可能な書籍を、追加された順に保持する。
/// ある書籍が在庫にある間、その書籍は誰にも貸し出されていない。
#[async_trait]
pub trait Inventory: Send + Sync {
    /// 書籍を末尾に追加する
    ///
    /// 重複チェックは行わない。常に成功する。
    async fn add(&self, book: Book) -> Result<BookAddedToInventory>;

    /// 値が等しい最初の1冊を取り除く
    ///
    /// 見つからない場合は `NotFoundError` を返す。
    async fn remove(&self, book: &Book) -> Result<()>;

    /// 値が等しい書籍が在庫にあるか確認する
    async fn contains(&self, book: &Book) -> Result<bool>;

    /// "title by author" 形式の一覧のスナップショットを返す
    async fn list(&self) -> Result<Vec<String>>;
}
