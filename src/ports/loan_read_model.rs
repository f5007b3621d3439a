use crate::domain::{Book, Member};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出台帳の参照ポート（CQRSの読み取り側）
#[async_trait]
pub trait LoanReadModel: Send + Sync {
    /// 会員が現在借りている書籍を、借りた順に返す
    ///
    /// 記録のない会員は空。
    async fn loans_for_member(&self, member: &Member) -> Result<Vec<Book>>;

    /// 書籍を現在借りている会員を返す
    ///
    /// 重複追加を拒否するポリシーで使用される。
    async fn holder_of(&self, book: &Book) -> Result<Option<Member>>;
}
