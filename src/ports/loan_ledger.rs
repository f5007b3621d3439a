use crate::domain::{Book, BookLoaned, BookReturned, LoanNotFound, Member};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 返却の記録結果
///
/// `NoSuchLoan` はエラーではなく報告として扱う。台帳は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnRecord {
    Returned(BookReturned),
    NoSuchLoan(LoanNotFound),
}

impl ReturnRecord {
    pub fn is_returned(&self) -> bool {
        matches!(self, ReturnRecord::Returned(_))
    }
}

/// 貸出台帳ポート（書き込み側）
///
/// 会員ごとに、現在貸し出している書籍の並びを記録する。
/// 参照系は `LoanReadModel` に分離している。
#[async_trait]
pub trait LoanLedger: Send + Sync {
    /// 会員の貸出記録に書籍を追加する
    ///
    /// 記録がなければ作成する。常に成功する。
    async fn loan_book(
        &self,
        member: &Member,
        book: &Book,
        loaned_at: DateTime<Utc>,
    ) -> Result<BookLoaned>;

    /// 会員の貸出記録から書籍を取り除く
    ///
    /// 借りていなければ `ReturnRecord::NoSuchLoan` を返し、何も変更しない。
    async fn return_book(
        &self,
        member: &Member,
        book: &Book,
        returned_at: DateTime<Utc>,
    ) -> Result<ReturnRecord>;
}
