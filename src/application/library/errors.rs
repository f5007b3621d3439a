use thiserror::Error;

/// 図書館アプリケーション層のエラー
///
/// 貸出不可・貸出記録なし・重複といった報告はエラーではなく、
/// 各操作の結果型（`LoanOutcome` など）で返す。
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// 在庫確認済みの書籍を取り出せなかった（プログラムの不変条件違反）
    #[error("Inventory invariant violated: {0} was confirmed available but could not be removed")]
    InventoryInvariantViolated(String),

    /// Inventoryのエラー
    #[error("Inventory error")]
    InventoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanLedgerのエラー
    #[error("Loan ledger error")]
    LoanLedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReadModelのエラー
    #[error("Read model error")]
    ReadModelError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;
