/// 在庫からの取り出しのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveBookError {
    /// 書棚に該当する書籍がない
    NotOnShelf,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 会員がその書籍を借りていない
    NoSuchLoan,
}
