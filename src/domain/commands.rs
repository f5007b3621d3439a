use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, Member};

/// コマンド：書籍を在庫に追加する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookToInventory {
    pub book: Book,
}

/// コマンド：書籍を会員に貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBookToMember {
    pub member: Member,
    pub book: Book,
    pub loaned_at: DateTime<Utc>,
}

/// コマンド：会員から書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBookFromMember {
    pub member: Member,
    pub book: Book,
    pub returned_at: DateTime<Utc>,
}
