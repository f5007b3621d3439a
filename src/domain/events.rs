use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Book, Member};

/// イベント：書籍が在庫に追加された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAddedToInventory {
    pub book: Book,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLoaned {
    pub member: Member,
    pub book: Book,
    pub loaned_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub member: Member,
    pub book: Book,
    pub returned_at: DateTime<Utc>,
}

/// イベント：返却対象の貸出が台帳に存在しなかった
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanNotFound {
    pub member: Member,
    pub book: Book,
}

/// イベント：在庫にない書籍の貸出が要求された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUnavailable {
    pub member: Member,
    pub book: Book,
}

/// イベント：重複する書籍の追加が拒否された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateBookRejected {
    pub book: Book,
}

/// イベント：会員へ通知が配信された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberNotified {
    pub delivery_id: Uuid,
    pub channel: String,
    pub member: Member,
    pub message: String,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEvent {
    BookAddedToInventory(BookAddedToInventory),
    BookLoaned(BookLoaned),
    BookReturned(BookReturned),
    LoanNotFound(LoanNotFound),
    BookUnavailable(BookUnavailable),
    DuplicateBookRejected(DuplicateBookRejected),
    MemberNotified(MemberNotified),
}
