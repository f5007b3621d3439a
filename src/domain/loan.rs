use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, BookLoaned, BookReturned, Member, ReturnBookError};

/// 会員ごとの貸出記録
///
/// 会員が現在借りている書籍を、借りた順に保持する。
/// 1冊の書籍が複数の会員の記録に同時に現れないことは
/// 台帳ではなく在庫側のチェックで担保される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLoans {
    pub member: Member,
    pub books: Vec<Book>,
}

impl MemberLoans {
    /// 貸出のない空の記録
    pub fn new(member: Member) -> Self {
        Self {
            member,
            books: Vec::new(),
        }
    }

    pub fn holds(&self, book: &Book) -> bool {
        self.books.iter().any(|b| b == book)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// 純粋関数：書籍を貸し出す
///
/// 会員の記録の末尾に書籍を追加する。常に成功する。
///
/// 副作用なし。新しい記録とイベントを返す。
pub fn loan_book(
    loans: &MemberLoans,
    book: Book,
    loaned_at: DateTime<Utc>,
) -> (MemberLoans, BookLoaned) {
    let mut books = loans.books.clone();
    books.push(book.clone());

    let updated = MemberLoans {
        member: loans.member.clone(),
        books,
    };

    let event = BookLoaned {
        member: loans.member.clone(),
        book,
        loaned_at,
    };

    (updated, event)
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 会員が借りている書籍のうち、値が等しい最初の1冊を取り除く
/// - 借りていない場合は `ReturnBookError::NoSuchLoan`（記録は変更しない）
///
/// 副作用なし。新しい記録とイベントを返す。
pub fn return_book(
    loans: &MemberLoans,
    book: &Book,
    returned_at: DateTime<Utc>,
) -> Result<(MemberLoans, BookReturned), ReturnBookError> {
    let position = loans
        .books
        .iter()
        .position(|b| b == book)
        .ok_or(ReturnBookError::NoSuchLoan)?;

    let mut books = loans.books.clone();
    books.remove(position);

    let updated = MemberLoans {
        member: loans.member.clone(),
        books,
    };

    let event = BookReturned {
        member: loans.member.clone(),
        book: book.clone(),
        returned_at,
    };

    Ok((updated, event))
}
