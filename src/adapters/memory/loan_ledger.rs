use crate::domain::{self, Book, BookLoaned, LoanNotFound, Member, loan::MemberLoans};
use crate::ports::loan_ledger::{LoanLedger as LoanLedgerTrait, Result, ReturnRecord};
use crate::ports::loan_read_model::LoanReadModel;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// インメモリ貸出台帳
///
/// 会員ごとの `MemberLoans` を保持する。
/// 書き込み側（`LoanLedger`）と読み取り側（`LoanReadModel`）の両方を実装する。
pub struct LoanLedger {
    loans: Mutex<HashMap<Member, MemberLoans>>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(HashMap::new()),
        }
    }

    fn loans(&self) -> Result<MutexGuard<'_, HashMap<Member, MemberLoans>>> {
        self.loans
            .lock()
            .map_err(|_| "loan ledger lock poisoned".into())
    }
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanLedgerTrait for LoanLedger {
    async fn loan_book(
        &self,
        member: &Member,
        book: &Book,
        loaned_at: DateTime<Utc>,
    ) -> Result<BookLoaned> {
        let mut loans = self.loans()?;
        let record = loans
            .entry(member.clone())
            .or_insert_with(|| MemberLoans::new(member.clone()));

        let (updated, event) = domain::loan::loan_book(record, book.clone(), loaned_at);
        *record = updated;

        tracing::info!("{} loaned to {}.", book.title, member.name);
        Ok(event)
    }

    async fn return_book(
        &self,
        member: &Member,
        book: &Book,
        returned_at: DateTime<Utc>,
    ) -> Result<ReturnRecord> {
        let mut loans = self.loans()?;

        let returned = loans
            .get(member)
            .map(|record| domain::loan::return_book(record, book, returned_at));

        match returned {
            Some(Ok((updated, event))) => {
                loans.insert(member.clone(), updated);
                tracing::info!("{} returned by {}.", book.title, member.name);
                Ok(ReturnRecord::Returned(event))
            }
            // 記録がない会員、または借りていない書籍
            Some(Err(_)) | None => {
                tracing::warn!("{} does not have {}.", member.name, book.title);
                Ok(ReturnRecord::NoSuchLoan(LoanNotFound {
                    member: member.clone(),
                    book: book.clone(),
                }))
            }
        }
    }
}

#[async_trait]
impl LoanReadModel for LoanLedger {
    async fn loans_for_member(&self, member: &Member) -> Result<Vec<Book>> {
        let loans = self.loans()?;
        Ok(loans
            .get(member)
            .map(|record| record.books.clone())
            .unwrap_or_default())
    }

    async fn holder_of(&self, book: &Book) -> Result<Option<Member>> {
        let loans = self.loans()?;
        Ok(loans
            .values()
            .find(|record| record.holds(book))
            .map(|record| record.member.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Member {
        Member::new("Alice", "M001")
    }

    fn bob() -> Member {
        Member::new("Bob", "M002")
    }

    fn clean_code() -> Book {
        Book::new("Clean Code", "Robert C. Martin", 2008)
    }

    #[tokio::test]
    async fn test_loan_book_creates_record_for_new_member() {
        let ledger = LoanLedger::new();

        let event = ledger.loan_book(&alice(), &clean_code(), Utc::now()).await.unwrap();

        assert_eq!(event.member, alice());
        assert_eq!(ledger.loans_for_member(&alice()).await.unwrap(), vec![clean_code()]);
        assert_eq!(ledger.holder_of(&clean_code()).await.unwrap(), Some(alice()));
    }

    #[tokio::test]
    async fn test_return_book_success() {
        let ledger = LoanLedger::new();
        ledger.loan_book(&alice(), &clean_code(), Utc::now()).await.unwrap();

        let record = ledger.return_book(&alice(), &clean_code(), Utc::now()).await.unwrap();

        assert!(record.is_returned());
        assert!(ledger.loans_for_member(&alice()).await.unwrap().is_empty());
        assert_eq!(ledger.holder_of(&clean_code()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_return_book_unknown_member_is_no_such_loan() {
        let ledger = LoanLedger::new();

        let record = ledger.return_book(&bob(), &clean_code(), Utc::now()).await.unwrap();

        assert_eq!(
            record,
            ReturnRecord::NoSuchLoan(LoanNotFound {
                member: bob(),
                book: clean_code(),
            })
        );
    }

    #[tokio::test]
    async fn test_return_book_held_by_someone_else_does_not_mutate() {
        let ledger = LoanLedger::new();
        ledger.loan_book(&alice(), &clean_code(), Utc::now()).await.unwrap();

        let record = ledger.return_book(&bob(), &clean_code(), Utc::now()).await.unwrap();

        assert!(!record.is_returned());
        assert_eq!(ledger.loans_for_member(&alice()).await.unwrap(), vec![clean_code()]);
    }
}
