use crate::config::{DuplicatePolicy, LibraryPolicy, ReturnPolicy};
use crate::domain::{
    Book, BookAddedToInventory, BookLoaned, BookUnavailable, DuplicateBookRejected,
    commands::*,
};
use crate::ports::*;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::{LibraryApplicationError, Result};

/// 貸出確認メッセージ
pub fn loan_message(book: &Book) -> String {
    format!("You have loaned '{}'.", book.title)
}

/// 返却お礼メッセージ
pub fn return_message(book: &Book) -> String {
    format!("Thank you for returning '{}'.", book.title)
}

/// サービスの依存関係
///
/// すべて抽象（ポート）に依存し、具体的な実装は生成時に注入する。
/// 注入された実装はサービスの生存期間中は変わらない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub inventory: Arc<dyn Inventory>,
    pub loan_ledger: Arc<dyn LoanLedger>,
    pub loan_read_model: Arc<dyn LoanReadModel>,
    pub notifier: Arc<dyn Notifier>,
}

/// 書籍追加の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddBookOutcome {
    Added(BookAddedToInventory),
    /// `DuplicatePolicy::Reject` のときのみ
    Rejected(DuplicateBookRejected),
}

/// 貸出の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanOutcome {
    Loaned(BookLoaned),
    /// 在庫になかった。何も変更していない
    Unavailable(BookUnavailable),
}

impl LoanOutcome {
    pub fn is_loaned(&self) -> bool {
        matches!(self, LoanOutcome::Loaned(_))
    }
}

/// 返却の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// 台帳の記録結果（`NoSuchLoan` を含む）
    pub record: ReturnRecord,
    /// 在庫に戻したか
    pub restocked: bool,
    /// 会員に通知したか
    pub notified: bool,
}

/// 図書館サービス
///
/// 在庫・貸出台帳・通知を組み合わせて、書籍の追加、貸出、返却を行う。
/// どの操作も「確認 → 台帳の更新 → 在庫の更新 → 通知」の順で実行し、
/// 途中で失敗しても巻き戻さない。
///
/// 操作は内部のロックで直列化される。複数のタスクから同時に呼ばれても、
/// 同じ書籍が在庫にありながら貸出中でもある状態は外から観測できない。
pub struct LibraryService {
    deps: ServiceDependencies,
    policy: LibraryPolicy,
    guard: Mutex<()>,
}

impl LibraryService {
    pub fn new(deps: ServiceDependencies, policy: LibraryPolicy) -> Self {
        Self {
            deps,
            policy,
            guard: Mutex::new(()),
        }
    }

    /// 書籍を在庫に追加する
    ///
    /// `DuplicatePolicy::Reject` の場合、同じ値の書籍が在庫にあるか
    /// 貸出中であれば追加しない。
    pub async fn add_book_to_inventory(&self, cmd: AddBookToInventory) -> Result<AddBookOutcome> {
        let _guard = self.guard.lock().await;

        if self.policy.duplicate_policy == DuplicatePolicy::Reject
            && self.is_known_copy(&cmd.book).await?
        {
            tracing::warn!(book = %cmd.book, "Duplicate book rejected");
            return Ok(AddBookOutcome::Rejected(DuplicateBookRejected { book: cmd.book }));
        }

        let title = cmd.book.title.clone();
        let event = self
            .deps
            .inventory
            .add(cmd.book)
            .await
            .map_err(LibraryApplicationError::InventoryError)?;

        tracing::info!("{} added to the library.", title);
        Ok(AddBookOutcome::Added(event))
    }

    /// 書籍を会員に貸し出す
    ///
    /// ビジネスルール：
    /// - 書籍が在庫にあること（値で照合）
    /// - 在庫になければ何も変更せず `LoanOutcome::Unavailable` を返す
    ///
    /// 他の会員が同じ値の書籍を借りているかどうかは確認しない。
    pub async fn loan_book_to_member(&self, cmd: LoanBookToMember) -> Result<LoanOutcome> {
        let _guard = self.guard.lock().await;

        // 1. 在庫確認
        let available = self
            .deps
            .inventory
            .contains(&cmd.book)
            .await
            .map_err(LibraryApplicationError::InventoryError)?;

        if !available {
            tracing::warn!("'{}' is not available in the inventory.", cmd.book.title);
            return Ok(LoanOutcome::Unavailable(BookUnavailable {
                member: cmd.member,
                book: cmd.book,
            }));
        }

        // 2. 台帳に記録
        let event = self
            .deps
            .loan_ledger
            .loan_book(&cmd.member, &cmd.book, cmd.loaned_at)
            .await
            .map_err(LibraryApplicationError::LoanLedgerError)?;

        // 3. 在庫から取り出す
        self.take_from_inventory(&cmd.book).await?;

        // 4. 通知
        self.deps
            .notifier
            .notify(&cmd.member, &loan_message(&cmd.book))
            .await;

        tracing::info!(member = %cmd.member.name, book = %cmd.book, "Loan completed");
        Ok(LoanOutcome::Loaned(event))
    }

    /// 会員から書籍を返却する
    ///
    /// `ReturnPolicy::AcceptAnyReturn` では、台帳が `NoSuchLoan` を報告しても
    /// 在庫に戻して通知する。同じ返却を2回行えば在庫に2冊並ぶ。
    /// `ReturnPolicy::RequireActiveLoan` では `NoSuchLoan` の時点で終了する。
    pub async fn return_book_from_member(
        &self,
        cmd: ReturnBookFromMember,
    ) -> Result<ReturnOutcome> {
        let _guard = self.guard.lock().await;

        // 1. 台帳から取り除く
        let record = self
            .deps
            .loan_ledger
            .return_book(&cmd.member, &cmd.book, cmd.returned_at)
            .await
            .map_err(LibraryApplicationError::LoanLedgerError)?;

        if !record.is_returned() && self.policy.return_policy == ReturnPolicy::RequireActiveLoan {
            tracing::warn!(
                member = %cmd.member.name,
                book = %cmd.book,
                "Return refused: no active loan"
            );
            return Ok(ReturnOutcome {
                record,
                restocked: false,
                notified: false,
            });
        }

        // 2. 在庫に戻す
        let restocked = self.restock(&cmd.book).await?;

        // 3. 通知
        self.deps
            .notifier
            .notify(&cmd.member, &return_message(&cmd.book))
            .await;

        tracing::info!(
            member = %cmd.member.name,
            book = %cmd.book,
            restocked,
            "Return completed"
        );
        Ok(ReturnOutcome {
            record,
            restocked,
            notified: true,
        })
    }

    /// 在庫一覧（"title by author"）
    pub async fn available_books(&self) -> Result<Vec<String>> {
        self.deps
            .inventory
            .list()
            .await
            .map_err(LibraryApplicationError::InventoryError)
    }

    /// 同じ値の書籍が在庫にあるか、貸出中か
    async fn is_known_copy(&self, book: &Book) -> Result<bool> {
        let shelved = self
            .deps
            .inventory
            .contains(book)
            .await
            .map_err(LibraryApplicationError::InventoryError)?;
        if shelved {
            return Ok(true);
        }

        let holder = self
            .deps
            .loan_read_model
            .holder_of(book)
            .await
            .map_err(LibraryApplicationError::ReadModelError)?;
        Ok(holder.is_some())
    }

    /// 在庫確認済みの書籍を取り出す
    ///
    /// ここで `NotFoundError` が返るのは不変条件違反。
    async fn take_from_inventory(&self, book: &Book) -> Result<()> {
        self.deps.inventory.remove(book).await.map_err(|e| {
            if e.downcast_ref::<NotFoundError>().is_some() {
                tracing::error!(book = %book, "Inventory lost a book between check and removal");
                LibraryApplicationError::InventoryInvariantViolated(book.to_string())
            } else {
                LibraryApplicationError::InventoryError(e)
            }
        })
    }

    /// 返却された書籍を在庫に戻す。戻したら true
    ///
    /// `DuplicatePolicy::Reject` では、書棚にある書籍も、台帳上まだ
    /// 誰かが借りている書籍も戻さない。
    async fn restock(&self, book: &Book) -> Result<bool> {
        if self.policy.duplicate_policy == DuplicatePolicy::Reject
            && self.is_known_copy(book).await?
        {
            tracing::warn!(book = %book, "Restock skipped: copy is shelved or still on loan");
            return Ok(false);
        }

        self.deps
            .inventory
            .add(book.clone())
            .await
            .map_err(LibraryApplicationError::InventoryError)?;
        Ok(true)
    }
}
