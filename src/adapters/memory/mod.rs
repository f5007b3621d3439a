pub mod inventory;
pub mod loan_ledger;

pub use inventory::Inventory;
pub use loan_ledger::LoanLedger;

use crate::application::library::ServiceDependencies;
use crate::ports::Notifier;
use std::sync::Arc;

/// インメモリの在庫と台帳に、指定の通知実装を組み合わせる
///
/// 台帳は書き込み側と読み取り側で同じインスタンスを共有する。
pub fn dependencies(notifier: Arc<dyn Notifier>) -> ServiceDependencies {
    let loan_ledger = Arc::new(LoanLedger::new());
    ServiceDependencies {
        inventory: Arc::new(Inventory::new()),
        loan_ledger: loan_ledger.clone(),
        loan_read_model: loan_ledger,
        notifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::domain::{Book, Member};
    use chrono::Utc;

    #[tokio::test]
    async fn test_dependencies_share_one_ledger_for_writes_and_reads() {
        let deps = dependencies(Arc::new(RecordingNotifier::default()));
        let alice = Member::new("Alice", "M001");
        let book = Book::new("Clean Code", "Robert C. Martin", 2008);

        deps.loan_ledger.loan_book(&alice, &book, Utc::now()).await.unwrap();

        assert_eq!(deps.loan_read_model.holder_of(&book).await.unwrap(), Some(alice));
        assert!(deps.inventory.list().await.unwrap().is_empty());
    }
}
