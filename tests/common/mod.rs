#![allow(dead_code)]

use chrono::Utc;
use rusty_library_solid::adapters::memory::{Inventory, LoanLedger};
use rusty_library_solid::adapters::notifier::RecordingNotifier;
use rusty_library_solid::application::library::{LibraryService, ServiceDependencies};
use rusty_library_solid::config::LibraryPolicy;
use rusty_library_solid::domain::commands::*;
use rusty_library_solid::domain::{Book, Member};
use std::sync::Arc;

/// テスト用の図書館一式
///
/// サービスに注入したアダプタへの参照を保持し、
/// 操作後の在庫・台帳・通知を直接検証できるようにする。
pub struct TestLibrary {
    pub service: LibraryService,
    pub inventory: Arc<Inventory>,
    pub ledger: Arc<LoanLedger>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn create_test_library(policy: LibraryPolicy) -> TestLibrary {
    let inventory = Arc::new(Inventory::new());
    let ledger = Arc::new(LoanLedger::new());
    let notifier = Arc::new(RecordingNotifier::new("Email"));

    let deps = ServiceDependencies {
        inventory: inventory.clone(),
        loan_ledger: ledger.clone(),
        loan_read_model: ledger.clone(),
        notifier: notifier.clone(),
    };

    TestLibrary {
        service: LibraryService::new(deps, policy),
        inventory,
        ledger,
        notifier,
    }
}

pub fn clean_code() -> Book {
    Book::new("Clean Code", "Robert C. Martin", 2008)
}

pub fn pragmatic_programmer() -> Book {
    Book::new("The Pragmatic Programmer", "Andrew Hunt", 1999)
}

pub fn design_patterns() -> Book {
    Book::new("Design Patterns", "Gang of Four", 1994)
}

pub fn alice() -> Member {
    Member::new("Alice", "M001")
}

pub fn bob() -> Member {
    Member::new("Bob", "M002")
}

pub fn add(book: Book) -> AddBookToInventory {
    AddBookToInventory { book }
}

pub fn loan(member: Member, book: Book) -> LoanBookToMember {
    LoanBookToMember {
        member,
        book,
        loaned_at: Utc::now(),
    }
}

pub fn give_back(member: Member, book: Book) -> ReturnBookFromMember {
    ReturnBookFromMember {
        member,
        book,
        returned_at: Utc::now(),
    }
}
