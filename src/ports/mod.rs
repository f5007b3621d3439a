pub mod inventory;
pub mod loan_ledger;
pub mod loan_read_model;
pub mod notifier;

pub use inventory::{Inventory, NotFoundError};
pub use loan_ledger::{LoanLedger, ReturnRecord};
pub use loan_read_model::LoanReadModel;
pub use notifier::Notifier;
