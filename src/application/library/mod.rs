mod errors;
mod library_service;

pub use errors::{LibraryApplicationError, Result};
pub use library_service::{
    AddBookOutcome, LibraryService, LoanOutcome, ReturnOutcome, ServiceDependencies, loan_message,
    return_message,
};
