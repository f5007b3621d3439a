use chrono::Utc;
use rusty_library_solid::{
    adapters::{
        memory,
        notifier::{EmailNotifier, SmsNotifier},
    },
    application::library::LibraryService,
    config::{LibraryPolicy, NotifierChannel},
    domain::{
        Book, Member,
        commands::{AddBookToInventory, LoanBookToMember, ReturnBookFromMember},
    },
    ports::Notifier,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_solid=info,notifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment
    let policy = LibraryPolicy::from_env()?;
    let notifier: Arc<dyn Notifier> = match NotifierChannel::from_env()? {
        NotifierChannel::Email => Arc::new(EmailNotifier::new()),
        NotifierChannel::Sms => Arc::new(SmsNotifier::new()),
    };

    tracing::info!(?policy, channel = notifier.channel(), "Starting library demo");

    let library = LibraryService::new(memory::dependencies(notifier), policy);

    let clean_code = Book::new("Clean Code", "Robert C. Martin", 2008);
    let pragmatic = Book::new("The Pragmatic Programmer", "Andrew Hunt", 1999);
    let design_patterns = Book::new("Design Patterns", "Gang of Four", 1994);

    let alice = Member::new("Alice", "M001");
    let bob = Member::new("Bob", "M002");

    // Adding books to inventory
    for book in [&clean_code, &pragmatic, &design_patterns] {
        library
            .add_book_to_inventory(AddBookToInventory { book: book.clone() })
            .await?;
    }

    // Loaning books
    for (member, book) in [(&alice, &clean_code), (&bob, &pragmatic)] {
        library
            .loan_book_to_member(LoanBookToMember {
                member: member.clone(),
                book: book.clone(),
                loaned_at: Utc::now(),
            })
            .await?;
    }

    // Returning books
    for (member, book) in [(&alice, &clean_code), (&bob, &pragmatic)] {
        library
            .return_book_from_member(ReturnBookFromMember {
                member: member.clone(),
                book: book.clone(),
                returned_at: Utc::now(),
            })
            .await?;
    }

    // Listing available books
    println!("Books currently in inventory:");
    for line in library.available_books().await? {
        println!("{}", line);
    }

    Ok(())
}
