use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use client_directory::config;
use client_directory::db::{self, Database};
use client_directory::models::{ClientFilter, ClientUpdate, ContactRow};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::init()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Initialize database connection
    let db = db::init(&config).await?;
    info!("database connection established");

    db.init_schema().await?;
    info!("directory schema initialized");

    run_demo(&db).await?;

    Ok(())
}

/// The fixed demo sequence: seed a few clients, mutate them, then run some
/// searches. Every mutation is followed by a labeled snapshot of the whole
/// directory on stdout.
async fn run_demo(db: &Database) -> Result<()> {
    db.add_client("Ivanov", "Ivan", "i.ivanov@ya.ru", None).await?;
    print_report("Added client:", &db.snapshot().await?);

    db.add_client("Petrov", "Petr", "p.petrov@ya.ru", Some("+79141232222"))
        .await?;
    print_report("Added client:", &db.snapshot().await?);

    db.add_client("Petrov", "Akakiy", "akakiy_foreva@mail.ru", Some("+79016669999"))
        .await?;
    print_report("Added client:", &db.snapshot().await?);

    db.add_client("Sidorov", "Sidor", "s.sidorov@ya.ru", Some("+79141113333,+79142223333"))
        .await?;
    print_report("Added client:", &db.snapshot().await?);

    db.add_phone(1, "+12345551111").await?;
    print_report("Added phone number:", &db.snapshot().await?);

    db.change_client(
        2,
        &ClientUpdate {
            email: Some("p.petroff@gmail.com".into()),
            phones: Some("+12223335555".into()),
            ..Default::default()
        },
    )
    .await?;
    print_report("Changed client:", &db.snapshot().await?);

    db.delete_phone(4, Some("+79141113333")).await?;
    print_report("Deleted phone number:", &db.snapshot().await?);

    db.delete_client(1).await?;
    print_report("Deleted client:", &db.snapshot().await?);

    let found = db
        .find_client(&ClientFilter {
            first_name: Some("Petrov".into()),
            ..Default::default()
        })
        .await?;
    print_report("Search by first name:", &found);

    let found = db
        .find_client(&ClientFilter {
            email: Some("s.sidorov@ya.ru".into()),
            ..Default::default()
        })
        .await?;
    print_report("Search by email:", &found);

    let found = db
        .find_client(&ClientFilter {
            first_name: Some("Ivanov".into()),
            ..Default::default()
        })
        .await?;
    print_report("Search by first name:", &found);

    let found = db
        .find_client(&ClientFilter {
            first_name: Some("Petrov".into()),
            last_name: Some("Akakiy".into()),
            ..Default::default()
        })
        .await?;
    print_report("Search by full name:", &found);

    Ok(())
}

fn print_report(label: &str, rows: &[ContactRow]) {
    println!("{label}");
    for row in rows {
        println!("  {row}");
    }
    println!("-");
}
