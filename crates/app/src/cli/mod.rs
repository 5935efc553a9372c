use clap::{Parser, Subcommand};
use storefront_app::database::{self, Db};

mod customer;
mod db;
mod staff;
mod token;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Customer(customer::CustomerCommand),
    Db(db::DbCommand),
    Staff(staff::StaffCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Customer(command) => customer::run(command).await,
            Commands::Db(command) => db::run(command).await,
            Commands::Staff(command) => staff::run(command).await,
            Commands::Token(command) => token::run(command).await,
        }
    }
}

/// Connect and wrap the pool for service construction.
async fn connect(database_url: &str) -> Result<Db, String> {
    database::connect(database_url)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))
}
