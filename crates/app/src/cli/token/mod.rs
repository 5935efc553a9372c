use clap::{Args, Subcommand};
use storefront_app::{
    auth::TokenOwner,
    domain::{customers::models::CustomerUuid, staff::models::StaffUuid},
};
use uuid::Uuid;

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Create(create::CreateTokenArgs),
    List(list::ListTokensArgs),
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create::run(args).await,
        TokenSubcommand::List(args) => list::run(args).await,
        TokenSubcommand::Revoke(args) => revoke::run(args).await,
    }
}

fn owner(customer: Option<Uuid>, staff: Option<Uuid>) -> Option<TokenOwner> {
    customer
        .map(|uuid| TokenOwner::Customer(CustomerUuid::from_uuid(uuid)))
        .or_else(|| staff.map(|uuid| TokenOwner::Staff(StaffUuid::from_uuid(uuid))))
}

fn print_owner(owner: TokenOwner) {
    match owner {
        TokenOwner::Customer(uuid) => println!("customer_uuid: {uuid}"),
        TokenOwner::Staff(uuid) => println!("staff_uuid: {uuid}"),
    }
}
