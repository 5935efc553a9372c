use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct StaffCommand {
    #[command(subcommand)]
    command: StaffSubcommand,
}

#[derive(Debug, Subcommand)]
enum StaffSubcommand {
    Create(create::CreateStaffArgs),
}

pub(crate) async fn run(command: StaffCommand) -> Result<(), String> {
    match command.command {
        StaffSubcommand::Create(args) => create::run(args).await,
    }
}
