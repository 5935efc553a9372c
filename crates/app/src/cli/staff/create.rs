use clap::Args;
use storefront_app::{
    auth::{AuthService, PgAuthService, TokenOwner},
    domain::staff::{
        PgStaffService, StaffService,
        data::NewStaffUser,
        models::{StaffRole, StaffUuid},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateStaffArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    /// Contact phone number
    #[arg(long)]
    contact: String,

    /// `admin` or `user`
    #[arg(long, default_value = "user")]
    role: StaffRole,

    /// Optional staff UUID; generated when omitted
    #[arg(long)]
    staff_uuid: Option<Uuid>,

    /// Login password; the account cannot log in until one is set
    #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

pub(crate) async fn run(args: CreateStaffArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let auth = PgAuthService::new(db.pool().clone());
    let service = PgStaffService::new(db);

    let staff = service
        .create_staff(NewStaffUser {
            uuid: args
                .staff_uuid
                .map_or_else(StaffUuid::new, StaffUuid::from_uuid),
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            contact: args.contact,
            role: args.role,
        })
        .await
        .map_err(|error| format!("failed to create staff user: {error}"))?;

    if let Some(password) = args.password {
        auth.set_password(TokenOwner::Staff(staff.uuid), password)
            .await
            .map_err(|error| format!("failed to set staff password: {error}"))?;
    }

    println!("staff_uuid: {}", staff.uuid);
    println!("email: {}", staff.email);
    println!("role: {}", staff.role);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: CreateStaffArgs,
    }

    #[test]
    fn password_and_role_are_read_from_flags() -> Result<(), clap::Error> {
        let harness = Harness::try_parse_from([
            "staff-create",
            "--database-url",
            "postgres://localhost/storefront",
            "--first-name",
            "Grace",
            "--last-name",
            "Hopper",
            "--email",
            "grace@example.com",
            "--contact",
            "07700 900001",
            "--role",
            "admin",
            "--password",
            "correct horse battery",
        ])?;

        assert_eq!(harness.args.role, StaffRole::Admin);
        assert_eq!(harness.args.password.as_deref(), Some("correct horse battery"));

        Ok(())
    }
}
