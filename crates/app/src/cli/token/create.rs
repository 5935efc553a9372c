use clap::Args;
use jiff::Timestamp;
use storefront_app::{
    auth::{PgAuthService, TokenOwner},
    domain::{customers::models::CustomerUuid, staff::models::StaffUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Customer that should own the token
    #[arg(long, conflicts_with = "staff_uuid")]
    customer_uuid: Option<Uuid>,

    /// Staff user that should own the token
    #[arg(long)]
    staff_uuid: Option<Uuid>,

    /// Optional token expiration timestamp (RFC 3339)
    #[arg(long)]
    token_expires_at: Option<String>,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let token_expires_at = parse_token_expires_at(args.token_expires_at.as_deref())?;

    if let Some(expires_at) = token_expires_at.as_ref()
        && *expires_at <= Timestamp::now()
    {
        return Err("token-expires-at must be in the future".to_string());
    }

    let owner = super::owner(args.customer_uuid, args.staff_uuid)
        .ok_or_else(|| "either --customer-uuid or --staff-uuid is required".to_string())?;

    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgAuthService::new(db.pool().clone());

    let issued = service
        .issue_api_token(owner, token_expires_at)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    super::print_owner(issued.metadata.owner);
    println!("token_version: {}", issued.metadata.version.as_i16());
    println!("token_created_at: {}", issued.metadata.created_at);
    if let Some(expires_at) = issued.metadata.expires_at {
        println!("token_expires_at: {expires_at}");
    }
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

fn parse_token_expires_at(raw: Option<&str>) -> Result<Option<Timestamp>, String> {
    raw.map(|value| {
        value
            .parse::<Timestamp>()
            .map_err(|error| format!("invalid token-expires-at timestamp: {error}"))
    })
    .transpose()
}
