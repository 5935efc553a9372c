use clap::Args;
use storefront_app::{
    auth::{AuthService, PgAuthService, TokenOwner},
    domain::customers::{
        CustomersService, PgCustomersService, data::NewCustomer, models::CustomerUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
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

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    customer_uuid: Option<Uuid>,

    /// Login password; the account cannot log in until one is set
    #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let auth = PgAuthService::new(db.pool().clone());
    let service = PgCustomersService::new(db);

    let customer = service
        .create_customer(NewCustomer {
            uuid: args
                .customer_uuid
                .map_or_else(CustomerUuid::new, CustomerUuid::from_uuid),
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            contact: args.contact,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    if let Some(password) = args.password {
        auth.set_password(TokenOwner::Customer(customer.uuid), password)
            .await
            .map_err(|error| format!("failed to set customer password: {error}"))?;
    }

    println!("customer_uuid: {}", customer.uuid);
    println!("email: {}", customer.email);

    Ok(())
}
