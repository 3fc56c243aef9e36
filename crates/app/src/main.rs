//! Prato Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use prato_app::{
    auth::{
        PgAuthService,
        models::{NewPrincipal, PrincipalUuid, Role},
        token::{generate_token, hash_token},
    },
    database,
};

#[derive(Debug, Parser)]
#[command(name = "prato-app", about = "Prato CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Principal(PrincipalCommand),
}

#[derive(Debug, Args)]
struct PrincipalCommand {
    #[command(subcommand)]
    command: PrincipalSubcommand,
}

#[derive(Debug, Subcommand)]
enum PrincipalSubcommand {
    Create(CreatePrincipalArgs),
}

#[derive(Debug, Args)]
struct CreatePrincipalArgs {
    /// Principal display name
    #[arg(long)]
    name: String,

    /// Principal role: customer or restaurant
    #[arg(long)]
    role: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Optional principal UUID; generated when omitted
    #[arg(long)]
    principal_uuid: Option<Uuid>,

    /// Optional raw bearer token; generated when omitted
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Principal(PrincipalCommand {
            command: PrincipalSubcommand::Create(args),
        }) => create_principal(args).await,
    }
}

async fn create_principal(args: CreatePrincipalArgs) -> Result<(), String> {
    let role: Role = args
        .role
        .parse()
        .map_err(|error| format!("invalid role: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(pool);
    let principal_uuid = args
        .principal_uuid
        .map_or_else(PrincipalUuid::new, PrincipalUuid::from_uuid);
    let raw_token = args.token.unwrap_or_else(generate_token);

    if raw_token.trim().is_empty() {
        return Err("token cannot be empty".to_string());
    }

    let principal = service
        .create_principal(NewPrincipal {
            uuid: principal_uuid,
            name: args.name,
            role,
            token_hash: hash_token(&raw_token),
        })
        .await
        .map_err(|error| format!("failed to create principal: {error}"))?;

    println!("principal_uuid: {}", principal.uuid);
    println!("principal_name: {}", principal.name);
    println!("principal_role: {}", principal.role);
    println!("bearer_token: {raw_token}");
    println!("store this token now; it is only shown once");

    Ok(())
}
