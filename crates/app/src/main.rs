//! Leadgate back-office CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use leadgate_app::{
    database,
    domain::{
        assets::{AssetsService, PgAssetsService, data::AssetUpsert, records::AssetStatus},
        categories::LeadCategory,
        leads::{LeadsService, PgLeadsService},
    },
};

#[derive(Debug, Parser)]
#[command(name = "leadgate-app", about = "Leadgate back-office CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db(DbCommand),

    /// Downloadable asset catalogue
    Asset(AssetCommand),

    /// Captured leads
    Leads(LeadsCommand),
}

#[derive(Debug, Args)]
struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations
    Migrate,
}

#[derive(Debug, Args)]
struct AssetCommand {
    #[command(subcommand)]
    command: AssetSubcommand,
}

#[derive(Debug, Subcommand)]
enum AssetSubcommand {
    /// Create an asset, or replace the one with the same slug
    Upsert(UpsertAssetArgs),
}

#[derive(Debug, Args)]
struct UpsertAssetArgs {
    /// Asset category (playbook, whitepaper)
    #[arg(long, value_parser = parse_category)]
    category: LeadCategory,

    /// Stable slug used in download requests
    #[arg(long)]
    slug: String,

    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    /// Cover image reference
    #[arg(long)]
    cover_image: Option<String>,

    /// Location of the downloadable file; the category's default path is used when omitted
    #[arg(long)]
    file_location: Option<String>,

    #[arg(long)]
    featured: bool,

    /// Publish immediately instead of saving as a draft
    #[arg(long)]
    publish: bool,
}

#[derive(Debug, Args)]
struct LeadsCommand {
    #[command(subcommand)]
    command: LeadsSubcommand,
}

#[derive(Debug, Subcommand)]
enum LeadsSubcommand {
    /// Print leads for a category, newest first
    List {
        /// Asset category (playbook, whitepaper)
        #[arg(long, value_parser = parse_category)]
        category: LeadCategory,
    },
}

fn parse_category(value: &str) -> Result<LeadCategory, String> {
    value.parse().map_err(|error| format!("{error}"))
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
    let database_url = cli
        .database_url
        .ok_or_else(|| "DATABASE_URL must be set".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match cli.command {
        Commands::Db(DbCommand {
            command: DbSubcommand::Migrate,
        }) => {
            database::migrate(&pool)
                .await
                .map_err(|error| format!("failed to apply migrations: {error}"))?;

            println!("migrations applied");

            Ok(())
        }
        Commands::Asset(AssetCommand {
            command: AssetSubcommand::Upsert(args),
        }) => upsert_asset(PgAssetsService::new(pool), args).await,
        Commands::Leads(LeadsCommand {
            command: LeadsSubcommand::List { category },
        }) => list_leads(PgLeadsService::new(pool), category).await,
    }
}

async fn upsert_asset(service: PgAssetsService, args: UpsertAssetArgs) -> Result<(), String> {
    let status = if args.publish {
        AssetStatus::Published
    } else {
        AssetStatus::Draft
    };

    let asset = service
        .upsert_asset(AssetUpsert {
            slug: args.slug,
            category: args.category,
            title: args.title,
            description: args.description,
            cover_image: args.cover_image,
            file_location: args.file_location,
            featured: args.featured,
            status,
        })
        .await
        .map_err(|error| format!("failed to save asset: {error}"))?;

    println!("slug: {}", asset.slug);
    println!("category: {}", asset.category);
    println!("status: {}", asset.status.as_str());
    println!("download: {}", asset.download_location());

    Ok(())
}

async fn list_leads(service: PgLeadsService, category: LeadCategory) -> Result<(), String> {
    let leads = service
        .list_leads(category)
        .await
        .map_err(|error| format!("failed to list leads: {error}"))?;

    for lead in &leads {
        let downloaded = lead
            .downloaded_at
            .map_or_else(|| "-".to_string(), |at| at.to_string());

        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            lead.created_at,
            lead.name,
            lead.email,
            lead.company,
            lead.asset_slug,
            lead.status,
            downloaded
        );
    }

    println!("{} {category} lead(s)", leads.len());

    Ok(())
}
