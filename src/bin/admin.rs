//! CLI administration tool for inventory-api.
//!
//! Manages accounts, prints row counts and runs database diagnostics
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for anything missing)
//! cargo run --bin admin -- user create --name alice --email alice@example.com
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Delete an account by name or id
//! cargo run --bin admin -- user delete alice
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `PASSWORD_SCHEME` (optional): `plaintext` (default) or `argon2`, must
//!   match the server so created accounts can log in

use inventory_api::domain::entities::{NewUser, User};
use inventory_api::domain::repositories::{Repository, UserRepository};
use inventory_api::infrastructure::auth::PasswordScheme;
use inventory_api::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing inventory-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        /// Login name
        #[arg(short, long)]
        name: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Role (defaults to "user")
        #[arg(short, long)]
        role: Option<String>,

        /// Password; prompted for if omitted
        #[arg(short, long)]
        password: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Delete an account
    Delete {
        /// Account name or id
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, Arc::new(pool)).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgUserRepository::new(pool);

    match action {
        UserAction::Create {
            name,
            email,
            role,
            password,
            generate,
            yes,
        } => {
            let scheme = password_scheme()?;
            let input = CreateInput {
                name,
                email,
                role,
                password,
                generate,
            };
            create_user(&repo, scheme, input, yes).await?;
        }
        UserAction::List => list_users(&repo).await?,
        UserAction::Delete { name_or_id } => delete_user(&repo, name_or_id).await?,
    }

    Ok(())
}

fn password_scheme() -> Result<PasswordScheme> {
    match std::env::var("PASSWORD_SCHEME") {
        Ok(value) => value
            .parse()
            .map_err(|e: String| anyhow::anyhow!("Invalid PASSWORD_SCHEME: {}", e)),
        Err(_) => Ok(PasswordScheme::default()),
    }
}

struct CreateInput {
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    password: Option<String>,
    generate: bool,
}

/// Creates an account, prompting for any field not given on the command line.
///
/// A generated password is printed once; it is stored encoded with the
/// scheme from `PASSWORD_SCHEME`.
async fn create_user(
    repo: &PgUserRepository,
    scheme: PasswordScheme,
    input: CreateInput,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let name = match input.name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    if repo
        .find_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        anyhow::bail!("An account named '{}' already exists", name);
    }

    let email = match input.email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let (password, generated) = match input.password {
        Some(p) => (p, false),
        None if input.generate => (generate_password(), true),
        None => (
            Password::new()
                .with_prompt("Password")
                .with_confirmation("Repeat password", "Passwords do not match")
                .interact()?,
            false,
        ),
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:   {}", name.cyan());
    println!("  Email:  {}", email.cyan());
    println!(
        "  Role:   {}",
        input.role.as_deref().unwrap_or("user").cyan()
    );
    println!("  Scheme: {}", scheme.as_str().bright_black());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  Save this password now! It is not shown again."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let encoded = scheme
        .hash(&password)
        .map_err(|e| anyhow::anyhow!("Failed to encode password: {}", e))?;

    let user = repo
        .create(NewUser {
            name,
            password: encoded,
            email,
            role: input.role,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!(
        "{} (id {})",
        "✅ Account created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Lists accounts in id order.
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<10} {:<16}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<20} {:<30} {:<10} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.role,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes an account by id (numeric input) or exact name.
///
/// Fails if the account still has transactions.
async fn delete_user(repo: &PgUserRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🗑️  Delete Account".bright_blue().bold());
    println!();

    let user: Option<User> = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let user = user.context("Account not found")?;

    println!("  Name: {}", user.name.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this account?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!();
    println!("{}", "✅ Account deleted".green().bold());
    println!();

    Ok(())
}

/// Prints the row count of every inventory table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Users", "users"),
        ("Categories", "categories"),
        ("Suppliers", "suppliers"),
        ("Products", "products"),
        ("Transactions", "transactions"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {}", table))?;

        println!(
            "  {:<14} {}",
            format!("{}:", label),
            count.to_string().bright_green().bold()
        );
    }

    let stock: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(stock), 0)::BIGINT FROM products")
        .fetch_one(pool)
        .await?;

    println!(
        "  {:<14} {}",
        "Units in stock:",
        stock.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a random 20 character alphanumeric password.
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
