//! GreenLeaf CLI - Provisioning and data management tools.
//!
//! # Usage
//!
//! ```bash
//! # Provision an admin user (writes data/users.json)
//! gl-cli user add -u admin -p 'a-long-password'
//!
//! # List provisioned users
//! gl-cli user list
//!
//! # Write the starter catalog (refuses to clobber unless --force)
//! gl-cli seed
//! gl-cli seed --force
//! ```
//!
//! Paths come from the same `GREENLEAF_DATA_DIR` configuration the server
//! reads, so the CLI always edits the files the server will serve.
//!
//! # Commands
//!
//! - `user add` - Provision an admin credential
//! - `user list` - List provisioned usernames
//! - `seed` - Write the starter product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

mod commands;

#[derive(Parser)]
#[command(name = "gl-cli")]
#[command(author, version, about = "GreenLeaf Pharmacy CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Seed the product catalog with starter data
    Seed {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Provision a new admin user
    Add {
        /// Login name (case-sensitive)
        #[arg(short, long)]
        username: String,

        /// Password to hash and store
        #[arg(short, long)]
        password: String,
    },
    /// List provisioned usernames
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::User { action } => match action {
            UserAction::Add { username, password } => {
                // Wrap as early as possible so the password never shows up
                // in debug output.
                let password = SecretString::from(password);
                commands::user::add(&username, &password).await?;
            }
            UserAction::List => commands::user::list().await?,
        },
        Commands::Seed { force } => commands::seed::catalog(force).await?,
    }
    Ok(())
}
