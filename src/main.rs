use anyhow::{Context, Result};
use bcrypt_kit::{DEFAULT_COST, Hasher, Revision};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
mod auth;

/// Log filter, e.g. `BCRYPT_KIT_LOG=bcrypt_kit=debug`.
const LOG_ENV: &str = "BCRYPT_KIT_LOG";

#[derive(Debug, Parser)]
#[command(name = "bcrypt-kit")]
#[command(version, about = "Hash and verify passwords with bcrypt.")]
struct Cli {
    /// Work factor for new hashes (log2 of rounds, 4-31)
    #[arg(long, global = true, env = "BCRYPT_COST", default_value_t = DEFAULT_COST)]
    cost: u32,

    /// Revision tag for new hashes: 2a, 2b or 2y
    #[arg(long, global = true, env = "BCRYPT_REVISION", default_value_t = Revision::B)]
    revision: Revision,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password read from BCRYPT_PASSWORD, stdin or the terminal
    Hash {
        /// Full salt ($2b$NN$...) or bare 22-character salt body
        #[arg(long)]
        salt: Option<String>,
    },

    /// Checks a password against a stored hash
    #[command(arg_required_else_help = true)]
    Verify { hash: String },

    /// Splits a hash into revision, cost, salt and checksum
    #[command(arg_required_else_help = true)]
    Parse {
        hash: String,

        /// Print as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },

    /// Generates a full salt
    Salt,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn hasher(args: &Cli) -> Result<Hasher> {
    Hasher::new(args.cost, args.revision).context("invalid hasher configuration")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Cli::parse();
    match &args.command {
        Commands::Hash { salt } => {
            let hasher = hasher(&args)?;
            let password = auth::read_password()?;
            let hash = match salt {
                Some(salt) => hasher.hash_with_salt(&password, salt),
                None => hasher.hash(&password),
            }
            .context("failed to hash password")?;
            println!("{hash}");
        }
        Commands::Verify { hash } => {
            let password = auth::read_password()?;
            let matched = bcrypt_kit::verify(&password, hash).context("failed to verify password")?;
            if matched {
                println!("password matches");
            } else {
                println!("password does not match");
                drop(password);
                std::process::exit(1);
            }
        }
        Commands::Parse { hash, json } => {
            let parts = bcrypt_kit::parse(hash).context("failed to parse hash")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                let cost = parts
                    .cost()
                    .map(|c| format!("{c:02}"))
                    .unwrap_or_else(|| "?".to_string());
                println!("{:<9}{}", "Revision", parts.revision());
                println!("{:<9}{}", "Cost", cost);
                println!("{:<9}{}", "Salt", parts.salt_body());
                println!("{:<9}{}", "Checksum", parts.checksum());
            }
        }
        Commands::Salt => {
            let salt = hasher(&args)?
                .generate_salt()
                .context("failed to generate salt")?;
            println!("{salt}");
        }
    }

    Ok(())
}
