use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "suitesel")]
#[command(version, about = "Cipher suite selection CLI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a rule string and print the selected suites
    Eval {
        /// Rule string (defaults to $SUITESEL_CIPHER_SUITES)
        rule: Option<String>,

        /// Print OpenSSL names instead of standard names
        #[arg(long)]
        openssl: bool,
    },
    /// Show how each token of a rule string is interpreted
    Explain {
        /// Rule string
        rule: String,
    },
    /// Validate a cipher policy file (TOML or YAML)
    Check {
        /// Path to the policy file
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Eval { rule, openssl } => commands::rules::eval(rule.as_deref(), openssl)?,
        Commands::Explain { rule } => commands::rules::explain(&rule)?,
        Commands::Check { file } => commands::policy::check(&file)?,
    }

    Ok(())
}
