use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use relay::commands::{email::EmailCommand, serve::serve};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = relay_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Email { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server accepting contact form submissions
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
