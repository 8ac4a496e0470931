mod app;
mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands, FriendAction};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Friends { action } => match action {
            Some(FriendAction::List) | None => commands::friends::run_list(data_dir),
            Some(FriendAction::Add { name }) => commands::friends::run_add(data_dir, &name).await,
            Some(FriendAction::Remove { name }) => {
                commands::friends::run_remove(data_dir, &name).await
            }
        },
        Commands::Feed { section, per_page } => {
            commands::feed::run(data_dir, section, per_page).await
        }
        Commands::New => commands::feed::run_new(data_dir).await,
        Commands::Like { id } => commands::likes::run_toggle(data_dir, id),
        Commands::Liked => commands::likes::run_list(data_dir).await,
        Commands::Status => commands::status::run(data_dir),
        Commands::Version => commands::version::run(),
    }
}
