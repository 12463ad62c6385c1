use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use traktcli::{Res, cli, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = "trakt",
  bin_name = "trakt",
  author = env!("CARGO_PKG_AUTHORS"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authenticate with trakt.tv
    #[clap(
        long_about = "Authenticate with trakt.tv. You will need to go to \
                      https://trakt.tv/oauth/applications/new to get a client id and secret."
    )]
    Auth(AuthOptions),

    /// Show your watched history
    History(HistoryOptions),

    /// Search for movies and TV shows
    Search(SearchOptions),

    /// Show the authenticated user's profile
    Whoami,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Client ID of your trakt.tv API application
    #[clap(long)]
    pub client_id: String,

    /// Client secret of your trakt.tv API application
    #[clap(long)]
    pub client_secret: String,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Page to fetch
    #[clap(long, default_value_t = 1)]
    pub page: u32,

    /// Number of items per page
    #[clap(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// What to search for
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Type to search for (movie, show, or movie,show)
    #[clap(long = "type", short = 't', default_value = "movie,show")]
    pub search_type: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Res<()> = match cli.command {
        Command::Auth(opt) => cli::auth(opt.client_id, opt.client_secret).await,
        Command::History(opt) => cli::history(opt.page, opt.limit).await,
        Command::Search(opt) => cli::search(opt.query.join(" "), opt.search_type).await,
        Command::Whoami => cli::whoami().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
