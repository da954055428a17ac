use std::sync::Arc;

use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use liveradio::{
    auth::SessionProbe,
    cli,
    client::ApiClient,
    config, error,
    management::SessionManager,
    storage::{AppStorage, LOCAL_STORAGE_NAMESPACE, LocalStorage, RemoteStorage},
    types::{Collection, RadioStation},
};

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
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage the server session
    Auth(AuthOptions),

    /// Handle favorite stations
    Favorites(StationsOptions),

    /// Handle recently played stations
    Recent(StationsOptions),

    /// Run the Live Radio backend service
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthSubcommand {
    /// Sign in to the server; stations are then stored there
    SignIn(SignInOpts),

    /// Sign out; stations are then stored on this device
    SignOut,

    /// Show the current session
    Status,
}

#[derive(Parser, Debug, Clone)]
pub struct SignInOpts {
    /// User name on the server
    #[clap(long)]
    pub user: String,

    /// Server access key (defaults to LIVERADIO_ACCESS_KEY)
    #[clap(long)]
    pub key: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct StationsOptions {
    /// Subcommands (e.g., `add`, `remove`); lists stations when omitted
    #[command(subcommand)]
    pub command: Option<StationsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StationsSubcommand {
    /// List stations
    List,

    /// Add a station
    Add(StationArgs),

    /// Remove a station by id
    Remove { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct StationArgs {
    /// Unique station id (e.g. the radio directory's station uuid)
    #[clap(long)]
    pub id: String,

    #[clap(long)]
    pub name: String,

    /// Stream URL
    #[clap(long)]
    pub url: String,

    #[clap(long)]
    pub homepage: Option<String>,

    #[clap(long)]
    pub favicon: Option<String>,

    /// Tags; can be repeated or comma separated
    #[clap(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,

    #[clap(long)]
    pub country: Option<String>,

    #[clap(long)]
    pub country_code: Option<String>,

    #[clap(long)]
    pub language: Option<String>,

    #[clap(long)]
    pub codec: Option<String>,

    #[clap(long)]
    pub bitrate: Option<u32>,
}

impl From<StationArgs> for RadioStation {
    fn from(args: StationArgs) -> Self {
        let mut station = RadioStation::new(args.id, args.name, args.url);
        station.homepage = args.homepage;
        station.favicon = args.favicon;
        station.tags = args.tags;
        station.country = args.country;
        station.country_code = args.country_code;
        station.language = args.language;
        station.codec = args.codec;
        station.bitrate = args.bitrate;
        station
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn build_client() -> ApiClient {
    let sessions = match SessionManager::new() {
        Ok(sessions) => sessions,
        Err(e) => error!("Cannot locate session file. Err: {}", e),
    };

    match ApiClient::new(config::api_url(), sessions) {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    }
}

fn build_storage(client: &ApiClient) -> AppStorage {
    let local = match LocalStorage::new(LOCAL_STORAGE_NAMESPACE) {
        Ok(local) => local,
        Err(e) => error!("Cannot open local storage. Err: {}", e),
    };

    AppStorage::new(
        Arc::new(local),
        Arc::new(RemoteStorage::new(client.clone())),
        Arc::new(SessionProbe::new(client.sessions().clone())),
    )
}

async fn stations(storage: &AppStorage, collection: Collection, opt: StationsOptions) {
    match opt.command {
        None | Some(StationsSubcommand::List) => cli::list_stations(storage, collection).await,
        Some(StationsSubcommand::Add(args)) => {
            cli::add_station(storage, collection, args.into()).await
        }
        Some(StationsSubcommand::Remove { id }) => {
            cli::remove_station(storage, collection, &id).await
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => {
            let client = build_client();
            match opt.command {
                AuthSubcommand::SignIn(s) => {
                    let Some(key) = s.key.or_else(config::access_key) else {
                        error!("No access key given. Pass --key or set LIVERADIO_ACCESS_KEY.");
                    };
                    cli::sign_in(&client, &s.user, &key).await
                }
                AuthSubcommand::SignOut => cli::sign_out(&client).await,
                AuthSubcommand::Status => cli::status(&client).await,
            }
        }
        Command::Favorites(opt) => {
            let client = build_client();
            let storage = build_storage(&client);
            stations(&storage, Collection::Favorites, opt).await
        }
        Command::Recent(opt) => {
            let client = build_client();
            let storage = build_storage(&client);
            stations(&storage, Collection::RecentStations, opt).await
        }
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
