use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use url::Url;
use viewer::favorites::HttpFavoritesRegistry;
use viewer::model::{ComponentKey, EntityModel, SourceEntity};
use viewer::usecases;
use viewer::windowing::{WindowOpener, WindowRequest};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the application the viewer is embedded in.
    #[arg(long)]
    base_url: Url,
    /// Key of the viewed source file.
    #[arg(long)]
    key: String,
    /// Display name of the viewed source file.
    #[arg(long)]
    name: String,
    /// Whether the file is currently a favorite.
    #[arg(long)]
    fav: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Toggle the favorite flag in the remote registry.
    Toggle,
    /// Print the permalink window that would open.
    Permalink {
        /// Highlighted line to carry into the permalink.
        #[arg(long)]
        line: Option<u32>,
    },
    /// Print the raw-source window that would open.
    RawSource,
}

/// Stand-in for the browser: "opening a window" prints the request.
struct StdoutWindows;

impl WindowOpener for StdoutWindows {
    fn open(&self, request: WindowRequest) {
        println!("{} [{}] {}", request.name, request.params, request.url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    let args = Args::parse();
    let model = EntityModel::new(SourceEntity {
        key: ComponentKey::new(args.key),
        name: args.name,
        fav: args.fav,
    });

    match args.command {
        Command::Toggle => {
            let registry = HttpFavoritesRegistry::new(args.base_url);
            let fav = usecases::toggle_favorite(&registry, &model)
                .await
                .context("couldn't toggle the favorite flag")?;

            info!(
                "{} is {} a favorite",
                model.entity().key.value(),
                if fav { "now" } else { "no longer" }
            );
        }
        Command::Permalink { line } => {
            usecases::open_permalink(&StdoutWindows, &args.base_url, &model, line);
        }
        Command::RawSource => {
            usecases::open_raw_source(&StdoutWindows, &args.base_url, &model);
        }
    }

    Ok(())
}
