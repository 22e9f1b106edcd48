use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use farmdesk_admin::{App, Config, InboxAction, ListKind, ListRequest, OutputMode};
use farmdesk_query::Timestamp;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "farmdesk",
    version,
    about = "Search, filter and page the farm admin lists"
)]
struct Cli {
    /// Config file (default: $FARMDESK_CONFIG or ./farmdesk.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format; csv exports every match, ignoring pages
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive search term
    #[arg(short, long, default_value = "")]
    search: String,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Records per page (default: from config)
    #[arg(long)]
    page_size: Option<usize>,

    /// JSON file holding the records (default: from config, else built-in)
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List platform users
    Users {
        #[command(flatten)]
        list: ListArgs,

        /// Role fragment, e.g. "owner" or "worker"
        #[arg(long)]
        role: Option<String>,

        /// Exact status: active or inactive
        #[arg(long)]
        status: Option<String>,
    },

    /// List registered farms
    Farms {
        #[command(flatten)]
        list: ListArgs,

        /// Exact status: active or inactive
        #[arg(long)]
        status: Option<String>,
    },

    /// List notifications
    Notifications {
        #[command(flatten)]
        list: ListArgs,

        /// Only unread notifications
        #[arg(long)]
        unread: bool,

        /// Exact kind: farm, user, system or alert
        #[arg(long)]
        kind: Option<String>,

        /// Mark a notification as read (repeatable)
        #[arg(long, value_name = "ID")]
        mark_read: Vec<String>,

        /// Mark every notification as read
        #[arg(long)]
        mark_all_read: bool,

        /// Delete a notification (repeatable)
        #[arg(long, value_name = "ID")]
        delete: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn now() -> Timestamp {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    Timestamp::from_millis(millis)
}

impl ListArgs {
    fn request(&self, kind: ListKind) -> ListRequest {
        let request = ListRequest::new(kind)
            .search(self.search.as_str())
            .page(self.page)
            .page_size(self.page_size);
        match &self.data {
            Some(path) => request.data(path),
            None => request,
        }
    }
}

impl Command {
    fn request(&self) -> ListRequest {
        match self {
            Command::Users { list, role, status } => list
                .request(ListKind::Users)
                .filter("role", role.as_deref())
                .filter("status", status.as_deref()),
            Command::Farms { list, status } => list
                .request(ListKind::Farms)
                .filter("status", status.as_deref()),
            Command::Notifications {
                list,
                unread,
                kind,
                mark_read,
                mark_all_read,
                delete,
            } => {
                let mut request = list
                    .request(ListKind::Notifications)
                    .unread_only(*unread)
                    .filter("kind", kind.as_deref());
                for id in mark_read {
                    request = request.action(InboxAction::MarkRead(id.clone()));
                }
                if *mark_all_read {
                    request = request.action(InboxAction::MarkAllRead);
                }
                for id in delete {
                    request = request.action(InboxAction::Delete(id.clone()));
                }
                request
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let request = cli.command.request();
    let text = App::new(&config, cli.output, now())
        .run(&request)
        .with_context(|| format!("Failed to list {}", request.kind().noun()))?;

    print!("{text}");
    Ok(())
}
