//! Dialink headless client entry point.

#![allow(clippy::print_stdout, reason = "terminal output is the UI")]

mod driver;

use clap::{Parser, ValueEnum};
use dialink_app::{DialogListView, DialogView, Runtime};
use dialink_client::PageLocation;
use url::Url;

use crate::driver::HeadlessDriver;

/// Which page owns the socket.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewKind {
    /// Single-conversation page.
    Dialog,
    /// Conversation-list page.
    Dialogs,
}

/// Dialink headless client
#[derive(Parser, Debug)]
#[command(name = "dialink")]
#[command(about = "Headless client for the Dialink real-time messaging protocol")]
#[command(version)]
struct Args {
    /// Page URL this client pretends to be on, e.g. http://host/dialogs/u7
    page_url: Url,

    /// View that owns the connection
    #[arg(long, value_enum, default_value_t = ViewKind::Dialog)]
    view: ViewKind,

    /// Base label of the dialogs navigation link
    #[arg(long, default_value = "Dialogs")]
    label: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let endpoint = PageLocation::from_page_url(&args.page_url)?.endpoint();
    let driver = HeadlessDriver::new();

    match args.view {
        ViewKind::Dialog => {
            Runtime::new(DialogView::new(), driver, endpoint).run().await?;
        },
        ViewKind::Dialogs => {
            Runtime::new(DialogListView::new(args.label), driver, endpoint).run().await?;
        },
    }

    Ok(())
}
