//! Paydesk CLI - Inspect, pay and return orders from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show an order with its customer expanded
//! paydesk orders get or_1Hh1 --expand customer
//!
//! # List recent paid orders
//! paydesk orders list --status paid --limit 5
//!
//! # Pay an order with a tokenized card
//! paydesk orders pay or_1Hh1 --source tok_visa
//!
//! # Return every item of an order
//! paydesk orders return or_1Hh1
//! ```
//!
//! Configuration is read from the environment (see `paydesk_client::config`).
//! Set `PAYDESK_LOG_JSON=1` for JSON logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use paydesk_client::{Client, ClientConfig};
use paydesk_core::OrderStatus;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "paydesk")]
#[command(author, version, about = "Paydesk order tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Show a single order
    Get {
        /// Order ID (`or_...`)
        id: String,

        /// Field to expand, e.g. `customer` or `items.parent` (repeatable)
        #[arg(short, long)]
        expand: Vec<String>,
    },
    /// List orders, most recent first
    List {
        /// Only orders in this status
        #[arg(long)]
        status: Option<OrderStatus>,

        /// Only orders for this customer ID
        #[arg(long)]
        customer: Option<String>,

        /// Maximum number of orders to show
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Pay an order
    Pay {
        /// Order ID (`or_...`)
        id: String,

        /// Payment token or source ID (`tok_...`, `src_...`)
        #[arg(short, long)]
        source: String,

        /// Receipt email, when the order has none
        #[arg(long)]
        email: Option<String>,
    },
    /// Return all items of a paid order
    Return {
        /// Order ID (`or_...`)
        id: String,
    },
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "paydesk=info,paydesk_client=info,paydesk_core=info".into());
    let json = std::env::var_os("PAYDESK_LOG_JSON").is_some();

    // stdout carries command output only
    log_subscriber(env_filter, json, std::io::stderr).init();
}

/// Build the log subscriber; both formats write to `writer`.
fn log_subscriber<W>(
    env_filter: EnvFilter,
    json: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(writer.clone())
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(writer));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let client = Client::new(&config)?;

    match cli.command {
        Commands::Orders { action } => match action {
            OrderAction::Get { id, expand } => {
                commands::orders::get(&client, &id, expand).await?;
            }
            OrderAction::List {
                status,
                customer,
                limit,
            } => commands::orders::list(&client, status, customer, limit).await?,
            OrderAction::Pay { id, source, email } => {
                commands::orders::pay(&client, &id, &source, email).await?;
            }
            OrderAction::Return { id } => commands::orders::return_all(&client, &id).await?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use clap::CommandFactory;

    use super::*;

    /// In-memory log sink.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs(json: bool) -> String {
        let sink = Captured::default();
        let subscriber = log_subscriber(EnvFilter::new("info"), json, sink.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 2, "Listed orders");
        });
        sink.contents()
    }

    #[test]
    fn test_json_logs_use_given_writer() {
        let logs = capture_logs(true);
        assert!(logs.trim_start().starts_with('{'), "not JSON: {logs}");
        assert!(logs.contains(r#""message":"Listed orders""#));
        assert!(logs.contains(r#""count":2"#));
    }

    #[test]
    fn test_text_logs_use_given_writer() {
        let logs = capture_logs(false);
        assert!(logs.contains("Listed orders"));
        assert!(!logs.trim_start().starts_with('{'));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_status() {
        let cli = Cli::try_parse_from(["paydesk", "orders", "list", "--status", "paid"])
            .expect("parse");
        let Commands::Orders {
            action: OrderAction::List { status, limit, .. },
        } = cli.command
        else {
            panic!("expected list");
        };
        assert_eq!(status, Some(OrderStatus::Paid));
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let result = Cli::try_parse_from(["paydesk", "orders", "list", "--status", "shipped"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_repeated_expand() {
        let cli = Cli::try_parse_from([
            "paydesk", "orders", "get", "or_1", "-e", "customer", "-e", "charge",
        ])
        .expect("parse");
        let Commands::Orders {
            action: OrderAction::Get { id, expand },
        } = cli.command
        else {
            panic!("expected get");
        };
        assert_eq!(id, "or_1");
        assert_eq!(expand, ["customer", "charge"]);
    }
}
