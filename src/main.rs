use braintree_sdk::codec;
use braintree_sdk::domain::paypal::PayPalVaultRequest;
use braintree_sdk::domain::three_d_secure::ThreeDSecurePostalAddress;
use braintree_sdk::interfaces::csv::LineItemReader;
use braintree_sdk::logging::{LogFormat, init_logging};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Print the gateway JSON for a 3-D Secure billing address
    Address {
        /// JSON file with snake_case address fields
        input: PathBuf,
    },
    /// Print the billing-agreement body for a PayPal vault request
    Vault {
        /// JSON file with snake_case request fields
        input: PathBuf,

        /// CSV file of line items appended to the request
        #[arg(long)]
        line_items: Option<PathBuf>,

        /// Scheme used to build the return and cancel URLs
        #[arg(long, default_value = "com.example.app.braintree")]
        return_url_scheme: String,
    },
    /// Encode a PayPal vault request with the binary codec and decode it again
    Parcel {
        input: PathBuf,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).into_diagnostic()?;
    serde_json::from_reader(file).into_diagnostic()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Command::Address { input } => {
            let address: ThreeDSecurePostalAddress = read_json(&input)?;
            println!("{}", address.to_json());
        }
        Command::Vault {
            input,
            line_items,
            return_url_scheme,
        } => {
            let mut request: PayPalVaultRequest = read_json(&input)?;
            if let Some(path) = line_items {
                let file = File::open(path).into_diagnostic()?;
                for item in LineItemReader::new(file).line_items() {
                    match item {
                        Ok(item) => request = request.add_line_item(item),
                        Err(e) => tracing::warn!("skipping line item: {}", e),
                    }
                }
            }
            let body = request.to_json(
                &format!("{return_url_scheme}://onetouch/v1/success"),
                &format!("{return_url_scheme}://onetouch/v1/cancel"),
            );
            println!("{body}");
        }
        Command::Parcel { input } => {
            let request: PayPalVaultRequest = read_json(&input)?;
            let bytes = codec::to_bytes(&request).into_diagnostic()?;
            let len = bytes.len();
            let decoded: PayPalVaultRequest = codec::from_bytes(bytes).into_diagnostic()?;
            println!("bytes={len} round_trip={}", decoded == request);
        }
    }

    Ok(())
}
