//! # Recibo CLI
//!
//! Command-line interface for encoding and printing order receipts.
//!
//! ## Usage
//!
//! ```bash
//! # Encode an order to raw ESC/POS bytes
//! recibo encode order.json --out receipt.bin
//!
//! # Encode to Base64 for a print app
//! recibo encode order.json --base64
//!
//! # Show what the receipt will look like
//! recibo preview order.json
//!
//! # Preview an existing byte stream (raw or Base64)
//! recibo decode receipt.bin
//! recibo decode receipt.b64 --base64
//!
//! # Print to a Bluetooth printer
//! recibo print order.json --device /dev/rfcomm0
//!
//! # Run the HTTP server
//! recibo serve --listen 0.0.0.0:8080
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`). Logs go to stderr so
//! stdout stays clean for receipt bytes.

use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use recibo::{
    ReciboError,
    json_api::parse_order,
    preview,
    protocol::stream::ByteStream,
    receipt::{Branding, DEFAULT_BRAND, encode_with},
    server::{self, ServerConfig},
    transport::{
        Delivery, DeviceTransport, IntentLink, device::DEFAULT_DEVICE, from_transport_encoding,
        to_transport_encoding,
    },
};

/// Recibo - ESC/POS receipt encoder for 58mm thermal printers
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode an order JSON file into a printer byte stream
    Encode {
        /// Order JSON file ("-" for stdin)
        input: PathBuf,

        /// Write Base64 text instead of raw bytes
        #[arg(long)]
        base64: bool,

        /// Output file (defaults to stdout)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Shop name on the first banner line
        #[arg(long, default_value = DEFAULT_BRAND)]
        brand: String,
    },

    /// Print a text preview of an order's receipt
    Preview {
        /// Order JSON file ("-" for stdin)
        input: PathBuf,

        /// Shop name on the first banner line
        #[arg(long, default_value = DEFAULT_BRAND)]
        brand: String,
    },

    /// Preview an encoded byte stream
    Decode {
        /// Raw byte stream file ("-" for stdin)
        input: PathBuf,

        /// Input is Base64 text
        #[arg(long)]
        base64: bool,
    },

    /// Encode an order and send it to the printer
    Print {
        /// Order JSON file ("-" for stdin)
        input: PathBuf,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Write a rawbt: intent link to stdout instead of opening the device
        #[arg(long)]
        intent: bool,

        /// Shop name on the first banner line
        #[arg(long, default_value = DEFAULT_BRAND)]
        brand: String,
    },

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Shop name on the first banner line
        #[arg(long, default_value = DEFAULT_BRAND)]
        brand: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            base64,
            out,
            brand,
        } => {
            let stream = encode_file(&input, &brand)?;
            let data = if base64 {
                let mut text = to_transport_encoding(&stream);
                text.push('\n');
                text.into_bytes()
            } else {
                stream.into_bytes()
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, &data)?;
                    info!(path = %path.display(), bytes = data.len(), "wrote receipt");
                }
                None => io::stdout().lock().write_all(&data)?,
            }
        }

        Commands::Preview { input, brand } => {
            let stream = encode_file(&input, &brand)?;
            print!("{}", render(stream.as_bytes()));
        }

        Commands::Decode { input, base64 } => {
            let raw = read_input(&input)?;
            let bytes = if base64 {
                from_transport_encoding(&String::from_utf8_lossy(&raw))?
            } else {
                raw
            };
            print!("{}", render(&bytes));
        }

        Commands::Print {
            input,
            device,
            intent,
            brand,
        } => {
            let stream = encode_file(&input, &brand)?;
            if intent {
                IntentLink::new(io::stdout().lock()).deliver(&stream)?;
            } else {
                let mut transport = DeviceTransport::open(&device)?;
                transport.deliver(&stream)?;
                info!(device = %device, "printed successfully");
            }
        }

        Commands::Serve {
            listen,
            device,
            brand,
        } => {
            let config = ServerConfig {
                device_path: device,
                listen_addr: listen,
                branding: Branding::new(brand),
            };
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, ReciboError> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}

fn encode_file(path: &Path, brand: &str) -> Result<ByteStream, ReciboError> {
    let json = String::from_utf8_lossy(&read_input(path)?).into_owned();
    let order = parse_order(&json)?;
    info!(order = %order.id, kind = order.kind.name(), items = order.items.len(), "loaded order");
    Ok(encode_with(&order, &Branding::new(brand)))
}

fn render(bytes: &[u8]) -> String {
    preview::render_receipt(&preview::decode(bytes))
}
