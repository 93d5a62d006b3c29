use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{error, info};

use hub_transport::{HubBus, MockBus};
use sensor_hub::{ReadingRecord, Register, RegisterBuffer, SensorReading};

mod config;
mod render;

use config::HubConfig;

#[derive(Parser, Debug)]
#[command(
    name = "hub",
    version,
    about = "Environmental sensor hub reader",
    disable_help_subcommand = true
)]
struct Cli {
    /// Optional JSON config file (bus, address, interval_ms)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Backend {
    Mock,
    I2c,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available buses
    List {
        /// Backend to query
        #[arg(long, value_enum, default_value_t = Backend::Mock)]
        backend: Backend,
    },
    /// Read the hub and print its readings
    Read {
        #[arg(long, value_enum, default_value_t = Backend::Mock)]
        backend: Backend,
        /// I²C adapter number (overrides config)
        #[arg(long)]
        bus: Option<u8>,
        /// 7-bit slave address, hex like 0x17 (overrides config)
        #[arg(long, value_parser = parse_hex_u16)]
        address: Option<u16>,
        /// Number of readings; 0 reads until interrupted
        #[arg(long, default_value_t = 1u32)]
        count: u32,
        /// Delay between readings in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Print one JSON record per reading
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Decode register bytes given on the command line
    Decode {
        /// Register bytes in hex, e.g. 17 2C 01 00 ...
        #[arg(required = true)]
        bytes: Vec<String>,
        /// Address of the first byte
        #[arg(long, value_parser = parse_hex_u8, default_value = "0x01")]
        base: u8,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Print the register map
    Registers,
}

/// Register image served by the mock backend: everything healthy, 23 °C outside,
/// 300 lux, 101005 Pa, someone present.
const MOCK_IMAGE: [u8; Register::BLOCK_LEN] = [
    23, 0x2C, 0x01, 0x00, 22, 41, 0x00, 21, 0x8D, 0x8A, 0x01, 0x00, 0x01,
];

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    info!("hub starting");

    let cfg = HubConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::List { backend } => list_backend(backend),
        Commands::Read {
            backend,
            bus,
            address,
            count,
            interval_ms,
            json,
        } => {
            let opts = ReadOpts {
                bus: bus.unwrap_or(cfg.bus),
                address: address.unwrap_or(cfg.address),
                count,
                interval: Duration::from_millis(interval_ms.unwrap_or(cfg.interval_ms)),
                json,
            };
            read_backend(backend, &opts)
        }
        Commands::Decode { bytes, base, json } => decode_hex(&bytes, base, json),
        Commands::Registers => {
            print_registers();
            Ok(())
        }
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

struct ReadOpts {
    bus: u8,
    address: u16,
    count: u32,
    interval: Duration,
    json: bool,
}

fn list_backend(backend: Backend) -> Result<()> {
    let buses = match backend {
        Backend::Mock => MockBus::list()?,
        Backend::I2c => list_i2c()?,
    };
    for bus in buses {
        println!("{}\t{}", bus.name, bus.driver);
    }
    Ok(())
}

#[cfg(feature = "i2c")]
fn list_i2c() -> Result<Vec<hub_transport::BusInfo>> {
    Ok(hub_transport::I2cBus::list()?)
}

#[cfg(not(feature = "i2c"))]
fn list_i2c() -> Result<Vec<hub_transport::BusInfo>> {
    anyhow::bail!("built without the `i2c` feature")
}

fn read_backend(backend: Backend, opts: &ReadOpts) -> Result<()> {
    info!(?backend, bus = opts.bus, address = opts.address, "opening hub");
    match backend {
        Backend::Mock => {
            let mut bus = MockBus::open(opts.bus, opts.address)?;
            bus.load(Register::FIRST.address(), &MOCK_IMAGE)?;
            read_loop(&mut bus, opts)
        }
        Backend::I2c => read_i2c(opts),
    }
}

#[cfg(feature = "i2c")]
fn read_i2c(opts: &ReadOpts) -> Result<()> {
    let mut bus = hub_transport::I2cBus::open(opts.bus, opts.address)
        .with_context(|| format!("opening i2c bus {} at 0x{:02X}", opts.bus, opts.address))?;
    read_loop(&mut bus, opts)
}

#[cfg(not(feature = "i2c"))]
fn read_i2c(_opts: &ReadOpts) -> Result<()> {
    anyhow::bail!("built without the `i2c` feature")
}

fn read_loop<B: HubBus>(bus: &mut B, opts: &ReadOpts) -> Result<()> {
    let mut n: u32 = 0;
    loop {
        match sensor_hub::read_reading(bus) {
            Ok(reading) => print_reading(&reading, opts.json)?,
            Err(e) => {
                error!("read failed: {e}");
                return Err(e).context("reading sensor hub");
            }
        }
        n += 1;
        if opts.count != 0 && n >= opts.count {
            break;
        }
        thread::sleep(opts.interval);
    }
    Ok(())
}

fn decode_hex(items: &[String], base: u8, json: bool) -> Result<()> {
    let bytes = parse_hex_bytes(items)?;
    let reading = sensor_hub::decode(&RegisterBuffer::new(base, bytes))?;
    print_reading(&reading, json)
}

fn print_reading(reading: &SensorReading, json: bool) -> Result<()> {
    if json {
        let rec = ReadingRecord::new(reading, Some(OffsetDateTime::now_utc()));
        println!("{}", serde_json::to_string(&rec)?);
    } else {
        print!("{}", render::render_text(reading));
    }
    Ok(())
}

fn print_registers() {
    for r in Register::ALL {
        println!("0x{:02X}\t{}", r.address(), r.name());
    }
}

fn parse_hex_bytes(items: &[String]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(items.len());
    for s in items {
        let t = s.trim();
        let no_prefix = t.strip_prefix("0x").unwrap_or(t);
        let b = u8::from_str_radix(no_prefix, 16)
            .map_err(|e| anyhow::anyhow!("invalid hex byte '{t}': {e}"))?;
        out.push(b);
    }
    Ok(out)
}

fn parse_hex_u8(s: &str) -> Result<u8, String> {
    let t = s.trim();
    let no_prefix = t.strip_prefix("0x").unwrap_or(t);
    u8::from_str_radix(no_prefix, 16).map_err(|e| format!("invalid hex '{t}': {e}"))
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let t = s.trim();
    let no_prefix = t.strip_prefix("0x").unwrap_or(t);
    u16::from_str_radix(no_prefix, 16).map_err(|e| format!("invalid hex '{t}': {e}"))
}
