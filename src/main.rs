use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vendsim::application::driver::{Driver, demo_script};
use vendsim::application::machine::{StockLevel, VendingMachine};
use vendsim::config::MachineConfig;
use vendsim::infrastructure::observer::TracingObserver;
use vendsim::interfaces::csv::outcome_writer::OutcomeWriter;
use vendsim::interfaces::csv::script_reader::ScriptReader;

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script CSV file with `action, target` rows. Runs the demo interaction when omitted.
    script: Option<PathBuf>,

    /// Coins of each denomination loaded at start-up and on reset.
    #[arg(long, default_value_t = MachineConfig::DEFAULT_COIN_STOCK)]
    coin_stock: u32,

    /// Units of each item loaded at start-up and on reset.
    #[arg(long, default_value_t = MachineConfig::DEFAULT_ITEM_STOCK)]
    item_stock: u32,

    /// Format of the log lines written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    let result = match format {
        LogFormat::Pretty => builder.with_ansi(io::stderr().is_terminal()).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| miette!("Failed to initialise logging: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    let config = MachineConfig::new(cli.coin_stock, cli.item_stock);
    let machine =
        VendingMachine::with_config(config).with_observer(Box::new(TracingObserver::new()));
    let mut driver = Driver::new(machine);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    if let Some(path) = cli.script {
        let file = File::open(path).into_diagnostic()?;
        for action in ScriptReader::new(file).actions() {
            match action {
                Ok(action) => writer.write(&driver.apply(action)).into_diagnostic()?,
                Err(e) => error!(error = %e, "Error reading script row"),
            }
        }
    } else {
        for action in demo_script() {
            writer.write(&driver.apply(action)).into_diagnostic()?;
        }
    }
    writer.flush().into_diagnostic()?;

    for level in driver.selector().stock_report() {
        match level {
            StockLevel::Coin(coin, quantity) => info!(%coin, quantity, "Coin stock"),
            StockLevel::Item(item, quantity) => info!(%item, quantity, "Item stock"),
        }
    }

    Ok(())
}
