use clap::Parser;
use flashpay::application::engine::{EngineConfig, LedgerEngine};
use flashpay::domain::ports::SnapshotStoreBox;
use flashpay::infrastructure::in_memory::InMemorySnapshotStore;
use flashpay::infrastructure::json_file::JsonFileStore;
use flashpay::interfaces::csv::command_reader::CommandReader;
use flashpay::interfaces::csv::summary_writer::SummaryWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input command script (CSV: op, target, amount, value)
    script: PathBuf,

    /// Path to a persistent state file (optional). If provided, the ledger
    /// is restored from it and every transition is committed back.
    #[arg(long)]
    state_path: Option<PathBuf>,

    /// Disable the Wi-Fi/Bluetooth gating of load and sync.
    #[arg(long)]
    no_connectivity_gating: bool,

    /// Settle offline debits straight into history instead of the
    /// pending-sync queue.
    #[arg(long)]
    no_sync_queue: bool,
}

fn main() -> Result<()> {
    flashpay::logging::init_tracing();
    let cli = Cli::parse();

    let store: SnapshotStoreBox = if let Some(state_path) = cli.state_path {
        Box::new(JsonFileStore::new(state_path))
    } else {
        Box::new(InMemorySnapshotStore::new())
    };
    let config = EngineConfig {
        connectivity_gating: !cli.no_connectivity_gating,
        sync_queue: !cli.no_sync_queue,
        ..EngineConfig::default()
    };
    let mut engine = LedgerEngine::new(store, config).into_diagnostic()?;

    // Process commands
    let file = File::open(cli.script).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = command.apply(&mut engine) {
                    eprintln!("Command rejected: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    // Output final state
    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    writer.write_summary(engine.snapshot()).into_diagnostic()?;

    Ok(())
}
