use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "visit-counter")]
#[command(about = "Per-URL visit counter backed by SQLite")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Path of the SQLite file holding the counters
    #[arg(short, long, default_value = "data/visits.db")]
    pub db_path: String,
}
