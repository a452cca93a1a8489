use bucket_table::{command, BucketTable, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::exit;

#[derive(Debug, Parser)]
#[clap(name = "bucket-table")]
#[clap(about = "A fixed-size chained hash table", long_about = None)]
#[clap(version)]
struct Cli {
    /// Number of buckets in the table
    #[clap(long, global = true, default_value_t = 10, value_name = "N")]
    buckets: usize,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fill a table with a few entries, look one up, remove one
    Demo,

    /// Run put/get/rm/dump/len commands, one per line
    Exec {
        /// Script file; reads standard input when omitted
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut table = BucketTable::new(cli.buckets)?;

    match cli.command {
        Commands::Demo => demo(&mut table),
        Commands::Exec { file } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match file {
                Some(path) => {
                    info!("running script {}", path.display());
                    let reader = BufReader::new(File::open(path)?);
                    command::run_script(&mut table, reader, &mut out)?;
                }
                None => {
                    let stdin = io::stdin();
                    command::run_script(&mut table, stdin.lock(), &mut out)?;
                }
            }
        }
    }
    Ok(())
}

fn demo(table: &mut BucketTable<String>) {
    table.put("name".to_owned(), "Danil".to_owned());
    table.put("language".to_owned(), "Rust".to_owned());
    table.put("hobby".to_owned(), "Optimizing code".to_owned());

    println!("Hash table");
    table.dump();

    match table.get("language") {
        Some(value) => println!("\nFound key 'language': {}", value),
        None => println!("\nKey 'language' not found"),
    }

    table.remove("name");
    println!("\nHash table after removing key 'name'");
    table.dump();
}
