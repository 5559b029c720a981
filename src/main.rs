mod cli;
mod config;
mod model;
mod report;
mod roster;
mod storage;

use std::process;

use config::Config;
use roster::Roster;
use storage::FileStore;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let root = config
        .data_dir
        .or_else(FileStore::default_root)
        .unwrap_or_else(|| {
            eprintln!("Could not determine home directory.");
            process::exit(1);
        });

    let store = match FileStore::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    let mut roster = match Roster::load(store) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load roster: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&mut roster) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
