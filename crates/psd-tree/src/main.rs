// src/main.rs

use psd_tree::{cli, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("psd-tree error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    run(args)
}
