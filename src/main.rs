use anyhow::{Context, Result};
use linkedlist::LinkedList;
use std::{env, fs::File, io::Read, process};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod linkedlist;
mod script;

/*
 * Logs go to stderr, filtered by RUST_LOG, so stdout only carries outcomes.
 */
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sll=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sll".to_string());
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            println!("Usage : {} [operation script file]", program);
            process::exit(1);
        }
    };

    let mut f = File::open(&path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;

    let commands = script::parse(&input).context("Failed to parse script")?;
    info!(path = %path, count = commands.len(), "running script");

    let mut list = LinkedList::new();
    for outcome in script::run(&mut list, commands) {
        println!("{}", outcome);
    }
    info!(remaining = list.len(), "done");

    Ok(())
}
