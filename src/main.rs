use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use htbrute::charset::Charset;
use htbrute::credentials;
use htbrute::search::{run_distributed_search, SearchConfig};

#[derive(Parser)]
#[command(name = "htbrute")]
#[command(about = "Distributed brute-force search over SHA-1 htpasswd digests")]
#[command(version)]
struct Args {
    /// Credentials file with one 'name:{SHA}base64digest' entry per line
    #[arg(short, long, default_value = "htpasswd-brute")]
    file: PathBuf,

    /// Password length to search
    #[arg(short = 'n', long, default_value_t = 4)]
    length: usize,

    /// Charset selector: any combination of 'n' (digits), 'a' (lowercase),
    /// 'A' (uppercase)
    #[arg(short, long, default_value = "n")]
    charset: String,

    /// Number of worker threads (defaults to the number of CPU cores)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Show per-worker progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let charset = Charset::from_selector(&args.charset)?;
    let entries = credentials::load(&args.file)
        .with_context(|| format!("failed to load credentials from '{}'", args.file.display()))?;

    let config = SearchConfig::default()
        .with_length(args.length)
        .with_workers(args.workers.unwrap_or_else(num_cpus::get))
        .with_verbose(args.verbose);

    println!("{} users found. Password length set to: {}", entries.len(), args.length);
    for (idx, entry) in entries.iter().enumerate() {
        println!(
            "Entry: {:<2} Username: {:<12} Base16: {}",
            idx,
            entry.name,
            hex::encode(entry.digest)
        );
    }
    println!(
        "{} different characters to be used: {}",
        charset.len(),
        charset
    );
    println!(
        "Total passwords to calculate: {:.0}",
        config.keyspace(&charset)
    );
    println!("{} workers starting.", config.num_workers);

    let summary = run_distributed_search(&charset, &entries, &config)?;

    print!("{}", summary.format_summary());

    Ok(())
}
