// src/main.rs
use clap::Parser;
use nomp_client_rs::{self, *};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Main entry point for the NOMP client CLI
///
/// # Returns
/// - `Ok(())` on successful execution
/// - `Err(NompError)` if any operation fails
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Delegates to appropriate subcommand handler
/// 3. Propagates any errors upward
fn main() -> Result<(), NompError> {
    let cli = cli::Commands::parse();

    match cli.action {
        cli::Action::Fetch(opts) => fetch_status(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Fetches the pool status and prints a summary
///
/// # Arguments
/// * `opts` - Command line options for the fetch operation
///
/// # Operations
/// 1. Initializes logging
/// 2. Resolves configuration (file, or `--url` shortcut, plus overrides)
/// 3. Builds the transport and client
/// 4. Fetches and prints the normalized status
fn fetch_status(opts: cli::FetchOptions) -> Result<(), NompError> {
    utils::init_logging();

    let mut config = match &opts.url {
        Some(url) => Config::with_base_url(url.clone()),
        None => config::load(&opts.config)?,
    };
    // Apply CLI overrides
    if let Some(user_agent) = opts.user_agent {
        config.user_agent = user_agent;
    }
    if opts.debug {
        config.debug = true;
    }

    let transport = HttpTransport::new(Some(Duration::from_secs(config.timeout_secs)))?;
    let mut client = NompClient::new(&config.base_url, transport, &config.user_agent)?;
    client.set_debug(config.debug);

    log::info!("Fetching pool status from {}", config.base_url);

    let rt = Runtime::new()?;
    let status = rt.block_on(client.get_pool_status())?;

    print_status(&status);
    Ok(())
}

/// Prints a human-readable status summary to stdout
///
/// # Arguments
/// * `status` - The normalized status to display
fn print_status(status: &Status) {
    println!("snapshot time: {}", status.time);
    println!(
        "global: {} workers, {}",
        status.global.workers,
        format_hashrate(status.global.hashrate)
    );

    if !status.algos.is_empty() {
        println!("\nalgorithms:");
        for (name, algo) in &status.algos {
            println!(
                "  {:<12} {:>4} workers  {:>12}",
                name,
                algo.workers,
                format_hashrate(algo.hashrate)
            );
        }
    }

    for (id, pool) in &status.pools {
        println!("\npool {} ({}, {})", id, pool.symbol, pool.algorithm);
        println!(
            "  hashrate {}  workers {}  valid shares {}  invalid shares {}",
            format_hashrate(pool.hashrate),
            pool.worker_count,
            pool.stats.valid_shares,
            pool.stats.invalid_shares
        );
        println!(
            "  blocks: {} pending / {} confirmed / {} orphaned  total paid {}",
            pool.blocks.pending, pool.blocks.confirmed, pool.blocks.orphaned, pool.stats.total_paid
        );
        for (name, worker) in &pool.workers {
            println!(
                "    {:<24} shares {:>12.2}  {:>12}",
                name,
                worker.shares,
                format_hashrate(worker.hashrate)
            );
        }
    }
}

/// Generates configuration template file
///
/// # Arguments
/// * `opts` - Configuration generation options
///
/// # Operations
/// 1. Generates template content
/// 2. Writes template to specified output file
fn generate_config(opts: cli::ConfigOptions) -> Result<(), NompError> {
    let config = config::generate_template();
    std::fs::write(opts.output, config)?;
    Ok(())
}
