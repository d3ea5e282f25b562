//! dining — the classic five-philosopher table, driven from the terminal.
//!
//! Every philosopher prints a line each time it starts thinking or eating.
//! Press ENTER to ask everyone to leave; the program waits until the last
//! philosopher has finished its current cycle and then exits.

mod settings;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use dp_dinner::{ConsoleObserver, DinnerBuilder};

use settings::Cli;

fn main() -> Result<()> {
    // stdout carries the philosophers' lines; diagnostics go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    info!(
        philosophers = config.philosopher_count,
        min_delay_ms = config.min_delay_ms,
        max_delay_ms = config.max_delay_ms,
        "configuration loaded"
    );

    let dinner = DinnerBuilder::new(config).observer(ConsoleObserver).build()?;

    println!("Press ENTER to exit");
    let running = dinner.start()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    running.request_shutdown();
    println!("Waiting for philosophers to exit...");
    let report = running.await_all()?;

    info!(total_meals = report.total_meals(), seed = report.seed, "dinner finished");
    for (id, meals) in report.meals.iter().enumerate() {
        info!(philosopher = id, meals, "meals eaten");
    }
    Ok(())
}
