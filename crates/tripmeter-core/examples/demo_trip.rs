//! Demo Trip
//!
//! Runs the trip engine over the simulated drive and prints the dashboard
//! readings once a second.
//!
//! Usage:
//!   cargo run --example demo_trip -- [OPTIONS]
//!
//! Options:
//!   --seconds N       How long to drive (default: 30)
//!   --limit KMH       Speed limit for the warning (default: 80)
//!   --seed N          Seed the simulator for a repeatable drive

use tripmeter_core::demo::DemoDrive;
use tripmeter_core::geo::Position;
use tripmeter_core::session::{SessionConfig, TripSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut seconds = 30u64;
    let mut limit_kmh = 80.0f64;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seconds" | "-s" => {
                i += 1;
                if i < args.len() {
                    seconds = args[i].parse().unwrap_or(30);
                }
            }
            "--limit" | "-l" => {
                i += 1;
                if i < args.len() {
                    limit_kmh = args[i].parse().unwrap_or(80.0);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                println!("Unknown option: {other}");
                print_help();
                return Ok(());
            }
        }
        i += 1;
    }

    // Munich city center; anywhere works, the drive wanders from here
    let start = Position::new(48.137154, 11.576124);
    let drive = match seed {
        Some(seed) => DemoDrive::seeded(start, seed),
        None => DemoDrive::new(start),
    };

    let session = TripSession::spawn(
        Box::new(drive),
        SessionConfig {
            speed_limit_kmh: limit_kmh,
        },
    );
    let mut snapshots = session.snapshots();

    session.start().await?;
    println!("Driving for {seconds} s with a {limit_kmh} km/h limit...");

    for _ in 0..seconds {
        snapshots.changed().await?;
        let snapshot = snapshots.borrow().clone();
        let readings = &snapshot.readings;
        println!(
            "[{}] {:>6.1} km/h  {:>7.3} km  {}  {}",
            snapshot.wall_clock,
            readings.speed_kmh,
            readings.distance_km,
            readings.duration,
            if snapshot.speed_alert { "OVER LIMIT" } else { "" }
        );
    }

    session.stop().await?;
    let final_snapshot = snapshots.borrow().clone();
    println!(
        "Trip ended: {:.3} km traveled",
        final_snapshot.readings.distance_km
    );

    session.shutdown().await;
    Ok(())
}

fn print_help() {
    println!("Demo Trip - simulated drive through the trip engine");
    println!();
    println!("Usage: cargo run --example demo_trip -- [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seconds N     How long to drive (default: 30)");
    println!("  --limit KMH     Speed limit for the warning (default: 80)");
    println!("  --seed N        Seed the simulator for a repeatable drive");
}
