use std::time::{SystemTime, UNIX_EPOCH};

use movement_demo::{
    config::{BANNER_WIDTH, TEST_CASES},
    session, Session,
};
use movement_msg::{
    command::{MovementCommand, MovementPayload},
    message::{MissionTime, Position},
    telemetry::HkTelemetry,
};
use tracing::info_span;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> session::Result<()> {
    // reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== SAMPLE APP MOVEMENT COMMAND TEST ===");
    println!("This demonstrates the external command interface for setting coordinates");

    let mut session = Session::new();

    for (index, target) in TEST_CASES.iter().enumerate() {
        let span = info_span!("test_case", case = index + 1);
        let _entered = span.enter();

        if let Err(error) = run_case(&mut session, *target) {
            log::error!("Test case {} failed: {error}", index + 1);
            return Err(error);
        }

        println!("\n{}", "=".repeat(BANNER_WIDTH));
    }

    print_usage();
    Ok(())
}

/// Send one movement command and show the telemetry it would produce.
fn run_case(session: &mut Session, target: Position) -> session::Result<()> {
    let (command, packet) = session.movement_command(target, mission_time())?;
    println!("\n{command}");
    println!("Payload (hex): {}", command.payload.to_hex());

    let decoded = session::parse_command(&packet)?;
    if decoded.target() == target {
        log::info!("Command payload read back: {:?}", decoded.target());
    } else {
        log::warn!(
            "Command payload changed on the wire: sent {:?}, read {:?}",
            target,
            decoded.target()
        );
    }

    let (telemetry, packet) = session.telemetry_response(&command, mission_time())?;
    println!("\n{telemetry}");

    let decoded = session::parse_telemetry(&packet)?;
    log::info!(
        "Telemetry read back: counters ({}, {}), position {:?}",
        decoded.payload.command_counter,
        decoded.payload.command_error_counter,
        decoded.current()
    );

    Ok(())
}

fn mission_time() -> MissionTime {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    MissionTime::from_duration(elapsed)
}

fn print_usage() {
    println!("\n=== HOW TO USE IN A REAL FLIGHT SYSTEM ===");
    println!("1. Build and run the flight software with the modified sample app");
    println!("2. Send commands from the ground station:");
    println!("   - Message ID: {}", MovementCommand::MESSAGE_ID);
    println!(
        "   - Function Code: {} (SAMPLE_APP_MOVEMENT_CC)",
        MovementCommand::FUNCTION_CODE
    );
    println!(
        "   - Payload: {} bytes (3 doubles for x, y, z)",
        MovementPayload::SIZE
    );
    println!("3. Subscribe to telemetry MID: {}", HkTelemetry::MESSAGE_ID);
    println!("4. Coordinate values will appear in housekeeping telemetry");
}
