use graticule_wld::config::{self, CliCommand, RunConfig};
use graticule_wld::estimate::{fit_world_file, FitReport};
use graticule_wld::family::split_families;
use graticule_wld::io::{read_graticule_csv, write_json_file, write_world_file};

use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "graticules2wld".to_string());

    let config = match config::parse_cli(&program, args)? {
        CliCommand::Help => {
            println!("{}", config::usage(&program));
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    let records = read_graticule_csv(&config.input)?;
    let families = split_families(records);
    let report = fit_world_file(families, &config.params).map_err(|e| e.to_string())?;

    if config.debug {
        print_diagnostics(&report);
    }
    if let Some(path) = &config.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    write_world_file(&config.output, &report.world)?;
    finish(&config, &report);
    Ok(())
}

fn print_diagnostics(report: &FitReport) {
    println!(
        "theta = {:.6} deg (spread {:.6} deg over {} lat lines)",
        report.lat.angle_rad.to_degrees(),
        report.lat.angle_spread_rad.to_degrees(),
        report.lat.count
    );
    println!(
        "phi = {:.6} deg (spread {:.6} deg over {} lon lines)",
        report.lon.angle_rad.to_degrees(),
        report.lon.angle_spread_rad.to_degrees(),
        report.lon.count
    );
    println!(
        "x = {} (spread {})",
        report.lon.scale, report.lon.scale_spread
    );
    println!(
        "y = {} (spread {})",
        report.lat.scale, report.lat.scale_spread
    );
    println!();
    println!("World file:");
    for value in report.world.lines() {
        println!("{value}");
    }
    println!();
}

fn finish(config: &RunConfig, report: &FitReport) {
    println!(
        "World file written to {} ({} lat + {} lon lines)",
        config.output.display(),
        report.lat.count,
        report.lon.count
    );
}
