//! Command-line interface entry point for `GradeTracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_tracker::config::Config;
use logger::{enable_debug, enable_verbose, error, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            Ok(())
        }
        Command::Student { subcommand } => commands::student::run(subcommand, &config),
        Command::Course { subcommand } => commands::course::run(subcommand, &config),
        Command::Enroll { student, course } => {
            commands::course::enroll(student, &course, &config)
        }
        Command::Drop { student, course } => {
            commands::course::drop_enrollment(student, &course, &config)
        }
        Command::Grade { subcommand } => commands::grade::run(subcommand, &config),
        Command::Gpa { student } => commands::report::gpa(student, &config),
        Command::Report { student, output } => {
            commands::report::student(student, output.as_deref(), &config)
        }
        Command::Summary => commands::report::summary(&config),
        Command::Check => commands::report::check(&config),
    };

    if let Err(e) = outcome {
        error!("{e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
