//! CLI argument definitions for `GradeTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use grade_tracker::config::ConfigOverrides;
use grade_tracker::models::{CourseId, StudentId};
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Register a new student.
    Add {
        /// Unique student id
        #[arg(long, value_name = "ID")]
        id: StudentId,
        /// Student name
        #[arg(long, value_name = "NAME")]
        name: String,
    },
    /// List every student with their enrolled courses.
    List,
    /// Remove a student.
    ///
    /// Without `--cascade` the student's enrollments and grades stay in their courses.
    Remove {
        /// Student id
        #[arg(long, value_name = "ID")]
        id: StudentId,
        /// Also drop the student from every course and discard their grades
        #[arg(long)]
        cascade: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Create a new course.
    Add {
        /// Unique course id
        #[arg(long, value_name = "ID")]
        id: CourseId,
        /// Unique course code (e.g., CPSC210)
        #[arg(long, value_name = "CODE")]
        code: String,
        /// Course name
        #[arg(long, value_name = "NAME")]
        name: String,
        /// Free-text description
        #[arg(long, value_name = "TEXT", default_value = "")]
        description: String,
        /// Credit hours
        #[arg(long, value_name = "CREDITS")]
        credits: u32,
        /// Maximum attainable percentage
        #[arg(long, value_name = "PERCENT", default_value_t = 100.0)]
        max_percentage: f64,
        /// First day of the course (YYYY-MM-DD); requires `--end`
        #[arg(long, value_name = "DATE", requires = "end")]
        start: Option<NaiveDate>,
        /// Last day of the course (YYYY-MM-DD); requires `--start`
        #[arg(long, value_name = "DATE", requires = "start")]
        end: Option<NaiveDate>,
    },
    /// List every course.
    List,
    /// Remove a course.
    ///
    /// Without `--cascade` students keep the course id in their enrollment lists.
    Remove {
        /// Course id
        #[arg(long, value_name = "ID")]
        id: CourseId,
        /// Also drop the course from every enrolled student
        #[arg(long)]
        cascade: bool,
    },
    /// Show statistics and the letter distribution of one course.
    Show {
        /// Course code
        #[arg(long, value_name = "CODE")]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum GradeSubcommand {
    /// Record or overwrite a student's percentage grade in a course.
    Set {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
        /// Course code
        #[arg(long, value_name = "CODE")]
        course: String,
        /// Percentage grade
        #[arg(long, value_name = "PERCENT")]
        value: f64,
    },
    /// Remove a student's grade from a course, keeping the enrollment.
    Clear {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
        /// Course code
        #[arg(long, value_name = "CODE")]
        course: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage students.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Enroll a student in a course.
    Enroll {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
        /// Course code
        #[arg(long, value_name = "CODE")]
        course: String,
    },
    /// Drop a student from a course, discarding their grade there.
    Drop {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
        /// Course code
        #[arg(long, value_name = "CODE")]
        course: String,
    },
    /// Record or clear grades.
    Grade {
        #[command(subcommand)]
        subcommand: GradeSubcommand,
    },
    /// Print a student's credit-weighted GPA.
    Gpa {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
    },
    /// Generate a markdown grade report for a student.
    Report {
        /// Student id
        #[arg(long, value_name = "ID")]
        student: StudentId,
        /// Output file path (optional; defaults to `<reports_dir>/student-<ID>.md`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print average, median, and standard deviation for every course.
    Summary,
    /// Report student enrollments that point at missing courses.
    Check,
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetracker",
    about = "GradeTracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config snapshot file
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config snapshot file (short form)
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data`) take precedence over long-form flags
    /// (e.g., `--config-data-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_deref().map(path_string),
            verbose: self.config_verbose,
            data_file: self
                .data
                .as_deref()
                .or(self.config_data_file.as_deref())
                .map(path_string),
            reports_dir: self
                .reports_dir
                .as_deref()
                .or(self.config_reports_dir.as_deref())
                .map(path_string),
        }
    }
}
