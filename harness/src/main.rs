//! Command-line entry point: `run` (default), `cases` and `backends`.

use clap::{Args, Parser, Subcommand};
use harness::{
    ConfigOverrides, FailurePolicy, ReportFormat, SuiteConfig, TestSuite, COSHF_CASES, PASS,
};
use mathfn::Backend;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "Checks single-precision hyperbolic cosine against a reference table")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the accuracy checks (default)
    Run(RunArgs),
    /// Print the reference table
    Cases,
    /// List available cosh backends
    Backends,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Backend to check (std or libm)
    #[arg(short, long)]
    backend: Option<Backend>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Keep going after a failed check
    #[arg(long)]
    continue_on_failure: bool,
    /// Emit the run report as JSON
    #[arg(long)]
    json: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    ExitCode::from(execute(Cli::parse()))
}

/// Runs the selected command and maps the outcome to a process exit code.
fn execute(cli: Cli) -> u8 {
    let result = match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(args),
        Commands::Cases => {
            list_cases();
            Ok(PASS)
        }
        Commands::Backends => {
            list_backends();
            Ok(PASS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            USAGE_ERROR
        }
    }
}

impl RunArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend: self.backend,
            failure_policy: self
                .continue_on_failure
                .then_some(FailurePolicy::Continue),
            log_level: self.log_level.clone(),
            report_format: self.json.then_some(ReportFormat::Json),
        }
    }
}

fn load_config(args: &RunArgs) -> Result<SuiteConfig, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => SuiteConfig::from_toml_file(path)?,
        None => SuiteConfig::default(),
    };

    Ok(config.with_overrides(args.overrides()))
}

fn run(args: RunArgs) -> Result<u8, Box<dyn std::error::Error>> {
    let config = load_config(&args)?;

    let mut suite = TestSuite::initialize(config)?;
    suite.run(&COSHF_CASES);
    let rendered = suite.render()?;
    let report = suite.terminate()?;

    println!("{}", rendered);
    Ok(report.exit_code())
}

fn list_cases() {
    println!("{:>16} {:>16} {:>16}", "value", "expected", "variance");
    for case in &COSHF_CASES {
        println!(
            "{:>16} {:>16} {:>16e}",
            case.value, case.expected, case.variance
        );
    }
}

fn list_backends() {
    println!("Available backends:");
    for backend in Backend::ALL {
        println!("  - {}: {}", backend, backend.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run_args(argv: &[&str]) -> RunArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => args,
            _ => panic!("expected the run subcommand"),
        }
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_backend_flag_beats_config_file() {
        let file = config_file("backend = \"libm\"\n");
        let path = file.path().to_str().unwrap();

        let args = run_args(&["harness", "run", "--config", path, "--backend", "std"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.backend, Backend::Std);

        let args = run_args(&["harness", "run", "--config", path]);
        assert_eq!(load_config(&args).unwrap().backend, Backend::Libm);
    }

    #[test]
    fn test_continue_flag_beats_config_file() {
        let file = config_file("failure_policy = \"fail_fast\"\nlog_level = \"warn\"\n");
        let path = file.path().to_str().unwrap();

        let args = run_args(&["harness", "run", "-c", path, "--continue-on-failure", "--json"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_bad_log_level_exits_with_usage_error() {
        let cli = Cli::try_parse_from(["harness", "run", "--log-level", "loud"]).unwrap();
        assert_eq!(execute(cli), USAGE_ERROR);
    }

    #[test]
    fn test_missing_config_file_exits_with_usage_error() {
        let cli =
            Cli::try_parse_from(["harness", "run", "--config", "/nonexistent/suite.toml"]).unwrap();
        assert_eq!(execute(cli), USAGE_ERROR);
    }

    #[test]
    fn test_unknown_backend_is_rejected_by_parser() {
        let err = Cli::try_parse_from(["harness", "run", "--backend", "cuda"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), i32::from(USAGE_ERROR));
    }

    #[test]
    fn test_passing_run_exits_zero() {
        let cli = Cli::try_parse_from(["harness", "run", "--backend", "libm"]).unwrap();
        assert_eq!(execute(cli), PASS);
    }

    #[test]
    fn test_listing_commands_exit_zero() {
        assert_eq!(execute(Cli::try_parse_from(["harness", "cases"]).unwrap()), PASS);
        assert_eq!(execute(Cli::try_parse_from(["harness", "backends"]).unwrap()), PASS);
    }
}
