use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use spa_router::config::{load_config, validate_config, AppConfig, ConfigError};
use spa_router::navigation::NavigationTarget;
use spa_router::routing::{RouteTable, RouteTarget};

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect and check the SPA route table", long_about = None)]
struct Cli {
    /// Config file to read. Built-in route table when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route
    Routes,
    /// Resolve a path (`/test2`) or route name (`TestPageTwo`)
    Resolve { target: String },
    /// Validate the config and report every problem
    Check,
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli, &mut io::stdout().lock()) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<Status, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(ConfigError::Validation(errors)) => {
                for e in &errors {
                    eprintln!("error: {}", e);
                }
                return Ok(Status::Failure);
            }
            Err(e) => return Err(e.into()),
        },
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Routes => {
            let table = config.route_table()?;
            print_routes(&table, out)?;
        }
        Commands::Resolve { target } => {
            let table = config.route_table()?;
            let path = match NavigationTarget::parse(&target) {
                NavigationTarget::Path(path) => path,
                NavigationTarget::Name(name) => match table.path_for_name(&name) {
                    Some(path) => path.to_string(),
                    None => {
                        eprintln!("error: no route named {}", name);
                        return Ok(Status::Failure);
                    }
                },
            };
            let outcome = table.resolve(&path);
            writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
            if outcome.is_not_found() {
                return Ok(Status::Failure);
            }
        }
        Commands::Check => {
            // load_config already validated a file; defaults are checked here.
            if let Err(errors) = validate_config(&config) {
                for e in &errors {
                    eprintln!("error: {}", e);
                }
                return Ok(Status::Failure);
            }
            writeln!(out, "ok: {} routes", config.routes.len())?;
        }
    }

    Ok(Status::Success)
}

fn print_routes(table: &RouteTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<12} {:<16} BEHAVIOR", "PATH", "NAME")?;
    for route in table.routes() {
        let behavior = match route.target() {
            RouteTarget::View(view) => format!("render {}", view),
            RouteTarget::Redirect(target) => format!("redirect to {}", target),
        };
        writeln!(
            out,
            "{:<12} {:<16} {}",
            route.path(),
            route.name().unwrap_or("-"),
            behavior
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (Status, String) {
        let cli = Cli::try_parse_from(std::iter::once("router-cli").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let status = run(cli, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_routes_lists_table() {
        let (status, out) = run_args(&["routes"]);
        assert_eq!(status, Status::Success);
        assert!(out.contains("redirect to /test1"));
        assert!(out.contains("TestPageThree"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn test_resolve_by_path_and_name() {
        let (status, by_path) = run_args(&["resolve", "/test2"]);
        assert_eq!(status, Status::Success);
        let (status, by_name) = run_args(&["resolve", "TestPageTwo"]);
        assert_eq!(status, Status::Success);
        assert_eq!(by_path, by_name);

        let json: serde_json::Value = serde_json::from_str(&by_path).unwrap();
        assert_eq!(json["outcome"], "found");
        assert_eq!(json["view"], "Test2");
    }

    #[test]
    fn test_resolve_failures() {
        let (status, out) = run_args(&["resolve", "/nope"]);
        assert_eq!(status, Status::Failure);
        assert!(out.contains("not_found"));

        let (status, out) = run_args(&["resolve", "NoSuchPage"]);
        assert_eq!(status, Status::Failure);
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_reports_invalid_file() {
        let path = std::env::temp_dir().join(format!("router-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "[[routes]]\npath = \"/a\"\nredirect = \"/a\"\n").unwrap();
        let (status, _) = run_args(&["--config", path.to_str().unwrap(), "check"]);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(status, Status::Failure);

        let (status, out) = run_args(&["check"]);
        assert_eq!(status, Status::Success);
        assert_eq!(out.trim(), "ok: 4 routes");
    }
}
