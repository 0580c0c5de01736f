use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::warn;
use monodigit::solver::constants::DEFAULT_WORKERS;
use monodigit::{Candidate, ExpressionSolver, SearchParams, SolveResult, SolverConfig, Strategy};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Search strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    BestFirst,
    Exhaustive,
    DivideAndConquer,
    Concurrent,
}

impl StrategyArg {
    pub fn to_strategy(self, workers: usize) -> Strategy {
        match self {
            StrategyArg::BestFirst => Strategy::BestFirst,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::DivideAndConquer => Strategy::DivideAndConquer,
            StrategyArg::Concurrent => Strategy::Concurrent { workers },
        }
    }
}

/// Monodigit - Write an integer using only one repeated digit
#[derive(Parser, Debug)]
#[command(name = "monodigit")]
#[command(about = "Find the expression with the fewest copies of one digit that equals a target")]
#[command(version)]
pub struct CliArgs {
    /// Target integer to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// The only digit allowed in the expression
    pub digit: u8,

    /// Maximum number of digit occurrences
    #[arg(short, long, default_value_t = 5)]
    pub budget: i64,

    /// Search strategy
    #[arg(short, long, value_enum, default_value = "best-first")]
    pub strategy: StrategyArg,

    /// Number of workers for the concurrent strategy
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Only use + - * / (no powers or factorials)
    #[arg(long)]
    pub basic: bool,

    /// Stop after processing this many candidates
    #[arg(long)]
    pub node_limit: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub params: SearchParams,
    pub strategy: Strategy,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliArgs {
    /// Validate the arguments and turn them into search settings
    pub fn into_config(self) -> Result<CliConfig> {
        let params = SearchParams::new(self.target, self.digit, self.budget)
            .context("Invalid search parameters")?;

        let mut solver = if self.basic {
            SolverConfig::basic()
        } else {
            SolverConfig::default()
        };
        if let Some(limit) = self.node_limit {
            solver = solver.with_node_limit(limit);
        }

        Ok(CliConfig {
            params,
            strategy: self.strategy.to_strategy(self.workers),
            solver,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn describe(candidate: &Candidate) -> String {
    format!(
        "{} = {} ({} digits)",
        candidate.expression, candidate.value, candidate.digits
    )
}

/// Text printed for a finished search
pub fn format_result(result: &SolveResult) -> String {
    match &result.best_exact {
        Some(best) => describe(best),
        None => format!("No exact match. Closest: {}", describe(&result.approximation)),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);
    let result = solver
        .solve(&config.params, config.strategy)
        .context("Search failed")?;
    if result.best_exact.is_none() {
        warn!("No matching expression found");
    }
    println!("{}", format_result(&result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(target: i64, digit: u8, budget: i64) -> CliArgs {
        CliArgs {
            target,
            digit,
            budget,
            strategy: StrategyArg::BestFirst,
            workers: DEFAULT_WORKERS,
            basic: false,
            node_limit: None,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from([
            "monodigit",
            "-7",
            "3",
            "--budget",
            "4",
            "--strategy",
            "concurrent",
            "--workers",
            "2",
            "--basic",
        ]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.target, -7);
            assert_eq!(parsed.digit, 3);
            assert_eq!(parsed.budget, 4);
            assert_eq!(parsed.strategy, StrategyArg::Concurrent);
            assert_eq!(parsed.workers, 2);
            assert!(parsed.basic);
            assert!(parsed.node_limit.is_none());
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_defaults() {
        let parsed = CliArgs::try_parse_from(["monodigit", "6", "2"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.budget, 5);
            assert_eq!(parsed.strategy, StrategyArg::BestFirst);
            assert_eq!(parsed.workers, DEFAULT_WORKERS);
        }
    }

    #[test]
    fn test_into_config_validates() {
        assert!(args(6, 2, 3).into_config().is_ok());
        assert!(args(6, 12, 3).into_config().is_err());
        assert!(args(6, 2, 0).into_config().is_err());
    }

    #[test]
    fn test_into_config_builds_solver_settings() {
        let mut cli = args(6, 2, 3);
        cli.basic = true;
        cli.node_limit = Some(50);
        cli.strategy = StrategyArg::Concurrent;
        cli.workers = 3;

        let config = cli.into_config();
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert!(!config.solver.extended_operators);
            assert_eq!(config.solver.node_limit, Some(50));
            assert_eq!(config.strategy, Strategy::Concurrent { workers: 3 });
        }
    }

    #[test]
    fn test_format_result() {
        let exact = monodigit::solve(6, 2, 3, Strategy::BestFirst);
        assert!(exact.is_ok());
        if let Ok(exact) = exact {
            assert_eq!(format_result(&exact), "((2*2)+2) = 6 (3 digits)");
        }

        let missed = monodigit::solve(1000, 1, 1, Strategy::BestFirst);
        assert!(missed.is_ok());
        if let Ok(missed) = missed {
            assert_eq!(
                format_result(&missed),
                "No exact match. Closest: 1 = 1 (1 digits)"
            );
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
