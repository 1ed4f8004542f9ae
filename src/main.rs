//! pareto-check CLI entry point
//!
//! Consistency checks for the Pareto fronts of multi-objective segmentation logs.

use clap::Parser;
use pareto_check::checks::get_checks_by_category;
use pareto_check::cli::args::{Args, CheckArgs, Command, OutputFormat};
use pareto_check::cli::output::{format_comparison, get_formatter};
use pareto_check::commands::stage::{self, StageConfig};
use pareto_check::commands::stats;
use pareto_check::config::{load_config, FileConfig};
use pareto_check::engine::result::{compare_to_baseline, load_baseline, save_report};
use pareto_check::logging::init_logging;
use pareto_check::version::get_build_info;
use pareto_check::{run_checks, CheckCategory, CheckConfig, ParetoCheckError};

use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments; --help and --version are not errors
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(3);
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(3)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, ParetoCheckError> {
    match args.resolved_command() {
        Command::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            print_check_list();
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(check) => {
            let file = load_config(args.config.as_deref())?;
            run_check_command(args, &check, &file)
        }
        Command::Stats(stats_args) => {
            let file = load_config(args.config.as_deref())?;
            println!("{}", stats::run(&stats_args, args.format, &file)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Stage(stage_args) => {
            let file = load_config(args.config.as_deref())?;
            let config = StageConfig::from_args(&stage_args, file.stage.as_ref());
            println!("{}", stage::run(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_version() {
    let info = get_build_info();
    println!("{}", info);
}

fn print_check_list() {
    println!("Available checks:");
    for category in [CheckCategory::Structure, CheckCategory::Efficiency, CheckCategory::Sort] {
        println!();
        println!("{} CHECKS:", category.to_string().to_uppercase());
        for check in get_checks_by_category(category) {
            println!("  {:<8} {}", check.id, check.name);
            println!("           {}", check.description);
        }
    }
}

fn run_check_command(args: &Args, check: &CheckArgs, file: &FileConfig) -> Result<ExitCode, ParetoCheckError> {
    // Build configuration from arguments and config file
    let config = CheckConfig::from_args(check, file);

    let report = run_checks(&config)?;

    // Format and print output
    let formatter = get_formatter(&args.format, args.no_color, args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    if let Some(path) = &check.baseline {
        let baseline = load_baseline(path)?;
        let comparison = compare_to_baseline(&report, &baseline);
        match args.format {
            OutputFormat::Text => println!("\n{}", format_comparison(&comparison)),
            _ => eprintln!("{}", format_comparison(&comparison)),
        }
    }

    if let Some(path) = &check.save_report {
        save_report(&report, path)?;
    }

    // Determine exit code based on results
    Ok(ExitCode::from(report.summary().exit_code()))
}
