//! fpmath-budget: measure the transcendental functions against `std` and
//! check them against the published ULP budgets.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fpmath::budget::{self, Budget, BudgetReport, Function, Precision, BUDGETS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Verbosity {
    Quiet,
    Normal,
    Debug,
    Trace,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    F32,
    F64,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "fpmath-budget", version, about = "Check fpmath accuracy against std")]
struct Args {
    /// Samples per input range.
    #[arg(short = 'n', long, default_value_t = 20_000)]
    samples: usize,

    /// Only measure these functions (log, log2, log10, log1p, exp, exp2, expm1, pow, sqrt).
    #[arg(short, long, value_delimiter = ',')]
    functions: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Width::All)]
    width: Width,

    #[arg(short, long, value_enum, default_value_t = Verbosity::Normal)]
    verbosity: Verbosity,
}

fn selected(args: &Args) -> Result<Vec<Budget>, String> {
    let mut functions = Vec::new();
    for name in &args.functions {
        match Function::from_name(name) {
            Some(f) => functions.push(f),
            None => return Err(format!("unknown function `{name}`")),
        }
    }
    Ok(BUDGETS
        .iter()
        .copied()
        .filter(|b| functions.is_empty() || functions.contains(&b.function))
        .filter(|b| match args.width {
            Width::F32 => b.precision == Precision::Single,
            Width::F64 => b.precision == Precision::Double,
            Width::All => true,
        })
        .collect())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbosity > Verbosity::Quiet {
        let level = match args.verbosity {
            Verbosity::Trace => Level::TRACE,
            Verbosity::Debug => Level::DEBUG,
            _ => Level::INFO,
        };
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let budgets = match selected(&args) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fpmath-budget: {e}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(backend = %fpmath::runtime::backend(), "measuring {} budgets", budgets.len());

    let reports: Vec<BudgetReport> = budgets
        .iter()
        .map(|&b| {
            let samples = b.function.samples(args.samples);
            tracing::debug!(function = %b.function, precision = %b.precision, samples = samples.len());
            budget::measure(b, &samples)
        })
        .collect();

    for report in &reports {
        if report.passed() {
            tracing::info!("{report}");
        } else {
            tracing::warn!("{report}");
        }
        if args.verbosity == Verbosity::Quiet {
            println!("{report}");
        }
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        eprintln!("{failed} of {} budgets exceeded", reports.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
