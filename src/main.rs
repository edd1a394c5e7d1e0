//! Routeplot - plot a closed route over 2D points in the terminal.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use routeplot::app::App;
use routeplot::config::PlotConfig;
use routeplot::data::{BlankLinePolicy, ParseOptions};
use routeplot::display;
use routeplot::session::{Session, SessionOptions};
use routeplot::tour::SolveMethod;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BlankLines {
    /// Any blank line is an error
    Reject,
    /// Ignore blank lines at the end of the file
    SkipTrailing,
    /// Ignore every blank line
    SkipAll,
}

impl From<BlankLines> for BlankLinePolicy {
    fn from(value: BlankLines) -> Self {
        match value {
            BlankLines::Reject => BlankLinePolicy::Reject,
            BlankLines::SkipTrailing => BlankLinePolicy::SkipTrailing,
            BlankLines::SkipAll => BlankLinePolicy::SkipAll,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Solver {
    /// Try every ordering
    BruteForce,
    /// Prune partial tours that cannot beat the best one
    BranchAndBound,
}

impl From<Solver> for SolveMethod {
    fn from(value: Solver) -> Self {
        match value {
            Solver::BruteForce => SolveMethod::BruteForce,
            Solver::BranchAndBound => SolveMethod::BranchAndBound,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "routeplot")]
#[command(about = "Plot a closed route over a set of 2D points", long_about = None)]
struct Args {
    /// Points file (skips the filename prompt)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Route such as "2 -> 0 -> 1" (skips the route prompt)
    #[arg(long)]
    route: Option<String>,

    /// Use the built-in points and route without prompting
    #[arg(long, conflicts_with_all = ["points", "route"])]
    defaults: bool,

    /// Compute an optimal route instead of asking for one
    #[arg(long, value_enum, conflicts_with = "route")]
    solve: Option<Solver>,

    /// How blank lines in the points text are treated
    #[arg(long, value_enum, default_value_t = BlankLines::SkipTrailing)]
    blank_lines: BlankLines,

    /// Print a summary instead of opening the plot window
    #[arg(long)]
    no_display: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting routeplot");
    }

    let options = SessionOptions {
        points_file: args.points.clone(),
        route: args.route.clone(),
        use_defaults: args.defaults,
        solve: args.solve.map(SolveMethod::from),
        parse: ParseOptions::with_blank_lines(args.blank_lines.into()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let session = Session::acquire(&mut input, &mut output, &options)?;

    let figure = session.figure()?;
    let summary = session.summary()?;

    if args.no_display {
        println!("{}", summary);
    } else {
        let title = match options.solve {
            Some(method) => format!("Route ({})", method.name()),
            None => "Route".to_string(),
        };
        display::show(App::new(figure, PlotConfig::with_title(title), summary))?;
    }

    tracing::info!("routeplot exited");
    Ok(())
}
