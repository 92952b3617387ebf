// stepviz: step-by-step execution visualizer for small code snippets

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepviz::sorting::{ascending, descending, random, SortAlgorithm, SortStep, SortTracer};
use stepviz::ui::App;
use stepviz::{Config, Engine};

#[derive(Debug, Parser)]
#[command(name = "stepviz", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs here (the only log destination in interactive mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Step through a snippet in the terminal UI
    Run {
        /// Source file, or `-` for stdin
        file: PathBuf,

        /// Delay between steps in play mode
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Fail after this many executed lines
        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Run a snippet to completion and print one JSON snapshot per step
    Trace {
        file: PathBuf,

        /// Print only the final snapshot, pretty-printed
        #[arg(long)]
        pretty: bool,

        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Print the step log of a sort algorithm
    Sort {
        /// bubble, selection, insertion, quick, or merge
        algorithm: SortAlgorithm,

        /// Comma-separated input values
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            conflicts_with_all = ["order", "size", "seed"]
        )]
        values: Option<Vec<i64>>,

        /// Generated input order
        #[arg(long, value_enum, default_value_t = Order::Random)]
        order: Order,

        /// Generated input length
        #[arg(long, default_value_t = 15)]
        size: usize,

        /// Seed for `--order random`, for a repeatable input
        #[arg(long)]
        seed: Option<u64>,

        /// Print steps as JSON lines
        #[arg(long)]
        json: bool,

        /// Print the algorithm description before the trace
        #[arg(long)]
        info: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Random,
    Ascending,
    Descending,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Command::Run { .. });
    init_logging(cli.log_file.as_deref(), interactive)?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Run {
            file,
            interval_ms,
            max_steps,
        } => {
            if let Some(interval_ms) = interval_ms {
                config.playback.interval_ms = interval_ms;
            }
            if max_steps.is_some() {
                config.engine.max_steps = max_steps;
            }
            run_interactive(&file, &config)
        }
        Command::Trace {
            file,
            pretty,
            max_steps,
        } => {
            if max_steps.is_some() {
                config.engine.max_steps = max_steps;
            }
            run_trace(&file, &config, pretty)
        }
        Command::Sort {
            algorithm,
            values,
            order,
            size,
            seed,
            json,
            info,
        } => {
            let input = values.unwrap_or_else(|| match order {
                Order::Random => {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    random(size, &mut rng)
                }
                Order::Ascending => ascending(size),
                Order::Descending => descending(size),
            });
            run_sort(algorithm, input, json, info)
        }
    }
}

/// Route `log` output.
///
/// The TUI owns the terminal, so interactive runs only log when a file is given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if interactive => return Ok(()),
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }
    builder.init();
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read source from stdin")?;
        return Ok(source);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_engine(path: &Path, config: &Config) -> Result<Engine> {
    let source = read_source(path)?;
    let mut engine = Engine::new(config.engine.clone());
    engine.load_source(&source);
    info!("loaded {} ({} lines)", path.display(), engine.line_count());
    Ok(engine)
}

fn run_interactive(path: &Path, config: &Config) -> Result<()> {
    if path == Path::new("-") {
        // Raw mode needs stdin for key events
        bail!("interactive mode cannot read the program from stdin, use `trace` instead");
    }
    let engine = load_engine(path, config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine, Duration::from_millis(config.playback.interval_ms));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exited after {} steps", app.snapshot.steps_taken);
    res.context("terminal UI failed")
}

fn run_trace(path: &Path, config: &Config, pretty: bool) -> Result<()> {
    let mut engine = load_engine(path, config)?;

    let mut last = engine.current_state();
    while !engine.status().is_terminal() {
        last = engine.advance_one_step();
        if !pretty {
            println!("{}", serde_json::to_string(&last)?);
        }
    }
    if pretty {
        println!("{}", serde_json::to_string_pretty(&last)?);
    }

    info!("trace finished with status {}", last.status);
    if let Some(error) = &last.error {
        eprintln!("{}", error);
    }
    Ok(())
}

fn run_sort(algorithm: SortAlgorithm, input: Vec<i64>, json: bool, show_info: bool) -> Result<()> {
    let description = algorithm.info();
    if show_info {
        if json {
            println!("{}", serde_json::to_string(description)?);
        } else {
            println!("{}", description.name);
            println!("{}", description.description);
            println!(
                "Time: best {}, average {}, worst {}",
                description.time_complexity.best,
                description.time_complexity.average,
                description.time_complexity.worst
            );
            println!("Space: {}", description.space_complexity);
            println!("Stable: {}", if description.stable { "yes" } else { "no" });
            for (i, point) in description.how_it_works.iter().enumerate() {
                println!("  {}. {}", i + 1, point);
            }
            println!();
        }
    }

    let steps = SortTracer::new(input).trace(algorithm);
    info!("{} sort produced {} steps", algorithm, steps.len());
    for (i, step) in steps.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            println!("{}", format_step(i, step));
        }
    }
    Ok(())
}

fn format_step(index: usize, step: &SortStep) -> String {
    let cells: Vec<String> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if step.swapping.contains(&i) {
                format!("<{}>", value)
            } else if step.comparing.contains(&i) {
                format!("[{}]", value)
            } else {
                value.to_string()
            }
        })
        .collect();
    format!(
        "{:>4}  {:<48} cmp={:<4} swp={:<4} {}",
        index,
        step.description,
        step.comparisons,
        step.swaps,
        cells.join(" ")
    )
}
