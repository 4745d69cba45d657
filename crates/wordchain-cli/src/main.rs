mod report;

use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordchain::game::{GameSession, MoveError};
use wordchain::graph::{ChainGraph, Entity};
use wordchain::load;
use wordchain::longest_chain::longest_chain_with_limits;
use wordchain::{AnalysisOptions, Chain, ChainLink, Probe, SearchLimits, analyze};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Wordchain(wordchain::Error),
    Json(serde_json::Error),
    Rejected(MoveError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Wordchain(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Rejected(err) => write!(f, "Move rejected: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<wordchain::Error> for CliError {
    fn from(value: wordchain::Error) -> Self {
        Self::Wordchain(value)
    }
}

impl From<wordchain::graph::Error> for CliError {
    fn from(value: wordchain::graph::Error) -> Self {
        Self::Wordchain(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<MoveError> for CliError {
    fn from(value: MoveError) -> Self {
        Self::Rejected(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Analyze,
    Chain,
    DeadEnds,
    Cycles,
    Play,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    json: bool,
    pretty: bool,
    out: Option<String>,
    config: Option<String>,
    max_depth: Option<usize>,
    max_iterations: Option<usize>,
    branch_width: Option<usize>,
    probe: Option<usize>,
    start: Option<String>,
    words: Vec<String>,
}

fn usage() -> &'static str {
    "wordchain\n\
\n\
USAGE:\n\
  wordchain [analyze] [--json] [--pretty] [--out <path>] [--config <path>] [--max-depth <n>] [--max-iterations <n>] [--branch-width <n>] [--probe <n>] [<path>|-]\n\
  wordchain chain --start <name> [--max-depth <n>] [--json] [--pretty] [<path>|-]\n\
  wordchain dead-ends [--json] [--pretty] [<path>|-]\n\
  wordchain cycles [--json] [--pretty] [<path>|-]\n\
  wordchain play --words <a,b,c> [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the vocabulary JSON is read from stdin.\n\
  - analyze prints a console report by default; --json prints the summary instead.\n\
  - --out writes the JSON summary to a file as well.\n\
  - --config reads analysis options from a JSON file; flags override it.\n\
  - --probe <n> runs the longest-chain search from the first <n> entities only.\n\
  - play exits with status 3 on the first rejected move.\n\
  - Set WORDCHAIN_LOG (e.g. WORDCHAIN_LOG=debug) to enable logging on stderr.\n\
"
}

fn parse_count(value: Option<&String>) -> Result<usize, CliError> {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "analyze" => args.command = Command::Analyze,
            "chain" => args.command = Command::Chain,
            "dead-ends" => args.command = Command::DeadEnds,
            "cycles" => args.command = Command::Cycles,
            "play" => args.command = Command::Play,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--max-depth" => args.max_depth = Some(parse_count(it.next())?),
            "--max-iterations" => args.max_iterations = Some(parse_count(it.next())?),
            "--branch-width" => args.branch_width = Some(parse_count(it.next())?),
            "--probe" => args.probe = Some(parse_count(it.next())?),
            "--start" => {
                let Some(start) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.start = Some(start.clone());
            }
            "--words" => {
                let Some(words) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.words = words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    let analyze_only = args.out.is_some()
        || args.config.is_some()
        || args.max_iterations.is_some()
        || args.branch_width.is_some()
        || args.probe.is_some();
    let valid = match args.command {
        Command::Analyze => args.start.is_none() && args.words.is_empty(),
        Command::Chain => args.start.is_some() && args.words.is_empty() && !analyze_only,
        Command::DeadEnds | Command::Cycles => {
            args.start.is_none()
                && args.words.is_empty()
                && args.max_depth.is_none()
                && !analyze_only
        }
        Command::Play => {
            !args.words.is_empty()
                && args.start.is_none()
                && args.max_depth.is_none()
                && !args.json
                && !args.pretty
                && !analyze_only
        }
    };
    if !valid {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<Vec<Entity>, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(load::load_json(&buf)?)
        }
        Some(path) => Ok(load::load_path(Path::new(path))?),
    }
}

fn write_file(path: &str, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| {
        CliError::Wordchain(wordchain::Error::Io {
            path: PathBuf::from(path),
            source,
        })
    })
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn load_options(args: &Args) -> Result<AnalysisOptions, CliError> {
    let mut options = match args.config.as_deref() {
        None => AnalysisOptions::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| {
                CliError::Wordchain(wordchain::Error::Io {
                    path: PathBuf::from(path),
                    source,
                })
            })?;
            serde_json::from_str(&text)?
        }
    };

    if let Some(n) = args.max_depth {
        options.limits.max_depth = n;
    }
    if let Some(n) = args.max_iterations {
        options.limits.max_iterations = n;
    }
    if let Some(n) = args.branch_width {
        options.limits.branch_width = n;
    }
    if let Some(n) = args.probe {
        options.probe = Probe::First(n);
    }
    Ok(options)
}

fn print_chain(chain: &Chain<'_>) {
    for (i, e) in chain.iter().enumerate() {
        println!("{}. {} (끝: {})", i + 1, e.name(), e.last_char());
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let options = match args.command {
        Command::Analyze => Some(load_options(&args)?),
        _ => None,
    };

    let entities = read_input(args.input.as_deref())?;
    let graph = ChainGraph::new(entities)?;
    tracing::debug!(entities = graph.len(), "vocabulary loaded");

    match args.command {
        Command::Analyze => {
            let options = options.unwrap_or_default();
            let analysis = analyze(&graph, &options);
            let summary = analysis.summary();

            if let Some(out) = args.out.as_deref() {
                let json = serde_json::to_string_pretty(&summary)?;
                write_file(out, &json)?;
                tracing::info!(path = out, "summary written");
            }

            if args.json {
                write_json(&summary, args.pretty)?;
            } else {
                report::write_report(&mut std::io::stdout().lock(), &analysis)?;
            }
            Ok(())
        }
        Command::Chain => {
            let name = args.start.as_deref().unwrap_or_default();
            let Some(start) = graph.find_by_name(name) else {
                return Err(wordchain::Error::UnknownEntity {
                    name: name.to_string(),
                }
                .into());
            };
            let mut limits = SearchLimits::default();
            if let Some(n) = args.max_depth {
                limits.max_depth = n;
            }
            let chain = longest_chain_with_limits(&graph, start, limits);

            if args.json {
                write_json(&chain.to_links(), args.pretty)?;
            } else {
                print_chain(&chain);
            }
            Ok(())
        }
        Command::DeadEnds => {
            let dead_ends = wordchain::dead_ends::find_dead_ends(&graph);
            if args.json {
                let links: Vec<ChainLink> = dead_ends.into_iter().map(ChainLink::from).collect();
                write_json(&links, args.pretty)?;
            } else {
                for e in dead_ends {
                    println!("{} (끝: {})", e.name(), e.last_char());
                }
            }
            Ok(())
        }
        Command::Cycles => {
            let cycles = wordchain::cycles::find_cycles(&graph);
            if args.json {
                let links: Vec<Vec<ChainLink>> = cycles.iter().map(Chain::to_links).collect();
                write_json(&links, args.pretty)?;
            } else {
                for cycle in &cycles {
                    println!("{}", cycle.names().join(" -> "));
                }
            }
            Ok(())
        }
        Command::Play => {
            let mut game = GameSession::new(&graph);
            for word in &args.words {
                let e = game.play(word)?;
                println!("{}. {}", game.history().len(), e.name());
            }
            match game.hint() {
                Some(next) => println!("next: {}", next.name()),
                None => println!("no moves left"),
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WORDCHAIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Rejected(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
