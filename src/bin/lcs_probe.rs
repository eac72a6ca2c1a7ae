use std::env;
use std::time::Instant;

use lcs_align::utils::{is_subsequence, lcs_length};
use lcs_align::{DedupPolicy, LcsEngineBuilder, Scorer, Sequence};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match &options.mode {
        Mode::Compare { pred, truth } => compare(&options, pred, truth),
        Mode::Scale => scale(&options),
    };
    if let Err(err) = result {
        eprintln!("lcs_probe: {err}");
        std::process::exit(1);
    }
}

enum Mode {
    Compare { pred: String, truth: String },
    Scale,
}

struct Options {
    mode: Mode,
    tokens: bool,
    all: bool,
    limit: usize,
    trace: bool,
    policy: DedupPolicy,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut tokens = false;
        let mut all = false;
        let mut limit = 16usize;
        let mut trace = false;
        let mut scale = false;
        let mut policy = DedupPolicy::ByValue;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--tokens" {
                tokens = true;
            } else if arg == "--all" {
                all = true;
            } else if arg == "--trace" {
                trace = true;
            } else if arg == "--scale" {
                scale = true;
            } else if arg == "--by-path" {
                policy = DedupPolicy::ByPath;
            } else if let Some(value) = arg.strip_prefix("--limit=") {
                limit = parse_limit(value)?;
            } else if arg == "--limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --limit".to_string())?
                    .into();
                limit = parse_limit(&value)?;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        let mode = if scale {
            if !positional.is_empty() {
                return Err("--scale takes no sequences".to_string());
            }
            Mode::Scale
        } else {
            let mut it = positional.into_iter();
            match (it.next(), it.next(), it.next()) {
                (Some(pred), Some(truth), None) => Mode::Compare { pred, truth },
                _ => return Err("expected exactly two sequences: PRED TRUTH".to_string()),
            }
        };

        Ok(Self {
            mode,
            tokens,
            all,
            limit,
            trace,
            policy,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: lcs_probe [options] PRED TRUTH
       lcs_probe --scale

Options:
  --tokens          Read PRED and TRUTH as comma-separated token ids
  --all             List every maximal common subsequence (up to --limit)
  --limit <N>       Maximum number of subsequences to list (default: 16)
  --by-path         Keep subsequences that repeat by value but differ by path
  --trace           Rebuild the match graph with a cell-by-cell trace
  --scale           Time table and graph construction on growing inputs
  -h, --help        Print this help message

Examples:
  lcs_probe HELLO HELXX
  lcs_probe --all ABCBDAB BDCABA
  lcs_probe --tokens 1,2,3,9 7,1,2,3
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "limit must be a non-negative integer".to_string())
}

fn parse_tokens(value: &str) -> Result<Vec<u32>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().map_err(|_| format!("invalid token id '{s}'")))
        .collect()
}

fn compare(options: &Options, pred: &str, truth: &str) -> Result<(), String> {
    let (pred, truth) = if options.tokens {
        (
            Sequence::Tokens(parse_tokens(pred)?),
            Sequence::Tokens(parse_tokens(truth)?),
        )
    } else {
        (Sequence::text(pred), Sequence::text(truth))
    };

    let start = Instant::now();
    let scorer =
        Scorer::with_policy(&pred, &truth, options.policy).map_err(|e| e.to_string())?;
    let score = scorer.score();

    println!("lcs_len:        {}", score.lcs_len);
    println!("forward_chain:  {}", scorer.forward_chain());
    println!("backward_chain: {}", scorer.backward_chain());
    println!("max_run:        {}", scorer.max_contiguous_chain());
    println!("lcs_ratio:      {:.3}", score.lcs_ratio());

    if options.all {
        let listed = scorer.subsequences();
        for (k, lcs) in listed.iter().take(options.limit).enumerate() {
            println!("  #{k:<4} {lcs}");
        }
        if listed.len() > options.limit {
            println!("  ... {} more", listed.len() - options.limit);
        }
    }

    if options.trace {
        let steps = match (&pred, &truth) {
            (Sequence::Text(p), Sequence::Text(t)) => {
                LcsEngineBuilder::new(p, t).build().trace()
            }
            (Sequence::Tokens(p), Sequence::Tokens(t)) => {
                LcsEngineBuilder::new(p, t).build().trace()
            }
            _ => Vec::new(),
        };
        for step in &steps {
            println!("  {:?} <- {:?}  {:?}", step.cell, step.caller, step.action);
        }
    }

    eprintln!("elapsed: {:.3} ms", start.elapsed().as_secs_f64() * 1e3);
    Ok(())
}

struct Measurement {
    size: usize,
    lcs_len: u32,
    nodes: usize,
    edges: usize,
    paths: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    verified: bool,
}

fn scale(options: &Options) -> Result<(), String> {
    let mut sys = System::new();
    let mut measurements = Vec::new();

    for &size in &[16usize, 32, 64, 128, 256] {
        let a = deterministic_symbols(size, 0);
        let b = deterministic_symbols(size, 3);

        let before = rss_kib(&mut sys);
        let start = Instant::now();
        let engine = LcsEngineBuilder::new(&a, &b)
            .with_policy(options.policy)
            .with_eager_graph(true)
            .build();
        let graph = engine.graph();
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(&mut sys);

        let verified = engine.lcs_len() == lcs_length(&a, &b)
            && engine
                .subsequences()
                .take(options.limit.max(1))
                .all(|lcs| is_subsequence(&lcs, &a) && is_subsequence(&lcs, &b));

        measurements.push(Measurement {
            size,
            lcs_len: engine.lcs_len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            paths: graph.path_count(),
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            verified,
        });
    }

    println!(
        "{:>6}  {:>7}  {:>8}  {:>8}  {:>20}  {:>10}  {:>14}  {}",
        "size", "lcs", "nodes", "edges", "paths", "wall_s", "rss_delta_kib", "status"
    );
    for m in &measurements {
        println!(
            "{:>6}  {:>7}  {:>8}  {:>8}  {:>20}  {:>10.4}  {:>14}  {}",
            m.size,
            m.lcs_len,
            m.nodes,
            m.edges,
            m.paths,
            m.wall_s,
            m.rss_delta_kib,
            if m.verified { "passed" } else { "FAILED" }
        );
    }

    if measurements.iter().all(|m| m.verified) {
        Ok(())
    } else {
        Err("verification against the linear-space baseline failed".to_string())
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn deterministic_symbols(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + offset + i / 5) % ALPHABET.len()])
        .collect()
}
