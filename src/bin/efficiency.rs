use std::process::ExitCode;
use std::time::Instant;

use graph_efficiency::efficiency;
use graph_efficiency::io::read_edgelist;
use graph_efficiency::{Graph, Result};

enum Mode {
    Dense,
    Sequential,
    Parallel,
    Distributed,
}

struct Options {
    path: String,
    mode: Mode,
    workers: usize,
}

fn usage() -> ! {
    eprintln!(
        "usage: efficiency <edgelist> [--mode dense|sequential|parallel|distributed] [--workers N]"
    );
    std::process::exit(2);
}

fn parse_args() -> Options {
    let mut path = None;
    let mut mode = Mode::Dense;
    let mut workers = std::thread::available_parallelism().map_or(1, |n| n.get());

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                mode = match args.next().as_deref() {
                    Some("dense") => Mode::Dense,
                    Some("sequential") => Mode::Sequential,
                    Some("parallel") => Mode::Parallel,
                    Some("distributed") => Mode::Distributed,
                    _ => usage(),
                }
            }
            "--workers" => match args.next().and_then(|n| n.parse().ok()) {
                Some(n) if n > 0 => workers = n,
                _ => usage(),
            },
            _ if path.is_none() && !arg.starts_with('-') => path = Some(arg),
            _ => usage(),
        }
    }

    match path {
        Some(path) => Options {
            path,
            mode,
            workers,
        },
        None => usage(),
    }
}

fn run(options: &Options) -> Result<f64> {
    let mut graph = read_edgelist(&options.path)?;
    match options.mode {
        Mode::Dense => efficiency::dense(&graph),
        Mode::Sequential => {
            graph.build_adjacency()?;
            efficiency::sequential(&graph)
        }
        Mode::Parallel => {
            graph.build_adjacency()?;
            efficiency::parallel(&graph, options.workers)
        }
        Mode::Distributed => {
            efficiency::distributed(
                graph.vertex_count(),
                graph.edge_slice().to_vec(),
                options.workers,
            )
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let options = parse_args();

    let start = Instant::now();
    match run(&options) {
        Ok(value) => {
            println!("efficiency: {value:.17}");
            println!("elapsed: {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
