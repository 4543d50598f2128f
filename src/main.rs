use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use adjlist::{report, AdjacencyGraph, Config, EdgeList, Error};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> adjlist::Result<()> {
    let edges = EdgeList::open(&config.input)?;
    let graph = AdjacencyGraph::from_edges(&edges)?;
    info!(
        input = %config.input.display(),
        vertices = graph.vertex_count(),
        entries = graph.edge_entries(),
        "graph built"
    );

    let out = io::stdout();
    report::write_report(&graph, io::BufWriter::new(out.lock())).map_err(Error::Write)
}

fn main() -> ExitCode {
    init_logging();

    match Config::from_args(std::env::args_os()).and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e {
                // clap already formats the whole message
                Error::Usage(ref usage) => eprint!("{}", usage),
                ref e => error!("{}", e),
            }
            ExitCode::from(e.exit_code())
        }
    }
}
