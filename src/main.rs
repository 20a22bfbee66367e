use std::process;

use bst::{ParseTreeError, Tree};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Build a binary search tree and print every traversal of it.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Keys to insert, in order, separated by whitespace or commas
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        default_value = "3 12 1 -12 2 5 4 6"
    )]
    keys: String,

    /// Keys to look up once the tree is built
    #[arg(
        short,
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [5, 7]
    )]
    search: Vec<i64>,

    /// Mirror the tree before printing its traversals
    #[arg(short, long)]
    invert: bool,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(&cli) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Builds the tree described by `cli` and renders each operation's result, one per line.
fn run(cli: &Cli) -> Result<String, ParseTreeError> {
    let mut tree: Tree = cli.keys.parse()?;
    info!(len = tree.len(), "built tree");

    // Searching only makes sense before the tree is mirrored.
    let searches: Vec<_> = cli
        .search
        .iter()
        .map(|key| (*key, tree.search(*key)))
        .collect();

    if cli.invert {
        tree.invert();
    }

    let mut report = String::new();
    let traversals = [
        ("breadth-first", join(tree.breadth_first())),
        ("inorder", join(tree.inorder())),
        ("preorder", join(tree.preorder())),
        ("postorder", join(tree.postorder())),
    ];
    for (name, keys) in traversals {
        report.push_str(&format!("{name}: {keys}\n"));
    }
    report.push_str(&format!("height: {}\n", tree.height()));
    for (key, found) in searches {
        debug!(key, found, "searched");
        report.push_str(&format!("search {key}: {found}\n"));
    }

    Ok(report)
}

fn join(keys: impl Iterator<Item = i64>) -> String {
    keys.map(|key| key.to_string()).collect::<Vec<_>>().join(" ")
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // `RUST_LOG` wins when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    debug!(?level, "logging initialised");
}
