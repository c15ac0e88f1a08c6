//! CLI entry point for dirtally

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtally::{OutputConfig, ScanConfig, Scanner, TreeOrder, TreeReporter, print_json};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Order of directories in the tree
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OrderArg {
    /// Sorted by path, children right under their parent
    #[default]
    Path,
    /// Shallowest first
    Depth,
    /// Breadth-first scan order
    Scan,
}

impl From<OrderArg> for TreeOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Path => TreeOrder::Path,
            OrderArg::Depth => TreeOrder::Depth,
            OrderArg::Scan => TreeOrder::Scan,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtally")]
#[command(about = "Count files and subdirectories in every directory under a set of roots")]
#[command(version)]
struct Args {
    /// Root directories to scan (default: the filesystem roots)
    roots: Vec<PathBuf>,

    /// Order of directories in the tree: path, depth, scan
    #[arg(long = "order", value_name = "ORDER", default_value = "path")]
    order: OrderArg,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Expand directories again when reached through another path
    /// (symlink cycles will never finish)
    #[arg(long = "allow-revisits")]
    allow_revisits: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dirtally=debug,warn")
    } else {
        EnvFilter::new("dirtally=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(false)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let scan_config = ScanConfig {
        skip_revisits: !args.allow_revisits,
    };
    let mut scanner = Scanner::new(scan_config);

    if args.roots.is_empty() {
        scanner.load_platform_roots();
    }
    for root in &args.roots {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.clone());
        scanner.add_root(root);
    }

    let report = scanner.traverse();
    let order = TreeOrder::from(args.order);

    let result = if args.json {
        print_json(&report, order)
    } else {
        let reporter = TreeReporter::new(OutputConfig {
            use_color: should_use_color(args.color),
            order,
        });
        reporter
            .print(&report)
            .and_then(|()| reporter.print_summary(&report))
    };

    if let Err(e) = result {
        eprintln!("dirtally: error writing output: {}", e);
        process::exit(1);
    }
}
