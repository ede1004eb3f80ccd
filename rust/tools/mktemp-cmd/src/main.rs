use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "mktemp-cmd")]
#[command(about = "Create uniquely named temporary files and directories")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty file named after the template
    File(CreateArgs),

    /// Create a directory named after the template
    Dir(CreateArgs),

    /// Print names generated from the template without creating anything
    Name {
        /// Template whose trailing run of 'X' is randomized
        template: String,

        /// Number of names to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Print the number of distinct names the template can produce
    Outcomes {
        /// Template whose trailing run of 'X' is randomized
        template: String,
    },
}

#[derive(Args)]
struct CreateArgs {
    /// Template whose trailing run of 'X' is randomized, e.g. "build-XXXXXX"
    template: String,

    /// Permission bits in octal (defaults to 600 for files, 700 for directories)
    #[arg(short, long, value_parser = utils::parse_octal_mode)]
    mode: Option<u32>,

    /// Directory the template is relative to
    #[arg(short = 'p', long)]
    tmpdir: Option<String>,

    /// Retry budget multiplier applied to the template's outcome count
    #[arg(long, default_value_t = 1)]
    multiplier: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::File(args) => commands::create::run(mktemp::EntryKind::File, args),
        Commands::Dir(args) => commands::create::run(mktemp::EntryKind::Dir, args),
        Commands::Name { template, count } => commands::name::run(template, count),
        Commands::Outcomes { template } => commands::name::outcomes(template),
    }
}
