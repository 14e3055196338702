use anyhow::Result;
use clap::Parser;
use protomap::cli::{Cli, Commands};
use protomap::commands;
use protomap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Classify {
            tokens,
            pointer_width,
        } => commands::run_classify(&tokens, pointer_width.map(Into::into)),
        Commands::Parse {
            file,
            pointer_width,
            module,
        } => commands::run_parse(file, pointer_width.map(Into::into), &module),
        Commands::Title { text } => commands::run_title(&text),
    }
}
