use anyhow::Result;
use build_flags::definition::Quote;
use build_flags::emitter::{Emitter, Operation, DEFAULT_REMOTE};
use build_flags::utils::git::Git;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

/// Print git metadata as `-D NAME=\"value\"` compiler definitions.
#[derive(Parser)]
#[command(author, version = env!("BUILD_FLAGS_VERSION"), about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// What to emit
    #[arg(value_enum)]
    operation: Operation,

    /// Run git in this directory instead of the current one
    #[arg(short = 'C', long, env = "BUILD_FLAGS_DIR")]
    dir: Option<PathBuf>,

    /// git executable to invoke
    #[arg(long, default_value = "git", env = "BUILD_FLAGS_GIT")]
    git: String,

    /// Remote whose url git_owner reads
    #[arg(long, default_value = DEFAULT_REMOTE, env = "BUILD_FLAGS_REMOTE")]
    remote: String,

    /// How the value is quoted
    #[arg(long, value_enum, default_value_t = Quote::Escaped)]
    quote: Quote,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut git = Git::new(&cli.git);
    if let Some(dir) = cli.dir {
        git = git.in_dir(dir);
    }
    debug!("emitting {:?} via {:?}", cli.operation, git);

    let definition = Emitter::new(git)
        .with_remote(cli.remote)
        .emit(cli.operation)?
        .with_quote(cli.quote);
    println!("{}", definition);

    Ok(())
}
