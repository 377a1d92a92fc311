use clap::Parser;
use git_iadd::commands::execute_interactive;
use git_iadd::core::{
    error::{IaddError, Result},
    logging::init_logging,
    print_defect, print_error,
};

/// Stage and unstage files interactively
#[derive(Parser)]
#[command(name = "git-iadd")]
#[command(about = "A minimal interactive git add")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_logging();

    if let Err(e) = execute_interactive() {
        log::error!("git-iadd exited with error: {e}");
        match e {
            IaddError::NotInGitRepo => print_error("Not in a git repository"),
            ref e if e.is_internal_defect() => print_defect(&e.to_string()),
            ref e => print_error(&e.to_string()),
        }
        std::process::exit(1);
    }

    Ok(())
}
