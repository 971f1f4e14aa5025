use std::io;
use std::process::ExitCode;

use beacon::cli::{run, Cli};
use beacon::logging::init_tracing;
use beacon_render::OsPreference;
use clap::{CommandFactory, FromArgMatches};
use console::style;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    init_tracing(cli.verbose);

    let mut out = io::stdout().lock();
    match run(&cli, &matches, &OsPreference, &mut out).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::from(2)
        }
    }
}
