use apidoc_markdown::{cli::parse_args, run_apidoc_markdown};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let level = match config.verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run_apidoc_markdown(&config).await {
        Ok(()) => {
            println!("Wrote apidoc-markdown to: {}", config.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            if config.verbosity > 0 {
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
