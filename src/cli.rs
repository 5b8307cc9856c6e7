use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// File name of the endpoint data written by apidoc.
pub const DATA_FILE: &str = "api_data.json";
/// File name of the project metadata written by apidoc.
pub const PROJECT_FILE: &str = "api_project.json";
/// Directory searched for the apidoc output when `--path` is not given.
pub const DEFAULT_APIDOC_DIR: &str = "doc";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub project_path: PathBuf,
    /// `None` selects the bundled template.
    pub template_path: Option<PathBuf>,
    pub prepend_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub verbosity: u8,
}

impl Config {
    /// Builds a config reading both JSON files from `apidoc_root`.
    pub fn new(apidoc_root: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        let apidoc_root = apidoc_root.into();
        Self {
            data_path: apidoc_root.join(DATA_FILE),
            project_path: apidoc_root.join(PROJECT_FILE),
            template_path: None,
            prepend_path: None,
            output_path: output_path.into(),
            verbosity: 0,
        }
    }
}

fn command() -> Command {
    Command::new("apidoc-markdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate markdown documentation from apidoc data")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("DIR")
                .help("Path to generated apidoc output, where api_data.json & api_project.json reside")
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file to write")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("FILE")
                .help("Path to a template file; the bundled template is used if not specified")
                .num_args(1),
        )
        .arg(
            Arg::new("prepend")
                .long("prepend")
                .value_name("FILE")
                .help("File whose content is inserted after the table of contents")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output and print full error details (-v, -vv)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    let matches = command().get_matches();
    config_from_matches(&matches)
}

/// Parses an explicit argument list, the first item being the binary name.
pub fn parse_from<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    config_from_matches(&matches)
}

fn config_from_matches(matches: &ArgMatches) -> Result<Config> {
    let apidoc_root = match matches.get_one::<String>("path") {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?.join(DEFAULT_APIDOC_DIR),
    };

    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("--output is required"))?;

    let mut config = Config::new(apidoc_root, output_path);
    config.template_path = matches.get_one::<String>("template").map(PathBuf::from);
    config.prepend_path = matches.get_one::<String>("prepend").map(PathBuf::from);
    config.verbosity = matches.get_count("verbose");

    Ok(config)
}
