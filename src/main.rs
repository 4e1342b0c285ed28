// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

const HELP: &str = "\
Usage: iced_folio [OPTIONS] [PDF]

Options:
  --lang <id>          Interface language (e.g. en-US, fr)
  --data-dir <dir>     Directory for state, bookmarks and the log file
  --config-dir <dir>   Directory holding settings.toml
  --log-file <path>    Write the log to <path>
  -h, --help           Print this help
";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path.or_else(paths::get_log_file) else {
        eprintln!("No log file location available; logging disabled");
        return;
    };
    if let Err(err) = try_init_logging(&path) {
        eprintln!("Cannot write log to {}: {err}", path.display());
    }
}

fn try_init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let config = ConfigBuilder::new()
        .add_filter_allow_str("iced_folio")
        .build();
    WriteLogger::init(LOG_LEVEL, config, File::create(path)?)?;
    Ok(())
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
        eprintln!("Ignoring --data-dir: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Ignoring --config-dir: {err}");
        None
    });
    let log_file: Option<PathBuf> = args.opt_value_from_str("--log-file").unwrap_or_else(|err| {
        eprintln!("Ignoring --log-file: {err}");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(data_dir, config_dir);
    init_logging(log_file);
    log::info!("Starting iced_folio {}", env!("CARGO_PKG_VERSION"));

    app::run(Flags {
        lang,
        file_path,
        // Resolved through the CLI overrides registered above.
        data_dir: None,
        config_dir: None,
    })
}
