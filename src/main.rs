// SPDX-License-Identifier: MPL-2.0
use atelier::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
atelier - architecture portfolio

USAGE:
  atelier [OPTIONS]

OPTIONS:
  --lang <CODE>         Display language (en, tr)
  --config-dir <DIR>    Directory holding settings.toml
  --image-root <DIR>    Directory project images are resolved against
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atelier=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(Flags {
        lang: flags.lang,
        config_dir: None,
        image_root: flags.image_root.map(PathBuf::from),
    })
}

struct CliArgs {
    lang: Option<String>,
    config_dir: Option<String>,
    image_root: Option<String>,
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<CliArgs, pico_args::Error> {
    Ok(CliArgs {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        image_root: args.opt_value_from_str("--image-root")?,
    })
}
