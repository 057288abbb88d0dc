// SPDX-License-Identifier: MPL-2.0
use comprehension_reader::app::{self, paths, Flags};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
comprehension-reader

USAGE:
  comprehension-reader [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --root <DIR|URL>       Directory or base URL holding the content files
  --manifest <PATH>      Manifest location relative to the root
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

/// Installs the log subscriber. `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,comprehension_reader=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        root: optional_arg(&mut args, "--root"),
        manifest: optional_arg(&mut args, "--manifest"),
        config_dir: None,
    };
    paths::init_cli_override(optional_arg(&mut args, "--config-dir"));

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unexpected arguments");
    }

    app::run(flags)
}

fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "Ignoring invalid argument");
            None
        }
    }
}
