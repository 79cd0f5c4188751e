// SPDX-License-Identifier: MPL-2.0
use deckview::app::{self, paths, Flags};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
DeckView - slide-deck viewer

USAGE:
  deckview [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --base-url <URL>      Content server serving the slide fragments
  --deck-dir <DIR>      Local directory holding the slide fragments
  --sample              Open the sample deck embedded in the binary
  -h, --help            Print this help

ENVIRONMENT:
  DECKVIEW_CONFIG_DIR   Same as --config-dir
  RUST_LOG              Log filter (default: deckview=info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "deckview=info".into()))
        .with(fmt::layer())
        .init();

    let flags = Flags {
        lang: string_option(&mut args, "--lang"),
        config_dir: string_option(&mut args, "--config-dir"),
        base_url: string_option(&mut args, "--base-url"),
        deck_dir: string_option(&mut args, "--deck-dir"),
        sample: args.contains("--sample"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional `--key value` pair, logging malformed values.
fn string_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, key, "ignoring invalid argument");
        None
    })
}
