// SPDX-License-Identifier: MPL-2.0
use folio_lens::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
FolioLens - portfolio gallery viewer

USAGE:
  folio_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --catalog <FILE>       Catalog TOML file to show instead of the built-in one
  --category <SLUG>      Category selected at startup (`all` or a category slug)
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    folio_lens::logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        catalog: opt_arg::<String>(&mut args, "--catalog").map(PathBuf::from),
        category: opt_arg(&mut args, "--category"),
        config_dir: opt_arg(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional `--key value` pair, logging malformed values.
fn opt_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
