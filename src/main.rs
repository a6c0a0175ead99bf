// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use pinroute::app::{self, Flags};

const HELP: &str = "\
PinRoute

USAGE:
  pinroute [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, ru)
  --config-dir <DIR>    Directory holding settings.toml
  --endpoint <URL>      OSRM server used for routes
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = Flags {
        lang: string_option(&mut args, "--lang"),
        config_dir: string_option(&mut args, "--config-dir"),
        endpoint: string_option(&mut args, "--endpoint"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }

    app::run(flags)
}

fn string_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {}: {}", key, err);
            None
        }
    }
}
