// SPDX-License-Identifier: MPL-2.0
use iconsmith::app::{self, Flags};
use iconsmith::logger;

fn main() -> iced::Result {
    logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
    };

    app::run(flags)
}
