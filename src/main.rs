// SPDX-License-Identifier: MPL-2.0

use iced_lightbox::app::{self, Flags};
use iced_lightbox::error::Result;

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        marker: args.opt_value_from_str("--marker").unwrap_or(None),
        gallery_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
