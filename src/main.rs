use std::process::exit;

use colored::Colorize;
use human_panic::setup_panic;
use log::error;

use asm_mirror::prelude::*;

fn main() {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => fail(&format!("{e}")),
    };
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        fail(&format!("Failed to initialise logging: {e:#}"));
    }

    let options = match get_run_options(&matches) {
        Ok(options) => options,
        Err(e) => fail(&format!("{e}")),
    };

    if let Err(e) = run(&options) {
        error!("{e:#}");
        exit(1);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", format_message(message, &message.red().to_string()));
    exit(1)
}
