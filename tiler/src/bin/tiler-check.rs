use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::Path;
use tiler::utils;

fn main() -> Result<()> {
    let matches = command!("Tiler Check")
        .about("Checks the configuration file")
        .help_template(utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the one in the XDG config directory otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(Path::new);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tiler version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match tiler::load_from_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("Configuration failed. Reason: {err:?}");
            return Err(err);
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    let errors = config.check(verbose);
    if errors.is_empty() {
        println!("\x1b[0;92m    -> All settings OK\x1b[0m");
        return Ok(());
    }
    for err in &errors {
        println!("\x1b[1;91mERROR: {err}\x1b[0m");
    }
    bail!("{} setting(s) need attention", errors.len())
}
