use std::process;
use log::{error, LevelFilter};

use tilegeo::commands::{build_cli, CommandFactory, TilegeoCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let factory = TilegeoCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
