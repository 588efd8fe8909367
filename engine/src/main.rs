use std::io;

use anyhow::Context;
use clap::Parser;
use engine::{
    cli::{handle_command, split_ignore_quotes, Cli, Command},
    session::Session,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knight_path=info,engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Cli::parse();
    let mut session = Session::new(args.settings()?).context("Failed to start the search")?;

    match args.command {
        Command::Interactive => loop {
            let mut std_in = String::new();
            if io::stdin()
                .read_line(&mut std_in)
                .context("Failed to read from stdin")?
                == 0
            {
                break;
            }

            let mut args = split_ignore_quotes(&std_in);
            if args.is_empty() {
                continue;
            }
            args.push_front("knight_path".to_owned());
            match Cli::try_parse_from(args) {
                Ok(args) => {
                    if let Err(err) = args.apply_options(&mut session) {
                        println!("Error: {err:#}");
                        continue;
                    }
                    match args.command {
                        Command::Exit => break,
                        cmd => {
                            if let Err(err) = handle_command(cmd, &mut session) {
                                println!("Error: {err:#}");
                            }
                        }
                    }
                }
                Err(err) => {
                    err.print()
                        .unwrap_or_else(|_| println!("Failed to display parsing error"));
                }
            }
        },
        cmd => handle_command(cmd, &mut session)?,
    };
    Ok(())
}
