mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "envset=info",
        1 => "envset=debug",
        _ => "envset=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Header {
            name,
            symbol,
            otr,
            replacement,
            output,
        } => {
            commands::convert::header(
                &name,
                symbol,
                otr,
                replacement.as_deref(),
                output.as_deref(),
            )?;
        }

        Commands::Code {
            source,
            enums,
            output,
        } => {
            commands::convert::code(&source, enums.as_deref(), output.as_deref())?;
        }

        Commands::Binary {
            source,
            big_endian,
            output,
        } => {
            commands::convert::binary(&source, big_endian, &output)?;
        }

        Commands::Inspect { source } => {
            commands::convert::inspect(&source)?;
        }

        Commands::Batch {
            input,
            manifest,
            mode,
            enums,
            otr,
            big_endian,
            output,
        } => {
            let options = commands::batch::Options {
                mode: mode.into(),
                otr,
                big_endian,
            };
            commands::batch::run(&input, &manifest, enums.as_deref(), options, &output)?;
        }
    }

    Ok(())
}
