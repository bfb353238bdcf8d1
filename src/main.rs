#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use led_designs::{config, designs, render};

fn main() -> Result<()> {
    let (log_filter, log_filter_handle) =
        tracing_subscriber::reload::Layer::new(config::LogLevelFilter::default().filter);

    tracing_subscriber::registry()
        .with(log_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config_path =
        String::from(option_env!("LED_DESIGNS_CONFIG_PATH").unwrap_or("config.toml"));

    let mut requested_design = None;
    let mut list_designs = false;

    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                config_path = args.next().context("No config specified")?;
            }
            "-l" | "--list" => list_designs = true,
            "-V" | "--version" => {
                println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ if !arg.starts_with('-') && requested_design.is_none() => {
                requested_design = Some(arg);
            }
            _ => return Err(anyhow::Error::msg(format!("Unhandled argument {:?}", arg))),
        }
    }

    if list_designs {
        for design in designs::DESIGNS {
            println!("{}", design);
        }
        return Ok(());
    }

    let config = config::Config::from_file(config_path.as_str());

    log_filter_handle
        .modify(|filter| *filter = config.log_level.filter.clone())
        .context("Failed to apply the configured log filter")?;

    let requested_design = requested_design.or_else(|| config.design.clone());

    if let Some(name) = requested_design {
        let design =
            designs::lookup(&name).with_context(|| format!("Cannot show design {:?}", name))?;
        render::print(design, &config.cells);
    } else {
        tracing::info!("No design requested, showing the whole table");

        for design in designs::DESIGNS {
            render::print(design, &config.cells);
            std::thread::sleep(config.hold);
        }
    }

    Ok(())
}
