use anyhow::Context;
use clap::Parser;
use relm4::prelude::*;
use rim::config;
use rim::gui::app::{AppInit, AppModel};
use rim::params::Params;
use rim::snippet::StyleSnippet;
use rim::sys::{export, runtime};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Concentric corner radius calculator", long_about = None)]
struct Args {
    /// Start value for the inner content radius (0 - 50)
    #[arg(short, long)]
    inner_radius: Option<u32>,

    /// Start value for the padding, capped at dimension / 2 - 10
    #[arg(short, long)]
    padding: Option<u32>,

    /// Start value for the container side length (100 - 400)
    #[arg(short, long)]
    dimension: Option<u32>,

    /// Print the generated CSS and exit
    #[arg(long)]
    print_css: bool,

    /// Render the diagram to a PNG file and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Write the default config file and print its path
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Command-line start values win over the config file.
    fn parameters(&self, cfg: &config::ParameterConfig) -> config::ParameterConfig {
        config::ParameterConfig {
            inner_radius: self.inner_radius.unwrap_or(cfg.inner_radius),
            padding: self.padding.unwrap_or(cfg.padding),
            dimension: self.dimension.unwrap_or(cfg.dimension),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config().context("Failed to write default config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let params = Params::from_config(&args.parameters(&config.parameters));

    if args.print_css {
        println!("{}", StyleSnippet::from(&params));
        return Ok(());
    }

    if let Some(path) = &args.export {
        export::export_png(&params, path)
            .with_context(|| format!("Failed to export diagram to {}", path.display()))?;
        return Ok(());
    }

    let (tx, rx) = async_channel::bounded(8);

    // Start Background Services
    runtime::start_background_services(tx);

    // GTK must not see our own flags
    let app = RelmApp::new("org.rim.calculator").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        params,
        config,
        events: rx,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_override_config() {
        let args = Args::try_parse_from(["rim", "--padding", "30", "-d", "300"]).unwrap();
        let cfg = config::ParameterConfig {
            inner_radius: 12,
            padding: 8,
            dimension: 150,
        };

        let merged = args.parameters(&cfg);
        assert_eq!(merged.inner_radius, 12);
        assert_eq!(merged.padding, 30);
        assert_eq!(merged.dimension, 300);
    }

    #[test]
    fn test_out_of_range_overrides_are_clamped() {
        let args = Args::try_parse_from(["rim", "-i", "80", "-p", "500", "-d", "50"]).unwrap();
        let params = Params::from_config(&args.parameters(&config::ParameterConfig::default()));

        assert_eq!(params.inner_radius(), 50);
        assert_eq!(params.dimension(), 100);
        assert_eq!(params.padding(), 40);
    }
}
