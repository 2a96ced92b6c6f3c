use anyhow::Context;
use plainpad::config::EditorConfig;
use plainpad::{error, logging, TuiApplication};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let config = match &options.config_path {
        Some(path) => EditorConfig::load(path),
        None => EditorConfig::load_default(),
    }
    .context("failed to load configuration")?;

    logging::init(&config.log).context("failed to initialize logging")?;
    error::setup_panic_handler();
    log::info!("plainpad {} starting", env!("CARGO_PKG_VERSION"));

    let mut app = TuiApplication::new(&config);
    if let Some(file) = &options.file {
        app.app_mut().open_initial(file);
    }
    app.run().context("terminal session failed")?;
    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<PathBuf>,
    file: Option<String>,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("usage: plainpad [--config PATH] [FILE]");
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("plainpad {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                anyhow::bail!("unknown option: {}", other);
            }
            other => {
                if options.file.is_some() {
                    anyhow::bail!("only one file can be opened");
                }
                options.file = Some(other.to_string());
            }
        }
    }

    Ok(options)
}
