use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{error, info};

use layer_shell_demo::{css, ConfigPaths, DemoSettings, DemoWindow};

const APP_ID: &str = "org.gtk.example";

#[derive(Parser)]
#[command(name = "layer-shell-demo")]
#[command(about = "Layer-shell surface demo with live layer and anchor controls")]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("layer_shell_demo=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let paths = match cli.config {
        Some(path) => ConfigPaths::with_settings(path),
        None => ConfigPaths::new(),
    };
    let settings = DemoSettings::load(&paths.settings);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    info!("Starting layer-shell demo");

    let app = Application::builder().application_id(APP_ID).build();

    let init_failed = Rc::new(Cell::new(false));
    let failed = init_failed.clone();
    app.connect_activate(move |app| {
        css::load_css();

        match DemoWindow::new(app, &settings) {
            Ok(window) => {
                window.present();
                info!("Demo window presented");
            }
            Err(e) => {
                error!("Cannot create layer surface: {}", e);
                failed.set(true);
                app.quit();
            }
        }
    });

    // Command-line arguments are ours, not GApplication's
    let exit_code = app.run_with_args::<&str>(&[]);

    if init_failed.get() {
        anyhow::bail!("layer-shell initialization failed");
    }

    info!("Layer-shell demo exiting");
    std::process::exit(exit_code.into());
}
