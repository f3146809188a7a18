use env_logger::{Builder, Env, Target};
use log::error;
use std::process;
use std::time::Duration;
use xkcd_grab::{run, Cli, FetchRequest, Settings, XkcdClient};

const EXIT_FAIL: i32 = 1;

#[tokio::main]
async fn main() {
    // Init logging
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stdout);
    builder.init();

    // Parse Args, help and version exit here
    let cli = Cli::new();
    let Some(output) = cli.output() else {
        println!("No output file specified.");
        process::exit(EXIT_FAIL);
    };

    // Parse Settings
    let settings = match Settings::new(cli.config.as_deref()) {
        Ok(s) => cli.apply(s),
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(EXIT_FAIL);
        }
    };

    if let Err(e) = start(&settings, output).await {
        error!("Application error: {}", e);
        process::exit(EXIT_FAIL);
    }
}

async fn start(settings: &Settings, output: &std::path::Path) -> anyhow::Result<()> {
    let request = FetchRequest::from_settings(settings, output)?;
    let client = XkcdClient::new(
        &settings.base_url,
        Duration::from_secs(settings.timeout_secs),
    )?;

    run(&request, &client).await?;
    Ok(())
}
