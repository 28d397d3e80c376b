use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sustainer_cli::{run, Args, OutputFormat};

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("sustainer=info".parse()?);
    let sub = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(sub)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();
    init_tracing()?;

    let args = Args::parse();
    info!("Sustainer starting. snapshot={}, dark={}, format={:?}",
          args.snapshot.display(), args.dark, args.format);

    let report = run(&args).await?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    Ok(())
}
