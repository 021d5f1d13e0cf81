use clap::Parser;
use png2jpg::converter;

/// Convert the built-in PNG images to JPEG on a white background.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Cli::parse();

    let jobs = converter::default_jobs();
    log::debug!("running {} conversion job(s)", jobs.len());

    let summary = converter::run_jobs(&jobs, &mut std::io::stdout().lock())?;
    log::info!(
        "{} converted, {} failed",
        summary.converted,
        summary.failed
    );

    Ok(())
}
