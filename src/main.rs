use cinelog::core::config::{self, CliOverrides};
use cinelog::core::locale::Locale;
use cinelog::tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "cinelog", about = "Movie journal with AI review questions")]
struct Args {
    /// UI language
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Gemini model used for review questions
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cinelog.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cinelog.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let cli = CliOverrides {
        locale: args.locale,
        model: args.model,
    };
    let resolved = config::load_config().and_then(|file_config| config::resolve(&file_config, &cli));
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Startup configuration error: {}", e);
            eprintln!("cinelog: {e}");
            std::process::exit(1);
        }
    };

    log::info!("cinelog starting up: {:?}", resolved);

    tui::run(resolved)?;
    Ok(())
}
