//! Command-line client for the BioID Web Service live-detection endpoint.
//! Submits two face images and reports whether the service judged them to
//! depict a live person.

mod http;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use service::api::send_live_detection;
use service::config::Config;
use service::image::encode_image_file;
use service::report::process_response;

#[derive(Debug, Parser)]
#[command(name = "livedetect", version, about = "BioID Web Service live-detection client")]
struct Args {
    /// BioID Web Service AppID.
    #[arg(long = "BWSAppID")]
    bws_app_id: String,

    /// BioID Web Service AppSecret.
    #[arg(long = "BWSAppSecret")]
    bws_app_secret: String,

    /// 1st source image.
    #[arg(long = "image1")]
    image1: PathBuf,

    /// 2nd source image.
    #[arg(long = "image2")]
    image2: PathBuf,

    /// Return detailed JSON output of the response.
    #[arg(long = "detailedResponse", action = clap::ArgAction::SetTrue)]
    detailed_response: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            app_id: self.bws_app_id,
            app_secret: self.bws_app_secret,
            image1: self.image1,
            image2: self.image2,
            detailed: self.detailed_response,
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.into_config();
    config.validate()?;

    let liveimage1 = encode_image_file(&config.image1)?;
    let liveimage2 = encode_image_file(&config.image2)?;

    let transport = http::BlockingTransport::new()?;
    let (status, body) = send_live_detection(&transport, &config, &liveimage1, &liveimage2)?;

    let report = process_response(status, &body, config.detailed)?;
    // Program output goes to stdout; diagnostics go through tracing.
    println!("{report}");
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err:#}");
        process::exit(1);
    }
}
