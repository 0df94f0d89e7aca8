use clap::{Parser, Subcommand};
use photo_gallery::config::{self, GalleryConfig};
use photo_gallery::events::GalleryEvent;
use photo_gallery::gallery::Gallery;
use photo_gallery::output;
use photo_gallery::source::{
    DirectoryPhotoSource, JsonReviewSource, ManifestPhotoSource, MockPhotoSource, PhotoSource,
    ReviewSource, StaticReviewSource,
};
use photo_gallery::timer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Where photos and reviews come from.
#[derive(clap::Args, Clone)]
struct SourceArgs {
    /// JSON file with an array of photos (takes precedence over --content)
    #[arg(long, global = true)]
    photos: Option<PathBuf>,

    /// Content directory: one subdirectory per folder
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// JSON file with an array of reviews (default: built-in testimonials)
    #[arg(long, global = true)]
    reviews: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "photo-gallery")]
#[command(about = "Drive the photo gallery state engine from the command line")]
#[command(long_about = "\
Drive the photo gallery state engine from the command line

Photos come from --photos (JSON), --content (directory tree) or, by default,
a built-in mock folder set. Reviews come from --reviews (JSON) or the
built-in testimonials.

Replay scripts hold one event per line:

  filter portraits      # select a folder (\"all\" for everything)
  open 0                # open the lightbox on grid photo 0
  key ArrowRight        # Escape, ArrowLeft, ArrowRight
  swipe 100 40          # touch start x, end x
  step carousel -1      # carousel, lightbox or reviews; +1 or -1
  jump reviews 2
  close
  tick                  # carousel auto-rotation

Set RUST_LOG=debug to trace every event.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(flatten)]
    sources: SourceArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List folders, photo counts and reviews
    Inventory,
    /// Apply an event script and print the gallery state after each event
    Replay {
        /// Event script, one event per line
        script: PathBuf,
    },
    /// Run the auto-rotate and auto-refresh timers, then print the final state
    Play {
        /// How long to run, in seconds
        #[arg(long, default_value_t = 10)]
        seconds: u64,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Inventory => {
            let (_, _, gallery) = load_gallery(&cli)?;
            output::print_inventory(&gallery);
        }
        Command::Replay { script } => {
            let (_, _, mut gallery) = load_gallery(&cli)?;
            let content = std::fs::read_to_string(script)?;
            output::print_state(&gallery);
            for (n, line) in content.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let event: GalleryEvent = line
                    .parse()
                    .map_err(|e| format!("{}:{}: {e}", script.display(), n + 1))?;
                println!();
                println!("> {line}");
                if let Err(e) = gallery.handle(event) {
                    println!("    error: {e}");
                }
                output::print_state(&gallery);
            }
        }
        Command::Play { seconds } => {
            let (site_config, photos, gallery) = load_gallery(&cli)?;
            let settings = &site_config.gallery;
            let shared = gallery.shared();
            let rotate = timer::auto_rotate(Arc::clone(&shared), settings.carousel_interval());
            let refresh = timer::auto_refresh(
                Arc::clone(&shared),
                photos,
                settings.auto_refresh_interval(),
            );
            println!(
                "==> Running for {seconds}s (rotate: {}, refresh: {})",
                if rotate.is_some() { "on" } else { "off" },
                if refresh.is_some() { "on" } else { "off" },
            );
            std::thread::sleep(Duration::from_secs(*seconds));
            drop(rotate);
            drop(refresh);
            let gallery = shared.lock().map_err(|_| "gallery lock poisoned")?;
            output::print_state(&gallery);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config, pick the sources, and do the initial bulk fetch.
fn load_gallery(
    cli: &Cli,
) -> Result<(GalleryConfig, Arc<dyn PhotoSource>, Gallery), Box<dyn std::error::Error>> {
    let site_config = config::load_config(&cli.config)?;
    let photos = photo_source(&cli.sources, &site_config);
    let reviews = review_source(&cli.sources);
    let gallery = Gallery::load(&*photos, &*reviews, site_config.gallery.clone())?;
    Ok((site_config, photos, gallery))
}

/// Log to stderr so stdout stays clean. `RUST_LOG` overrides the default
/// `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn photo_source(args: &SourceArgs, config: &GalleryConfig) -> Arc<dyn PhotoSource> {
    match (&args.photos, &args.content) {
        (Some(path), _) => Arc::new(ManifestPhotoSource::new(path)),
        (None, Some(dir)) => Arc::new(DirectoryPhotoSource::new(dir, config)),
        (None, None) => Arc::new(MockPhotoSource::with_default_folders(
            config.cdn.base_url.clone(),
        )),
    }
}

fn review_source(args: &SourceArgs) -> Box<dyn ReviewSource> {
    match &args.reviews {
        Some(path) => Box::new(JsonReviewSource::new(path)),
        None => Box::new(StaticReviewSource::default()),
    }
}
