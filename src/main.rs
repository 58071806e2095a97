//! Command-line front end: renders visibility images from JSON scenes.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ Context, Result };
use clap::{ Parser, Subcommand };

use visibility_tracer::scene::Scene;

#[derive(Parser)]
#[clap(author, version, about = "Renders which pixels of a scene see a shape", long_about = None)]
struct Cli {
    /// Log per-render detail
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene file to a PNG image
    Render {
        /// Scene description (.json)
        scene: PathBuf,
        /// Output image
        #[clap(short, long, default_value = "out.png")]
        output: PathBuf,
        /// Override the scene's image width
        #[clap(long)]
        width: Option<usize>,
        /// Override the scene's image height
        #[clap(long)]
        height: Option<usize>,
        /// Render on a single thread
        #[clap(long)]
        serial: bool,
    },
    /// Write a sample two-sphere scene
    Init {
        /// Where to write the scene
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    use simplelog::LevelFilter::{ Debug, Info, Off };
    simplelog::TermLogger::init(
        if cli.verbose { Debug } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Render { scene, output, width, height, serial } => {
            let mut loaded = Scene::load(&scene)
                .with_context(|| format!("failed to load scene {}", scene.display()))?;
            if let Some(width) = width {
                loaded.width = width;
            }
            if let Some(height) = height {
                loaded.height = height;
            }

            let start = Instant::now();
            let bitmap = if serial { loaded.render() } else { loaded.render_parallel() };
            log::info!("rendered {}x{} in {:.2?}", bitmap.width(), bitmap.height(), start.elapsed());

            bitmap.save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Commands::Init { path } => {
            Scene::default().save(&path)
                .with_context(|| format!("failed to write scene {}", path.display()))?;
        }
    }

    Ok(())
}
