//! veneer-studio: renders masking scenes with the CPU reference and prints
//! preprocessed shaders.

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use veneer_engine::logging::{init_logging, LoggingConfig};
use veneer_engine::shader::{
    DirectoryStore, EmbeddedStore, Preprocessor, ShaderCaps, ShaderStage, ShaderStore,
};

use crate::config::SceneConfig;

/// Previewer for veneer masking scenes and shader headers
#[derive(Parser, Debug)]
#[command(name = "veneer-studio")]
#[command(about = "Previewer for veneer masking scenes and shader headers")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a TOML scene to a PNG
    Render {
        /// Scene file
        scene: PathBuf,

        /// Output image
        #[arg(short, long, default_value = "scene.png")]
        output: PathBuf,
    },

    /// Print a shader with includes and internal headers resolved
    Shader {
        /// Shader name, relative to --dir (or a built-in header)
        name: String,

        #[arg(long, value_enum, default_value_t = Stage::Fragment)]
        stage: Stage,

        /// Directory to load shaders from
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Use the uniform-buffer masking fallback
        #[arg(long)]
        no_ssbo: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stage {
    Vertex,
    Fragment,
}

impl From<Stage> for ShaderStage {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Vertex => ShaderStage::Vertex,
            Stage::Fragment => ShaderStage::Fragment,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    match args.command {
        Command::Render { scene, output } => {
            let scene = SceneConfig::load(&scene)?;
            let canvas = render::render_scene(&scene);
            render::save_png(&canvas, &output)
        }
        Command::Shader { name, stage, dir, no_ssbo } => {
            let store: Box<dyn ShaderStore> = match dir {
                Some(dir) => Box::new(DirectoryStore::new(dir)),
                None => Box::new(EmbeddedStore::new()),
            };
            let source = Preprocessor::new(store.as_ref())
                .with_caps(ShaderCaps { structured_buffer: !no_ssbo })
                .process(&name, stage.into())
                .with_context(|| format!("failed to preprocess {name}"))?;
            print!("{source}");
            Ok(())
        }
    }
}
