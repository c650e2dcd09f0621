//! Loads a point file, builds its proximity mesh and prints the pixel-space
//! draw list for a vertical reel.
//!
//! Usage:
//! ```text
//! cargo run --example mesh_dump -- face.json          # k = 5
//! cargo run --example mesh_dump -- face.json 3        # custom k
//! cargo run --example mesh_dump -- face.json 3 reel.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use facemesh::mesh::NeighborCount;
use facemesh::presentation::{MeshDrawing, PresentationConfig};
use facemesh::{EdgeStyle, PointStore, ProximityMeshBuilder};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for facemesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=facemesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("facemesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let points_path = PathBuf::from(args.next().ok_or("missing point file argument")?);
    let k = match args.next() {
        Some(raw) => NeighborCount::try_from(raw.parse::<i64>()?)?,
        None => NeighborCount::new(5),
    };
    let config = match args.next() {
        Some(path) => PresentationConfig::load(&PathBuf::from(path))?,
        None => PresentationConfig::default(),
    };

    let points = PointStore::new().load(&points_path)?;
    let style = EdgeStyle::new(config.accent_color, 0.02)?;
    let edges = ProximityMeshBuilder::with_count(k, style).build(&points)?;
    let drawing = MeshDrawing::new(&points, &edges)?.to_pixels(&config);

    tracing::info!(
        points = drawing.dots.len(),
        segments = drawing.segments.len(),
        "mesh ready"
    );
    println!(
        "canvas {}x{} background {}",
        config.pixel_width, config.pixel_height, config.background
    );
    for dot in &drawing.dots {
        println!(
            "dot {:.1} {:.1} r={:.1} {}",
            dot.center.x, dot.center.y, dot.radius, dot.color
        );
    }
    for seg in &drawing.segments {
        println!(
            "line {:.1} {:.1} -> {:.1} {:.1} w={} {}",
            seg.start.x, seg.start.y, seg.end.x, seg.end.y, seg.stroke_width, seg.color
        );
    }
    Ok(())
}
