//! Anshar sample: a spinning textured cube over a ground plane, with the
//! cube's planar-projected shadow.

mod app;
mod scene;

use anshar_engine::device::GpuInit;
use anshar_engine::logging::{init_logging, LoggingConfig};
use anshar_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use app::CubeApp;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Anshar cube".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), CubeApp::default())
}
