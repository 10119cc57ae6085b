//! Route through a chain of rooms and print the resulting path.
//!
//! Usage:
//!   cargo run --example route_demo
//!   cargo run --example route_demo -- --rooms 6 --complete
//!   RUST_LOG=marga=trace cargo run --example route_demo

use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use marga::core::Aabb;
use marga::world::{BoxRegion, FlatTerrain, ObstacleSet, RegionMap};
use marga::{MargaConfig, PathNode, Router, RoutingMode, Vec3, World};

/// Region routing demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/marga.yaml")]
    config: String,

    /// Number of rooms in the corridor
    #[arg(short, long, default_value_t = 3)]
    rooms: usize,

    /// Plan all the way to the goal instead of the next room
    #[arg(long)]
    complete: bool,
}

fn corridor(count: usize) -> World {
    let mut regions = RegionMap::new();
    for i in 0..count {
        let z0 = i as f32 * 6.0 - 2.0;
        regions.add(BoxRegion::new(Aabb::new(
            Vec3::new(-3.0, -1.0, z0),
            Vec3::new(3.0, 3.0, z0 + 6.0),
        )));
        if i > 0 {
            regions.connect(i - 1, i);
        }
    }

    // A pillar in the middle of every room
    let mut obstacles = ObstacleSet::new();
    for i in 0..count {
        let z = i as f32 * 6.0 + 1.0;
        obstacles.add_box(Aabb::from_center(
            Vec3::new(0.0, 1.0, z),
            Vec3::new(0.5, 2.0, 0.5),
        ));
    }

    World::new(
        Arc::new(regions),
        Arc::new(FlatTerrain::new(0.0)),
        Arc::new(obstacles),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match MargaConfig::load(Path::new(&args.config)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default config ({})", e);
            MargaConfig::default()
        }
    };
    if args.complete {
        config.planner.routing = RoutingMode::Complete;
    }
    config.planner.obstacle_clearance_radius = 0.3;

    let rooms = args.rooms.max(1);
    let router = Router::new(corridor(rooms), config.planner.clone());
    let start = PathNode::new(Vec3::ZERO, Vec3::FORWARD);
    let goal = PathNode::at(Vec3::new(0.0, 0.0, rooms as f32 * 6.0 - 4.0));

    let ticket = router.route_channel(start, goal, &config.motion)?;
    log::info!("Request accepted: {}", ticket.accepted());

    let Some(result) = ticket.wait_timeout(Duration::from_secs(60)) else {
        log::error!("No result within 60 s");
        return Ok(());
    };

    if !result.success {
        log::warn!("Planning failed: {:?}", result.failure_reason);
    }
    println!(
        "success={} states={} expanded={} generated={} duration={:.1}s length={:.2}m",
        result.success,
        result.len(),
        result.nodes_expanded,
        result.nodes_generated,
        result.duration(),
        result.length()
    );
    for node in &result.waypoints {
        println!(
            "  t={:5.1}  ({:6.2}, {:5.2}, {:6.2})  region={:?}",
            node.time_moment, node.position.x, node.position.y, node.position.z, node.region
        );
    }
    Ok(())
}
