/*

    Demo binary: load a group of meshes from a scene JSON, derive its
    bounding cylinder, export the wireframe proxy as OBJ, and show the
    in-place update contract by nudging the group afterwards.

    @date: 1 Dec, 2025
    @author: Bartu

*/

use std::{self, env, path::Path};
use tracing::{info, warn, error};
use tracing_subscriber;

use cylinder_bounding::cylinder::CylinderBounding;
use cylinder_bounding::json_parser::parse_scene;
use cylinder_bounding::numeric::Vector3;
use cylinder_bounding::proxy::ProxyMesh;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: String = if args.len() == 1 {
        warn!("No arguments were provided, setting default scene path...");
        String::from("./inputs/demo_scene.json")
    } else if args.len() == 2 {
        args[1].clone()
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    info!("Loading scene from {}...", json_path);
    let mut group = parse_scene(Path::new(&json_path)).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;
    info!("Scene has {} renderable leaves.", group.count_leaves());

    // Derive the bounding cylinder for the whole group
    let mut bounding = CylinderBounding::derive(&group)?;
    info!(
        "Bounding cylinder: center {:?}, radius {}, height {}, position {:?}",
        bounding.center, bounding.radius, bounding.height, bounding.position
    );

    // Build the wireframe proxy and save it next to the current folder
    // so it can be opened in any mesh viewer.
    let proxy = ProxyMesh::new_from(&bounding);
    proxy.save_obj(Path::new("./bounding_cylinder.obj"))?;

    // Frame-loop style refresh: move the group and update in place.
    // Note radius and direction deliberately keep their derived values.
    group.position += Vector3::new(0.0, 0.5, 0.0);
    bounding.update(&group)?;
    info!(
        "After moving the group: position {:?} (radius still {})",
        bounding.position, bounding.radius
    );
    info!("The earlier proxy is a stale snapshot now; rebuild it to follow the update.");

    info!("Finished execution.");
    Ok(())
}
