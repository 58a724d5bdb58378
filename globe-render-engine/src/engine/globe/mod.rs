pub mod geodesy;
pub mod material;
pub mod rotation;

use bevy::prelude::*;

use constants::globe::{GLOBE_RADIUS, GLOBE_SECTORS, GLOBE_STACKS};
use constants::texture::TEXTURE_SOURCES;

use crate::engine::loading::tracker::TextureLoadTracker;
use material::{GlobeMaterial, GlobeMaterialHandle};

#[derive(Component)]
pub struct Globe;

/// Spawn the textured sphere and kick off the texture loads. Handles go into
/// the load tracker so failures can be swapped for placeholders later.
pub fn spawn_globe(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<GlobeMaterial>,
    asset_server: &AssetServer,
    tracker: &mut TextureLoadTracker,
) {
    for source in &TEXTURE_SOURCES {
        info!("Loading {} from {}", source.name, source.asset_path);
        tracker.track(source.name, asset_server.load(source.asset_path));
    }

    let material = materials.add(GlobeMaterial::new(
        tracker.handle("earth_day"),
        tracker.handle("earth_night"),
        tracker.handle("earth_clouds"),
    ));
    commands.insert_resource(GlobeMaterialHandle(material.clone()));

    commands.spawn((
        Globe,
        Name::new("Globe"),
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(GLOBE_SECTORS as u32, GLOBE_STACKS as u32))),
        MeshMaterial3d(material),
        Transform::default(),
    ));
}
