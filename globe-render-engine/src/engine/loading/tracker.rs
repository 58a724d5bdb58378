use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::texture::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};

use crate::engine::globe::material::{GlobeMaterial, GlobeMaterialHandle};

use super::placeholder::{PlaceholderKind, placeholder_albedo, placeholder_clouds};

pub struct TrackedTexture {
    pub name: &'static str,
    pub handle: Handle<Image>,
    pub resolved: bool,
}

/// Watches every globe texture until it is either loaded or replaced by a
/// generated placeholder.
#[derive(Resource, Default)]
pub struct TextureLoadTracker {
    pub entries: Vec<TrackedTexture>,
    pub ready: bool,
}

impl TextureLoadTracker {
    pub fn track(&mut self, name: &'static str, handle: Handle<Image>) {
        self.entries.push(TrackedTexture {
            name,
            handle,
            resolved: false,
        });
    }

    /// Handle for a tracked texture by name. Panics on unknown names, which
    /// only happens on a typo against `TEXTURE_SOURCES`.
    pub fn handle(&self, name: &str) -> Handle<Image> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.handle.clone())
            .unwrap_or_else(|| panic!("untracked texture {name}"))
    }
}

fn placeholder_for(name: &str) -> Image {
    match name {
        "earth_night" => {
            placeholder_albedo(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, PlaceholderKind::Night)
        }
        "earth_clouds" => placeholder_clouds(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT),
        _ => placeholder_albedo(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, PlaceholderKind::Day),
    }
}

/// Poll load states; swap failures for placeholders and rewire the globe
/// material to the substitute handle.
pub fn track_texture_loading(
    mut tracker: ResMut<TextureLoadTracker>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    globe_material: Option<Res<GlobeMaterialHandle>>,
    mut globe_materials: ResMut<Assets<GlobeMaterial>>,
) {
    if tracker.ready || tracker.entries.is_empty() {
        return;
    }

    for entry in &mut tracker.entries {
        if entry.resolved {
            continue;
        }
        match asset_server.get_load_state(&entry.handle) {
            Some(LoadState::Loaded) => {
                info!("✓ Texture {} loaded", entry.name);
                entry.resolved = true;
            }
            Some(LoadState::Failed(_)) => {
                warn!(
                    "Texture {} failed to load, substituting generated placeholder",
                    entry.name
                );
                let substitute = images.add(placeholder_for(entry.name));
                if let Some(handle) = globe_material.as_ref() {
                    if let Some(material) = globe_materials.get_mut(&handle.0) {
                        match entry.name {
                            "earth_day" => material.day_texture = substitute.clone(),
                            "earth_night" => material.night_texture = substitute.clone(),
                            "earth_clouds" => material.cloud_texture = substitute.clone(),
                            _ => {}
                        }
                    }
                }
                entry.handle = substitute;
                entry.resolved = true;
            }
            _ => {}
        }
    }

    if tracker.entries.iter().all(|entry| entry.resolved) {
        tracker.ready = true;
        info!("✓ All globe textures resolved");
    }
}
