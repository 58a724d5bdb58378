use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::markers::{MarkerAuraMaterial, spawn_markers};

const CATALOG_PATH: &'static str = "data/destinations.json";

/// One destination record. Display data only: loaded once, selected one at
/// a time, never mutated.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Destination {
    pub name: String,
    pub tagline: String,
    pub latitude_deg: f32,
    pub longitude_deg: f32,
    pub color: [f32; 3],
}

impl Destination {
    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

#[derive(Deserialize, Asset, TypePath, Clone, Debug)]
pub struct DestinationCatalog {
    pub destinations: Vec<Destination>,
}

/// Deferred catalog load, polled until the asset server delivers it.
#[derive(Resource, Default)]
pub struct CatalogLoader {
    pub handle: Option<Handle<DestinationCatalog>>,
    pub spawned: bool,
}

/// Catalog copy kept around for the UI once loading finishes.
#[derive(Resource)]
pub struct ActiveCatalog(pub DestinationCatalog);

/// Index of the destination featured in the side panel.
#[derive(Resource, Default)]
pub struct SelectedDestination {
    pub index: Option<usize>,
}

/// Start the catalog load, then spawn markers and select the first entry
/// once the JSON arrives.
pub fn load_catalog_system(
    mut loader: ResMut<CatalogLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<DestinationCatalog>>,
    mut selected: ResMut<SelectedDestination>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut aura_materials: ResMut<Assets<MarkerAuraMaterial>>,
) {
    if loader.handle.is_none() {
        info!("Loading destination catalog from {}", CATALOG_PATH);
        loader.handle = Some(asset_server.load(CATALOG_PATH));
        return;
    }

    if loader.spawned {
        return;
    }
    let Some(catalog) = loader.handle.as_ref().and_then(|h| catalogs.get(h)) else {
        return;
    };

    spawn_markers(
        &mut commands,
        catalog,
        &mut meshes,
        &mut standard_materials,
        &mut aura_materials,
    );
    if !catalog.destinations.is_empty() {
        selected.index = Some(0);
    }
    info!(
        "✓ Destination catalog loaded ({} destinations)",
        catalog.destinations.len()
    );
    commands.insert_resource(ActiveCatalog(catalog.clone()));
    loader.spawned = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_json_deserializes() {
        let json = r#"{
            "destinations": [
                {
                    "name": "Hyderabad",
                    "tagline": "Regal dawn skylines meeting cutting-edge waterfront nights.",
                    "latitude_deg": 17.385,
                    "longitude_deg": 78.4867,
                    "color": [1.0, 0.82, 0.59]
                }
            ]
        }"#;
        let catalog: DestinationCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.destinations.len(), 1);
        assert_eq!(catalog.destinations[0].name, "Hyderabad");
        assert_eq!(catalog.destinations[0].latitude_deg, 17.385);
    }

    #[test]
    fn shipped_catalog_parses() {
        let raw = include_str!("../../assets/data/destinations.json");
        let catalog: DestinationCatalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.destinations.len(), 3);
        let names: Vec<&str> = catalog
            .destinations
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hyderabad", "Reykjavík", "Cape Town"]);
        for dest in &catalog.destinations {
            assert!((-90.0..=90.0).contains(&dest.latitude_deg));
            assert!((-180.0..=180.0).contains(&dest.longitude_deg));
        }
    }
}
