/// A named globe texture: where it came from and where the asset server
/// finds it.
pub struct TextureSource {
    pub name: &'static str,
    pub remote_url: &'static str,
    pub asset_path: &'static str,
}

/// Static texture configuration. The remote URLs document provenance; loading
/// always goes through the asset path.
pub const TEXTURE_SOURCES: [TextureSource; 3] = [
    TextureSource {
        name: "earth_day",
        remote_url: "https://unpkg.com/three-globe@2.31.0/example/img/earth-blue-marble.jpg",
        asset_path: "textures/earth_day.jpg",
    },
    TextureSource {
        name: "earth_night",
        remote_url: "https://unpkg.com/three-globe@2.31.0/example/img/earth-night.jpg",
        asset_path: "textures/earth_night.jpg",
    },
    TextureSource {
        name: "earth_clouds",
        remote_url: "https://threejs.org/examples/textures/planets/earth_clouds_1024.png",
        asset_path: "textures/earth_clouds.png",
    },
];

/// Generated placeholder dimensions (equirectangular, 2:1).
pub const PLACEHOLDER_WIDTH: u32 = 1024;
pub const PLACEHOLDER_HEIGHT: u32 = 512;
