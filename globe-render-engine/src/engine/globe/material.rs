/// Globe surface material: day/night albedo blend, terminator band,
/// sun-side specular and a scrolling cloud layer.
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use constants::globe::{CLOUD_SCROLL_RATE, CLOUD_STRENGTH, SPECULAR_STRENGTH, TERMINATOR_SOFTNESS};

use crate::engine::lighting::{LightingState, SUN_DIRECTION};

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlobeMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub day_texture: Handle<Image>,

    #[texture(2)]
    #[sampler(3)]
    pub night_texture: Handle<Image>,

    #[texture(4)]
    #[sampler(5)]
    pub cloud_texture: Handle<Image>,

    /// params[0] = sun direction xyz, terminator softness.
    /// params[1] = night blend, cloud scroll, cloud strength, specular strength.
    #[uniform(6)]
    pub params: [Vec4; 2],
}

impl Material for GlobeMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/globe.wgsl".into()
    }
}

impl GlobeMaterial {
    pub fn new(day: Handle<Image>, night: Handle<Image>, clouds: Handle<Image>) -> Self {
        Self {
            day_texture: day,
            night_texture: night,
            cloud_texture: clouds,
            params: [
                SUN_DIRECTION.normalize().extend(TERMINATOR_SOFTNESS),
                Vec4::new(0.0, 0.0, CLOUD_STRENGTH, SPECULAR_STRENGTH),
            ],
        }
    }
}

/// Handle to the single globe material so systems can rewrite its uniforms
/// and swap texture handles after a fallback.
#[derive(Resource)]
pub struct GlobeMaterialHandle(pub Handle<GlobeMaterial>);

/// Independent scroll offset for the cloud layer.
#[derive(Resource, Default)]
pub struct CloudLayer {
    pub scroll: f32,
}

/// Push lighting blend and cloud scroll into the material every frame.
pub fn update_globe_material(
    lighting: Res<LightingState>,
    mut clouds: ResMut<CloudLayer>,
    time: Res<Time>,
    handle: Option<Res<GlobeMaterialHandle>>,
    mut materials: ResMut<Assets<GlobeMaterial>>,
) {
    clouds.scroll = (clouds.scroll + time.delta_secs() * CLOUD_SCROLL_RATE).fract();

    let Some(handle) = handle else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.0) {
        material.params[0] = SUN_DIRECTION.normalize().extend(TERMINATOR_SOFTNESS);
        material.params[1] = Vec4::new(
            lighting.blend,
            clouds.scroll,
            CLOUD_STRENGTH,
            SPECULAR_STRENGTH,
        );
    }
}
