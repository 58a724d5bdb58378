/// Additive rim-glow shell around the globe.
use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey, NotShadowCaster},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, Face, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
        },
    },
};

use constants::globe::{ATMOSPHERE_SCALE, GLOBE_RADIUS};
use constants::palette::HALO;

use crate::engine::lighting::LightingState;

const RIM_FALLOFF_POWER: f32 = 2.0;
const GLOW_DAY: f32 = 0.8;
const GLOW_NIGHT: f32 = 1.25;

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    /// params[0] = halo colour rgb, glow intensity.
    /// params[1] = rim falloff power, night blend, unused, unused.
    #[uniform(0)]
    pub params: [Vec4; 2],
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    // Show the shell's inner faces so the glow reads as a halo past the limb.
    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = Some(Face::Front);
        Ok(())
    }
}

#[derive(Resource)]
pub struct AtmosphereMaterialHandle(pub Handle<AtmosphereMaterial>);

pub fn spawn_atmosphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<AtmosphereMaterial>,
) {
    let halo = HALO.to_linear();
    let material = materials.add(AtmosphereMaterial {
        params: [
            Vec4::new(halo.red, halo.green, halo.blue, GLOW_DAY),
            Vec4::new(RIM_FALLOFF_POWER, 0.0, 0.0, 0.0),
        ],
    });
    commands.insert_resource(AtmosphereMaterialHandle(material.clone()));

    commands.spawn((
        Name::new("Atmosphere"),
        NotShadowCaster,
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS * ATMOSPHERE_SCALE).mesh().uv(64, 32))),
        MeshMaterial3d(material),
        Transform::default(),
    ));
}

/// The glow deepens as night mode blends in.
pub fn update_atmosphere_material(
    lighting: Res<LightingState>,
    handle: Option<Res<AtmosphereMaterialHandle>>,
    mut materials: ResMut<Assets<AtmosphereMaterial>>,
) {
    let Some(handle) = handle else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.0) {
        let blend = lighting.blend;
        material.params[0].w = GLOW_DAY + (GLOW_NIGHT - GLOW_DAY) * blend;
        material.params[1].y = blend;
    }
}
