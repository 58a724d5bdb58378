/// Backdrop: gradient dome plus a slowly drifting, twinkling starfield.
use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey, NotShadowCaster},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
        },
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f32::consts::TAU;

use constants::palette::{BACKGROUND_BOTTOM, BACKGROUND_TOP};
use constants::sky::{
    SKY_RADIUS, STAR_COUNT, STAR_SIZE_MAX, STAR_SIZE_MIN, STARFIELD_DRIFT_RATE, STARFIELD_RADIUS,
    STARFIELD_SEED, TWINKLE_SPEED_MAX, TWINKLE_SPEED_MIN,
};

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SkyMaterial {
    /// params[0] = top colour, params[1] = bottom colour.
    #[uniform(0)]
    pub params: [Vec4; 2],
}

impl Material for SkyMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/sky.wgsl".into()
    }

    // The dome is viewed from inside.
    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[derive(Component)]
pub struct Star {
    pub base_dir: Vec3,
    pub size: f32,
    pub phase: f32,
    pub twinkle_speed: f32,
}

/// Accumulated drift angle for the whole field.
#[derive(Resource, Default)]
pub struct Starfield {
    pub angle: f32,
}

pub fn spawn_sky(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    sky_materials: &mut Assets<SkyMaterial>,
    standard_materials: &mut Assets<StandardMaterial>,
) {
    let top = BACKGROUND_TOP.to_linear();
    let bottom = BACKGROUND_BOTTOM.to_linear();
    commands.spawn((
        Name::new("SkyDome"),
        NotShadowCaster,
        Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(sky_materials.add(SkyMaterial {
            params: [
                Vec4::new(top.red, top.green, top.blue, 1.0),
                Vec4::new(bottom.red, bottom.green, bottom.blue, 1.0),
            ],
        })),
        Transform::default(),
    ));

    // One shared additive material; twinkle is per-star scale modulation.
    let star_mesh = meshes.add(Rectangle::new(1.0, 1.0));
    let star_material = standard_materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 2.5,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    let mut rng = StdRng::seed_from_u64(STARFIELD_SEED);
    for _ in 0..STAR_COUNT {
        let z: f32 = rng.gen_range(-1.0..1.0);
        let theta: f32 = rng.gen_range(0.0..TAU);
        let planar = (1.0 - z * z).max(0.0).sqrt();
        let base_dir = Vec3::new(planar * theta.cos(), z, planar * theta.sin());
        let size = rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX);

        commands.spawn((
            Star {
                base_dir,
                size,
                phase: rng.gen_range(0.0..TAU),
                twinkle_speed: rng.gen_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
            },
            NotShadowCaster,
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(base_dir * STARFIELD_RADIUS)
                .with_scale(Vec3::splat(size)),
        ));
    }
}

/// Drift the field and twinkle each star; quads billboard to the camera.
pub fn animate_starfield(
    time: Res<Time>,
    mut field: ResMut<Starfield>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    mut stars: Query<(&Star, &mut Transform)>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    field.angle = (field.angle + time.delta_secs() * STARFIELD_DRIFT_RATE).rem_euclid(TAU);
    let rotation = Quat::from_rotation_y(field.angle);
    let camera_rotation = camera_transform.rotation();
    let elapsed = time.elapsed_secs();

    for (star, mut transform) in &mut stars {
        transform.translation = rotation * star.base_dir * STARFIELD_RADIUS;
        transform.rotation = camera_rotation;
        let twinkle = 0.75 + 0.25 * (elapsed * star.twinkle_speed + star.phase).sin();
        transform.scale = Vec3::splat(star.size * twinkle);
    }
}
