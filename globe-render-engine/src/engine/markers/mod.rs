pub mod picking;

use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use constants::globe::{
    GLOBE_RADIUS, MARKER_ALTITUDE, MARKER_AURA_SIZE, MARKER_CORE_RADIUS,
};

use crate::engine::catalog::DestinationCatalog;
use crate::engine::globe::geodesy::surface_normal;
use crate::engine::globe::rotation::GlobeSpin;

const EMISSIVE_BOOST: f32 = 4.0;
const HOVER_SCALE: f32 = 1.5;
const SCALE_SMOOTHING: f32 = 10.0;
const PULSE_RATE: f32 = 1.7;

/// Additive soft-glow billboard behind each marker core.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct MarkerAuraMaterial {
    #[uniform(0)]
    pub color: LinearRgba,

    /// x = camera facing, y = pulse phase value, z/w unused.
    #[uniform(1)]
    pub params: Vec4,
}

impl Material for MarkerAuraMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/marker_aura.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}

/// Marker core entity: the clickable emissive dot.
#[derive(Component)]
pub struct DestinationMarker {
    pub index: usize,
    /// Outward direction in the globe's unrotated frame.
    pub local_dir: Vec3,
    /// dot(surface normal, to-camera), updated every frame; back-side
    /// markers fade and stop picking.
    pub facing: f32,
    pub hovered: bool,
}

#[derive(Component)]
pub struct MarkerAura {
    pub index: usize,
    pub local_dir: Vec3,
    pub phase: f32,
}

/// Spawn a core sphere and aura billboard per catalog destination.
pub fn spawn_markers(
    commands: &mut Commands,
    catalog: &DestinationCatalog,
    meshes: &mut Assets<Mesh>,
    standard_materials: &mut Assets<StandardMaterial>,
    aura_materials: &mut Assets<MarkerAuraMaterial>,
) {
    let core_mesh = meshes.add(Sphere::new(MARKER_CORE_RADIUS).mesh().uv(16, 12));
    let aura_mesh = meshes.add(Rectangle::new(MARKER_AURA_SIZE, MARKER_AURA_SIZE));

    for (index, destination) in catalog.destinations.iter().enumerate() {
        let local_dir = surface_normal(destination.latitude_deg, destination.longitude_deg);
        let color = destination.color();
        let start = local_dir * GLOBE_RADIUS * MARKER_ALTITUDE;

        commands.spawn((
            DestinationMarker {
                index,
                local_dir,
                facing: 1.0,
                hovered: false,
            },
            Name::new(destination.name.clone()),
            Mesh3d(core_mesh.clone()),
            MeshMaterial3d(standard_materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * EMISSIVE_BOOST,
                ..default()
            })),
            Transform::from_translation(start),
        ));

        commands.spawn((
            MarkerAura {
                index,
                local_dir,
                phase: index as f32 * 2.1,
            },
            Name::new(format!("{} aura", destination.name)),
            Mesh3d(aura_mesh.clone()),
            MeshMaterial3d(aura_materials.add(MarkerAuraMaterial {
                color: color.to_linear(),
                params: Vec4::new(1.0, 0.0, 0.0, 0.0),
            })),
            Transform::from_translation(start),
        ));
    }
    info!("Spawned {} destination markers", catalog.destinations.len());
}

/// Re-project markers from the current globe angle, fade the back side and
/// ease the hover scale. Auras also billboard toward the camera here.
pub fn place_markers(
    spin: Res<GlobeSpin>,
    time: Res<Time>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    mut markers: Query<
        (&mut DestinationMarker, &mut Transform, &mut Visibility),
        Without<MarkerAura>,
    >,
    mut auras: Query<
        (
            &MarkerAura,
            &mut Transform,
            &mut Visibility,
            &MeshMaterial3d<MarkerAuraMaterial>,
        ),
        Without<DestinationMarker>,
    >,
    mut aura_materials: ResMut<Assets<MarkerAuraMaterial>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    let camera_pos = camera_transform.translation();
    let rotation = Quat::from_rotation_y(spin.angle);
    let dt = time.delta_secs();

    for (mut marker, mut transform, mut visibility) in &mut markers {
        let normal = rotation * marker.local_dir;
        let position = normal * GLOBE_RADIUS * MARKER_ALTITUDE;
        transform.translation = position;

        marker.facing = normal.dot((camera_pos - position).normalize());
        *visibility = if marker.facing > 0.05 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        let target = if marker.hovered { HOVER_SCALE } else { 1.0 };
        let step = (SCALE_SMOOTHING * dt).min(1.0);
        transform.scale = transform.scale.lerp(Vec3::splat(target), step);
    }

    for (aura, mut transform, mut visibility, material_handle) in &mut auras {
        let normal = rotation * aura.local_dir;
        let position = normal * GLOBE_RADIUS * MARKER_ALTITUDE;
        let facing = normal.dot((camera_pos - position).normalize());

        transform.translation = position;
        transform.rotation = camera_transform.rotation();
        *visibility = if facing > 0.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        if let Some(material) = aura_materials.get_mut(&material_handle.0) {
            let pulse = (time.elapsed_secs() * PULSE_RATE + aura.phase).sin() * 0.5 + 0.5;
            material.params.x = facing.max(0.0);
            material.params.y = pulse;
        }
    }
}
