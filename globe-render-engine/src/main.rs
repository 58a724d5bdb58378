use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod ui;

use crate::engine::atmosphere::{
    AtmosphereMaterial, spawn_atmosphere, update_atmosphere_material,
};
use crate::engine::camera::{OrbitCamera, camera_controller};
use crate::engine::catalog::{
    CatalogLoader, DestinationCatalog, SelectedDestination, load_catalog_system,
};
use crate::engine::globe::material::{CloudLayer, GlobeMaterial, update_globe_material};
use crate::engine::globe::rotation::{GlobeSpin, apply_globe_rotation, globe_spin_system};
use crate::engine::globe::spawn_globe;
use crate::engine::lighting::{
    LightingState, lighting_blend_system, lighting_toggle_system, spawn_sun,
};
use crate::engine::loading::tracker::{TextureLoadTracker, track_texture_loading};
use crate::engine::markers::picking::{PointerOverMarker, marker_picking_system};
use crate::engine::markers::{MarkerAuraMaterial, place_markers};
use crate::engine::post::{spawn_scene_camera, update_depth_of_field};
use crate::engine::sky::{SkyMaterial, Starfield, animate_starfield, spawn_sky};
use crate::ui::interactions::{
    PointerOverUi, apply_glass_opacity, fps_text_update_system, lighting_button_system,
    refresh_featured_panel, style_mode_buttons, ui_pointer_system,
};
use crate::ui::overlay::spawn_overlay;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<GlobeMaterial>::default())
        .add_plugins(MaterialPlugin::<AtmosphereMaterial>::default())
        .add_plugins(MaterialPlugin::<SkyMaterial>::default())
        .add_plugins(MaterialPlugin::<MarkerAuraMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<DestinationCatalog>::new(&["json"]));

    app.init_resource::<CatalogLoader>()
        .init_resource::<SelectedDestination>()
        .init_resource::<GlobeSpin>()
        .init_resource::<CloudLayer>()
        .init_resource::<OrbitCamera>()
        .init_resource::<LightingState>()
        .init_resource::<TextureLoadTracker>()
        .init_resource::<Starfield>()
        .init_resource::<PointerOverMarker>()
        .init_resource::<PointerOverUi>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                load_catalog_system,
                track_texture_loading,
                (
                    ui_pointer_system,
                    marker_picking_system,
                    globe_spin_system,
                    camera_controller,
                )
                    .chain(),
                apply_globe_rotation,
                place_markers,
                lighting_toggle_system,
                lighting_blend_system,
                update_globe_material,
                update_atmosphere_material,
                animate_starfield,
                update_depth_of_field,
            ),
        )
        .add_systems(
            Update,
            (
                lighting_button_system,
                style_mode_buttons,
                apply_glass_opacity,
                refresh_featured_panel,
                fps_text_update_system,
            ),
        );

    app
}

fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut globe_materials: ResMut<Assets<GlobeMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
    mut sky_materials: ResMut<Assets<SkyMaterial>>,
    mut tracker: ResMut<TextureLoadTracker>,
    orbit: Res<OrbitCamera>,
) {
    spawn_scene_camera(&mut commands, &orbit);
    spawn_sun(&mut commands);
    spawn_sky(
        &mut commands,
        &mut meshes,
        &mut sky_materials,
        &mut standard_materials,
    );
    spawn_globe(
        &mut commands,
        &mut meshes,
        &mut globe_materials,
        &asset_server,
        &mut tracker,
    );
    spawn_atmosphere(&mut commands, &mut meshes, &mut atmosphere_materials);
    spawn_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Wanderworld Studio".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
