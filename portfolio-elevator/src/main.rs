use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod content;
mod engine;
mod error;
mod tools;

use content::library::{resolve_content, ContentLoader, ContentManifest};
use engine::camera::cabin_camera::{camera_controller, CabinCamera};
use engine::core::teardown::{
    dispose_view, handle_teardown_requests, request_teardown_on_escape, TeardownRequest,
};
use engine::core::view_state::{transition_to_running, verify_mount, ViewScoped, ViewState};
use engine::scene::cabin::spawn_cabin;
use engine::scene::panel::{resolve_label_textures, spawn_panel};
use engine::scene::reveal::spawn_reveal;
use engine::systems::doors::{tick_door_animation, tick_reveal_fade};
use engine::systems::navigation::{
    handle_drawer_dismissed, handle_floor_requests, handle_reset_requests, DrawerCloseRequest,
    DrawerDismissed, FloorIndicator, FloorRequest, NavigationState, PresentContent, ResetRequest,
};
use engine::systems::travel::tick_travel;
use tools::floor_select::{pointer_select, reflect_button_materials, ActiveButton, PointerGesture};
use tools::info_drawer::{
    handle_drawer_close_requests, handle_present_content, handle_ui_buttons, spawn_overlay,
    update_indicator_text,
};

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
        .add_plugins(JsonAssetPlugin::<ContentManifest>::new(&["json"]));

    app.init_state::<ViewState>()
        .add_event::<FloorRequest>()
        .add_event::<PresentContent>()
        .add_event::<DrawerCloseRequest>()
        .add_event::<DrawerDismissed>()
        .add_event::<ResetRequest>()
        .add_event::<TeardownRequest>()
        .init_resource::<ContentLoader>()
        .init_resource::<PointerGesture>()
        .init_resource::<ActiveButton>()
        .init_resource::<NavigationState>()
        .init_resource::<CabinCamera>()
        .insert_resource(FloorIndicator(1))
        .add_systems(Startup, verify_mount)
        .add_systems(
            Update,
            (resolve_content, transition_to_running)
                .chain()
                .run_if(in_state(ViewState::Loading)),
        )
        .add_systems(
            OnEnter(ViewState::Running),
            (setup, spawn_cabin, spawn_panel, spawn_reveal, spawn_overlay),
        )
        .add_systems(
            Update,
            (
                pointer_select,
                handle_floor_requests,
                handle_ui_buttons,
                handle_drawer_dismissed,
                handle_reset_requests,
                (camera_controller, tick_travel).chain(),
                tick_door_animation,
                tick_reveal_fade,
                reflect_button_materials,
                resolve_label_textures,
                update_indicator_text,
                handle_present_content,
                handle_drawer_close_requests,
                request_teardown_on_escape,
            )
                .run_if(in_state(ViewState::Running)),
        )
        .add_systems(Update, handle_teardown_requests)
        .add_systems(OnEnter(ViewState::TornDown), dispose_view);

    app
}

// Runs only once the mount check has passed; a refused mount spawns nothing.
fn setup(mut commands: Commands, rig: Res<CabinCamera>) {
    commands.spawn((
        ViewScoped,
        Camera3d::default(),
        Transform::from_translation(rig.position()).looking_at(rig.focus, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 90.0,
        ..default()
    });
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
            title: "Portfolio Elevator".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
