use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::library::ContentLibrary;
use crate::error::ElevatorError;

/// Lifecycle of the single mounted view instance.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewState {
    #[default]
    Loading,
    Running,
    TornDown,
}

/// Marker for every entity the view owns. Teardown despawns the whole set,
/// which releases meshes, materials and textures through handle drop.
#[derive(Component)]
pub struct ViewScoped;

/// Refuse to mount when the container is missing: no scene is spawned and
/// the view goes straight to the torn-down state.
pub fn verify_mount(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    if windows.single().is_err() {
        error!("{}", ElevatorError::Mount);
        next_state.set(ViewState::TornDown);
    }
}

/// Enter the running state once the content library has resolved (loaded or
/// fallen back), mirroring the asset-gated startup transitions.
pub fn transition_to_running(
    library: Option<Res<ContentLibrary>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    if library.is_some() {
        info!("→ content resolved, mounting elevator view");
        next_state.set(ViewState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::teardown::dispose_view;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn refused_mount_spawns_no_camera_and_no_light() {
        // No PrimaryWindow exists, so the mount check must refuse and the
        // Running-gated setup must never execute.
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_state::<ViewState>();
        app.insert_resource(crate::engine::camera::cabin_camera::CabinCamera::default());
        app.add_systems(Startup, verify_mount);
        app.add_systems(OnEnter(ViewState::Running), crate::setup);
        app.add_systems(OnEnter(ViewState::TornDown), dispose_view);

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<ViewState>>().get(),
            ViewState::TornDown
        );
        assert!(app.world().get_resource::<AmbientLight>().is_none());
        let cameras = app
            .world_mut()
            .query_filtered::<Entity, With<Camera3d>>()
            .iter(app.world())
            .count();
        assert_eq!(cameras, 0);
    }
}
