use bevy::prelude::*;

use crate::content::library::{ContentLibrary, ContentLoader};
use crate::engine::camera::cabin_camera::CabinCamera;
use crate::engine::core::view_state::{ViewScoped, ViewState};
use crate::engine::systems::doors::{DoorAnimation, RevealFade};
use crate::engine::systems::navigation::{FloorIndicator, NavigationState};
use crate::engine::systems::travel::TravelAnimation;
use crate::tools::floor_select::{ActiveButton, ButtonMaterials, PointerGesture};

/// External unmount signal. Safe to send exactly once; a second request
/// after teardown is ignored.
#[derive(Event, Default)]
pub struct TeardownRequest;

/// Present once the view has been disposed. Animation and input systems are
/// state-gated out of the schedule by then, so in-flight animation ticks
/// become no-ops instead of touching despawned entities.
#[derive(Resource, Default)]
pub struct ViewDisposed;

pub fn handle_teardown_requests(
    mut requests: EventReader<TeardownRequest>,
    state: Res<State<ViewState>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    if requests.read().next().is_none() {
        return;
    }
    if *state.get() == ViewState::TornDown {
        return;
    }
    info!("teardown requested");
    next_state.set(ViewState::TornDown);
}

/// Dispose everything the view owns: despawn the scoped entity set (asset
/// handles drop with them, freeing geometry, materials and textures once)
/// and remove the per-mount resources, in-flight animations included.
pub fn dispose_view(mut commands: Commands, scoped: Query<Entity, With<ViewScoped>>) {
    let mut count = 0;
    for entity in &scoped {
        commands.entity(entity).despawn();
        count += 1;
    }

    commands.remove_resource::<NavigationState>();
    commands.remove_resource::<CabinCamera>();
    commands.remove_resource::<FloorIndicator>();
    commands.remove_resource::<PointerGesture>();
    commands.remove_resource::<ActiveButton>();
    commands.remove_resource::<ButtonMaterials>();
    commands.remove_resource::<ContentLibrary>();
    commands.remove_resource::<ContentLoader>();
    commands.remove_resource::<DoorAnimation>();
    commands.remove_resource::<TravelAnimation>();
    commands.remove_resource::<RevealFade>();
    commands.remove_resource::<AmbientLight>();

    commands.insert_resource(ViewDisposed);
    info!("elevator view disposed ({count} root entities despawned)");
}

/// Native convenience: Escape unmounts the view.
pub fn request_teardown_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<TeardownRequest>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        requests.send(TeardownRequest);
    }
}
