use bevy::prelude::*;

use crate::content::library::ContentLibrary;
use crate::content::render::ContentKind;
use crate::engine::camera::cabin_camera::CabinCamera;
use crate::engine::systems::doors::DoorAnimation;
use crate::engine::systems::travel::TravelAnimation;
use crate::tools::floor_select::ActiveButton;

/// A floor button activation resolved by the input router.
#[derive(Event, Debug, Clone)]
pub struct FloorRequest {
    pub floor: u8,
    pub kind: ContentKind,
    /// Button entity for active-state highlighting, when triggered by a
    /// pointer gesture.
    pub button: Option<Entity>,
}

/// Present a section in the drawer once navigation has finished.
#[derive(Event, Debug)]
pub struct PresentContent(pub ContentKind);

/// Hide the drawer and clear its body.
#[derive(Event, Default)]
pub struct DrawerCloseRequest;

/// The user dismissed the drawer via its close control.
#[derive(Event, Default)]
pub struct DrawerDismissed;

/// The user pressed the HUD reset control.
#[derive(Event, Default)]
pub struct ResetRequest;

/// Discrete floor-number display value, stepped during travel.
#[derive(Resource, Debug, PartialEq)]
pub struct FloorIndicator(pub u8);

/// Where the navigation sequence currently is. Exactly one phase is active;
/// each completes fully before the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Idle,
    ClosingDoors,
    HidingReveal,
    Travelling,
    OpeningDoors,
    ShowingReveal,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingSelection {
    floor: u8,
    kind: Option<ContentKind>,
}

/// What the caller of a transition must do next. Animation phases map to the
/// corresponding animation resource; `Present` hands off to the drawer.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Busy gate dropped the request, or the transition does not apply.
    Ignored,
    CloseDoors,
    HideReveal,
    Travel { from: u8, to: u8 },
    OpenDoors,
    ShowReveal,
    Present(Option<ContentKind>),
    /// Sequence finished without content to present (door shutdown).
    Settle,
}

/// Per-mount navigation state. The `busy` flag is the only mutual exclusion
/// in the view: every user-triggered operation checks it first.
#[derive(Resource, Debug)]
pub struct NavigationState {
    pub current_floor: u8,
    pub doors_open: bool,
    pub busy: bool,
    pub phase: NavigationPhase,
    pending: Option<PendingSelection>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_floor: 1,
            doors_open: false,
            busy: false,
            phase: NavigationPhase::Idle,
            pending: None,
        }
    }
}

impl NavigationState {
    /// Start a navigation toward `floor`. Returns `Ignored` while busy.
    pub fn begin_selection(&mut self, floor: u8, kind: ContentKind) -> NavAction {
        if self.busy {
            return NavAction::Ignored;
        }
        self.busy = true;
        self.pending = Some(PendingSelection {
            floor,
            kind: Some(kind),
        });
        if self.doors_open {
            self.phase = NavigationPhase::ClosingDoors;
            NavAction::CloseDoors
        } else {
            self.after_doors_closed()
        }
    }

    /// Close the doors without a destination (drawer dismissed, reset).
    pub fn begin_door_shutdown(&mut self) -> NavAction {
        if self.busy || !self.doors_open {
            return NavAction::Ignored;
        }
        self.busy = true;
        self.pending = None;
        self.phase = NavigationPhase::ClosingDoors;
        NavAction::CloseDoors
    }

    /// A door slide finished.
    pub fn doors_finished(&mut self) -> NavAction {
        match self.phase {
            NavigationPhase::ClosingDoors => {
                self.doors_open = false;
                self.phase = NavigationPhase::HidingReveal;
                NavAction::HideReveal
            }
            NavigationPhase::OpeningDoors => {
                self.doors_open = true;
                self.phase = NavigationPhase::ShowingReveal;
                NavAction::ShowReveal
            }
            _ => NavAction::Ignored,
        }
    }

    /// A reveal fade finished.
    pub fn reveal_finished(&mut self) -> NavAction {
        match self.phase {
            NavigationPhase::HidingReveal => {
                if self.pending.is_some() {
                    self.after_doors_closed()
                } else {
                    self.phase = NavigationPhase::Idle;
                    self.busy = false;
                    NavAction::Settle
                }
            }
            NavigationPhase::ShowingReveal => {
                let kind = self.pending.take().and_then(|p| p.kind);
                self.phase = NavigationPhase::Idle;
                self.busy = false;
                NavAction::Present(kind)
            }
            _ => NavAction::Ignored,
        }
    }

    /// Travel finished: the cab has arrived at the pending floor.
    pub fn travel_finished(&mut self) -> NavAction {
        if let Some(pending) = &self.pending {
            self.current_floor = pending.floor;
        }
        self.phase = NavigationPhase::OpeningDoors;
        NavAction::OpenDoors
    }

    /// Doors are closed; either travel toward the pending floor or, when the
    /// cab is already there, go straight to opening.
    fn after_doors_closed(&mut self) -> NavAction {
        let target = self
            .pending
            .as_ref()
            .map(|p| p.floor)
            .unwrap_or(self.current_floor);
        if target != self.current_floor {
            self.phase = NavigationPhase::Travelling;
            NavAction::Travel {
                from: self.current_floor,
                to: target,
            }
        } else {
            self.phase = NavigationPhase::OpeningDoors;
            NavAction::OpenDoors
        }
    }
}

/// Insert the animation resource an action asks for. `Present`, `Settle` and
/// `Ignored` are handled at the call sites.
pub fn queue_animation(action: &NavAction, commands: &mut Commands) {
    match action {
        NavAction::CloseDoors => commands.insert_resource(DoorAnimation::closing()),
        NavAction::OpenDoors => commands.insert_resource(DoorAnimation::opening()),
        NavAction::HideReveal => commands.insert_resource(crate::engine::systems::doors::RevealFade::fade_out()),
        NavAction::ShowReveal => commands.insert_resource(crate::engine::systems::doors::RevealFade::fade_in()),
        NavAction::Travel { from, to } => {
            commands.insert_resource(TravelAnimation::between(*from, *to));
        }
        NavAction::Ignored | NavAction::Present(_) | NavAction::Settle => {}
    }
}

/// Entry point for floor selections. Busy requests are dropped silently;
/// accepted ones close the drawer and start the animation chain.
pub fn handle_floor_requests(
    mut requests: EventReader<FloorRequest>,
    mut nav: ResMut<NavigationState>,
    library: Res<ContentLibrary>,
    mut active_button: ResMut<ActiveButton>,
    mut drawer_close: EventWriter<DrawerCloseRequest>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let action = nav.begin_selection(request.floor, request.kind.clone());
        if action == NavAction::Ignored {
            info!(
                "selection of floor {} ignored while navigation in progress",
                request.floor
            );
            continue;
        }
        let label = library
            .floor(request.floor)
            .map(|f| f.label.as_str())
            .unwrap_or("?");
        info!(
            "floor {} ({label}) requested, current {}",
            request.floor, nav.current_floor
        );
        drawer_close.send(DrawerCloseRequest);
        active_button.0 = request.button;
        queue_animation(&action, &mut commands);
    }
}

/// Dismissing the drawer closes the doors again when the view is idle.
pub fn handle_drawer_dismissed(
    mut dismissed: EventReader<DrawerDismissed>,
    mut nav: ResMut<NavigationState>,
    mut drawer_close: EventWriter<DrawerCloseRequest>,
    mut commands: Commands,
) {
    if dismissed.read().next().is_none() {
        return;
    }
    drawer_close.send(DrawerCloseRequest);
    let action = nav.begin_door_shutdown();
    queue_animation(&action, &mut commands);
}

/// Reset returns to the bottom floor with the initial camera pose. No travel
/// simulation, matching a service reset rather than a ride.
pub fn handle_reset_requests(
    mut resets: EventReader<ResetRequest>,
    mut nav: ResMut<NavigationState>,
    library: Res<ContentLibrary>,
    mut rig: ResMut<CabinCamera>,
    mut indicator: ResMut<FloorIndicator>,
    mut drawer_close: EventWriter<DrawerCloseRequest>,
    mut commands: Commands,
) {
    if resets.read().next().is_none() {
        return;
    }
    if nav.busy {
        return;
    }
    drawer_close.send(DrawerCloseRequest);
    nav.current_floor = library.bottom_floor();
    indicator.0 = nav.current_floor;
    *rig = CabinCamera::default();
    let action = nav.begin_door_shutdown();
    queue_animation(&action, &mut commands);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_to_idle(nav: &mut NavigationState, mut action: NavAction) -> Option<ContentKind> {
        // Walk the phase machine the way the animation systems do, each
        // animation completing fully before the next starts.
        loop {
            action = match action {
                NavAction::CloseDoors | NavAction::OpenDoors => nav.doors_finished(),
                NavAction::HideReveal | NavAction::ShowReveal => nav.reveal_finished(),
                NavAction::Travel { .. } => nav.travel_finished(),
                NavAction::Present(kind) => return kind,
                NavAction::Settle => return None,
                NavAction::Ignored => panic!("phase machine stalled"),
            };
        }
    }

    #[test]
    fn adjacent_selection_travels_then_opens_then_presents() {
        let mut nav = NavigationState::default();
        let action = nav.begin_selection(2, ContentKind::Projects);
        assert_eq!(action, NavAction::Travel { from: 1, to: 2 });
        assert!(nav.busy);

        let presented = drive_to_idle(&mut nav, action);
        assert_eq!(presented, Some(ContentKind::Projects));
        assert_eq!(nav.current_floor, 2);
        assert!(nav.doors_open);
        assert!(!nav.busy);
        assert_eq!(nav.phase, NavigationPhase::Idle);
    }

    #[test]
    fn round_trip_returns_to_origin_with_doors_open() {
        let mut nav = NavigationState::default();
        let there = nav.begin_selection(3, ContentKind::Skills);
        drive_to_idle(&mut nav, there);
        assert_eq!(nav.current_floor, 3);

        let back = nav.begin_selection(1, ContentKind::About);
        // Doors are open from the first ride, so they close first.
        assert_eq!(back, NavAction::CloseDoors);
        let presented = drive_to_idle(&mut nav, back);

        assert_eq!(presented, Some(ContentKind::About));
        assert_eq!(nav.current_floor, 1);
        assert!(nav.doors_open);
        assert!(!nav.busy);
    }

    #[test]
    fn selecting_current_floor_skips_travel() {
        let mut nav = NavigationState::default();
        let action = nav.begin_selection(1, ContentKind::About);
        assert_eq!(action, NavAction::OpenDoors);

        let presented = drive_to_idle(&mut nav, action);
        assert_eq!(presented, Some(ContentKind::About));
        assert_eq!(nav.current_floor, 1);
    }

    #[test]
    fn busy_gate_drops_overlapping_selections() {
        let mut nav = NavigationState::default();
        let first = nav.begin_selection(2, ContentKind::Projects);
        assert_ne!(first, NavAction::Ignored);

        let snapshot = (nav.current_floor, nav.doors_open, nav.phase);
        let second = nav.begin_selection(3, ContentKind::Skills);
        assert_eq!(second, NavAction::Ignored);
        assert_eq!(snapshot, (nav.current_floor, nav.doors_open, nav.phase));

        // The original ride still completes toward its own target.
        let presented = drive_to_idle(&mut nav, first);
        assert_eq!(presented, Some(ContentKind::Projects));
        assert_eq!(nav.current_floor, 2);
    }

    #[test]
    fn doors_are_closed_before_any_travel_begins() {
        let mut nav = NavigationState::default();
        let there = nav.begin_selection(2, ContentKind::Projects);
        drive_to_idle(&mut nav, there);
        assert!(nav.doors_open);

        let mut action = nav.begin_selection(3, ContentKind::Skills);
        // Walk until the travel action appears; doors must be closed by then.
        loop {
            match action {
                NavAction::Travel { .. } => {
                    assert!(!nav.doors_open);
                    break;
                }
                NavAction::CloseDoors | NavAction::OpenDoors => action = nav.doors_finished(),
                NavAction::HideReveal | NavAction::ShowReveal => action = nav.reveal_finished(),
                other => panic!("unexpected action before travel: {other:?}"),
            }
        }
    }

    #[test]
    fn door_shutdown_settles_without_presenting() {
        let mut nav = NavigationState::default();
        let ride = nav.begin_selection(2, ContentKind::Projects);
        drive_to_idle(&mut nav, ride);

        let action = nav.begin_door_shutdown();
        assert_eq!(action, NavAction::CloseDoors);
        let presented = drive_to_idle(&mut nav, action);
        assert_eq!(presented, None);
        assert!(!nav.doors_open);
        assert!(!nav.busy);
        assert_eq!(nav.current_floor, 2);
    }

    #[test]
    fn door_shutdown_requires_open_doors_and_idle() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.begin_door_shutdown(), NavAction::Ignored);

        let ride = nav.begin_selection(2, ContentKind::Projects);
        assert_eq!(nav.begin_door_shutdown(), NavAction::Ignored);
        drive_to_idle(&mut nav, ride);
    }
}
