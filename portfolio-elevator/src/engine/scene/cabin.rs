use bevy::prelude::*;

use crate::engine::core::view_state::ViewScoped;
use crate::engine::systems::doors::{DoorLeftPanel, DoorRightPanel};
use constants::cabin::{
    CABIN_DEPTH, CABIN_HEIGHT, CABIN_WIDTH, DOOR_LEFT_CLOSED_X, DOOR_PANEL_HEIGHT,
    DOOR_PANEL_THICKNESS, DOOR_PANEL_WIDTH, DOOR_RIGHT_CLOSED_X, FRAME_THICKNESS, OPENING_HEIGHT,
    OPENING_WIDTH,
};
use constants::theme;

/// Root of the cabin hierarchy. Sits at the world origin.
#[derive(Component)]
pub struct CabinRoot;

/// The cab's main light. Travel flickers it around its base illuminance.
#[derive(Component)]
pub struct CabinLight;

/// Build the cabin shell around the origin. The door wall faces -Z; both
/// door panels spawn at their closed extents.
pub fn spawn_cabin(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wall = materials.add(StandardMaterial {
        base_color: theme::wall(),
        perceptual_roughness: 0.85,
        ..default()
    });
    let trim = materials.add(StandardMaterial {
        base_color: theme::trim(),
        metallic: 0.6,
        perceptual_roughness: 0.35,
        ..default()
    });
    let floor = materials.add(StandardMaterial {
        base_color: theme::cabin_floor(),
        perceptual_roughness: 0.9,
        ..default()
    });
    let door = materials.add(StandardMaterial {
        base_color: theme::door(),
        metallic: 0.8,
        perceptual_roughness: 0.25,
        ..default()
    });
    let handle = materials.add(StandardMaterial {
        base_color: theme::handle(),
        metallic: 0.9,
        perceptual_roughness: 0.2,
        ..default()
    });

    let half_depth = CABIN_DEPTH / 2.0;
    let half_width = CABIN_WIDTH / 2.0;
    let mid_height = CABIN_HEIGHT / 2.0;
    // Front wall splits into two piers beside the opening plus a header
    // above it.
    let pier_width = (CABIN_WIDTH - OPENING_WIDTH) / 2.0;
    let pier_x = OPENING_WIDTH / 2.0 + pier_width / 2.0;
    let header_height = CABIN_HEIGHT - OPENING_HEIGHT;

    commands
        .spawn((
            CabinRoot,
            ViewScoped,
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|cabin| {
            // Floor and ceiling.
            cabin.spawn((
                Mesh3d(meshes.add(Cuboid::new(CABIN_WIDTH, FRAME_THICKNESS, CABIN_DEPTH))),
                MeshMaterial3d(floor.clone()),
                Transform::from_xyz(0.0, -FRAME_THICKNESS / 2.0, 0.0),
            ));
            cabin.spawn((
                Mesh3d(meshes.add(Cuboid::new(CABIN_WIDTH, FRAME_THICKNESS, CABIN_DEPTH))),
                MeshMaterial3d(wall.clone()),
                Transform::from_xyz(0.0, CABIN_HEIGHT + FRAME_THICKNESS / 2.0, 0.0),
            ));

            // Back and side walls.
            cabin.spawn((
                Mesh3d(meshes.add(Cuboid::new(CABIN_WIDTH, CABIN_HEIGHT, FRAME_THICKNESS))),
                MeshMaterial3d(wall.clone()),
                Transform::from_xyz(0.0, mid_height, half_depth),
            ));
            for side in [-1.0, 1.0] {
                cabin.spawn((
                    Mesh3d(meshes.add(Cuboid::new(FRAME_THICKNESS, CABIN_HEIGHT, CABIN_DEPTH))),
                    MeshMaterial3d(wall.clone()),
                    Transform::from_xyz(side * half_width, mid_height, 0.0),
                ));
            }

            // Front wall piers and header around the door opening.
            for side in [-1.0, 1.0] {
                cabin.spawn((
                    Mesh3d(meshes.add(Cuboid::new(pier_width, CABIN_HEIGHT, FRAME_THICKNESS))),
                    MeshMaterial3d(wall.clone()),
                    Transform::from_xyz(side * pier_x, mid_height, -half_depth),
                ));
            }
            cabin.spawn((
                Mesh3d(meshes.add(Cuboid::new(OPENING_WIDTH, header_height, FRAME_THICKNESS))),
                MeshMaterial3d(wall.clone()),
                Transform::from_xyz(0.0, OPENING_HEIGHT + header_height / 2.0, -half_depth),
            ));

            // Door frame trim.
            for side in [-1.0, 1.0] {
                cabin.spawn((
                    Mesh3d(meshes.add(Cuboid::new(
                        FRAME_THICKNESS,
                        OPENING_HEIGHT,
                        FRAME_THICKNESS * 1.5,
                    ))),
                    MeshMaterial3d(trim.clone()),
                    Transform::from_xyz(
                        side * (OPENING_WIDTH / 2.0 + FRAME_THICKNESS / 2.0),
                        OPENING_HEIGHT / 2.0,
                        -half_depth,
                    ),
                ));
            }
            cabin.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    OPENING_WIDTH + 2.0 * FRAME_THICKNESS,
                    FRAME_THICKNESS,
                    FRAME_THICKNESS * 1.5,
                ))),
                MeshMaterial3d(trim.clone()),
                Transform::from_xyz(0.0, OPENING_HEIGHT + FRAME_THICKNESS / 2.0, -half_depth),
            ));

            // Door panels at closed extents, each with a vertical handle.
            let door_mesh = meshes.add(Cuboid::new(
                DOOR_PANEL_WIDTH,
                DOOR_PANEL_HEIGHT,
                DOOR_PANEL_THICKNESS,
            ));
            let handle_mesh = meshes.add(Cuboid::new(0.03, 0.7, 0.03));
            for (marker_x, inner_edge) in [(DOOR_LEFT_CLOSED_X, 1.0), (DOOR_RIGHT_CLOSED_X, -1.0)]
            {
                let mut panel = cabin.spawn((
                    Mesh3d(door_mesh.clone()),
                    MeshMaterial3d(door.clone()),
                    Transform::from_xyz(marker_x, DOOR_PANEL_HEIGHT / 2.0, -half_depth),
                ));
                if inner_edge > 0.0 {
                    panel.insert(DoorLeftPanel);
                } else {
                    panel.insert(DoorRightPanel);
                }
                panel.with_children(|door_panel| {
                    door_panel.spawn((
                        Mesh3d(handle_mesh.clone()),
                        MeshMaterial3d(handle.clone()),
                        Transform::from_xyz(
                            inner_edge * (DOOR_PANEL_WIDTH / 2.0 - 0.08),
                            0.0,
                            DOOR_PANEL_THICKNESS / 2.0 + 0.02,
                        ),
                    ));
                });
            }

            // Main cab light, angled down toward the panel side.
            cabin.spawn((
                CabinLight,
                DirectionalLight {
                    illuminance: 3_200.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.8, CABIN_HEIGHT - 0.2, 0.6)
                    .looking_at(Vec3::new(0.0, 0.8, -0.4), Vec3::Y),
            ));
        });

    info!("cabin spawned");
}
