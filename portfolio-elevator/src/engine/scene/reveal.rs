use bevy::prelude::*;

use crate::engine::core::view_state::ViewScoped;
use constants::cabin::{
    CABIN_DEPTH, REVEAL_LIGHT_HEIGHT, REVEAL_LIGHT_Z_OFFSET, REVEAL_PLANE_HEIGHT,
    REVEAL_PLANE_WIDTH, REVEAL_PLANE_Z_OFFSET,
};
use constants::theme;

/// Backdrop plane behind the door opening. Starts fully transparent and
/// hidden; the reveal fade drives its alpha.
#[derive(Component)]
pub struct RevealBackdrop;

/// Warm light washing over the backdrop, intensity driven by the same fade.
#[derive(Component)]
pub struct RevealLight;

pub fn spawn_reveal(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut backdrop_color = theme::reveal_backdrop();
    backdrop_color.set_alpha(0.0);
    let backdrop_material = materials.add(StandardMaterial {
        base_color: backdrop_color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let z = -CABIN_DEPTH / 2.0 - REVEAL_PLANE_Z_OFFSET;
    commands.spawn((
        RevealBackdrop,
        ViewScoped,
        Mesh3d(meshes.add(
            // Normal faces back into the cab.
            Plane3d::new(Vec3::Z, Vec2::new(REVEAL_PLANE_WIDTH / 2.0, REVEAL_PLANE_HEIGHT / 2.0)),
        )),
        MeshMaterial3d(backdrop_material),
        Transform::from_xyz(0.0, REVEAL_PLANE_HEIGHT / 2.0, z),
        Visibility::Hidden,
    ));

    commands.spawn((
        RevealLight,
        ViewScoped,
        PointLight {
            color: theme::reveal_light(),
            intensity: 0.0,
            range: 6.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(
            0.0,
            REVEAL_LIGHT_HEIGHT,
            -CABIN_DEPTH / 2.0 - REVEAL_LIGHT_Z_OFFSET,
        ),
    ));
}
