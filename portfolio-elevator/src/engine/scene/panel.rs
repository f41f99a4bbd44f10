use bevy::asset::LoadState;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::content::library::ContentLibrary;
use crate::engine::core::view_state::ViewScoped;
use crate::error::ElevatorError;
use crate::tools::floor_select::{ButtonMaterials, ClickTarget};
use constants::cabin::{
    BUTTON_COLUMN_X_OFFSET, BUTTON_DEPTH, BUTTON_GAP_Y, BUTTON_RADIUS, BUTTON_START_Y,
    CABIN_DEPTH, LABEL_PLATE_HEIGHT, LABEL_PLATE_WIDTH, LABEL_PLATE_X_OFFSET, PANEL_HEIGHT,
    PANEL_THICKNESS, PANEL_WIDTH, PANEL_X, PANEL_Y,
};
use constants::theme;

/// Label plate next to a button. Carries its texture handle until the load
/// settles one way or the other.
#[derive(Component)]
pub struct LabelPlate {
    pub texture: Handle<Image>,
    pub resolved: bool,
}

/// Mount the button panel on the front wall: one raycastable button and one
/// label plate per floor, highest floor at the top of the column.
pub fn spawn_panel(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    library: Res<ContentLibrary>,
) {
    let button_materials = ButtonMaterials {
        idle: materials.add(StandardMaterial {
            base_color: theme::button_idle(),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        }),
        hover: materials.add(StandardMaterial {
            base_color: theme::button_hover(),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        }),
        active: materials.add(StandardMaterial {
            base_color: theme::button_active(),
            emissive: LinearRgba::rgb(0.25, 0.18, 0.6),
            ..default()
        }),
    };

    let panel_material = materials.add(StandardMaterial {
        base_color: theme::panel(),
        metallic: 0.5,
        perceptual_roughness: 0.4,
        ..default()
    });
    let wall_z = -CABIN_DEPTH / 2.0;
    commands.spawn((
        ViewScoped,
        Mesh3d(meshes.add(Cuboid::new(PANEL_WIDTH, PANEL_HEIGHT, PANEL_THICKNESS))),
        MeshMaterial3d(panel_material),
        Transform::from_xyz(PANEL_X, PANEL_Y, wall_z + PANEL_THICKNESS / 2.0),
    ));

    let button_mesh = meshes.add(Cylinder::new(BUTTON_RADIUS, BUTTON_DEPTH));
    let plate_mesh = meshes.add(Cuboid::new(LABEL_PLATE_WIDTH, LABEL_PLATE_HEIGHT, 0.012));
    let button_z = wall_z + PANEL_THICKNESS + BUTTON_DEPTH / 2.0;

    // Highest floor at the top of the column.
    let mut floors: Vec<_> = library.floors.iter().collect();
    floors.sort_by_key(|f| std::cmp::Reverse(f.index));

    for (row, descriptor) in floors.iter().enumerate() {
        let y = BUTTON_START_Y - row as f32 * BUTTON_GAP_Y;

        commands.spawn((
            ViewScoped,
            ClickTarget {
                floor: descriptor.index,
                kind: descriptor.kind.clone(),
                half_extents: Vec3::new(BUTTON_RADIUS, BUTTON_DEPTH / 2.0, BUTTON_RADIUS),
            },
            Mesh3d(button_mesh.clone()),
            MeshMaterial3d(button_materials.idle.clone()),
            // Cylinder axis points along Y; tip the flat face toward the cab.
            Transform::from_xyz(PANEL_X + BUTTON_COLUMN_X_OFFSET, y, button_z)
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ));

        let mut plate_material = StandardMaterial {
            base_color: theme::label_plate(),
            perceptual_roughness: 0.6,
            ..default()
        };
        let mut plate = LabelPlate {
            texture: Handle::default(),
            resolved: true,
        };
        if let Some(path) = &descriptor.plate_texture {
            let handle = asset_server.load(path.clone());
            plate_material.base_color_texture = Some(handle.clone());
            plate = LabelPlate {
                texture: handle,
                resolved: false,
            };
        }
        commands.spawn((
            ViewScoped,
            plate,
            Mesh3d(plate_mesh.clone()),
            MeshMaterial3d(materials.add(plate_material)),
            Transform::from_xyz(PANEL_X + LABEL_PLATE_X_OFFSET, y, wall_z + PANEL_THICKNESS),
        ));
    }

    commands.insert_resource(button_materials);
    info!("button panel spawned ({} floors)", floors.len());
}

/// Watch pending label textures. A failed load logs the asset error and the
/// plate falls back to its untextured finish.
pub fn resolve_label_textures(
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut plates: Query<(&mut LabelPlate, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (mut plate, material_handle) in &mut plates {
        if plate.resolved {
            continue;
        }
        match asset_server.get_load_state(plate.texture.id()) {
            Some(LoadState::Loaded) => plate.resolved = true,
            Some(LoadState::Failed(_)) => {
                let path = plate
                    .texture
                    .path()
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                warn!("{}", ElevatorError::AssetLoad { path });
                if let Some(material) = materials.get_mut(&material_handle.0) {
                    material.base_color_texture = None;
                }
                plate.resolved = true;
            }
            _ => {}
        }
    }
}
