use bevy::prelude::*;

use crate::content::library::ContentLibrary;
use crate::content::render::{render_blocks, ContentBlock};
use crate::engine::core::view_state::ViewScoped;
use crate::engine::systems::navigation::{
    DrawerCloseRequest, DrawerDismissed, FloorIndicator, PresentContent, ResetRequest,
};
use constants::theme;

#[derive(Component)]
pub struct DrawerRoot;

#[derive(Component)]
pub struct DrawerTitleText;

#[derive(Component)]
pub struct DrawerSubtitleText;

#[derive(Component)]
pub struct DrawerBody;

#[derive(Component)]
pub struct DrawerCloseButton;

#[derive(Component)]
pub struct FloorIndicatorText;

#[derive(Component)]
pub struct ResetButton;

// Spawns the HUD strip (floor indicator and reset) and the hidden drawer
pub fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            ViewScoped,
            Name::new("HudStrip"),
            BackgroundColor(theme::ui_header_background()),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((
                FloorIndicatorText,
                Name::new("FloorIndicator"),
                Text::new("FLOOR: 1"),
                TextFont { font_size: 18.0, ..default() },
                TextColor(theme::ui_text()),
            ));

            hud.spawn((
                ResetButton,
                Button,
                Name::new("ResetButton"),
                BackgroundColor(theme::ui_button_background()),
                BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("Reset"),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(theme::ui_text()),
                ));
            });
        });

    commands
        .spawn((
            DrawerRoot,
            ViewScoped,
            Name::new("ContentDrawer"),
            BackgroundColor(theme::ui_panel_background()),
            Node {
                width: Val::Px(380.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Header"),
                    BackgroundColor(theme::ui_header_background()),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header
                        .spawn(Node {
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(2.0),
                            ..default()
                        })
                        .with_children(|titles| {
                            titles.spawn((
                                DrawerTitleText,
                                Name::new("Title"),
                                Text::new(""),
                                TextFont { font_size: 18.0, ..default() },
                                TextColor(theme::ui_text()),
                            ));
                            titles.spawn((
                                DrawerSubtitleText,
                                Name::new("Subtitle"),
                                Text::new(""),
                                TextFont { font_size: 12.0, ..default() },
                                TextColor(theme::ui_text_muted()),
                            ));
                        });

                    header
                        .spawn((
                            DrawerCloseButton,
                            Button,
                            Name::new("CloseButton"),
                            BackgroundColor(theme::ui_button_background()),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(26.0),
                                height: Val::Px(26.0),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("x"),
                                TextFont { font_size: 16.0, ..default() },
                                TextColor(theme::ui_text()),
                            ));
                        });
                });

            parent.spawn((
                DrawerBody,
                Name::new("Body"),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(10.0)),
                    row_gap: Val::Px(8.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::clip_y(),
                    ..default()
                },
            ));
        });
}

pub fn update_indicator_text(
    indicator: Res<FloorIndicator>,
    mut query: Query<&mut Text, With<FloorIndicatorText>>,
) {
    if !indicator.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("FLOOR: {}", indicator.0);
    }
}

/// Route HUD and drawer button presses to their navigation events.
pub fn handle_ui_buttons(
    close_buttons: Query<&Interaction, (Changed<Interaction>, With<DrawerCloseButton>)>,
    reset_buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut dismissed: EventWriter<DrawerDismissed>,
    mut resets: EventWriter<ResetRequest>,
) {
    for interaction in &close_buttons {
        if *interaction == Interaction::Pressed {
            dismissed.send(DrawerDismissed);
        }
    }
    for interaction in &reset_buttons {
        if *interaction == Interaction::Pressed {
            resets.send(ResetRequest);
        }
    }
}

/// Fill the drawer with the presented section and slide it in.
pub fn handle_present_content(
    mut presentations: EventReader<PresentContent>,
    library: Res<ContentLibrary>,
    mut drawers: Query<&mut Node, With<DrawerRoot>>,
    mut titles: Query<&mut Text, (With<DrawerTitleText>, Without<DrawerSubtitleText>)>,
    mut subtitles: Query<&mut Text, (With<DrawerSubtitleText>, Without<DrawerTitleText>)>,
    bodies: Query<Entity, With<DrawerBody>>,
    mut commands: Commands,
) {
    let Some(PresentContent(kind)) = presentations.read().last() else {
        return;
    };

    for mut text in &mut titles {
        text.0 = kind.title().to_string();
    }
    for mut text in &mut subtitles {
        text.0 = kind.description().to_string();
    }

    for body in &bodies {
        commands.entity(body).despawn_related::<Children>();
        let blocks = render_blocks(kind, &library);
        commands.entity(body).with_children(|parent| {
            for block in &blocks {
                spawn_block(parent, block);
            }
        });
    }

    for mut node in &mut drawers {
        node.display = Display::Flex;
    }
    info!("presenting section: {}", kind.title());
}

fn spawn_block(parent: &mut ChildSpawnerCommands, block: &ContentBlock) {
    match block {
        ContentBlock::Heading(text) => {
            parent.spawn((
                Text::new(text.clone()),
                TextFont { font_size: 16.0, ..default() },
                TextColor(theme::ui_text()),
                Node {
                    margin: UiRect::top(Val::Px(6.0)),
                    ..default()
                },
            ));
        }
        ContentBlock::Paragraph(text) => {
            parent.spawn((
                Text::new(text.clone()),
                TextFont { font_size: 13.0, ..default() },
                TextColor(theme::ui_text()),
            ));
        }
        ContentBlock::Bullet(text) => {
            parent.spawn((
                Text::new(format!("- {text}")),
                TextFont { font_size: 13.0, ..default() },
                TextColor(theme::ui_text()),
                Node {
                    margin: UiRect::left(Val::Px(10.0)),
                    ..default()
                },
            ));
        }
        ContentBlock::Meta(text) => {
            parent.spawn((
                Text::new(text.clone()),
                TextFont { font_size: 11.0, ..default() },
                TextColor(theme::ui_text_muted()),
            ));
        }
    }
}

/// Hide the drawer and drop its body contents.
pub fn handle_drawer_close_requests(
    mut requests: EventReader<DrawerCloseRequest>,
    mut drawers: Query<&mut Node, With<DrawerRoot>>,
    bodies: Query<Entity, With<DrawerBody>>,
    mut commands: Commands,
) {
    if requests.read().next().is_none() {
        return;
    }
    for mut node in &mut drawers {
        node.display = Display::None;
    }
    for body in &bodies {
        commands.entity(body).despawn_related::<Children>();
    }
}
