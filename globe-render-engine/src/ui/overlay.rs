use bevy::prelude::*;

use constants::palette::{CARD_BORDER, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Translucent panel whose fill alpha follows the lighting mode.
#[derive(Component)]
pub struct GlassPanel {
    pub day_alpha: f32,
    pub night_alpha: f32,
}

#[derive(Component)]
pub struct FeaturedPanel;

#[derive(Component)]
pub struct PanelCityText;

#[derive(Component)]
pub struct PanelTaglineText;

#[derive(Component)]
pub struct DayButton;

#[derive(Component)]
pub struct NightButton;

#[derive(Component)]
pub struct FpsText;

const JOURNEY_STATS: [(&str, &str); 2] = [
    ("Daybreak", "Sunrise panoramas"),
    ("Afterglow", "Skyline cocktails"),
];

fn glass_fill(alpha: f32) -> BackgroundColor {
    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, alpha))
}

fn text(value: &str, size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

// Spawns the glass overlay: nav bar, hero copy, featured-journey panel with
// the day/night toggle, and the FPS readout.
pub fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            Name::new("OverlayRoot"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|root| {
            // Top nav bar
            root.spawn((
                Name::new("NavBar"),
                GlassPanel {
                    day_alpha: 0.15,
                    night_alpha: 0.22,
                },
                Interaction::default(),
                glass_fill(0.15),
                BorderColor(CARD_BORDER),
                BorderRadius::all(Val::Px(28.0)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(36.0),
                    left: Val::Px(70.0),
                    right: Val::Px(70.0),
                    height: Val::Px(70.0),
                    border: UiRect::all(Val::Px(1.0)),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    padding: UiRect::axes(Val::Px(40.0), Val::Px(0.0)),
                    ..default()
                },
            ))
            .with_children(|nav| {
                nav.spawn((
                    Name::new("Title"),
                    text("Wanderworld Studio", 30.0, TEXT_PRIMARY),
                ));
            });

            // Hero copy
            root.spawn((
                Name::new("Hero"),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(140.0),
                    left: Val::Px(70.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(10.0),
                    ..default()
                },
            ))
            .with_children(|hero| {
                hero.spawn(text("Dream in Motion", 52.0, TEXT_PRIMARY));
                hero.spawn(text(
                    "Curated journeys for daydreamers and night seekers.",
                    20.0,
                    TEXT_SECONDARY,
                ));
            });

            // Featured journey panel
            root.spawn((
                FeaturedPanel,
                Name::new("FeaturedPanel"),
                GlassPanel {
                    day_alpha: 0.15,
                    night_alpha: 0.26,
                },
                Interaction::default(),
                glass_fill(0.15),
                BorderColor(CARD_BORDER),
                BorderRadius::all(Val::Px(26.0)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(160.0),
                    right: Val::Px(60.0),
                    width: Val::Px(300.0),
                    border: UiRect::all(Val::Px(1.0)),
                    padding: UiRect::all(Val::Px(28.0)),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(14.0),
                    ..default()
                },
            ))
            .with_children(|panel| {
                panel.spawn((
                    Name::new("Header"),
                    text("Featured Journey", 18.0, TEXT_SECONDARY),
                ));
                panel.spawn((
                    PanelCityText,
                    Name::new("CityName"),
                    text("", 34.0, TEXT_PRIMARY),
                ));
                panel.spawn((
                    PanelTaglineText,
                    Name::new("Tagline"),
                    text("", 16.0, TEXT_MUTED),
                ));

                for (heading, copy) in JOURNEY_STATS {
                    panel
                        .spawn((
                            Name::new(heading),
                            Node {
                                display: Display::Flex,
                                flex_direction: FlexDirection::Column,
                                row_gap: Val::Px(2.0),
                                ..default()
                            },
                        ))
                        .with_children(|stat| {
                            stat.spawn(text(heading, 16.0, TEXT_PRIMARY));
                            stat.spawn(text(copy, 14.0, TEXT_MUTED));
                        });
                }

                panel
                    .spawn((
                        Name::new("ModeButtons"),
                        Node {
                            display: Display::Flex,
                            column_gap: Val::Px(18.0),
                            margin: UiRect::top(Val::Px(12.0)),
                            ..default()
                        },
                    ))
                    .with_children(|row| {
                        for (label, is_day) in [("Day", true), ("Night", false)] {
                            let mut button = row.spawn((
                                Button,
                                Name::new(format!("{label}Button")),
                                glass_fill(if is_day { 0.35 } else { 0.18 }),
                                BorderColor(CARD_BORDER),
                                BorderRadius::all(Val::Px(18.0)),
                                Node {
                                    width: Val::Px(110.0),
                                    height: Val::Px(46.0),
                                    border: UiRect::all(Val::Px(1.0)),
                                    display: Display::Flex,
                                    align_items: AlignItems::Center,
                                    justify_content: JustifyContent::Center,
                                    ..default()
                                },
                            ));
                            if is_day {
                                button.insert(DayButton);
                            } else {
                                button.insert(NightButton);
                            }
                            button.with_children(|inner| {
                                inner.spawn(text(label, 18.0, TEXT_PRIMARY));
                            });
                        }
                    });
            });

            // FPS readout
            root.spawn((
                FpsText,
                Name::new("FpsText"),
                text("FPS: ", 16.0, Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
            ));
        });
}
