use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::render::ContentKind;
use crate::error::ElevatorError;

/// Raw content manifest as stored in `assets/content.json`. Deserialized via
/// the JSON asset plugin, then validated into a [`ContentLibrary`].
#[derive(Debug, Clone, Serialize, Deserialize, Asset, TypePath)]
pub struct ContentManifest {
    pub floors: Vec<FloorEntry>,
    pub profile: Profile,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorEntry {
    pub floor: u8,
    pub key: String,
    pub label: String,
    /// Optional asset path for the label plate texture. Absent means a plain
    /// plate; a path that fails to load degrades to the same plain plate.
    #[serde(default)]
    pub plate_texture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub title_primary: String,
    pub title_secondary: String,
    pub education: String,
    pub short_intro: String,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroups {
    pub languages: Vec<String>,
    pub web: Vec<String>,
    pub systems: Vec<String>,
    pub simulation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub period: String,
    pub one_liner: String,
    pub responsibilities: Vec<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    pub links: ProjectLinks,
    #[serde(default)]
    pub screenshot: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub repo: String,
    pub demo: String,
    pub case_study: String,
    pub readme: String,
}

/// A validated navigation target. `kind` is resolved from the floor key
/// exactly once, here at the ingestion boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorDescriptor {
    pub index: u8,
    pub key: String,
    pub label: String,
    pub kind: ContentKind,
    pub plate_texture: Option<String>,
}

/// Validated per-mount content set. Immutable after creation; discarded on
/// teardown.
#[derive(Resource, Debug, Clone)]
pub struct ContentLibrary {
    pub floors: Vec<FloorDescriptor>,
    pub profile: Profile,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
}

impl ContentLibrary {
    /// Validate a manifest: floor indices must be 1-based and contiguous in
    /// sequence order, keys unique. Unknown keys are allowed and map to the
    /// fallback renderer.
    pub fn from_manifest(manifest: &ContentManifest) -> Result<Self, ElevatorError> {
        if manifest.floors.is_empty() {
            return Err(ElevatorError::Config {
                reason: "floor table is empty".to_string(),
            });
        }

        let mut floors = Vec::with_capacity(manifest.floors.len());
        for (i, entry) in manifest.floors.iter().enumerate() {
            let expected = i as u8 + 1;
            if entry.floor != expected {
                return Err(ElevatorError::Config {
                    reason: format!(
                        "floor indices must be contiguous from 1: found {} at position {}",
                        entry.floor, expected
                    ),
                });
            }
            if manifest.floors[..i].iter().any(|f| f.key == entry.key) {
                return Err(ElevatorError::Config {
                    reason: format!("duplicate floor key `{}`", entry.key),
                });
            }

            let kind = ContentKind::from_key(&entry.key);
            if matches!(kind, ContentKind::Unknown(_)) {
                warn!(
                    "floor {} key `{}` has no dedicated renderer, using fallback",
                    entry.floor, entry.key
                );
            }
            floors.push(FloorDescriptor {
                index: entry.floor,
                key: entry.key.clone(),
                label: entry.label.clone(),
                kind,
                plate_texture: entry.plate_texture.clone(),
            });
        }

        Ok(Self {
            floors,
            profile: manifest.profile.clone(),
            skills: manifest.skills.clone(),
            projects: manifest.projects.clone(),
        })
    }

    pub fn floor(&self, index: u8) -> Option<&FloorDescriptor> {
        self.floors.iter().find(|f| f.index == index)
    }

    /// Lowest floor in the validated table. Validation pins the table to
    /// start at 1, but the value is read from the data, not assumed.
    pub fn bottom_floor(&self) -> u8 {
        self.floors.first().map(|f| f.index).unwrap_or(1)
    }

    /// Built-in library used when the content asset is missing or invalid.
    /// Keeps the view functional with placeholder portfolio data.
    pub fn builtin() -> Self {
        let manifest = ContentManifest {
            floors: vec![
                FloorEntry {
                    floor: 1,
                    key: "about".to_string(),
                    label: "About".to_string(),
                    plate_texture: None,
                },
                FloorEntry {
                    floor: 2,
                    key: "projects".to_string(),
                    label: "Projects".to_string(),
                    plate_texture: None,
                },
                FloorEntry {
                    floor: 3,
                    key: "skills".to_string(),
                    label: "Skills".to_string(),
                    plate_texture: None,
                },
                FloorEntry {
                    floor: 4,
                    key: "demos".to_string(),
                    label: "Demos".to_string(),
                    plate_texture: None,
                },
                FloorEntry {
                    floor: 5,
                    key: "contact".to_string(),
                    label: "Contact".to_string(),
                    plate_texture: None,
                },
            ],
            profile: Profile {
                name: "Portfolio Owner".to_string(),
                location: "Somewhere, Earth".to_string(),
                title_primary: "Software Engineer".to_string(),
                title_secondary: "Real-time graphics enthusiast".to_string(),
                education: "BSc in Computing".to_string(),
                short_intro: "Placeholder profile shown because the content manifest \
                              could not be loaded."
                    .to_string(),
                contact: ContactInfo {
                    email: "owner@example.com".to_string(),
                    linkedin: "linkedin.com/in/example".to_string(),
                    github: "github.com/example".to_string(),
                },
            },
            skills: SkillGroups {
                languages: vec!["Rust".to_string()],
                web: vec!["WebGPU".to_string()],
                systems: vec!["Git".to_string()],
                simulation: vec!["Bevy".to_string()],
            },
            projects: vec![Project {
                name: "Placeholder Project".to_string(),
                period: "-".to_string(),
                one_liner: "Shown when the content manifest is unavailable.".to_string(),
                responsibilities: vec!["Replace assets/content.json".to_string()],
                tech: vec!["JSON".to_string()],
                outcomes: vec![],
                links: ProjectLinks {
                    repo: "[Repo Link]".to_string(),
                    demo: "[Demo]".to_string(),
                    case_study: "[Case Study]".to_string(),
                    readme: "[Readme]".to_string(),
                },
                screenshot: None,
            }],
        };
        Self::from_manifest(&manifest).expect("built-in content library must be valid")
    }
}

/// Tracks the content manifest load, mirroring the bounds-loader pattern:
/// start the load, poll until resolved, fall back on failure.
#[derive(Resource, Default)]
pub struct ContentLoader {
    handle: Option<Handle<ContentManifest>>,
    resolved: bool,
}

pub const CONTENT_MANIFEST_PATH: &str = "content.json";

/// Load and validate the content manifest, inserting the [`ContentLibrary`]
/// resource once resolved. Any failure degrades to the built-in library.
pub fn resolve_content(
    mut loader: ResMut<ContentLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ContentManifest>>,
) {
    if loader.resolved {
        return;
    }

    let Some(handle) = loader.handle.clone() else {
        info!("loading content manifest from {}", CONTENT_MANIFEST_PATH);
        loader.handle = Some(asset_server.load(CONTENT_MANIFEST_PATH));
        return;
    };

    if let Some(manifest) = manifests.get(&handle) {
        match ContentLibrary::from_manifest(manifest) {
            Ok(library) => {
                info!("content manifest loaded: {} floors", library.floors.len());
                commands.insert_resource(library);
            }
            Err(err) => {
                warn!("{err}; falling back to built-in content");
                commands.insert_resource(ContentLibrary::builtin());
            }
        }
        loader.resolved = true;
        return;
    }

    if matches!(
        asset_server.get_load_state(handle.id()),
        Some(LoadState::Failed(_))
    ) {
        let err = ElevatorError::AssetLoad {
            path: CONTENT_MANIFEST_PATH.to_string(),
        };
        warn!("{err}; falling back to built-in content");
        commands.insert_resource(ContentLibrary::builtin());
        loader.resolved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_with_floors(floors: Vec<FloorEntry>) -> ContentManifest {
        let mut manifest = builtin_manifest();
        manifest.floors = floors;
        manifest
    }

    fn builtin_manifest() -> ContentManifest {
        let library = ContentLibrary::builtin();
        ContentManifest {
            floors: library
                .floors
                .iter()
                .map(|f| FloorEntry {
                    floor: f.index,
                    key: f.key.clone(),
                    label: f.label.clone(),
                    plate_texture: f.plate_texture.clone(),
                })
                .collect(),
            profile: library.profile,
            skills: library.skills,
            projects: library.projects,
        }
    }

    fn entry(floor: u8, key: &str) -> FloorEntry {
        FloorEntry {
            floor,
            key: key.to_string(),
            label: key.to_string(),
            plate_texture: None,
        }
    }

    #[test]
    fn builtin_library_is_valid() {
        let library = ContentLibrary::builtin();
        assert_eq!(library.floors.len(), 5);
        assert_eq!(library.floor(1).unwrap().kind, ContentKind::About);
        assert_eq!(library.bottom_floor(), 1);
    }

    #[test]
    fn bottom_floor_is_read_from_the_table() {
        let manifest = manifest_with_floors(vec![entry(1, "about"), entry(2, "projects")]);
        let library = ContentLibrary::from_manifest(&manifest).unwrap();
        assert_eq!(library.bottom_floor(), library.floors[0].index);
    }

    #[test]
    fn rejects_non_contiguous_floor_indices() {
        let manifest = manifest_with_floors(vec![entry(1, "about"), entry(3, "projects")]);
        assert!(ContentLibrary::from_manifest(&manifest).is_err());
    }

    #[test]
    fn rejects_floors_not_starting_at_one() {
        let manifest = manifest_with_floors(vec![entry(2, "about")]);
        assert!(ContentLibrary::from_manifest(&manifest).is_err());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let manifest = manifest_with_floors(vec![entry(1, "about"), entry(2, "about")]);
        assert!(ContentLibrary::from_manifest(&manifest).is_err());
    }

    #[test]
    fn rejects_empty_floor_table() {
        let manifest = manifest_with_floors(vec![]);
        assert!(ContentLibrary::from_manifest(&manifest).is_err());
    }

    #[test]
    fn unknown_keys_map_to_fallback_kind() {
        let manifest = manifest_with_floors(vec![entry(1, "about"), entry(2, "research")]);
        let library = ContentLibrary::from_manifest(&manifest).unwrap();
        assert_eq!(
            library.floor(2).unwrap().kind,
            ContentKind::Unknown("research".to_string())
        );
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = builtin_manifest();
        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: ContentManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.floors.len(), manifest.floors.len());
        assert!(ContentLibrary::from_manifest(&parsed).is_ok());
    }
}
