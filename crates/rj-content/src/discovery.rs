//! Journey discovery.
//!
//! Journeys are numbered files named `journey_N.json` or `journeyN.json`,
//! looked up for N in 1..=[`MAX_JOURNEYS`] under `journeys/` and then the
//! content root. Each number is listed once, whichever spelling is found
//! first.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rj_core::JourneyMetadata;

use crate::directory::{JOURNEYS_DIR, read_optional};

/// Highest journey number looked for.
pub const MAX_JOURNEYS: u32 = 10;

const PREFIXES: [&str; 2] = ["journey_", "journey"];

const DEFAULT_IMAGES: [&str; 4] = [
    "images/bg-gradient-1.jpg",
    "images/bg-gradient-2.jpg",
    "images/bg-gradient-3.jpg",
    "images/home-image.jpg",
];

/// A playable journey as shown on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySummary {
    /// Journey id passed to the engine, e.g. `journey_1`.
    pub id: String,
    /// Journey number.
    pub number: u32,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Card image.
    pub image: String,
    /// File name the journey was found under.
    pub file: String,
}

#[derive(Deserialize)]
struct MetadataOnly {
    #[serde(default)]
    metadata: Option<JourneyMetadata>,
}

/// List the journeys available under `root`, ordered by number.
///
/// Files that cannot be read or decoded are skipped.
pub fn discover_journeys(root: &Path) -> Vec<JourneySummary> {
    let mut journeys: Vec<JourneySummary> = Vec::new();

    for prefix in PREFIXES {
        for number in 1..=MAX_JOURNEYS {
            if journeys.iter().any(|j| j.number == number) {
                continue;
            }

            let file = format!("{prefix}{number}.json");
            let Some(metadata) = read_metadata(root, &file) else {
                continue;
            };

            let default_image = DEFAULT_IMAGES[(number as usize - 1) % DEFAULT_IMAGES.len()];
            journeys.push(JourneySummary {
                id: format!("{prefix}{number}"),
                number,
                title: metadata
                    .title
                    .unwrap_or_else(|| format!("Journey {number}")),
                description: metadata
                    .description
                    .unwrap_or_else(|| format!("Journey description {number}")),
                image: metadata.image.unwrap_or_else(|| default_image.to_string()),
                file,
            });
        }
    }

    if journeys.is_empty() {
        tracing::warn!(root = %root.display(), "no journey files found");
    }

    journeys.sort_by_key(|j| j.number);
    journeys
}

fn read_metadata(root: &Path, file: &str) -> Option<JourneyMetadata> {
    for path in [root.join(JOURNEYS_DIR).join(file), root.join(file)] {
        let text = match read_optional(&path) {
            Ok(Some(text)) => text,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("{e}");
                continue;
            }
        };
        match serde_json::from_str::<MetadataOnly>(&text) {
            Ok(doc) => return Some(doc.metadata.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable journey: {e}");
            }
        }
    }
    None
}
