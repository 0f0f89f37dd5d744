// SPDX-License-Identifier: MPL-2.0
//! Embedded project catalog.
//!
//! The catalog describes every portfolio project: identifier, period,
//! thumbnail, card shape, image sequence and team. Titles, locations and
//! descriptions are not stored here; they are translation keys derived from
//! the project id (`project-{id}-title`, ...), resolved through [`I18n`] when a
//! [`ProjectRecord`] is built for the gallery viewer.
//!
//! # Image sources
//!
//! A project lists its images either explicitly or as a numbered sequence:
//!
//! ```toml
//! images = ["projects/3/exterior.jpg", "projects/3/interior.jpg"]
//! images = { directory = "projects/1", count = 35, extension = "jpg" }
//! ```
//!
//! The sequence form expands to `projects/1/01.jpg` through `projects/1/35.jpg`.

use crate::error::{Error, Result};
use crate::i18n::I18n;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const CATALOG_FILE: &str = "projects.toml";

/// Reference to an image, relative to the configured image root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins this reference onto `root`, ignoring a leading `/`.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.0.trim_start_matches('/'))
    }
}

/// Shape of a project card in the home grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Tall,
    Wide,
    #[default]
    Square,
}

impl Aspect {
    /// Card height in logical pixels.
    #[must_use]
    pub fn card_height(self) -> f32 {
        match self {
            Aspect::Tall => 520.0,
            Aspect::Wide => 300.0,
            Aspect::Square => 380.0,
        }
    }
}

/// People credited on a project, resolved for the current locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Team {
    pub architect: String,
    pub client: String,
    pub contractor: String,
}

/// One team credit: a proper name kept as written, or a translation key for
/// descriptive credits such as `{ key = "team-private-client" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Credit {
    Name(String),
    Translated { key: String },
}

impl Default for Credit {
    fn default() -> Self {
        Credit::Name(String::new())
    }
}

impl Credit {
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            Credit::Name(name) => name.clone(),
            Credit::Translated { key } => i18n.tr(key),
        }
    }
}

/// Team credits as written in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub architect: Credit,
    #[serde(default)]
    pub client: Credit,
    #[serde(default)]
    pub contractor: Credit,
}

impl Credits {
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> Team {
        Team {
            architect: self.architect.resolve(i18n),
            client: self.client.resolve(i18n),
            contractor: self.contractor.resolve(i18n),
        }
    }

    /// Translation keys referenced by these credits.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        [&self.architect, &self.client, &self.contractor]
            .into_iter()
            .filter_map(|credit| match credit {
                Credit::Translated { key } => Some(key.as_str()),
                Credit::Name(_) => None,
            })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageSource {
    List(Vec<String>),
    Sequence {
        directory: String,
        count: usize,
        extension: String,
    },
}

impl ImageSource {
    fn expand(self) -> Vec<ImageRef> {
        match self {
            ImageSource::List(paths) => paths.into_iter().map(ImageRef::new).collect(),
            ImageSource::Sequence {
                directory,
                count,
                extension,
            } => {
                let directory = directory.trim_end_matches('/');
                (1..=count)
                    .map(|n| ImageRef::new(format!("{directory}/{n:02}.{extension}")))
                    .collect()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: u32,
    period: String,
    thumbnail: String,
    #[serde(default)]
    aspect: Aspect,
    images: ImageSource,
    #[serde(default)]
    team: Credits,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "project")]
    projects: Vec<RawEntry>,
}

/// One project as stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: u32,
    pub period: String,
    pub thumbnail: ImageRef,
    pub aspect: Aspect,
    pub images: Vec<ImageRef>,
    pub team: Credits,
}

impl CatalogEntry {
    /// Translation key for one of this project's text fields.
    #[must_use]
    pub fn key(&self, field: &str) -> String {
        project_key(self.id, field)
    }
}

/// Translation key for `field` of project `id`, e.g. `project-3-title`.
#[must_use]
pub fn project_key(id: u32, field: &str) -> String {
    format!("project-{id}-{field}")
}

/// A project with its text resolved for the current locale.
///
/// Handed to the gallery viewer by value; the viewer never reads the
/// catalog again while open.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub period: String,
    pub challenge: String,
    pub address: String,
    pub description: String,
    pub images: Vec<ImageRef>,
    pub team: Team,
}

/// Validated, ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("{CATALOG_FILE} is not embedded")))?;
        let source = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml(&source)
    }

    /// Parses and validates a catalog document.
    ///
    /// Every project needs at least one image and a unique id.
    pub fn from_toml(source: &str) -> Result<Self> {
        let raw: RawCatalog =
            toml::from_str(source).map_err(|err| Error::Catalog(err.to_string()))?;

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(raw.projects.len());
        for project in raw.projects {
            if !seen.insert(project.id) {
                return Err(Error::Catalog(format!("duplicate project id {}", project.id)));
            }
            let images = project.images.expand();
            if images.is_empty() {
                return Err(Error::Catalog(format!(
                    "project {} has no images",
                    project.id
                )));
            }
            entries.push(CatalogEntry {
                id: project.id,
                period: project.period,
                thumbnail: ImageRef::new(project.thumbnail),
                aspect: project.aspect,
                images,
                team: project.team,
            });
        }

        tracing::debug!(projects = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Distributes entries round-robin over `count` columns (entry `i` goes
    /// to column `i % count`). A count of zero is treated as one.
    #[must_use]
    pub fn columns(&self, count: usize) -> Vec<Vec<&CatalogEntry>> {
        let count = count.max(1);
        let mut columns = vec![Vec::new(); count];
        for (i, entry) in self.entries.iter().enumerate() {
            columns[i % count].push(entry);
        }
        columns
    }

    /// Builds the viewer record for project `id` in the current locale.
    pub fn record(&self, id: u32, i18n: &I18n) -> Option<ProjectRecord> {
        let entry = self.get(id)?;
        Some(ProjectRecord {
            id: entry.id,
            title: i18n.tr(&entry.key("title")),
            location: i18n.tr(&entry.key("location")),
            period: entry.period.clone(),
            challenge: i18n.tr(&entry.key("challenge")),
            address: i18n.tr(&entry.key("address")),
            description: i18n.tr(&entry.key("description")),
            images: entry.images.clone(),
            team: entry.team.resolve(i18n),
        })
    }
}
