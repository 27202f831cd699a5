//! Tag Model

use serde::{Deserialize, Serialize};

/// A tag that can be assigned to ideas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: u32,
    pub slug: String,
    pub name: String,
    /// Hex color without leading '#', e.g. "FF0000"
    pub color: String,
    pub is_public: bool,
}

impl Tag {
    /// CSS color value for the tag chip
    pub fn css_color(&self) -> String {
        format!("#{}", self.color.trim_start_matches('#'))
    }
}

/// Catalog tags whose ids appear in `ids`, in catalog order
pub fn tags_with_ids(catalog: &[Tag], ids: &[u32]) -> Vec<Tag> {
    catalog
        .iter()
        .filter(|tag| ids.contains(&tag.id))
        .cloned()
        .collect()
}

/// Tags a viewer may see on an idea: private tags only for collaborators
pub fn visible_tags(catalog: &[Tag], ids: &[u32], is_collaborator: bool) -> Vec<Tag> {
    tags_with_ids(catalog, ids)
        .into_iter()
        .filter(|tag| tag.is_public || is_collaborator)
        .collect()
}
