//! Presentation projections: pure functions of (document, session state).
//!
//! No business logic lives here beyond the three behaviors the sections
//! need: category filtering, role rotation, and glyph lookup.

use crate::content::{ContentDocument, Project, FILTER_ALL};

/// Shown when `profile.roles` is empty or the rotator index has no entry.
pub const DEFAULT_ROLE: &str = "Creative Professional";

/// Glyph key used for any unrecognized icon or category value.
pub const DEFAULT_GLYPH: &str = "layout";

/// `"all"` bypasses filtering; any other value is an exact equality match
/// against `category`, preserving original order. An unrecognized category
/// on a project simply never matches a filter.
pub fn filter_projects<'a>(doc: &'a ContentDocument, category: &str) -> Vec<&'a Project> {
    doc.portfolio
        .iter()
        .filter(|p| category == FILTER_ALL || p.category == category)
        .collect()
}

/// Maps a service icon key to the front end's glyph name.
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "layout" => "layout",
        "film" => "film",
        "palette" => "palette",
        "play" => "play",
        "video" => "video",
        "design" => "palette",
        "layers" => "layers",
        _ => DEFAULT_GLYPH,
    }
}

/// Maps a software category to its section glyph.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "Design" => "palette",
        "Video" => "video",
        "Dev" => "layers",
        _ => DEFAULT_GLYPH,
    }
}

/// Cycles through `profile.roles` in order, wrapping back to index 0 after
/// the last entry. The display interval is the front end's concern; the
/// rotator only owns the position.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleRotator {
    index: usize,
}

impl RoleRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The role currently displayed. A wholesale document replacement can
    /// shrink the list under the rotator, so the index is taken modulo the
    /// current length rather than trusted.
    pub fn current<'a>(&self, doc: &'a ContentDocument) -> &'a str {
        let roles = &doc.profile.roles;
        if roles.is_empty() {
            return DEFAULT_ROLE;
        }
        &roles[self.index % roles.len()]
    }

    /// Advance one position, wrapping at the end of the list.
    pub fn advance(&mut self, doc: &ContentDocument) {
        let len = doc.profile.roles.len();
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % len;
    }
}
