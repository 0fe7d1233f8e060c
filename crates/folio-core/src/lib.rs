//! folio-core: portfolio site core (content model, store adapter, admin
//! gate, content editor, AI bridge, presentation projections).
//!
//! The gateway and any alternate front end share this public API; the
//! ContentDocument is the single synchronized entity everything revolves
//! around.

mod bridge;
mod config;
mod content;
mod editor;
mod gate;
mod session;
mod store;
mod view;

pub use bridge::{AssistantBridge, FALLBACK_REPLY, MOCK_REPLY};
pub use config::{AiMode, ConfigError, SiteConfig};
pub use content::{
    ContentDocument, ProcessStep, Profile, Project, Service, SoftwareTool, Stat, FILTER_ALL,
    PROJECT_CATEGORIES, SOFTWARE_CATEGORIES,
};
pub use editor::{ContentEditor, ProfileField, ProjectField, SoftwareField};
pub use gate::{AdminGate, GateState, TriggerOutcome, ADMIN_TRIGGER_THRESHOLD};
pub use session::{ChatMessage, ChatRole, ChatTranscript, SessionState, GREETING};
pub use store::{
    ContentStore, MemoryContentStore, SledContentStore, StoreError, CONTENT_KEY,
};
pub use view::{
    category_glyph, filter_projects, icon_glyph, RoleRotator, DEFAULT_GLYPH, DEFAULT_ROLE,
};
