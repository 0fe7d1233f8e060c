//! The ContentDocument: every piece of editable site content in one JSON document.
//!
//! The document is stored and replaced wholesale — there is no partial update
//! anywhere in the system. Categories and icon names stay plain strings for
//! store compatibility; the fixed vocabularies are exported as consts and an
//! unrecognized value degrades at render time instead of failing a load.

use serde::{Deserialize, Serialize};

/// Gallery filter vocabulary. `"all"` bypasses filtering entirely.
pub const PROJECT_CATEGORIES: [&str; 5] = ["all", "uiux", "video", "graphic", "animation"];

/// The literal filter value that returns every portfolio entry.
pub const FILTER_ALL: &str = "all";

/// Software tool groupings shown in the skills section.
pub const SOFTWARE_CATEGORIES: [&str; 3] = ["Design", "Video", "Dev"];

/// Owner identity and contact details for the hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Rotated on a fixed interval by the front end. Must hold at least one
    /// entry or display falls back to a default role.
    pub roles: Vec<String>,
    pub short_bio: String,
    pub email: String,
    pub linkedin: String,
    pub location: String,
    /// Placeholder `"#"` until a real link is configured.
    pub resume_link: String,
}

/// One service card. `icon` is a key into the fixed glyph table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub icon: String,
}

/// One software proficiency entry. `level` is constrained to 0–100 by input
/// handling only; the store itself enforces nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareTool {
    pub name: String,
    pub category: String,
    pub level: u8,
}

/// One step of a project's process breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub desc: String,
}

/// One portfolio project. New projects get an id derived from the creation
/// timestamp; a category outside [`PROJECT_CATEGORIES`] is silently excluded
/// from every filter view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub desc: String,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
}

/// One headline statistic. `value` is free-form ("15+" is valid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// The single synchronized entity: all editable site content.
///
/// Created once from [`ContentDocument::default_content`], then only ever
/// fully replaced — by the first successful store load, by each change
/// notification, and by each save acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub profile: Profile,
    pub services: Vec<Service>,
    pub software: Vec<SoftwareTool>,
    pub portfolio: Vec<Project>,
    pub stats: Vec<Stat>,
}

impl ContentDocument {
    /// Built-in default data, shown before the first successful load and
    /// whenever the store is unreachable or the document does not exist yet.
    pub fn default_content() -> Self {
        Self {
            profile: Profile {
                name: "Janikashree R S".to_string(),
                roles: vec![
                    "UI/UX Designer".to_string(),
                    "Video Editor".to_string(),
                    "Graphic Designer".to_string(),
                    "Animator".to_string(),
                ],
                short_bio: "Transforming ideas into digital reality. I blend technical precision \
                            with creative flair to build immersive user experiences and compelling \
                            visual stories."
                    .to_string(),
                email: "janikashreersj@gmail.com".to_string(),
                linkedin: "https://www.linkedin.com/in/janikashree-r-s-b9867a294".to_string(),
                location: "Namakkal, Tamil Nadu".to_string(),
                resume_link: "#".to_string(),
            },
            services: vec![
                Service {
                    id: "uiux".to_string(),
                    title: "UI/UX Design".to_string(),
                    desc: "User-centered interfaces for web & mobile apps. Wireframing to \
                           high-fidelity prototyping."
                        .to_string(),
                    icon: "layout".to_string(),
                },
                Service {
                    id: "video".to_string(),
                    title: "Video Editing".to_string(),
                    desc: "Cinematic cuts, color grading, and storytelling for promotional and \
                           social content."
                        .to_string(),
                    icon: "film".to_string(),
                },
                Service {
                    id: "graphic".to_string(),
                    title: "Graphic Design".to_string(),
                    desc: "Brand identity, marketing collateral, posters, and social media visuals."
                        .to_string(),
                    icon: "palette".to_string(),
                },
                Service {
                    id: "motion".to_string(),
                    title: "Motion & Animation".to_string(),
                    desc: "Bringing static visuals to life with Alight Motion, FlipaClip and \
                           After Effects."
                        .to_string(),
                    icon: "play".to_string(),
                },
            ],
            software: vec![
                tool("Figma", "Design", 95),
                tool("Adobe Photoshop", "Design", 90),
                tool("Adobe Illustrator", "Design", 85),
                tool("DaVinci Resolve", "Video", 75),
                tool("Alight Motion", "Video", 85),
                tool("Canva", "Design", 95),
            ],
            portfolio: vec![
                Project {
                    id: 1,
                    title: "Mobile App Prototype".to_string(),
                    category: "uiux".to_string(),
                    image: "https://images.unsplash.com/photo-1616469829941-c7200edec809?auto=format&fit=crop&q=80&w=800".to_string(),
                    desc: "A clean, user-friendly mobile application design focusing on intuitive \
                           navigation."
                        .to_string(),
                    process: vec![
                        step("User Research", "Analyzed target audience needs and pain points through surveys."),
                        step("Wireframing", "Created low-fidelity sketches to establish core user flows."),
                        step("High-Fidelity Design", "Applied color theory and typography for the final UI in Figma."),
                        step("Prototyping", "Built interactive connections to simulate the real app experience."),
                    ],
                },
                Project {
                    id: 2,
                    title: "Brand Identity Pack".to_string(),
                    category: "graphic".to_string(),
                    image: "https://images.unsplash.com/photo-1600607686527-6fb886090705?auto=format&fit=crop&q=80&w=800".to_string(),
                    desc: "Complete logo and stationery design for a tech startup.".to_string(),
                    process: vec![
                        step("Discovery", "Workshop with stakeholders to define brand values."),
                        step("Logo Sketching", "Explored 20+ concepts before selecting the top 3 directions."),
                        step("Vectorization", "Refined chosen concept in Illustrator with precise grid systems."),
                        step("Mockups", "Applied branding to business cards, letterheads, and merchandise."),
                    ],
                },
                Project {
                    id: 3,
                    title: "Promotional Reel".to_string(),
                    category: "video".to_string(),
                    image: "https://images.unsplash.com/photo-1536240478700-b869070f9279?auto=format&fit=crop&q=80&w=800".to_string(),
                    desc: "High-energy promotional video edited with dynamic transitions.".to_string(),
                    process: vec![
                        step("Storyboarding", "Planned the narrative arc and shot list visually."),
                        step("Rough Cut", "Assembled raw footage to establish timing and pacing."),
                        step("Motion Graphics", "Added animated titles and lower thirds in Alight Motion."),
                        step("Color Grading", "Enhanced visual tone using DaVinci Resolve for a cinematic look."),
                    ],
                },
                Project {
                    id: 4,
                    title: "Character Animation".to_string(),
                    category: "animation".to_string(),
                    image: "https://images.unsplash.com/photo-1633511090164-b43840ea1607?auto=format&fit=crop&q=80&w=800".to_string(),
                    desc: "2D character animation loop created using FlipaClip.".to_string(),
                    process: vec![
                        step("Character Design", "Sketched character concepts and expressions."),
                        step("Keyframing", "Defined the main poses of the movement loop."),
                        step("In-Betweening", "Drew intermediate frames for fluid motion."),
                        step("Cleanup & Color", "Inked final lines and applied flat colors for style."),
                    ],
                },
                Project {
                    id: 5,
                    title: "Social Media Suite".to_string(),
                    category: "graphic".to_string(),
                    image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=800".to_string(),
                    desc: "Set of engaging Instagram posts and stories for brand awareness."
                        .to_string(),
                    process: vec![
                        step("Content Strategy", "Identified key messages and visual themes."),
                        step("Layout Design", "Created versatile templates in Canva and Photoshop."),
                        step("Asset Creation", "Sourced and edited images to fit the brand aesthetic."),
                        step("Export & Delivery", "Prepared files in optimized formats for various platforms."),
                    ],
                },
            ],
            stats: vec![
                Stat { label: "Years Exp".to_string(), value: "2+".to_string() },
                Stat { label: "Projects".to_string(), value: "15+".to_string() },
                Stat { label: "Tools".to_string(), value: "8+".to_string() },
            ],
        }
    }
}

fn tool(name: &str, category: &str, level: u8) -> SoftwareTool {
    SoftwareTool {
        name: name.to_string(),
        category: category.to_string(),
        level,
    }
}

fn step(title: &str, desc: &str) -> ProcessStep {
    ProcessStep {
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_shape() {
        let doc = ContentDocument::default_content();
        assert_eq!(doc.profile.roles.len(), 4);
        assert_eq!(doc.services.len(), 4);
        assert_eq!(doc.software.len(), 6);
        assert_eq!(doc.portfolio.len(), 5);
        assert_eq!(doc.stats.len(), 3);
    }

    #[test]
    fn default_project_ids_are_unique() {
        let doc = ContentDocument::default_content();
        let mut ids: Vec<i64> = doc.portfolio.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doc.portfolio.len());
    }

    #[test]
    fn json_field_names_match_stored_shape() {
        let doc = ContentDocument::default_content();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["profile"]["shortBio"].is_string());
        assert!(json["profile"]["resumeLink"].is_string());
        assert!(json["portfolio"][0]["process"].is_array());
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = ContentDocument::default_content();
        let json = serde_json::to_string(&doc).unwrap();
        let back: ContentDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn missing_process_defaults_to_empty() {
        let raw = r#"{"id":9,"title":"T","category":"uiux","image":"i","desc":"d"}"#;
        let p: Project = serde_json::from_str(raw).unwrap();
        assert!(p.process.is_empty());
    }
}
