//! Profile section loading.
//!
//! The profile directory holds one markdown file per section
//! (`basic-info.md`, `skills.md`, `education.md`, `experience.md`,
//! `research.md`, `about.md`, `contact.md`). Each section degrades to
//! its defaults when its file is missing or malformed, so a partial
//! profile still produces a complete bundle.
//!
//! Sections carry their own placeholder images rather than the blog
//! placeholder.

use super::{
    assets::{AssetStore, resolve_image_or},
    frontmatter,
};
use crate::{config::SiteConfig, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// Section placeholders
// ============================================================================

const PROFILE_IMAGE_PLACEHOLDER: &str = "/placeholder.svg?height=600&width=600&text=Profile+Image";
const EDUCATION_LOGO_PLACEHOLDER: &str = "/placeholder.svg?height=48&width=48&text=Edu";
const EXPERIENCE_LOGO_PLACEHOLDER: &str = "/placeholder.svg?height=48&width=48&text=Exp";
const RESEARCH_IMAGE_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=400&text=Research";
const TEAM_IMAGE_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=300&text=Team";
const COLLABORATION_LOGO_PLACEHOLDER: &str = "/placeholder.svg?height=60&width=60&text=Collab";
const RESEARCH_ICON: &str = "/assets/icons/ai.svg";

// ============================================================================
// Section records
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Name, contact details and bio shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    /// Validated image path, falls back to the profile placeholder.
    pub profile_image: String,
    pub bio: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub years: String,
    /// Composed from the focus, GPA and thesis fields.
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub years: String,
    /// Base description with achievements appended as a bullet list.
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResearchInterest {
    pub name: String,
    pub description: String,
    pub image: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Publication {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    pub year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub authors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collaboration {
    pub name: String,
    pub logo: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResearchContent {
    pub interests: Vec<ResearchInterest>,
    pub publications: Vec<Publication>,
    pub collaborations: Vec<Collaboration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutValue {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AboutContent {
    pub mission: String,
    pub values: Vec<AboutValue>,
    pub team: Vec<TeamMember>,
}

/// One row of the contact page info column. `icon` names a glyph the
/// presentation layer maps to an actual icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactItem {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactContent {
    pub contact_info: Vec<ContactItem>,
    pub social_links: Vec<SocialLink>,
    pub faqs: Vec<FaqEntry>,
    /// Markdown body of the contact file.
    pub content: String,
}

/// The complete profile bundle, one field per section file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    pub basic_info: BasicInfo,
    pub skills: Vec<Skill>,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub research: ResearchContent,
    pub about: AboutContent,
    pub contact: ContactContent,
}

// ============================================================================
// Raw frontmatter shapes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BasicInfoMeta {
    name: String,
    title: String,
    email: String,
    phone: String,
    location: String,
    website: String,
    profile_image: Option<String>,
    bio: String,
    social_links: Vec<SocialLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SkillsMeta {
    technical: Vec<TechnicalSkill>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TechnicalSkill {
    name: String,
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EducationMeta {
    degrees: Vec<DegreeMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DegreeMeta {
    degree: String,
    institution: Option<String>,
    school: Option<String>,
    years: Option<String>,
    period: Option<String>,
    focus: Option<String>,
    gpa: Option<String>,
    thesis: Option<String>,
    logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExperienceMeta {
    jobs: Vec<JobMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JobMeta {
    position: Option<String>,
    title: Option<String>,
    company: String,
    years: Option<String>,
    period: Option<String>,
    description: Option<String>,
    achievements: Vec<String>,
    logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResearchMeta {
    interests: Vec<InterestMeta>,
    publications: Vec<PublicationMeta>,
    collaborations: Vec<CollaborationMeta>,
}

/// Interests are written either as a bare string or as a mapping with
/// optional description/image/icon.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InterestMeta {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        icon: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PublicationMeta {
    title: String,
    journal: Option<String>,
    conference: Option<String>,
    year: u32,
    url: Option<String>,
    description: Option<String>,
    authors: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollaborationMeta {
    name: String,
    logo: Option<String>,
    description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ContactMeta {
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    availability: Option<String>,
    social_links: Vec<SocialLink>,
    faqs: Vec<FaqEntry>,
}

// ============================================================================
// Loading
// ============================================================================

/// Parse one section file. Any failure (missing file, bad YAML) is
/// logged and yields the section's defaults.
fn parse_section<T: serde::de::DeserializeOwned + Default>(
    dir: &Path,
    file: &str,
) -> (T, String) {
    let path = dir.join(file);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            log!("warn"; "profile section {file} not found ({err}), using defaults");
            return (T::default(), String::new());
        }
    };

    match frontmatter::parse::<T>(&raw) {
        Ok((meta, body)) => (meta, body.to_owned()),
        Err(err) => {
            log!("warn"; "profile section {file} is malformed ({err}), using defaults");
            (T::default(), String::new())
        }
    }
}

/// Load the complete profile bundle.
pub fn load_profile(config: &SiteConfig, assets: &dyn AssetStore) -> Profile {
    let dir = &config.content.profile;

    Profile {
        basic_info: load_basic_info(dir, assets),
        skills: load_skills(dir),
        education: load_education(dir, assets),
        experience: load_experience(dir, assets),
        research: load_research(dir, assets),
        about: load_about(dir, assets),
        contact: load_contact(dir),
    }
}

fn load_basic_info(dir: &Path, assets: &dyn AssetStore) -> BasicInfo {
    let (meta, _) = parse_section::<BasicInfoMeta>(dir, "basic-info.md");

    BasicInfo {
        name: meta.name,
        title: meta.title,
        email: meta.email,
        phone: meta.phone,
        location: meta.location,
        website: meta.website,
        profile_image: resolve_image_or(
            meta.profile_image.as_deref(),
            assets,
            PROFILE_IMAGE_PLACEHOLDER,
        ),
        bio: meta.bio,
        social_links: meta.social_links,
    }
}

/// Icon assigned to a technical skill from its category.
fn skill_icon(name: &str, category: Option<&str>) -> String {
    let by_category = category.and_then(|category| match category {
        "AI" => Some(RESEARCH_ICON),
        "Programming" | "Frameworks" | "DevOps" => Some("/assets/icons/programming.svg"),
        "Data" | "Infrastructure" => Some("/assets/icons/data.svg"),
        _ => None,
    });

    match by_category {
        Some(icon) => icon.to_owned(),
        None => {
            let initial = name.chars().next().unwrap_or('?');
            format!("/placeholder.svg?height=24&width=24&text={initial}")
        }
    }
}

fn load_skills(dir: &Path) -> Vec<Skill> {
    let (meta, _) = parse_section::<SkillsMeta>(dir, "skills.md");

    meta.technical
        .into_iter()
        .map(|skill| Skill {
            icon: skill_icon(&skill.name, skill.category.as_deref()),
            name: skill.name,
            category: skill.category,
        })
        .collect()
}

fn load_education(dir: &Path, assets: &dyn AssetStore) -> Vec<EducationItem> {
    let (meta, _) = parse_section::<EducationMeta>(dir, "education.md");

    meta.degrees
        .into_iter()
        .map(|item| {
            let mut description = item.focus.unwrap_or_default();
            if let Some(gpa) = item.gpa {
                description.push_str(&format!(" - GPA: {gpa}"));
            }
            if let Some(thesis) = item.thesis {
                description.push_str(&format!(" - Thesis: {thesis}"));
            }

            EducationItem {
                degree: item.degree,
                institution: item.institution.or(item.school).unwrap_or_default(),
                years: item.years.or(item.period).unwrap_or_default(),
                description: description.trim().to_owned(),
                logo: resolve_image_or(item.logo.as_deref(), assets, EDUCATION_LOGO_PLACEHOLDER),
            }
        })
        .collect()
}

fn load_experience(dir: &Path, assets: &dyn AssetStore) -> Vec<ExperienceItem> {
    let (meta, _) = parse_section::<ExperienceMeta>(dir, "experience.md");

    meta.jobs
        .into_iter()
        .map(|job| {
            let mut description = job.description.unwrap_or_default();
            if !job.achievements.is_empty() {
                description.push_str("\nAchievements:\n- ");
                description.push_str(&job.achievements.join("\n- "));
            }

            ExperienceItem {
                position: job.position.or(job.title).unwrap_or_default(),
                company: job.company,
                years: job.years.or(job.period).unwrap_or_default(),
                description: description.trim().to_owned(),
                logo: resolve_image_or(job.logo.as_deref(), assets, EXPERIENCE_LOGO_PLACEHOLDER),
            }
        })
        .collect()
}

fn load_research(dir: &Path, assets: &dyn AssetStore) -> ResearchContent {
    let (meta, _) = parse_section::<ResearchMeta>(dir, "research.md");

    let interests = meta
        .interests
        .into_iter()
        .map(|item| {
            let (name, description, image, icon) = match item {
                InterestMeta::Name(name) => (name, None, None, None),
                InterestMeta::Detailed {
                    name,
                    description,
                    image,
                    icon,
                } => (name, description, image, icon),
            };

            ResearchInterest {
                description: description.unwrap_or_else(|| {
                    format!("Exploring {} and its applications.", name.to_lowercase())
                }),
                image: resolve_image_or(image.as_deref(), assets, RESEARCH_IMAGE_PLACEHOLDER),
                icon: resolve_image_or(icon.as_deref(), assets, RESEARCH_ICON),
                name,
            }
        })
        .collect();

    let publications = meta
        .publications
        .into_iter()
        .map(|item| Publication {
            title: item.title,
            journal: item.journal,
            conference: item.conference,
            year: item.year,
            url: item.url,
            description: item.description,
            authors: item.authors.unwrap_or_else(|| "Unknown Authors".to_owned()),
        })
        .collect();

    let collaborations = meta
        .collaborations
        .into_iter()
        .map(|item| Collaboration {
            name: item.name,
            logo: resolve_image_or(item.logo.as_deref(), assets, COLLABORATION_LOGO_PLACEHOLDER),
            description: item.description,
        })
        .collect();

    ResearchContent {
        interests,
        publications,
        collaborations,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AboutMeta {
    mission: String,
    values: Vec<AboutValue>,
    team: Vec<TeamMemberMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TeamMemberMeta {
    name: String,
    role: String,
    image: Option<String>,
    bio: String,
}

fn load_about(dir: &Path, assets: &dyn AssetStore) -> AboutContent {
    let (meta, _) = parse_section::<AboutMeta>(dir, "about.md");

    AboutContent {
        mission: meta.mission,
        values: meta.values,
        team: meta
            .team
            .into_iter()
            .map(|member| TeamMember {
                name: member.name,
                role: member.role,
                image: resolve_image_or(member.image.as_deref(), assets, TEAM_IMAGE_PLACEHOLDER),
                bio: member.bio,
            })
            .collect(),
    }
}

fn load_contact(dir: &Path) -> ContactContent {
    let (meta, body) = parse_section::<ContactMeta>(dir, "contact.md");

    let mut contact_info = Vec::new();
    if let Some(email) = meta.email {
        contact_info.push(ContactItem {
            icon: "Mail".to_owned(),
            label: "Email".to_owned(),
            href: Some(format!("mailto:{email}")),
            value: email,
        });
    }
    if let Some(phone) = meta.phone {
        contact_info.push(ContactItem {
            icon: "Phone".to_owned(),
            label: "Phone".to_owned(),
            href: Some(format!("tel:{}", phone.replace(char::is_whitespace, ""))),
            value: phone,
        });
    }
    if let Some(location) = meta.location {
        contact_info.push(ContactItem {
            icon: "MapPin".to_owned(),
            label: "Location".to_owned(),
            href: Some(format!(
                "https://maps.google.com/?q={}",
                urlencoding::encode(&location)
            )),
            value: location,
        });
    }
    if let Some(availability) = meta.availability {
        contact_info.push(ContactItem {
            icon: "Clock".to_owned(),
            label: "Availability".to_owned(),
            value: availability,
            href: None,
        });
    }

    ContactContent {
        contact_info,
        social_links: meta.social_links,
        faqs: meta.faqs,
        content: body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FnAssets;
    use std::fs;
    use tempfile::TempDir;

    const NO_ASSETS: FnAssets<fn(&str) -> bool> = FnAssets(|_| false);

    fn write_section(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_basic_info_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let info = load_basic_info(dir.path(), &NO_ASSETS);

        assert!(info.name.is_empty());
        assert_eq!(info.profile_image, PROFILE_IMAGE_PLACEHOLDER);
        assert!(info.social_links.is_empty());
    }

    #[test]
    fn test_basic_info_parsed() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "basic-info.md",
            concat!(
                "---\n",
                "name: Dana\n",
                "title: ML Engineer\n",
                "email: dana@example.com\n",
                "profileImage: /me.png\n",
                "socialLinks:\n",
                "  - platform: GitHub\n",
                "    url: https://github.com/dana\n",
                "---\n",
            ),
        );

        let assets = FnAssets(|path: &str| path == "/me.png");
        let info = load_basic_info(dir.path(), &assets);

        assert_eq!(info.name, "Dana");
        assert_eq!(info.profile_image, "/me.png");
        assert_eq!(info.social_links[0].platform, "GitHub");
    }

    #[test]
    fn test_skills_category_icons() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "skills.md",
            concat!(
                "---\n",
                "technical:\n",
                "  - name: PyTorch\n",
                "    category: AI\n",
                "  - name: Rust\n",
                "    category: Programming\n",
                "  - name: Zither\n",
                "---\n",
            ),
        );

        let skills = load_skills(dir.path());

        assert_eq!(skills[0].icon, "/assets/icons/ai.svg");
        assert_eq!(skills[1].icon, "/assets/icons/programming.svg");
        // Unknown category falls back to an initial-letter placeholder
        assert_eq!(skills[2].icon, "/placeholder.svg?height=24&width=24&text=Z");
    }

    #[test]
    fn test_education_field_fallbacks_and_description() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "education.md",
            concat!(
                "---\n",
                "degrees:\n",
                "  - degree: MSc CS\n",
                "    school: Tech University\n",
                "    period: 2018-2020\n",
                "    focus: Machine learning\n",
                "    gpa: \"3.9\"\n",
                "    thesis: Online learning\n",
                "---\n",
            ),
        );

        let education = load_education(dir.path(), &NO_ASSETS);
        let item = &education[0];

        assert_eq!(item.institution, "Tech University");
        assert_eq!(item.years, "2018-2020");
        assert_eq!(
            item.description,
            "Machine learning - GPA: 3.9 - Thesis: Online learning"
        );
        assert_eq!(item.logo, EDUCATION_LOGO_PLACEHOLDER);
    }

    #[test]
    fn test_experience_appends_achievements() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "experience.md",
            concat!(
                "---\n",
                "jobs:\n",
                "  - title: Engineer\n",
                "    company: Acme\n",
                "    years: 2021-2024\n",
                "    description: Built pipelines.\n",
                "    achievements: [Cut latency, Led team]\n",
                "---\n",
            ),
        );

        let experience = load_experience(dir.path(), &NO_ASSETS);
        let job = &experience[0];

        assert_eq!(job.position, "Engineer");
        assert_eq!(
            job.description,
            "Built pipelines.\nAchievements:\n- Cut latency\n- Led team"
        );
    }

    #[test]
    fn test_research_interest_string_and_map_forms() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "research.md",
            concat!(
                "---\n",
                "interests:\n",
                "  - Federated Learning\n",
                "  - name: Causal Inference\n",
                "    description: Counterfactual reasoning.\n",
                "publications:\n",
                "  - title: A Paper\n",
                "    year: 2023\n",
                "collaborations:\n",
                "  - name: Lab X\n",
                "    description: Joint benchmarks\n",
                "---\n",
            ),
        );

        let research = load_research(dir.path(), &NO_ASSETS);

        assert_eq!(research.interests.len(), 2);
        assert_eq!(
            research.interests[0].description,
            "Exploring federated learning and its applications."
        );
        assert_eq!(research.interests[1].description, "Counterfactual reasoning.");
        assert_eq!(research.interests[0].image, RESEARCH_IMAGE_PLACEHOLDER);
        assert_eq!(research.publications[0].authors, "Unknown Authors");
        assert_eq!(research.collaborations[0].logo, COLLABORATION_LOGO_PLACEHOLDER);
    }

    #[test]
    fn test_about_team_image_placeholder() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "about.md",
            concat!(
                "---\n",
                "mission: Useful ML for everyone\n",
                "values:\n",
                "  - name: Rigor\n",
                "    description: Measure twice\n",
                "team:\n",
                "  - name: Sam\n",
                "    role: Researcher\n",
                "    bio: Optimization\n",
                "---\n",
            ),
        );

        let about = load_about(dir.path(), &NO_ASSETS);

        assert_eq!(about.mission, "Useful ML for everyone");
        assert_eq!(about.values[0].name, "Rigor");
        assert_eq!(about.team[0].image, TEAM_IMAGE_PLACEHOLDER);
    }

    #[test]
    fn test_contact_items_built_from_fields() {
        let dir = TempDir::new().unwrap();
        write_section(
            dir.path(),
            "contact.md",
            concat!(
                "---\n",
                "email: hi@example.com\n",
                "phone: \"+1 555 0100\"\n",
                "location: Lisbon, Portugal\n",
                "availability: Weekdays\n",
                "faqs:\n",
                "  - question: Remote?\n",
                "    answer: Fully remote\n",
                "---\n",
                "Drop me a line.\n",
            ),
        );

        let contact = load_contact(dir.path());

        assert_eq!(contact.contact_info.len(), 4);
        assert_eq!(contact.contact_info[0].href.as_deref(), Some("mailto:hi@example.com"));
        assert_eq!(contact.contact_info[1].href.as_deref(), Some("tel:+15550100"));
        assert_eq!(
            contact.contact_info[2].href.as_deref(),
            Some("https://maps.google.com/?q=Lisbon%2C%20Portugal")
        );
        assert!(contact.contact_info[3].href.is_none());
        assert_eq!(contact.faqs[0].question, "Remote?");
        assert_eq!(contact.content, "Drop me a line.\n");
    }

    #[test]
    fn test_contact_missing_fields_skipped() {
        let dir = TempDir::new().unwrap();
        write_section(dir.path(), "contact.md", "---\nemail: hi@example.com\n---\n");

        let contact = load_contact(dir.path());

        assert_eq!(contact.contact_info.len(), 1);
        assert_eq!(contact.contact_info[0].label, "Email");
    }

    #[test]
    fn test_load_profile_empty_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.content.profile = dir.path().join("_profile");

        let profile = load_profile(&config, &NO_ASSETS);

        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.basic_info.profile_image, PROFILE_IMAGE_PLACEHOLDER);
    }
}
