//! Project catalog for the MCA projects job
//!
//! The project titles and registration numbers live in a YAML data file
//! rather than in code. Specialization and project type are derived from
//! title keywords with ordered, first-match-wins rules; the defaults below
//! can be replaced from the same file.
//!
//! [`ProjectClassifier`] is a second, finer ruleset for free-form titles in
//! upload sheets, where a rule also decides hardware versus software.
//!
//! ```yaml
//! projects:
//!   - Fake news Detection
//! registration_numbers:
//!   - 25mca1001
//! ```

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Label used when no specialization rule matches
pub const GENERAL_SPECIALIZATION: &str = "General";

const DEFAULT_SPECIALIZATION_RULES: &[(&str, &[&str])] = &[
    (
        "Cyber Security",
        &["cryptography", "security", "intrusion", "phishing", "encryption", "forensic", "cyber"],
    ),
    ("Blockchain", &["blockchain", "cryptocurrency", "blockcert"]),
    ("IoT", &["iot", "robot", "hardware"]),
    ("Cloud Computing", &["cloud", "vm placement", "devsecops"]),
    (
        "Data Science",
        &[
            "data analyst",
            "customer segmentation",
            "sales prediction",
            "data platform",
            "forecasting",
            "prediction",
            "survival analysis",
        ],
    ),
    (
        "AI/ML",
        &[
            "ai",
            "ml",
            "deep learning",
            "machine learning",
            "neural",
            "image processing",
            "computer vision",
            "nlp",
            "llm",
            "detection",
            "recognition",
            "classification",
            "segmentation",
            "reinforcement learning",
        ],
    ),
    ("Web Development", &["platform", "marketplace", "search engine", "bot"]),
];

const DEFAULT_HARDWARE_KEYWORDS: &[&str] = &["iot", "robot", "autonomous", "hardware"];

/// A label applied when any keyword occurs in the lower-cased title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggingRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl TaggingRule {
    pub fn matches(&self, lowered_title: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_title.contains(keyword.as_str()))
    }
}

/// Whether a project needs hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Hardware,
    Software,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Hardware => "Hardware",
            ProjectType::Software => "Software",
        }
    }
}

fn default_specialization_rules() -> Vec<TaggingRule> {
    DEFAULT_SPECIALIZATION_RULES
        .iter()
        .map(|(label, keywords)| TaggingRule {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

fn default_hardware_keywords() -> Vec<String> {
    DEFAULT_HARDWARE_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

//==============================================================================
// Specialization and type classifier
//==============================================================================

/// Specialization used when no classification rule matches
pub const FALLBACK_CLASSIFICATION: &str = "general";

/// How a classification rule settles the project type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
    Software,
    Hardware,
    /// Hardware when the title carries a hardware hint
    Hinted,
}

/// A tagging rule plus the project type it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    pub tag: TaggingRule,
    pub project_type: TypeRule,
    /// Also fires for any title with a hardware hint
    pub matches_hinted: bool,
}

/// Result of classifying one project title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub specialization: &'a str,
    pub project_type: ProjectType,
}

const HARDWARE_HINTS: &[&str] = &[
    "iot", "sensor", "sensors", "device", "embedded", "arduino", "raspberry", "biometric",
    "garage door", "rover", "helmet", "slipper", "patrol", "drone", "lidar", "camera fusion",
    "seat adjustment", "assistive system", "air pollution monitoring", "industrial rover",
    "medication dispensing", "wearables", "under water", "acoustic", "anti-bedsores",
    "crowd safety", "forest", "garage", "night patrol", "vehicleguard", "scan cart",
];

// (label, type rule, matches any hinted title, keywords); order matters
const CLASSIFICATION_RULES: &[(&str, TypeRule, bool, &[&str])] = &[
    ("vlsi", TypeRule::Hinted, false, &["vlsi"]),
    ("blockchain", TypeRule::Software, false, &["blockchain"]),
    ("cloud computing", TypeRule::Software, false, &["cloud"]),
    ("devops", TypeRule::Software, false, &["devops"]),
    (
        "database management",
        TypeRule::Software,
        false,
        &["database", "dbms", "sql", "database management"],
    ),
    (
        "web development",
        TypeRule::Software,
        false,
        &[
            "web app", "webapp", "web application", "web portal", "react", "next.js", "website",
            "web development", "auction", "ordering", "payments", "food outlet",
            "mess scheduling", "retail navigation", "e-commerce", "chatting app",
        ],
    ),
    (
        "mobile development",
        TypeRule::Software,
        false,
        &["android", "ios", "mobile app", "mobile application", "augmented reality", "ar "],
    ),
    (
        "cyber security",
        TypeRule::Hinted,
        false,
        &[
            "key exchange", "homomorphic", "watermark", "ransomware", "malware",
            "fraud detection", "cyber", "encryption", "authentication", "secure file",
            "intrusion detection", "scam link",
        ],
    ),
    (
        "data science",
        TypeRule::Software,
        false,
        &[
            "data science", "stock forecasting", "time series", "price tracker", "pricepulse",
            "coastal erosion risk", "analysis",
        ],
    ),
    (
        "ai/ml",
        TypeRule::Hinted,
        false,
        &[
            "ai", "ml", "machine learning", "deep learning", "transformer", "cnn",
            "vision transformer", "vit", "gan", "pose estimation", "x-ray", "mri", "chatbot",
            "rag", "nlp", "speech", "image recognition", "weed segmentation", "recommendation",
            "emotion", "gpt", "assistant", "autonomous", "classification", "detection",
            "segmentation", "predict", "forecast",
        ],
    ),
    ("iot", TypeRule::Hardware, true, &["iot", "internet of things"]),
    (
        "software engineering",
        TypeRule::Software,
        false,
        &[
            "interpreter", "platform", "framework", "prototyping", "linux subsystem",
            "software engineering",
        ],
    ),
];

/// Ordered rules for free-form project titles, first match wins.
///
/// Titles are lower-cased with whitespace collapsed before matching, so a
/// keyword such as `"ar "` only matches a word ending in "ar".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectClassifier {
    pub rules: Vec<ClassificationRule>,
    pub hardware_hints: Vec<String>,
}

impl Default for ProjectClassifier {
    fn default() -> Self {
        Self {
            rules: CLASSIFICATION_RULES
                .iter()
                .map(|(label, project_type, matches_hinted, keywords)| ClassificationRule {
                    tag: TaggingRule {
                        label: label.to_string(),
                        keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    },
                    project_type: *project_type,
                    matches_hinted: *matches_hinted,
                })
                .collect(),
            hardware_hints: HARDWARE_HINTS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ProjectClassifier {
    pub fn classify(&self, title: &str) -> Classification<'_> {
        let text = title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let hinted = self
            .hardware_hints
            .iter()
            .any(|hint| text.contains(hint.as_str()));

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.tag.matches(&text) || (rule.matches_hinted && hinted));

        match rule {
            Some(rule) => {
                let hardware = match rule.project_type {
                    TypeRule::Software => false,
                    TypeRule::Hardware => true,
                    TypeRule::Hinted => hinted,
                };
                Classification {
                    specialization: rule.tag.label.as_str(),
                    project_type: if hardware {
                        ProjectType::Hardware
                    } else {
                        ProjectType::Software
                    },
                }
            }
            None => Classification {
                specialization: FALLBACK_CLASSIFICATION,
                project_type: ProjectType::Software,
            },
        }
    }
}

//==============================================================================
// MCA catalog
//==============================================================================

/// Projects paired by position with student registration numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub projects: Vec<String>,
    pub registration_numbers: Vec<String>,
    #[serde(default = "default_specialization_rules")]
    pub specialization_rules: Vec<TaggingRule>,
    #[serde(default = "default_hardware_keywords")]
    pub hardware_keywords: Vec<String>,
}

impl ProjectCatalog {
    /// Catalog with the default tagging rules
    pub fn new(projects: Vec<String>, registration_numbers: Vec<String>) -> Self {
        Self {
            projects,
            registration_numbers,
            specialization_rules: default_specialization_rules(),
            hardware_keywords: default_hardware_keywords(),
        }
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> RosterResult<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            "loaded project catalog"
        );
        Ok(catalog)
    }

    pub fn from_yaml_str(content: &str) -> RosterResult<Self> {
        let catalog: ProjectCatalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every project needs a registration number at the same position
    pub fn validate(&self) -> RosterResult<()> {
        if self.registration_numbers.len() < self.projects.len() {
            return Err(RosterError::Validation(format!(
                "catalog lists {} projects but only {} registration numbers",
                self.projects.len(),
                self.registration_numbers.len()
            )));
        }
        Ok(())
    }

    /// Label of the first rule matching the title, or "General"
    pub fn specialization(&self, project: &str) -> &str {
        let lowered = project.to_lowercase();
        self.specialization_rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.label.as_str())
            .unwrap_or(GENERAL_SPECIALIZATION)
    }

    pub fn project_type(&self, project: &str) -> ProjectType {
        let lowered = project.to_lowercase();
        if self
            .hardware_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            ProjectType::Hardware
        } else {
            ProjectType::Software
        }
    }

    /// (project, registration number) pairs in catalog order
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.projects
            .iter()
            .zip(self.registration_numbers.iter())
            .map(|(p, r)| (p.as_str(), r.as_str()))
    }
}
