use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::career::CareerRecommendation;
use crate::models::roadmap::{LearningPhase, MarketInfo, Roadmap, RoadmapInput, RoadmapItem, RoadmapSection};

pub const DEFAULT_ROADMAP_TITLE: &str = "Career Roadmap";

/// Technologies recognised when turning phase prose into a learning list.
/// Matching is case-sensitive on whole terms; order decides output order.
pub const TECH_VOCABULARY: &[&str] = &[
    "JavaScript", "Python", "Java", "C#", "C++", "TypeScript", "Go", "Ruby", "PHP", "Swift",
    "Kotlin", "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring Boot",
    "SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase", "Cassandra", "DynamoDB", "AWS",
    "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "Git", "GitHub", "GitLab", "TensorFlow",
    "PyTorch", "scikit-learn", "Pandas", "NumPy", "R", "Tableau", "Power BI", "REST API",
    "GraphQL", "WebSockets", "gRPC", "Microservices", "Serverless", "CI/CD", "HTML", "CSS",
    "SASS", "LESS", "Bootstrap", "Tailwind CSS", "Material UI", "Redux", "Next.js", "Gatsby",
    "Flutter", "React Native", "Electron", "Unity",
];

/// Fewer bullet hits than this triggers a scan of the whole phase content.
const MIN_BULLET_TECHNOLOGIES: usize = 3;

const GENERAL_SKILLS: &[&str] = &["Problem Solving", "Data Structures", "Algorithms", "Design Patterns"];
const GENERAL_AREAS: &[&str] = &["Leadership", "Communication", "Team Work"];

const PHASE_ITEM_STRIDE: u32 = 100;
const AREA_ITEM_BASE: u32 = 1000;

/// (title keyword, milestones) checked in order; first hit wins.
const PHASE_MILESTONES: &[(&str, &[(&str, &str)])] = &[
    (
        "Foundation",
        &[
            ("Build Portfolio Projects", "Create projects to showcase your skills"),
            ("Contribute to Open Source", "Start contributing to open-source projects"),
        ],
    ),
    (
        "Entry",
        &[
            ("Junior Developer Position", "Apply for entry-level positions"),
            ("Freelance Projects", "Take on freelance work to build experience"),
        ],
    ),
    (
        "Advancement",
        &[
            ("Mid-Level Developer", "Progress to more senior positions"),
            ("Specialization", "Focus on specialized technologies"),
            ("Technical Leadership", "Begin leading technical initiatives"),
        ],
    ),
];

/// Checklists keyed by exact area name.
const AREA_CHECKLISTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Machine Learning",
        &[
            ("ML Fundamentals", "Learn core ML concepts and algorithms"),
            ("TensorFlow/PyTorch", "Master a ML framework"),
            ("Model Deployment", "Deploy ML models in production"),
            ("ML Ops", "Learn ML operations and pipelines"),
        ],
    ),
    (
        "Data Science",
        &[
            ("Data Analysis", "Learn to analyze and visualize data"),
            ("Statistical Methods", "Apply statistical methods to data"),
            ("Python for Data Science", "Use Python libraries like Pandas and NumPy"),
            ("R Programming", "Learn R for statistical analysis"),
        ],
    ),
    (
        "Cloud Services",
        &[
            ("Cloud Fundamentals", "Understand cloud service models"),
            ("AWS Certification", "Prepare for AWS certification"),
            ("Serverless Architecture", "Build serverless applications"),
            ("Cloud Security", "Implement cloud security best practices"),
        ],
    ),
];

const GENERIC_AREA_CHECKLIST: &[(&str, &str)] = &[
    ("Core Concepts", "Learn fundamentals of this area"),
    ("Practical Application", "Apply concepts to real projects"),
    ("Advanced Topics", "Explore advanced techniques"),
];

/// Core skills relevant to an area, matched by case-insensitive substring.
const AREA_SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Machine Learning", &["Machine Learning", "Python", "TensorFlow", "PyTorch"]),
    ("Data Science", &["Data Science", "Python", "R", "SQL"]),
    ("Cloud Services", &["AWS", "GCP", "Azure", "Docker", "Kubernetes"]),
];

static BULLET_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•*]\s*([^\n]+)").expect("bullet regex is valid"));

// ──────────────────────────────────────────────
// Transform
// ──────────────────────────────────────────────

/// Builds the checklist for `input`. Pure: equal inputs give equal roadmaps.
pub fn transform(input: &RoadmapInput) -> Roadmap {
    let phase_sections = input
        .learning_path
        .iter()
        .enumerate()
        .map(|(index, phase)| RoadmapSection {
            id: index as u32 + 1,
            title: phase.title.clone(),
            description: format!("Phase {}: {}", phase.phase, phase.title),
            completed: false,
            expanded: false,
            sub_items: phase_items(phase, index),
        });

    let offset = input.learning_path.len() as u32;
    let area_sections = input
        .development_areas
        .iter()
        .enumerate()
        .map(|(index, area)| RoadmapSection {
            id: offset + index as u32 + 1,
            title: area.clone(),
            description: format!("Development focus area: {area}"),
            completed: false,
            expanded: false,
            sub_items: area_items(area, &input.core_technical_skills),
        });

    let mut sections: Vec<RoadmapSection> = phase_sections.chain(area_sections).collect();
    if let Some(first) = sections.first_mut() {
        first.expanded = true;
    }

    Roadmap {
        title: input
            .career_path
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROADMAP_TITLE.to_string()),
        description: format!("Generated on {}", format_date(&input.generated_at)),
        market_info: Some(MarketInfo {
            average_salary: "$95,000 - $140,000".to_string(),
            demand: "High and Growing".to_string(),
            top_industries: ["Tech", "Finance", "Healthcare"].map(String::from).to_vec(),
        }),
        sections,
    }
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

fn phase_items(phase: &LearningPhase, index: usize) -> Vec<RoadmapItem> {
    let mut next_id = (index as u32 + 1) * PHASE_ITEM_STRIDE;
    let mut id = || {
        let current = next_id;
        next_id += 1;
        current
    };

    let mut items: Vec<RoadmapItem> = phase
        .technologies_to_learn
        .iter()
        .map(|tech| RoadmapItem::new(id(), tech.as_str(), format!("Master {tech} fundamentals")))
        .collect();

    if let Some((_, milestones)) = PHASE_MILESTONES
        .iter()
        .find(|(keyword, _)| phase.title.contains(keyword))
    {
        items.extend(
            milestones
                .iter()
                .map(|(title, description)| RoadmapItem::new(id(), *title, *description)),
        );
    }
    items
}

fn area_items(area: &str, core_skills: &[String]) -> Vec<RoadmapItem> {
    let mut next_id = AREA_ITEM_BASE;
    let mut id = || {
        let current = next_id;
        next_id += 1;
        current
    };

    let checklist = AREA_CHECKLISTS
        .iter()
        .find(|(name, _)| *name == area)
        .map(|(_, list)| *list)
        .unwrap_or(GENERIC_AREA_CHECKLIST);

    let mut items: Vec<RoadmapItem> = checklist
        .iter()
        .map(|(title, description)| RoadmapItem::new(id(), *title, *description))
        .collect();

    let Some((_, keywords)) = AREA_SKILL_KEYWORDS.iter().find(|(name, _)| *name == area) else {
        return items;
    };

    for skill in core_skills {
        let skill_lower = skill.to_lowercase();
        let relevant = keywords
            .iter()
            .any(|k| skill_lower.contains(&k.to_lowercase()));
        let present = items
            .iter()
            .any(|item| item.title.to_lowercase().contains(&skill_lower));
        if relevant && !present {
            items.push(RoadmapItem::new(id(), skill.as_str(), format!("Master {skill} for {area}")));
        }
    }
    items
}

// ──────────────────────────────────────────────
// Inputs
// ──────────────────────────────────────────────

impl RoadmapInput {
    /// Derives a learning path from a parsed recommendation.
    pub fn from_recommendation(rec: &CareerRecommendation) -> Self {
        Self::from_recommendation_at(rec, Utc::now())
    }

    pub fn from_recommendation_at(rec: &CareerRecommendation, generated_at: DateTime<Utc>) -> Self {
        Self {
            career_path: Some(rec.title.clone()),
            learning_path: rec
                .phases
                .iter()
                .map(|phase| LearningPhase {
                    phase: phase.number.clone(),
                    title: phase.title.clone(),
                    technologies_to_learn: technologies_in(&phase.content),
                })
                .collect(),
            core_technical_skills: rec
                .skills
                .technical
                .iter()
                .map(|s| s.name.clone())
                .filter(|name| !GENERAL_SKILLS.contains(&name.as_str()))
                .collect(),
            development_areas: rec
                .skills
                .development_areas
                .iter()
                .filter(|area| !GENERAL_AREAS.contains(&area.as_str()))
                .cloned()
                .collect(),
            generated_at,
        }
    }

    /// The fixed input behind the default "Software Development" path.
    pub fn software_development() -> Self {
        Self::software_development_at(Utc::now())
    }

    pub fn software_development_at(generated_at: DateTime<Utc>) -> Self {
        let phase = |n: &str, title: &str, techs: &[&str]| LearningPhase {
            phase: n.to_string(),
            title: title.to_string(),
            technologies_to_learn: techs.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            career_path: Some("Software Development".to_string()),
            learning_path: vec![
                phase("1", "Foundation", &["JavaScript", "HTML", "CSS", "Git", "Data Structures"]),
                phase(
                    "2",
                    "Frontend Specialization",
                    &["React.js", "Redux", "Tailwind CSS", "TypeScript", "Jest"],
                ),
                phase(
                    "3",
                    "Backend Development",
                    &["Node.js", "Express", "MongoDB", "PostgreSQL", "RESTful APIs"],
                ),
                phase("4", "Advanced Skills", &["Docker", "AWS", "CI/CD", "System Design", "GraphQL"]),
            ],
            core_technical_skills: ["JavaScript", "React.js", "Node.js", "HTML/CSS", "Git", "MongoDB"]
                .map(String::from)
                .to_vec(),
            development_areas: [
                "Cloud Services",
                "System Design",
                "DevOps",
                "Mobile Development",
                "UI/UX Design",
            ]
            .map(String::from)
            .to_vec(),
            generated_at,
        }
    }
}

/// Technologies named in bulleted lines; falls back to the whole text when
/// the bullets yield fewer than three.
pub fn technologies_in(content: &str) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();
    for caps in BULLET_LINE_RE.captures_iter(content) {
        let line = caps.get(1).map_or("", |m| m.as_str().trim());
        for &tech in TECH_VOCABULARY {
            if contains_term(line, tech) && !found.contains(&tech) {
                found.push(tech);
            }
        }
    }
    if found.len() < MIN_BULLET_TECHNOLOGIES {
        for &tech in TECH_VOCABULARY {
            if contains_term(content, tech) && !found.contains(&tech) {
                found.push(tech);
            }
        }
    }
    found.into_iter().map(String::from).collect()
}

/// Case-sensitive occurrence of `term` not embedded in a longer word, so
/// "Java" does not fire on "JavaScript" nor "R" on "Redis".
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Shown when a roadmap is requested without any input.
pub fn fallback_roadmap() -> Roadmap {
    let items = [
        (101, "HTML5 & Semantic Markup", "Learn structure and semantics"),
        (102, "CSS3 & Responsive Design", "Style with CSS and media queries"),
        (103, "JavaScript Basics", "Core concepts and DOM manipulation"),
        (104, "Modern CSS Frameworks", "Bootstrap, Tailwind CSS, or similar"),
    ];
    Roadmap {
        title: "Fullstack Developer Roadmap".to_string(),
        description: "A comprehensive guide to becoming a fullstack developer".to_string(),
        market_info: None,
        sections: vec![RoadmapSection {
            id: 1,
            title: "Frontend Fundamentals".to_string(),
            description: "Master the essential frontend technologies".to_string(),
            completed: false,
            expanded: true,
            sub_items: items
                .iter()
                .map(|(id, title, description)| RoadmapItem::new(*id, *title, *description))
                .collect(),
        }],
    }
}
