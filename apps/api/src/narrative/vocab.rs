//! Fixed vocabularies and fallback constants for narrative extraction.
//!
//! Both parsers depend on these values exactly, so any change here changes
//! what they output.

pub const DEFAULT_CAREER_TITLE: &str = "Software Development";

pub const DEFAULT_DEMAND: &str = "High demand based on your skills profile";
pub const DEFAULT_SALARY: &str = "$95,000 - $135,000 depending on location and experience";
pub const DEFAULT_INDUSTRIES: &[&str] = &[
    "Technology",
    "E-commerce",
    "Financial Services",
    "Healthcare",
];

/// Heuristic match percentage: `BASE + STEP * hits`, capped at `CAP`.
pub const MATCH_BASE: u32 = 75;
pub const MATCH_STEP: u32 = 5;
pub const MATCH_CAP: u32 = 95;

pub const POSITIVE_KEYWORDS: &[&str] = &["perfect", "excellent", "ideal", "strong", "great"];

/// Synthesized phases used when the narrative has no "Phase N" headers:
/// (title, content used when the paragraph is missing or blank).
pub const SYNTHESIZED_PHASES: &[(&str, &str)] = &[
    ("Foundation", "Build your foundational skills."),
    ("Entry-Level", "Focus on entry-level positions."),
    ("Specialization", "Specialize in your chosen path."),
    ("Advanced Growth", "Advance to leadership positions."),
];

/// Technical skills recognised by case-sensitive substring presence.
pub const KNOWN_TECH_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C#",
    "C++",
    "TypeScript",
    "React",
    "React.js",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express",
    "Django",
    "SQL",
    "MongoDB",
    "NoSQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "HTML",
    "CSS",
    "Git",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Data Science",
    "Deep Learning",
    "NLP",
];

/// Career-title defaults: (title substrings, skills appended when absent).
pub const CAREER_SKILL_DEFAULTS: &[(&[&str], &[&str])] = &[
    (
        &["Full-Stack", "Web Development"],
        &[
            "JavaScript",
            "React.js",
            "Node.js",
            "HTML",
            "CSS",
            "MongoDB",
            "Express.js",
        ],
    ),
    (
        &["Machine Learning", "Data Science"],
        &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "scikit-learn",
            "SQL",
            "Data Visualization",
        ],
    ),
    (
        &["Software Engineer"],
        &[
            "Java",
            "Python",
            "JavaScript",
            "Data Structures",
            "Algorithms",
            "Git",
        ],
    ),
];

pub const MIN_TECH_SKILLS: usize = 5;
pub const PADDING_TECH_SKILLS: &[&str] = &["JavaScript", "HTML", "CSS", "Git", "React.js"];

pub const ADVANCED_TERMS: &[&str] = &["expert", "advanced", "extensive", "proficient"];
pub const INTERMEDIATE_TERMS: &[&str] = &["intermediate", "moderate", "competent"];
pub const BEGINNER_TERMS: &[&str] = &["beginner", "basic", "learning", "novice"];
/// Bytes scanned on each side of a skill mention for proficiency adjectives.
pub const PROFICIENCY_WINDOW: usize = 50;

pub const SOFT_SKILLS: &[&str] = &[
    "Problem-solving",
    "Communication",
    "Team collaboration",
    "Leadership",
    "Time management",
    "Adaptability",
    "Critical thinking",
    "Creativity",
    "Emotional intelligence",
    "Project management",
    "Negotiation",
    "Conflict resolution",
    "Continuous learning",
    "Attention to detail",
];
pub const MIN_SOFT_SKILLS: usize = 5;
pub const MAX_SOFT_SKILLS: usize = 8;

pub const DEVELOPMENT_KEYWORDS: &[&str] = &[
    "improve",
    "develop",
    "enhance",
    "learn",
    "strengthen",
    "focus on",
    "build",
    "expand",
    "grow",
];
pub const DEVELOPMENT_PHRASES: &[&str] = &[
    "need to develop",
    "should learn",
    "recommend focusing on",
    "suggest learning",
    "would benefit from",
];
pub const DEVELOPMENT_AREAS: &[&str] = &[
    "Machine Learning",
    "Data Science",
    "Cloud Computing",
    "Cybersecurity",
    "DevOps",
    "Mobile Development",
    "UI/UX Design",
    "Big Data",
    "Blockchain",
    "AR/VR",
    "CI/CD",
    "System Design",
    "Microservices",
    "Leadership",
    "Project Management",
];
/// Bytes following a development keyword that are searched for an area name.
pub const DEVELOPMENT_WINDOW: usize = 100;
pub const MIN_DEVELOPMENT_AREAS: usize = 3;
pub const MAX_DEVELOPMENT_AREAS: usize = 5;
pub const PADDING_DEVELOPMENT_AREAS: &[&str] =
    &["Cloud Services", "Advanced Algorithms", "System Design"];

/// (case-insensitive phrase, reported demand)
pub const DEMAND_PHRASES: &[(&str, &str)] = &[
    ("high demand", "High demand based on your skills profile"),
    ("growing demand", "Growing demand in the current market"),
    (
        "very competitive",
        "Very competitive field with significant demand",
    ),
    ("moderate demand", "Moderate demand with good opportunities"),
    ("exceptional demand", "Exceptional demand in today's market"),
];

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Financial Services",
    "E-commerce",
    "Education",
    "Manufacturing",
    "Entertainment",
    "Retail",
    "Government",
    "Automotive",
    "Telecommunications",
    "Energy",
];
pub const MIN_INDUSTRIES: usize = 3;
pub const MAX_INDUSTRIES: usize = 5;

// ── Resume evaluation ──────────────────────────────────────────────────────

pub const IMPROVEMENT_LABELS: &[&str] =
    &["Keywords Missing:", "Missing Keywords:", "Areas for Improvement:"];
pub const STRENGTH_LABELS: &[&str] = &["Final Thoughts:", "Strengths:", "Recommendations:"];
/// A labelled section ends at the next bold heading.
pub const SECTION_TERMINATOR: &str = "\n\n**";

pub const POSITIVE_PATTERNS: &[&str] = &[
    "strong",
    "proficient",
    "skill",
    "demonstrate",
    "showcase",
    "experience",
    "qualified",
    "impressive",
    "excellent",
    "good",
];

/// Sentences of this many characters or fewer are dropped from improvements.
pub const MIN_IMPROVEMENT_CHARS: usize = 5;

pub const DEFAULT_STRENGTHS: &[&str] = &[
    "Strong technical background",
    "Relevant experience",
    "Good educational qualifications",
];
pub const DEFAULT_IMPROVEMENTS: &[&str] = &[
    "Tailor resume more specifically to job description",
    "Add quantifiable achievements",
    "Emphasize relevant experience",
];
pub const DEFAULT_KEYWORDS: &[&str] = &["development", "full-stack", "web", "frameworks"];

pub const EVALUATION_KEYWORDS: &[&str] = &[
    "web",
    "development",
    "full-stack",
    "front-end",
    "back-end",
    "react",
    "node",
    "javascript",
    "python",
    "java",
    "cloud",
    "aws",
    "azure",
    "devops",
    "agile",
    "machine learning",
    "data science",
    "frameworks",
    "technologies",
    "software",
    "engineering",
    "api",
    "database",
    "sql",
    "nosql",
    "mongodb",
    "design",
    "architecture",
];
