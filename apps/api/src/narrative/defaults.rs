//! The hardcoded "Software Development" career path offered next to every
//! parsed recommendation.

use crate::models::career::{
    CareerRecommendation, ExtractionReport, MarketInsights, MatchSource, Phase, Proficiency,
    SkillSet, TechnicalSkill,
};

pub const SOFTWARE_DEVELOPMENT_ID: &str = "software-developer-path";

pub fn software_development_path() -> CareerRecommendation {
    let phase = |number: &str, title: &str, bullets: &[&str]| Phase {
        number: number.to_string(),
        title: title.to_string(),
        content: bullets
            .iter()
            .map(|b| format!("• {b}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    CareerRecommendation {
        id: SOFTWARE_DEVELOPMENT_ID.to_string(),
        title: "Software Development".to_string(),
        summary: "Based on your skills and experience, software development is an excellent career choice.".to_string(),
        description: "Software development offers a dynamic career with opportunities in various industries. Your technical background and problem-solving skills align well with this career path, allowing you to build innovative applications and solutions.".to_string(),
        match_percentage: 92,
        skills: SkillSet {
            technical: vec![
                TechnicalSkill::new("JavaScript", Proficiency::Advanced),
                TechnicalSkill::new("React.js", Proficiency::Intermediate),
                TechnicalSkill::new("Node.js", Proficiency::Intermediate),
                TechnicalSkill::new("HTML/CSS", Proficiency::Advanced),
                TechnicalSkill::new("Git", Proficiency::Intermediate),
                TechnicalSkill::new("Python", Proficiency::Beginner),
            ],
            soft: [
                "Problem-solving",
                "Communication",
                "Team collaboration",
                "Time management",
                "Adaptability",
            ]
            .map(String::from)
            .to_vec(),
            development_areas: [
                "Cloud Services",
                "System Design",
                "Mobile Development",
                "DevOps",
                "UI/UX Design",
            ]
            .map(String::from)
            .to_vec(),
        },
        phases: vec![
            phase(
                "1",
                "Foundation",
                &[
                    "Learn core programming concepts and languages (JavaScript, HTML, CSS)",
                    "Build simple web applications with vanilla JavaScript",
                    "Master Git version control and GitHub workflows",
                    "Develop understanding of data structures and algorithms",
                    "Create a portfolio with basic projects",
                ],
            ),
            phase(
                "2",
                "Frontend Specialization",
                &[
                    "Master React.js framework for building interactive UIs",
                    "Learn state management with Redux or Context API",
                    "Study responsive design and CSS frameworks (Tailwind, Bootstrap)",
                    "Implement user authentication and API integration",
                    "Build complex frontend applications with modern practices",
                ],
            ),
            phase(
                "3",
                "Backend Development",
                &[
                    "Learn Node.js and Express for server-side development",
                    "Master database concepts with MongoDB and SQL databases",
                    "Implement RESTful APIs and understand GraphQL",
                    "Study server deployment and cloud services (AWS, Azure)",
                    "Build full-stack applications with proper architecture",
                ],
            ),
            phase(
                "4",
                "Advanced Skills & Specialization",
                &[
                    "Learn DevOps practices and CI/CD pipelines",
                    "Study system design and architecture patterns",
                    "Explore specialized areas (mobile dev, AI/ML integration)",
                    "Master testing strategies and performance optimization",
                    "Develop leadership and project management skills",
                ],
            ),
        ],
        market_insights: MarketInsights {
            demand: "High demand based on your skills profile".to_string(),
            average_salary: "$90,000 - $140,000 depending on location and experience".to_string(),
            top_industries: [
                "Technology",
                "E-commerce",
                "Financial Services",
                "Healthcare",
                "Education",
            ]
            .map(String::from)
            .to_vec(),
        },
        raw_content: String::new(),
        extraction: ExtractionReport {
            match_source: MatchSource::Fixed,
            fallback_fields: Vec::new(),
        },
    }
}
