//! Career narrative parser: extracts a structured `CareerRecommendation` from
//! the free-text career path returned by the recommendation service.
//!
//! `NarrativeParser::parse` never fails. Each field is extracted best-effort
//! and falls back to a constant from `vocab`. The fields that fell back are
//! listed in `ExtractionReport::fallback_fields`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use uuid::Uuid;

use crate::models::career::{
    CareerRecommendation, ExtractionReport, MarketInsights, MatchSource, Phase, Proficiency,
    SkillSet, TechnicalSkill,
};
use crate::narrative::proficiency::{guess_proficiency, RandomTieBreaker, TieBreaker};
use crate::narrative::scan::{
    ceil_boundary, contains_ci, count_ci, paragraphs, positions_ci, strip_bold,
};
use crate::narrative::vocab::*;

/// Leftmost match wins; at equal positions the earlier alternative wins.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)career path in \*\*([^*]+?)\*\*|career in \*\*([^*]+?)\*\*|career path in ([^,.]+)|strong career path in ([^,.]+)|focusing on ([^,.]+)",
    )
    .expect("title regex is valid")
});

static FOCUS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)specifically focusing on ([^,.]+)").expect("focus regex is valid")
});

static PHASE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\*?\*?Phase\s+(\d+)[:\s]*([^:*\n]+?)[:*\s]*\n+")
        .expect("phase header regex is valid")
});

/// Where a phase's content stops: the next header or the higher-studies block.
static PHASE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\*?\*?Phase\s+\d+|Higher Studies:").expect("phase boundary regex is valid")
});

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s+").expect("bullet regex is valid"));

static MATCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{2,3})%\s+match").expect("match regex is valid"));

static SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d{2,3}(,\d{3})?(\s*-\s*\$\d{2,3}(,\d{3})?)?").expect("salary regex is valid")
});

/// Parser for career-path narratives. Holds the tie-break policy used when a
/// skill's proficiency cannot be read from the text.
pub struct NarrativeParser {
    tie_breaker: Box<dyn TieBreaker>,
}

impl Default for NarrativeParser {
    fn default() -> Self {
        Self::new(Box::new(RandomTieBreaker))
    }
}

impl NarrativeParser {
    pub fn new(tie_breaker: Box<dyn TieBreaker>) -> Self {
        Self { tie_breaker }
    }

    pub fn parse(&self, text: &str) -> CareerRecommendation {
        let mut fallbacks = Vec::new();

        let title = extract_title(text).unwrap_or_else(|| {
            fallbacks.push("title");
            DEFAULT_CAREER_TITLE.to_string()
        });

        let phases = match extract_phases(text) {
            phases if !phases.is_empty() => phases,
            _ => {
                fallbacks.push("phases");
                synthesize_phases(text)
            }
        };

        let (match_percentage, match_source) = match_percentage(text);

        let (technical, from_text) = self.extract_technical_skills(text, &title);
        if !from_text {
            fallbacks.push("skills.technical");
        }

        let (soft, soft_found) = extract_soft_skills(text);
        if !soft_found {
            fallbacks.push("skills.soft");
        }

        let (development_areas, areas_found) = extract_development_areas(text);
        if !areas_found {
            fallbacks.push("skills.developmentAreas");
        }

        let demand = extract_demand(text).unwrap_or_else(|| {
            fallbacks.push("marketInsights.demand");
            DEFAULT_DEMAND.to_string()
        });
        let average_salary = extract_salary(text).unwrap_or_else(|| {
            fallbacks.push("marketInsights.averageSalary");
            DEFAULT_SALARY.to_string()
        });
        let top_industries = extract_industries(text).unwrap_or_else(|| {
            fallbacks.push("marketInsights.topIndustries");
            to_owned_vec(DEFAULT_INDUSTRIES)
        });

        debug!(
            title = %title,
            phases = phases.len(),
            match_percentage,
            fallbacks = fallbacks.len(),
            "Parsed career narrative"
        );

        CareerRecommendation {
            id: format!("career-path-{}", Uuid::new_v4()),
            title,
            summary: extract_summary(text),
            description: extract_description(text),
            match_percentage,
            skills: SkillSet {
                technical,
                soft,
                development_areas,
            },
            phases,
            market_insights: MarketInsights {
                demand,
                average_salary,
                top_industries,
            },
            raw_content: text.to_string(),
            extraction: ExtractionReport {
                match_source,
                fallback_fields: fallbacks.into_iter().map(String::from).collect(),
            },
        }
    }

    /// Returns the skill list and whether any skill was found in the text itself.
    fn extract_technical_skills(&self, text: &str, title: &str) -> (Vec<TechnicalSkill>, bool) {
        let mut skills: Vec<TechnicalSkill> = KNOWN_TECH_SKILLS
            .iter()
            .filter(|skill| text.contains(*skill))
            .map(|skill| {
                TechnicalSkill::new(
                    *skill,
                    guess_proficiency(text, skill, self.tie_breaker.as_ref()),
                )
            })
            .collect();
        let from_text = !skills.is_empty();

        if let Some((_, defaults)) = CAREER_SKILL_DEFAULTS
            .iter()
            .find(|(triggers, _)| triggers.iter().any(|t| title.contains(t)))
        {
            push_missing_skills(&mut skills, defaults);
        }

        if skills.len() < MIN_TECH_SKILLS {
            push_missing_skills(&mut skills, PADDING_TECH_SKILLS);
        }

        (skills, from_text)
    }
}

fn push_missing_skills(skills: &mut Vec<TechnicalSkill>, names: &[&str]) {
    for name in names {
        if !skills.iter().any(|s| s.name == *name) {
            skills.push(TechnicalSkill::new(*name, Proficiency::Intermediate));
        }
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Appends `padding` entries not already present until `found` has `min` items.
fn pad_distinct(mut found: Vec<String>, padding: &[&str], min: usize) -> Vec<String> {
    for candidate in padding {
        if found.len() >= min {
            break;
        }
        if !found.iter().any(|f| f == candidate) {
            found.push(candidate.to_string());
        }
    }
    found
}

fn extract_title(text: &str) -> Option<String> {
    let mut title = TITLE_RE.captures(text).and_then(|caps| {
        caps.iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str().replace('*', "").trim().to_string())
    });

    if let Some(focus) = FOCUS_RE.captures(text).and_then(|c| c.get(1)) {
        title = Some(focus.as_str().replace('*', "").trim().to_string());
    }

    title.filter(|t| !t.is_empty())
}

fn extract_summary(text: &str) -> String {
    strip_bold(paragraphs(text)[0])
}

fn extract_description(text: &str) -> String {
    let paras = paragraphs(text);
    if paras.len() > 1 {
        let end = paras.len().min(3);
        strip_bold(&paras[1..end].join("\n\n"))
    } else {
        String::new()
    }
}

/// Phases introduced by `Phase N: Title` headers, sorted by phase number.
fn extract_phases(text: &str) -> Vec<Phase> {
    let mut phases = Vec::new();
    let mut from = 0;

    while let Some(header) = PHASE_HEADER_RE.captures_at(text, from) {
        let (Some(whole), Some(number), Some(title)) = (header.get(0), header.get(1), header.get(2))
        else {
            break;
        };
        let body_start = whole.end();
        if body_start >= text.len() {
            break;
        }

        // The body holds at least one character before a boundary can end it.
        let search_from = ceil_boundary(text, body_start + 1);
        let body_end = PHASE_BOUNDARY_RE
            .find_at(text, search_from)
            .map(|m| m.start())
            .unwrap_or(text.len());

        let body = text[body_start..body_end].trim();
        phases.push(Phase {
            number: number.as_str().to_string(),
            title: title.as_str().trim().to_string(),
            content: BULLET_RE.replace_all(body, "• ").into_owned(),
        });

        from = body_end;
    }

    phases.sort_by_key(|p| p.number.parse::<u32>().unwrap_or(u32::MAX));
    phases
}

/// Four generic phases built from paragraphs 2–5, used when the narrative has
/// no phase headers. Narratives with fewer than four paragraphs get none.
fn synthesize_phases(text: &str) -> Vec<Phase> {
    let paras = paragraphs(text);
    if paras.len() < SYNTHESIZED_PHASES.len() {
        return Vec::new();
    }

    SYNTHESIZED_PHASES
        .iter()
        .enumerate()
        .map(|(i, (title, default_content))| {
            let content = paras
                .get(i + 1)
                .filter(|p| !p.trim().is_empty())
                .map(|p| p.to_string())
                .unwrap_or_else(|| default_content.to_string());
            Phase {
                number: (i + 1).to_string(),
                title: title.to_string(),
                content,
            }
        })
        .collect()
}

fn match_percentage(text: &str) -> (u8, MatchSource) {
    if let Some(value) = MATCH_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return (value.min(100) as u8, MatchSource::Explicit);
    }

    let hits: usize = POSITIVE_KEYWORDS.iter().map(|kw| count_ci(text, kw)).sum();
    let hits = u32::try_from(hits).unwrap_or(u32::MAX);
    let score = MATCH_BASE
        .saturating_add(MATCH_STEP.saturating_mul(hits))
        .min(MATCH_CAP);
    (score as u8, MatchSource::Heuristic)
}

/// Returns the soft skills and whether enough were found without padding.
fn extract_soft_skills(text: &str) -> (Vec<String>, bool) {
    let found: Vec<String> = SOFT_SKILLS
        .iter()
        .filter(|skill| contains_ci(text, skill))
        .map(|s| s.to_string())
        .collect();

    if found.len() >= MIN_SOFT_SKILLS {
        (found.into_iter().take(MAX_SOFT_SKILLS).collect(), true)
    } else {
        (pad_distinct(found, SOFT_SKILLS, MIN_SOFT_SKILLS), false)
    }
}

/// Development areas named shortly after a development keyword or phrase.
fn extract_development_areas(text: &str) -> (Vec<String>, bool) {
    let mut found: Vec<String> = Vec::new();

    for trigger in DEVELOPMENT_KEYWORDS.iter().chain(DEVELOPMENT_PHRASES) {
        for pos in positions_ci(text, trigger) {
            let end = ceil_boundary(text, pos + DEVELOPMENT_WINDOW);
            let context = &text[pos..end];
            for area in DEVELOPMENT_AREAS {
                if context.contains(area) && !found.iter().any(|f| f == area) {
                    found.push(area.to_string());
                }
            }
        }
    }

    if found.len() >= MIN_DEVELOPMENT_AREAS {
        (
            found.into_iter().take(MAX_DEVELOPMENT_AREAS).collect(),
            true,
        )
    } else {
        (
            pad_distinct(found, PADDING_DEVELOPMENT_AREAS, MIN_DEVELOPMENT_AREAS),
            false,
        )
    }
}

fn extract_demand(text: &str) -> Option<String> {
    DEMAND_PHRASES
        .iter()
        .find(|(phrase, _)| contains_ci(text, phrase))
        .map(|(_, result)| result.to_string())
}

fn extract_salary(text: &str) -> Option<String> {
    SALARY_RE.find(text).map(|m| m.as_str().to_string())
}

fn extract_industries(text: &str) -> Option<Vec<String>> {
    let found: Vec<String> = INDUSTRIES
        .iter()
        .filter(|industry| text.contains(*industry))
        .take(MAX_INDUSTRIES)
        .map(|s| s.to_string())
        .collect();
    (found.len() >= MIN_INDUSTRIES).then_some(found)
}
