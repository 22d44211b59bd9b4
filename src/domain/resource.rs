//! Resource (staff member) model and display helpers.

use serde::{Deserialize, Serialize};

/// Match score at or above this value counts as an exact match;
/// anything below is shown as an AI recommendation.
///
/// This is client-side policy, overridable via `[settings.gui]`.
pub const EXACT_MATCH_THRESHOLD: f32 = 0.75;

/// A staff member as reported by the backend.
///
/// `match_score` and `recommendation_reason` are only present on results
/// coming from the `/search` and `/recommend` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub title: String,
    pub experience_years: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub availability: String,
    /// Current workload as a percentage of capacity (0-100).
    pub current_workload: f32,
    pub max_capacity: f32,
    pub location: String,
    pub expertise_level: String,
    pub projects_completed: u32,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub teams_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_reason: Option<String>,
}

impl Resource {
    /// Initials for the avatar badge ("Jane Q. Doe" -> "JQD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn availability_status(&self) -> Availability {
        match self.availability.to_lowercase().as_str() {
            "available" => Availability::Available,
            "busy" => Availability::Busy,
            _ => Availability::Other,
        }
    }

    pub fn workload_band(&self) -> WorkloadBand {
        WorkloadBand::for_percent(self.current_workload)
    }

    /// True when the match score clears the exact-match threshold.
    pub fn is_exact_match(&self, threshold: f32) -> bool {
        self.match_score.is_some_and(|score| score >= threshold)
    }

    /// Match score as a whole percentage for display, if present.
    pub fn match_percent(&self) -> Option<u32> {
        self.match_score.map(|score| (score * 100.0).round() as u32)
    }

    /// Case-insensitive fuzzy match against the skill list.
    ///
    /// Exact substring matches count; otherwise a Jaro-Winkler score above
    /// 0.85 against any single skill counts. Handles dictated queries like
    /// "react js" matching "ReactJS".
    pub fn has_skill(&self, wanted: &str) -> bool {
        let wanted = wanted.trim().to_lowercase();
        if wanted.is_empty() {
            return true;
        }
        self.skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            skill.contains(&wanted) || strsim::jaro_winkler(&skill, &wanted) > 0.85
        })
    }

    /// Recommendation reasons split into display bullets.
    ///
    /// The backend sends one string with `•` separators.
    pub fn recommendation_bullets(&self) -> Vec<String> {
        self.recommendation_reason
            .as_deref()
            .unwrap_or_default()
            .split('•')
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Coarse availability for status chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
    Other,
}

/// Workload coloring bands used by cards and the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadBand {
    /// Under 50% - comfortable
    Light,
    /// 50-79% - getting full
    Moderate,
    /// 80% and above - overloaded
    Heavy,
}

impl WorkloadBand {
    pub fn for_percent(percent: f32) -> Self {
        if percent < 50.0 {
            WorkloadBand::Light
        } else if percent < 80.0 {
            WorkloadBand::Moderate
        } else {
            WorkloadBand::Heavy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(skills: &[&str]) -> Resource {
        Resource {
            id: 1,
            name: "Jane Q. Doe".to_string(),
            email: "jane@example.com".to_string(),
            department: "Engineering".to_string(),
            title: "Senior Developer".to_string(),
            experience_years: 8,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability: "Available".to_string(),
            current_workload: 40.0,
            max_capacity: 100.0,
            location: "Pune".to_string(),
            expertise_level: "senior".to_string(),
            projects_completed: 21,
            specializations: vec![],
            teams_id: String::new(),
            match_score: None,
            recommendation_reason: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(resource(&[]).initials(), "JQD");
    }

    #[test]
    fn test_workload_bands() {
        assert_eq!(WorkloadBand::for_percent(0.0), WorkloadBand::Light);
        assert_eq!(WorkloadBand::for_percent(49.9), WorkloadBand::Light);
        assert_eq!(WorkloadBand::for_percent(50.0), WorkloadBand::Moderate);
        assert_eq!(WorkloadBand::for_percent(80.0), WorkloadBand::Heavy);
    }

    #[test]
    fn test_fuzzy_skill_match() {
        let r = resource(&["ReactJS", "Python", "PostgreSQL"]);
        assert!(r.has_skill("react"));
        assert!(r.has_skill("react js"));
        assert!(r.has_skill("postgres"));
        assert!(!r.has_skill("cobol"));
    }

    #[test]
    fn test_exact_match_threshold() {
        let mut r = resource(&[]);
        r.match_score = Some(0.75);
        assert!(r.is_exact_match(EXACT_MATCH_THRESHOLD));
        r.match_score = Some(0.74);
        assert!(!r.is_exact_match(EXACT_MATCH_THRESHOLD));
        r.match_score = None;
        assert!(!r.is_exact_match(EXACT_MATCH_THRESHOLD));
    }

    #[test]
    fn test_recommendation_bullets() {
        let mut r = resource(&[]);
        r.recommendation_reason =
            Some("• 8 years of experience • Low current workload • Similar stack".to_string());
        assert_eq!(
            r.recommendation_bullets(),
            vec![
                "8 years of experience",
                "Low current workload",
                "Similar stack"
            ]
        );
    }
}
