//! Response contract — the JSON shape the model is asked to return for a ticket.
//!
//! These types document the contract embedded in the prompt template. Nothing in
//! this crate parses model replies; the caller that invokes the model owns that.

use serde::{Deserialize, Serialize};

/// How sure the model is that a category applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// How practical a suggested automation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    High,
    Medium,
    Low,
}

impl Feasibility {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallFeeling {
    Positive,
    Neutral,
    Negative,
    Frustrated,
    Urgent,
}

impl OverallFeeling {
    pub const ALL: &'static [Self] = &[
        Self::Positive,
        Self::Neutral,
        Self::Negative,
        Self::Frustrated,
        Self::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Frustrated => "frustrated",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// A category the ticket plausibly belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub confidence: Confidence,
    pub reason: String,
}

/// An automation that would help resolve the stated issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationSuggestion {
    pub automation: String,
    pub description: String,
    pub feasibility: Feasibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSentiment {
    pub overall_feeling: OverallFeeling,
    /// Phrases from the ticket that suggest the feeling.
    pub indicators: Vec<String>,
    pub urgency_level: UrgencyLevel,
}

/// Full structured analysis of one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketAnalysis {
    pub summary: String,
    pub possible_categories: Vec<CategorySuggestion>,
    pub possible_automations: Vec<AutomationSuggestion>,
    pub user_sentiment: UserSentiment,
}

impl TicketAnalysis {
    /// Top-level keys, in the order the prompt lists them.
    pub const FIELDS: &'static [&'static str] = &[
        "summary",
        "possible_categories",
        "possible_automations",
        "user_sentiment",
    ];
}

/// Allowed values for every closed-set field, as served to non-Rust callers.
#[derive(Debug, Clone, Serialize)]
pub struct ContractDescription {
    pub fields: &'static [&'static str],
    pub confidence: Vec<&'static str>,
    pub feasibility: Vec<&'static str>,
    pub overall_feeling: Vec<&'static str>,
    pub urgency_level: Vec<&'static str>,
}

pub fn describe_contract() -> ContractDescription {
    ContractDescription {
        fields: TicketAnalysis::FIELDS,
        confidence: Confidence::ALL.iter().map(|c| c.as_str()).collect(),
        feasibility: Feasibility::ALL.iter().map(|f| f.as_str()).collect(),
        overall_feeling: OverallFeeling::ALL.iter().map(|f| f.as_str()).collect(),
        urgency_level: UrgencyLevel::ALL.iter().map(|u| u.as_str()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket_analysis::prompts::TICKET_ANALYSIS_PROMPT_TEMPLATE;

    fn slash_joined(values: &[&str]) -> String {
        values.join("/")
    }

    #[test]
    fn test_template_lists_every_top_level_field() {
        for field in TicketAnalysis::FIELDS {
            let key = format!("\"{field}\":");
            assert!(
                TICKET_ANALYSIS_PROMPT_TEMPLATE.contains(&key),
                "template is missing {key}"
            );
        }
    }

    #[test]
    fn test_template_allowed_values_match_enums() {
        let contract = describe_contract();
        let expectations = [
            ("confidence", slash_joined(&contract.confidence)),
            ("feasibility", slash_joined(&contract.feasibility)),
            ("overall_feeling", slash_joined(&contract.overall_feeling)),
            ("urgency_level", slash_joined(&contract.urgency_level)),
        ];
        for (field, values) in expectations {
            let line = format!("\"{field}\": \"{values}\"");
            assert!(
                TICKET_ANALYSIS_PROMPT_TEMPLATE.contains(&line),
                "template is missing {line}"
            );
        }
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for c in Confidence::ALL {
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
        for f in Feasibility::ALL {
            assert_eq!(serde_json::to_value(f).unwrap(), f.as_str());
        }
        for f in OverallFeeling::ALL {
            assert_eq!(serde_json::to_value(f).unwrap(), f.as_str());
        }
        for u in UrgencyLevel::ALL {
            assert_eq!(serde_json::to_value(u).unwrap(), u.as_str());
        }
    }

    #[test]
    fn test_analysis_serializes_with_contract_keys() {
        let analysis = TicketAnalysis {
            summary: "User cannot log in since yesterday.".to_string(),
            possible_categories: vec![CategorySuggestion {
                category: "Authentication".to_string(),
                confidence: Confidence::High,
                reason: "Login failure is stated".to_string(),
            }],
            possible_automations: vec![AutomationSuggestion {
                automation: "Password reset link".to_string(),
                description: "Send a reset link on login failure tickets".to_string(),
                feasibility: Feasibility::Medium,
            }],
            user_sentiment: UserSentiment {
                overall_feeling: OverallFeeling::Urgent,
                indicators: vec!["please help urgently".to_string()],
                urgency_level: UrgencyLevel::High,
            },
        };

        let value = serde_json::to_value(&analysis).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for field in TicketAnalysis::FIELDS {
            assert!(keys.contains(field));
        }
        assert_eq!(value["possible_categories"][0]["confidence"], "high");
        assert_eq!(value["user_sentiment"]["overall_feeling"], "urgent");
        assert_eq!(value["user_sentiment"]["urgency_level"], "high");
    }
}
