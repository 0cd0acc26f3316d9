//! Default company presets.
//!
//! Provides the seed companies a fresh installation starts with, so the
//! product is usable before an administrator configures anything.

use super::model::Company;
use crate::workflow::{InterviewRound, RoundConfig, RoundType};

/// Returns the seed company configurations for a fresh registry.
///
/// Two sample companies with contrasting workflows:
/// - **Google**: the full four-round marathon (resume, aptitude, coding, HR)
/// - **Microsoft**: a two-round technical screen (aptitude, coding)
pub fn default_companies() -> Vec<Company> {
    vec![
        Company {
            id: "1".to_string(),
            name: "Google".to_string(),
            logo: "https://logo.clearbit.com/google.com".to_string(),
            description: "Search and Cloud computing leader.".to_string(),
            target_role: "Frontend Architect".to_string(),
            workflow: vec![
                InterviewRound {
                    id: "r1".to_string(),
                    round_type: RoundType::Resume,
                    duration: 5,
                    cutoff: None,
                    config: None,
                },
                InterviewRound {
                    id: "r2".to_string(),
                    round_type: RoundType::Aptitude,
                    duration: 30,
                    cutoff: Some(70),
                    config: Some(RoundConfig {
                        topics: vec!["Logical Reasoning".to_string()],
                        question_count: Some(10),
                    }),
                },
                InterviewRound {
                    id: "r3".to_string(),
                    round_type: RoundType::Coding,
                    duration: 60,
                    cutoff: Some(60),
                    config: Some(RoundConfig {
                        topics: vec![],
                        question_count: Some(2),
                    }),
                },
                InterviewRound {
                    id: "r4".to_string(),
                    round_type: RoundType::Hr,
                    duration: 20,
                    cutoff: None,
                    config: None,
                },
            ],
        },
        Company {
            id: "2".to_string(),
            name: "Microsoft".to_string(),
            logo: "https://logo.clearbit.com/microsoft.com".to_string(),
            description: "Software, services, and hardware giant.".to_string(),
            target_role: "Fullstack Engineer".to_string(),
            workflow: vec![
                InterviewRound {
                    id: "r5".to_string(),
                    round_type: RoundType::Aptitude,
                    duration: 45,
                    cutoff: Some(75),
                    config: Some(RoundConfig {
                        topics: vec!["Quant".to_string()],
                        question_count: Some(15),
                    }),
                },
                InterviewRound {
                    id: "r6".to_string(),
                    round_type: RoundType::Coding,
                    duration: 90,
                    cutoff: Some(70),
                    config: Some(RoundConfig {
                        topics: vec![],
                        question_count: Some(3),
                    }),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_unique_ids_and_rounds() {
        let companies = default_companies();
        assert_eq!(companies.len(), 2);
        assert_ne!(companies[0].id, companies[1].id);
        for company in &companies {
            assert!(!company.workflow.is_empty());
        }
    }

    #[test]
    fn test_preset_round_lookup() {
        let companies = default_companies();
        let google = &companies[0];
        assert_eq!(google.workflow_len(), 4);
        assert_eq!(google.round_at(1).unwrap().round_type, RoundType::Aptitude);
        assert!(google.round_at(4).is_none());
    }
}
