//! Response schema sent with every analysis request.
//!
//! Uses the provider's OpenAPI-subset type names (`OBJECT`, `STRING`, ...).
//! Property names must stay in sync with [`riskradar_core::AnalysisResult`].

use riskradar_core::RiskLevel;
use serde_json::{Value, json};

pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub fn analysis_response_schema() -> Value {
    let severities: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "risk_score": {
                "type": "INTEGER",
                "description": "0-100 score where 100 is highest risk"
            },
            "risk_rating": {
                "type": "STRING",
                "description": "Low, Medium, High, or Critical"
            },
            "summary": {
                "type": "STRING",
                "description": "A concise 2-sentence executive summary of the contract's safety."
            },
            "red_flags": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "issue": { "type": "STRING" },
                        "law_violated": {
                            "type": "STRING",
                            "description": "Specific act or section violated"
                        },
                        "severity": { "type": "STRING", "enum": severities },
                        "explanation": { "type": "STRING" },
                        "suggested_fix": {
                            "type": "STRING",
                            "description": "Specific legal language to fix the issue"
                        }
                    }
                }
            },
            "compliant_points": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3 good things about the contract"
            },
            "applicable_laws_identified": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of laws that were relevant to this analysis"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_every_result_field() {
        let schema = analysis_response_schema();
        let props = schema["properties"].as_object().unwrap();
        let mut keys: Vec<&str> = props.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "applicable_laws_identified",
                "compliant_points",
                "red_flags",
                "risk_rating",
                "risk_score",
                "summary"
            ]
        );
        assert_eq!(props["risk_score"]["type"], "INTEGER");
    }

    #[test]
    fn severity_enum_matches_scale() {
        let schema = analysis_response_schema();
        let severity = &schema["properties"]["red_flags"]["items"]["properties"]["severity"];
        assert_eq!(severity["enum"], json!(["Low", "Medium", "High", "Critical"]));
    }
}
