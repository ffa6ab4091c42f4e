// Prompt constants for the screening analysis call.
// The field list below is an external contract: the handler deserializes
// exactly these six fields out of the model's reply.

/// Analysis prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze the following resume against the job description. \
Crucially, return ONLY a valid JSON object. Do not include any markdown formatting like ```json, any preamble, or any conversational text. \
The JSON must have these exact fields: \
\"matchPercentage\" (number), \
\"matchedSkills\" (string - provide a comma-separated list of technical/soft skills matched), \
\"missingSkills\" (string - provide a comma-separated list of critical missing skills), \
\"improvementSuggestions\" (string - actionable advice), \
\"learningResources\" (string - provide a structured career roadmap with course names and their direct clickable URLs like https://coursera.org/... ), \
\"status\" (one of: Recommended, Under Review, Not Matching).\n\n\
RESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{job_description}";

/// Renders the fixed analysis prompt with both inputs embedded verbatim.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_inputs_verbatim() {
        let resume = "Senior Rust engineer, 7 years of distributed systems.";
        let jd = "We need a backend engineer with Rust and PostgreSQL.";
        let prompt = build_prompt(resume, jd);
        assert!(prompt.contains(resume));
        assert!(prompt.contains(jd));
    }

    #[test]
    fn test_build_prompt_names_all_six_fields() {
        let prompt = build_prompt("resume", "jd");
        for field in [
            "matchPercentage",
            "matchedSkills",
            "missingSkills",
            "improvementSuggestions",
            "learningResources",
            "status",
        ] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
    }

    #[test]
    fn test_build_prompt_demands_raw_json() {
        let prompt = build_prompt("resume", "jd");
        assert!(prompt.contains("ONLY a valid JSON object"));
        assert!(prompt.contains("Recommended, Under Review, Not Matching"));
    }
}
