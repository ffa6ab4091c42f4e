//! Response sanitation for model output that should be bare JSON but often
//! arrives wrapped in code fences or surrounded by prose.

/// Extracts the substring from the first `{` through the last `}` inclusive.
///
/// This is a heuristic, not a parser: it assumes the only braces in the text
/// belong to the intended JSON object. If either delimiter is absent (or they
/// are out of order) the input is returned unchanged.
pub fn clean_json(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_json_extracts_object_from_prose() {
        let input = "Sure! Here is your analysis: {\"matchPercentage\":80} Hope that helps.";
        assert_eq!(clean_json(input), "{\"matchPercentage\":80}");
    }

    #[test]
    fn test_clean_json_no_braces_returns_input() {
        let input = "no braces here";
        assert_eq!(clean_json(input), input);
    }

    #[test]
    fn test_clean_json_only_open_brace_returns_input() {
        let input = "dangling { text";
        assert_eq!(clean_json(input), input);
    }

    #[test]
    fn test_clean_json_reversed_delimiters_returns_input() {
        let input = "} backwards {";
        assert_eq!(clean_json(input), input);
    }

    #[test]
    fn test_clean_json_is_idempotent() {
        let input = "noise {\"a\":1,\"b\":{\"c\":2}} trailing";
        let once = clean_json(input);
        assert_eq!(clean_json(once), once);
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_json_fences(input), "{\"a\":1}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"a\":1}\n```";
        assert_eq!(strip_json_fences(input), "{\"a\":1}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"a\":1}";
        assert_eq!(strip_json_fences(input), "{\"a\":1}");
    }

    #[test]
    fn test_fenced_output_cleans_to_bare_object() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(clean_json(strip_json_fences(input)), "{\"a\":1}");
    }
}
