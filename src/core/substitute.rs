//! Plain-text placeholder substitution. This is a byte-exact string
//! replace, not a templating-language evaluation: the token must match
//! verbatim, case-sensitively, and nothing outside it is touched.

/// The reserved placeholder embedded in template file names and contents.
pub const PROJECT_NAME_TOKEN: &str = "{{cookiecutter.project_name}}";

/// Replaces every token occurrence inside textual file content.
pub fn substitute_content(content: &str, project_name: &str) -> String {
    content.replace(PROJECT_NAME_TOKEN, project_name)
}

/// Replaces token occurrences inside a single path segment, so
/// `prefix_{{cookiecutter.project_name}}_suffix` becomes
/// `prefix_<name>_suffix`.
pub fn substitute_segment(segment: &str, project_name: &str) -> String {
    segment.replace(PROJECT_NAME_TOKEN, project_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_content_replaces_all_occurrences() {
        let content = format!("# {}\nrun {} now\n", PROJECT_NAME_TOKEN, PROJECT_NAME_TOKEN);
        let out = substitute_content(&content, "demo");
        assert_eq!(out, "# demo\nrun demo now\n");
        assert!(!out.contains(PROJECT_NAME_TOKEN));
    }

    #[test]
    fn test_substitution_is_exact_and_case_sensitive() {
        // A spaced or re-cased variant is a different string and stays put.
        let spaced = "{{ cookiecutter.project_name }}";
        assert_eq!(substitute_content(spaced, "demo"), spaced);

        let recased = "{{Cookiecutter.Project_Name}}";
        assert_eq!(substitute_content(recased, "demo"), recased);
    }

    #[test]
    fn test_substitute_segment_keeps_surrounding_text() {
        let segment = format!("prefix_{}_suffix.py", PROJECT_NAME_TOKEN);
        assert_eq!(
            substitute_segment(&segment, "acme"),
            "prefix_acme_suffix.py"
        );
    }

    #[test]
    fn test_plain_segments_pass_through() {
        assert_eq!(substitute_segment("train.py", "acme"), "train.py");
    }
}
