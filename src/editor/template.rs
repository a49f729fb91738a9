//! LaTeX skeletons and the default-template flow.
//!
//! A project with no compiled document yet opens on the default template's
//! content with the `{children}` placeholder swapped for a hint comment;
//! if no template is marked default (or the fetch fails), a built-in
//! skeleton is used instead.

use crate::api::ApiClient;

/// Marks where the document body goes inside a template.
pub(crate) const BODY_PLACEHOLDER: &str = "{children}";

/// What the editor shows in the placeholder's position.
pub(crate) const BODY_HINT: &str = "% ここに本文を入力してください...";

/// Built-in fallback buffer for a fresh project.
pub(crate) const DEFAULT_LATEX: &str = "\\documentclass{article}\n\\usepackage{amsmath}\n\n\\begin{document}\n\n% ここに本文を入力してください...\n\n\\end{document}";

/// Seed content for the template form when creating a new template.
pub(crate) const DEFAULT_TEMPLATE_CONTENT: &str = "\\documentclass{article}\n\\usepackage{amsmath}\n\n\\begin{document}\n\n{children}\n\n\\end{document}";

/// Turn template content into an initial editor buffer. Only the first
/// placeholder is substituted; later occurrences are the author's problem.
pub(crate) fn instantiate_template(content: &str) -> String {
    content.replacen(BODY_PLACEHOLDER, BODY_HINT, 1)
}

/// Form-level checks shared by create and edit. Name first, then the
/// placeholder requirement.
pub(crate) fn validate_template_form(name: &str, content: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("テンプレート名を入力してください".to_string());
    }

    if !content.contains(BODY_PLACEHOLDER) {
        return Err(
            "テンプレートには{children}プレースホルダーが含まれている必要があります".to_string(),
        );
    }

    Ok(())
}

/// Resolve the default template into an editor buffer. Best effort: any
/// miss (no default, fetch error) falls back to the built-in skeleton.
pub(crate) async fn resolve_default_latex(client: &ApiClient) -> String {
    let Ok(templates) = client.list_templates().await else {
        return DEFAULT_LATEX.to_string();
    };

    let Some(default) = templates.iter().find(|t| t.is_default) else {
        return DEFAULT_LATEX.to_string();
    };

    match client.template_detail(&default.id).await {
        Ok(full) => instantiate_template(&full.content),
        Err(_) => DEFAULT_LATEX.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_swaps_placeholder_for_hint() {
        assert_eq!(instantiate_template(DEFAULT_TEMPLATE_CONTENT), DEFAULT_LATEX);
    }

    #[test]
    fn test_instantiate_replaces_first_occurrence_only() {
        let content = "{children} and {children}";
        assert_eq!(
            instantiate_template(content),
            format!("{BODY_HINT} and {{children}}")
        );
    }

    #[test]
    fn test_instantiate_without_placeholder_is_identity() {
        let content = "\\documentclass{article}";
        assert_eq!(instantiate_template(content), content);
    }

    #[test]
    fn test_form_requires_name() {
        let err = validate_template_form("", DEFAULT_TEMPLATE_CONTENT).unwrap_err();
        assert_eq!(err, "テンプレート名を入力してください");

        // Whitespace-only counts as empty.
        let err = validate_template_form("   ", DEFAULT_TEMPLATE_CONTENT).unwrap_err();
        assert_eq!(err, "テンプレート名を入力してください");
    }

    #[test]
    fn test_form_requires_body_placeholder() {
        let err = validate_template_form("標準", "\\documentclass{article}").unwrap_err();
        assert_eq!(
            err,
            "テンプレートには{children}プレースホルダーが含まれている必要があります"
        );
    }

    #[test]
    fn test_form_accepts_valid_input() {
        assert!(validate_template_form("標準", DEFAULT_TEMPLATE_CONTENT).is_ok());
    }
}
