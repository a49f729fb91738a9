use serde::{Deserialize, Serialize};

/// Session identity as returned by `/api/auth/user/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Project list/trash row. Mutation responses reuse the same shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Project {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One compiled LaTeX document (problem or explanation side).
///
/// `pdf_url` is backend-relative or absolute; normalize before handing it
/// to the preview pane.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct LatexDocumentInfo {
    pub id: String,
    pub latex_code: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub version: i32,
    #[serde(default)]
    pub is_confirmed: bool,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub solution_notes: Option<String>,
    #[serde(default)]
    pub latest_latex_document: Option<LatexDocumentInfo>,
    #[serde(default)]
    pub latest_explanation_document: Option<LatexDocumentInfo>,
}

/// Template list row. The list endpoint omits `content`; fetch the detail
/// before editing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Template {
    pub id: String,
    pub name: String,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct TemplateDetail {
    pub id: String,
    pub name: String,
    pub content: String,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Which document slot an editor buffer or compile call targets.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum DocumentType {
    Problem,
    Explanation,
}

/// Project list rendering preference, persisted locally.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ViewMode {
    Grid,
    List,
}

impl ProjectDetail {
    /// Latest document for one slot, if the backend has one.
    pub(crate) fn latest_document(&self, doc_type: DocumentType) -> Option<&LatexDocumentInfo> {
        match doc_type {
            DocumentType::Problem => self.latest_latex_document.as_ref(),
            DocumentType::Explanation => self.latest_explanation_document.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_detail_deserialize_with_null_documents() {
        let json = r#"{
            "id": "4b8c2f1e-8a6d-4f3b-9c2e-0d1a2b3c4d5e",
            "title": "Algebra 1",
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-01-10T09:00:00Z",
            "image_url": null,
            "solution_notes": null,
            "latest_latex_document": null,
            "latest_explanation_document": null
        }"#;

        let detail: ProjectDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Algebra 1");
        assert!(detail.latest_latex_document.is_none());
        assert!(detail.latest_document(DocumentType::Problem).is_none());
        assert!(detail.latest_document(DocumentType::Explanation).is_none());
    }

    #[test]
    fn test_project_detail_per_type_documents() {
        let json = r#"{
            "id": "4b8c2f1e-8a6d-4f3b-9c2e-0d1a2b3c4d5e",
            "title": "Geometry",
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-02-01T10:30:00Z",
            "image_url": "/media/problems/geo.png",
            "solution_notes": "相似を使う",
            "latest_latex_document": {
                "id": "doc-1",
                "latex_code": "\\documentclass{article}",
                "pdf_url": "/media/pdfs/geo-v3.pdf",
                "version": 3,
                "is_confirmed": true,
                "created_at": "2025-02-01T10:30:00Z"
            },
            "latest_explanation_document": null
        }"#;

        let detail: ProjectDetail = serde_json::from_str(json).unwrap();
        let doc = detail.latest_document(DocumentType::Problem).unwrap();
        assert_eq!(doc.version, 3);
        assert!(doc.is_confirmed);
        assert_eq!(doc.pdf_url.as_deref(), Some("/media/pdfs/geo-v3.pdf"));
        assert!(detail.latest_document(DocumentType::Explanation).is_none());
    }

    #[test]
    fn test_template_list_row_contract_deserialize() {
        let json = r#"{
            "id": "tpl-1",
            "name": "標準テンプレート",
            "is_default": true,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;

        let tpl: Template = serde_json::from_str(json).unwrap();
        assert!(tpl.is_default);
        assert_eq!(tpl.name, "標準テンプレート");
    }

    #[test]
    fn test_document_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&DocumentType::Problem).unwrap(),
            "\"problem\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::Explanation).unwrap(),
            "\"explanation\""
        );
        assert_eq!(DocumentType::Problem.to_string(), "problem");
    }
}
