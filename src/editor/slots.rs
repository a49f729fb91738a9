//! Per-document-type tracking of the latest compiled document.
//!
//! The backend versions documents server-side; a compile answers with a
//! fresh id at `version = max + 1`. The client keeps exactly one slot per
//! type (latest id + preview URL), never a history.

use crate::models::{DocumentType, ProjectDetail};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DocumentSlot {
    pub document_id: String,
    /// Already normalized against the API base URL.
    pub pdf_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DocumentSlots {
    problem: Option<DocumentSlot>,
    explanation: Option<DocumentSlot>,
}

impl DocumentSlots {
    /// Seed both slots from a fetched project detail. `normalize` maps a
    /// backend-relative PDF reference to an absolute one.
    pub fn from_detail(detail: &ProjectDetail, normalize: impl Fn(&str) -> Option<String>) -> Self {
        let mut slots = Self::default();
        for doc_type in [DocumentType::Problem, DocumentType::Explanation] {
            if let Some(doc) = detail.latest_document(doc_type) {
                slots.record(
                    doc_type,
                    doc.id.clone(),
                    doc.pdf_url.as_deref().and_then(&normalize),
                );
            }
        }
        slots
    }

    /// Overwrite the slot with a newer document. Compiling twice leaves one
    /// entry, holding whatever id the backend answered with last.
    pub fn record(&mut self, doc_type: DocumentType, document_id: String, pdf_url: Option<String>) {
        *self.slot_mut(doc_type) = Some(DocumentSlot {
            document_id,
            pdf_url,
        });
    }

    pub fn document_id(&self, doc_type: DocumentType) -> Option<&str> {
        self.slot(doc_type).map(|s| s.document_id.as_str())
    }

    pub fn pdf_url(&self, doc_type: DocumentType) -> Option<&str> {
        self.slot(doc_type).and_then(|s| s.pdf_url.as_deref())
    }

    fn slot(&self, doc_type: DocumentType) -> Option<&DocumentSlot> {
        match doc_type {
            DocumentType::Problem => self.problem.as_ref(),
            DocumentType::Explanation => self.explanation.as_ref(),
        }
    }

    fn slot_mut(&mut self, doc_type: DocumentType) -> &mut Option<DocumentSlot> {
        match doc_type {
            DocumentType::Problem => &mut self.problem,
            DocumentType::Explanation => &mut self.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_json(latex_doc: &str, explanation_doc: &str) -> ProjectDetail {
        let json = format!(
            r#"{{
                "id": "p-1",
                "title": "二次関数",
                "created_at": "2025-03-01T00:00:00Z",
                "updated_at": "2025-03-02T00:00:00Z",
                "latest_latex_document": {latex_doc},
                "latest_explanation_document": {explanation_doc}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_second_compile_replaces_slot() {
        let mut slots = DocumentSlots::default();

        slots.record(
            DocumentType::Problem,
            "doc-v1".to_string(),
            Some("http://api/media/v1.pdf".to_string()),
        );
        slots.record(
            DocumentType::Problem,
            "doc-v2".to_string(),
            Some("http://api/media/v2.pdf".to_string()),
        );

        assert_eq!(slots.document_id(DocumentType::Problem), Some("doc-v2"));
        assert_eq!(
            slots.pdf_url(DocumentType::Problem),
            Some("http://api/media/v2.pdf")
        );
    }

    #[test]
    fn test_slots_are_independent_per_type() {
        let mut slots = DocumentSlots::default();
        slots.record(DocumentType::Problem, "prob-1".to_string(), None);
        slots.record(DocumentType::Explanation, "expl-1".to_string(), None);

        slots.record(DocumentType::Problem, "prob-2".to_string(), None);

        assert_eq!(slots.document_id(DocumentType::Problem), Some("prob-2"));
        assert_eq!(slots.document_id(DocumentType::Explanation), Some("expl-1"));
    }

    #[test]
    fn test_seed_from_detail_normalizes_pdf_urls() {
        let detail = detail_json(
            r#"{"id": "doc-1", "latex_code": "x", "pdf_url": "/media/a.pdf", "version": 2, "created_at": "2025-03-02T00:00:00Z"}"#,
            "null",
        );

        let slots = DocumentSlots::from_detail(&detail, |url| {
            crate::util::normalize_backend_url(url, "http://api.example.com")
        });

        assert_eq!(slots.document_id(DocumentType::Problem), Some("doc-1"));
        assert_eq!(
            slots.pdf_url(DocumentType::Problem),
            Some("http://api.example.com/media/a.pdf")
        );
        assert_eq!(slots.document_id(DocumentType::Explanation), None);
    }
}
