//! Uploaded third-party test reports for the comprehensive pathway.
//!
//! Content arrives either as extracted plain text or as a base64 data URI
//! (image or PDF) passed through to the chat API for OCR-style reading.

use serde::{Deserialize, Serialize};

/// The four supported third-party assessment frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestKind {
    Big5,
    MultipleIntelligence,
    Riasec,
    CliftonStrengths,
}

impl TestKind {
    /// All kinds in upload order.
    pub const ALL: [TestKind; 4] = [
        TestKind::Big5,
        TestKind::MultipleIntelligence,
        TestKind::Riasec,
        TestKind::CliftonStrengths,
    ];

    /// Heading used when embedding this test's results in a prompt.
    pub fn prompt_heading(&self) -> &'static str {
        match self {
            Self::Big5 => "Big Five Personality Test Results",
            Self::MultipleIntelligence => "Multiple Intelligence Test Results",
            Self::Riasec => "RIASEC Career Interest Test Results",
            Self::CliftonStrengths => "CliftonStrengths Assessment Results",
        }
    }
}

/// The content of one uploaded test report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TestContent {
    /// Text extracted client-side from the uploaded file.
    PlainText(String),
    /// Base64 `data:image/...` URI.
    ImageData(String),
    /// Base64 `data:application/pdf` URI.
    PdfData(String),
}

impl TestContent {
    /// Classifies raw uploaded content by its data-URI prefix.
    pub fn from_raw(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.starts_with("data:image/") {
            Self::ImageData(content)
        } else if content.starts_with("data:application/pdf") {
            Self::PdfData(content)
        } else {
            Self::PlainText(content)
        }
    }

    /// How this content appears in a prompt. Attachments get a bracketed
    /// label asking the model to read the embedded document.
    pub fn prompt_text(&self, kind: TestKind) -> String {
        match self {
            Self::PlainText(text) => text.clone(),
            Self::ImageData(data) => format!(
                "[IMAGE DATA: {} provided as image. Please analyze the personality test results shown in this image.]\n{}",
                kind.prompt_heading(),
                data
            ),
            Self::PdfData(data) => format!(
                "[PDF DATA: {} provided as PDF document. Please analyze the personality test results in this PDF.]\n{}",
                kind.prompt_heading(),
                data
            ),
        }
    }
}

/// A single uploaded test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedTest {
    pub kind: TestKind,
    pub content: TestContent,
}

impl UploadedTest {
    pub fn new(kind: TestKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: TestContent::from_raw(content),
        }
    }
}

/// The set of tests uploaded in the comprehensive pathway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedTests {
    tests: Vec<UploadedTest>,
}

impl UploadedTests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the upload for a test kind.
    pub fn insert(&mut self, test: UploadedTest) {
        self.tests.retain(|t| t.kind != test.kind);
        self.tests.push(test);
    }

    /// Uploads in the canonical framework order.
    pub fn iter(&self) -> impl Iterator<Item = &UploadedTest> {
        TestKind::ALL
            .iter()
            .filter_map(|kind| self.tests.iter().find(|t| t.kind == *kind))
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_content_by_data_uri_prefix() {
        assert!(matches!(
            TestContent::from_raw("data:image/png;base64,AAAA"),
            TestContent::ImageData(_)
        ));
        assert!(matches!(
            TestContent::from_raw("data:application/pdf;base64,AAAA"),
            TestContent::PdfData(_)
        ));
        assert!(matches!(
            TestContent::from_raw("Openness: 82nd percentile"),
            TestContent::PlainText(_)
        ));
    }

    #[test]
    fn image_prompt_text_is_labelled() {
        let content = TestContent::from_raw("data:image/png;base64,AAAA");
        let text = content.prompt_text(TestKind::Riasec);
        assert!(text.starts_with("[IMAGE DATA: RIASEC Career Interest Test Results"));
        assert!(text.ends_with("data:image/png;base64,AAAA"));
    }

    #[test]
    fn insert_replaces_same_kind() {
        let mut tests = UploadedTests::new();
        tests.insert(UploadedTest::new(TestKind::Big5, "first"));
        tests.insert(UploadedTest::new(TestKind::Big5, "second"));

        assert_eq!(tests.len(), 1);
        let only = tests.iter().next().unwrap();
        assert_eq!(only.content, TestContent::PlainText("second".to_string()));
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let mut tests = UploadedTests::new();
        tests.insert(UploadedTest::new(TestKind::CliftonStrengths, "cs"));
        tests.insert(UploadedTest::new(TestKind::Big5, "b5"));

        let kinds: Vec<TestKind> = tests.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TestKind::Big5, TestKind::CliftonStrengths]);
    }
}
