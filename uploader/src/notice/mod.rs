//! User-facing notifications (toasts).
//!
//! Every outcome the user must hear about is built here so the wording
//! stays in one place. The frontend only renders them.

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, StorageError};

/// Visual variant of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Default,
    Destructive,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Default => "toast-default",
            NoticeKind::Destructive => "toast-destructive",
        }
    }
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

/// Fallback when the backend error carries no message.
pub const GENERIC_UPLOAD_FAILURE: &str = "이미지 업로드 중 오류가 발생했습니다";

impl Notice {
    fn new(kind: NoticeKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn invalid_type() -> Self {
        Self::new(
            NoticeKind::Destructive,
            "❌ 파일 형식 오류",
            "JPG, JPEG, PNG 형식의 이미지만 업로드 가능합니다.",
        )
    }

    pub fn too_large() -> Self {
        Self::new(
            NoticeKind::Destructive,
            "❌ 파일 크기 초과",
            "파일 크기는 10MB를 초과할 수 없습니다.",
        )
    }

    pub fn nothing_selected() -> Self {
        Self::new(
            NoticeKind::Destructive,
            "선택된 파일 없음",
            "업로드할 이미지를 선택해주세요",
        )
    }

    pub fn upload_success(count: usize) -> Self {
        Self::new(
            NoticeKind::Default,
            "✅ 업로드 성공",
            format!("{}개의 이미지가 성공적으로 업로드되었습니다", count),
        )
    }

    /// Failure notice carrying the message, or the generic fallback when
    /// the message is blank.
    pub fn upload_failure(message: &str) -> Self {
        let description = if message.trim().is_empty() {
            GENERIC_UPLOAD_FAILURE.to_string()
        } else {
            message.to_string()
        };
        Self::new(NoticeKind::Destructive, "❌ 업로드 실패", description)
    }

    pub fn link_copied() -> Self {
        Self::new(
            NoticeKind::Default,
            "📋 클립보드에 복사됨",
            "링크가 클립보드에 복사되었습니다",
        )
    }

    pub fn all_links_copied() -> Self {
        Self::new(
            NoticeKind::Default,
            "📋 모든 링크 복사됨",
            "모든 링크가 클립보드에 복사되었습니다",
        )
    }
}

impl From<&IntakeError> for Notice {
    fn from(err: &IntakeError) -> Self {
        match err {
            IntakeError::UnsupportedType { .. } => Notice::invalid_type(),
            IntakeError::TooLarge { .. } => Notice::too_large(),
        }
    }
}

impl From<&StorageError> for Notice {
    fn from(err: &StorageError) -> Self {
        Notice::upload_failure(&err.to_string())
    }
}
