//! Note endpoints: listing, detail, creation from text, deletion,
//! reprocessing. Upload and AI processing happen server-side; the
//! client only polls the note's status.

use chrono::{DateTime, Utc};
use review_core::Flashcard;
use serde::{Deserialize, Serialize};

use super::events::StudyEvent;
use super::{Acknowledgement, ApiClient, ApiError};

/// Processing status of an uploaded note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Kind of generated study question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Recall,
    Conceptual,
    Application,
}

/// Note summary row as shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub course_id: Option<String>,
    pub original_filename: Option<String>,
    pub status: NoteStatus,
    pub error_message: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

/// AI-generated study question attached to a note.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyQuestion {
    pub id: String,
    pub note_id: String,
    pub question: String,
    pub suggested_answer: Option<String>,
    pub question_type: QuestionType,
    pub created_at: DateTime<Utc>,
}

/// Full note detail, including everything generated from it.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteDetail {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub course_id: Option<String>,
    pub original_filename: Option<String>,
    pub original_content: Option<String>,
    pub processed_summary: Option<String>,
    #[serde(default)]
    pub key_concepts: Option<Vec<String>>,
    #[serde(default)]
    pub knowledge_gaps: Option<Vec<String>>,
    pub status: NoteStatus,
    pub error_message: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub study_questions: Vec<StudyQuestion>,
    #[serde(default)]
    pub extracted_events: Vec<StudyEvent>,
}

/// Request body for creating a note from raw text.
#[derive(Debug, Serialize)]
pub struct NoteCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub content: String,
}

impl ApiClient {
    /// Fetch the user's notes, newest first, optionally scoped to one
    /// course.
    pub async fn list_notes(&self, course_id: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let mut request = self.authed(|c, url| c.get(url), "/api/notes")?;
        if let Some(course_id) = course_id {
            request = request.query(&[("course_id", course_id)]);
        }
        self.send_json(request).await
    }

    /// Fetch one note with its generated flashcards, questions, and
    /// extracted events.
    pub async fn get_note(&self, note_id: &str) -> Result<NoteDetail, ApiError> {
        let path = format!("/api/notes/{note_id}");
        let request = self.authed(|c, url| c.get(url), &path)?;
        self.send_json(request).await
    }

    /// Create a note from raw text. Returns immediately with status
    /// `processing`; generation runs server-side.
    pub async fn create_note_from_text(&self, note: &NoteCreate) -> Result<Note, ApiError> {
        let request = self
            .authed(|c, url| c.post(url), "/api/notes/text")?
            .json(note);
        self.send_json(request).await
    }

    /// Delete a note and everything generated from it.
    pub async fn delete_note(&self, note_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/notes/{note_id}");
        let request = self.authed(|c, url| c.delete(url), &path)?;
        let _: Acknowledgement = self.send_json(request).await?;
        Ok(())
    }

    /// Ask the backend to reprocess a failed or stale note.
    pub async fn reprocess_note(&self, note_id: &str) -> Result<Note, ApiError> {
        let path = format!("/api/notes/{note_id}/reprocess");
        let request = self.authed(|c, url| c.post(url), &path)?;
        self.send_json(request).await
    }
}
