//! Calendar event endpoints, including the Google Calendar sync screen's
//! backing calls. Conflict resolution happens server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Acknowledgement, ApiClient, ApiError};

/// Kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Exam,
    Assignment,
    Quiz,
    Project,
    StudySession,
    Lecture,
}

/// A study event, either extracted from a note or created manually.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyEvent {
    pub id: String,
    pub user_id: String,
    pub course_id: Option<String>,
    pub source_note_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub event_date: DateTime<Utc>,
    pub google_event_id: Option<String>,
    #[serde(default)]
    pub synced_to_calendar: bool,
    #[serde(default)]
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a manual event.
#[derive(Debug, Serialize)]
pub struct EventCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_type: EventType,
    pub event_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

/// Request body for pushing events to Google Calendar.
#[derive(Debug, Serialize)]
pub struct EventSyncRequest {
    pub event_ids: Vec<String>,
    pub create_study_sessions: bool,
}

impl ApiClient {
    /// Fetch the user's events ordered by date, with optional filters.
    pub async fn list_events(
        &self,
        course_id: Option<&str>,
        synced_only: bool,
        upcoming_only: bool,
    ) -> Result<Vec<StudyEvent>, ApiError> {
        let mut request = self
            .authed(|c, url| c.get(url), "/api/events")?
            .query(&[("synced_only", synced_only), ("upcoming_only", upcoming_only)]);
        if let Some(course_id) = course_id {
            request = request.query(&[("course_id", course_id)]);
        }
        self.send_json(request).await
    }

    pub async fn create_event(&self, event: &EventCreate) -> Result<StudyEvent, ApiError> {
        let request = self
            .authed(|c, url| c.post(url), "/api/events")?
            .json(event);
        self.send_json(request).await
    }

    /// Push the selected events to Google Calendar. Returns the events
    /// that were synced, with their `google_event_id` filled in.
    pub async fn sync_events(&self, sync: &EventSyncRequest) -> Result<Vec<StudyEvent>, ApiError> {
        let request = self
            .authed(|c, url| c.post(url), "/api/events/sync")?
            .json(sync);
        self.send_json(request).await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/events/{event_id}");
        let request = self.authed(|c, url| c.delete(url), &path)?;
        let _: Acknowledgement = self.send_json(request).await?;
        Ok(())
    }
}
