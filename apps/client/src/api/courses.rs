//! Course endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Acknowledgement, ApiClient, ApiError};

/// A course grouping notes and events.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub notes_count: u32,
}

/// Request body for creating a course.
#[derive(Debug, Serialize)]
pub struct CourseCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial update for a course; unset fields are left unchanged.
#[derive(Debug, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ApiClient {
    /// Fetch all courses with their note counts.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let request = self.authed(|c, url| c.get(url), "/api/courses")?;
        self.send_json(request).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, ApiError> {
        let path = format!("/api/courses/{course_id}");
        let request = self.authed(|c, url| c.get(url), &path)?;
        self.send_json(request).await
    }

    pub async fn create_course(&self, course: &CourseCreate) -> Result<Course, ApiError> {
        let request = self
            .authed(|c, url| c.post(url), "/api/courses")?
            .json(course);
        self.send_json(request).await
    }

    pub async fn update_course(
        &self,
        course_id: &str,
        update: &CourseUpdate,
    ) -> Result<Course, ApiError> {
        let path = format!("/api/courses/{course_id}");
        let request = self.authed(|c, url| c.patch(url), &path)?.json(update);
        self.send_json(request).await
    }

    /// Delete a course and all its notes.
    pub async fn delete_course(&self, course_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/courses/{course_id}");
        let request = self.authed(|c, url| c.delete(url), &path)?;
        let _: Acknowledgement = self.send_json(request).await?;
        Ok(())
    }
}
