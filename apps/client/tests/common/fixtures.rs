//! JSON fixtures matching the backend's response shapes.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

/// A due card (no `next_review` yet).
pub fn card(front: &str, back: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "note_id": Uuid::new_v4().to_string(),
        "front": front,
        "back": back,
        "difficulty": "medium",
        "times_reviewed": 0,
        "times_correct": 0,
        "last_reviewed": null,
        "next_review": null,
        "created_at": Utc::now().to_rfc3339(),
    })
}

/// A processed note summary row.
pub fn note(title: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "user_id": Uuid::new_v4().to_string(),
        "title": title,
        "course_id": null,
        "original_filename": null,
        "status": "completed",
        "error_message": null,
        "uploaded_at": Utc::now().to_rfc3339(),
        "processed_at": Utc::now().to_rfc3339(),
    })
}
