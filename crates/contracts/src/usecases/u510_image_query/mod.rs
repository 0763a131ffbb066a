//! u510: query similar photos by uploading an image.
//!
//! The client posts one file as multipart form data to [`UPLOAD_ENDPOINT`];
//! the server answers with the detected classes and the IDs of similar
//! photos, which are then loaded from the static photo folder.

pub mod request;
pub mod response;

pub use request::{UPLOAD_ENDPOINT, UPLOAD_FIELD};
pub use response::{AnalysisResult, ErrorBody, ImageId, DEFAULT_SERVER_ERROR};

use crate::usecases::common::UseCaseMetadata;

/// URL prefix under which the server exposes the photo collection
pub const SIMILAR_PHOTO_PATH_PREFIX: &str = "/static/Photos/";

/// File extension of every photo in the collection
pub const SIMILAR_PHOTO_EXTENSION: &str = "jpg";

/// Static asset URL of a similar photo, e.g. `/static/Photos/12.jpg`
pub fn similar_photo_url(id: &ImageId) -> String {
    format!(
        "{}{}.{}",
        SIMILAR_PHOTO_PATH_PREFIX,
        id.as_str(),
        SIMILAR_PHOTO_EXTENSION
    )
}

pub struct ImageQuery;

impl UseCaseMetadata for ImageQuery {
    fn usecase_index() -> &'static str {
        "u510"
    }

    fn usecase_name() -> &'static str {
        "image_query"
    }

    fn display_name() -> &'static str {
        "Image Query"
    }

    fn description() -> &'static str {
        "Detect objects in an uploaded image and find visually similar photos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_photo_url() {
        assert_eq!(
            similar_photo_url(&ImageId::from("12")),
            "/static/Photos/12.jpg"
        );
        assert_eq!(
            similar_photo_url(&ImageId::from("000a1b")),
            "/static/Photos/000a1b.jpg"
        );
    }

    #[test]
    fn test_metadata() {
        assert_eq!(ImageQuery::full_name(), "u510_image_query");
        assert_eq!(ImageQuery::display_name(), "Image Query");
        assert!(!ImageQuery::description().is_empty());
    }
}
