/// Endpoint accepting the multipart upload
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Name of the multipart field carrying the image bytes
pub const UPLOAD_FIELD: &str = "image-file";
