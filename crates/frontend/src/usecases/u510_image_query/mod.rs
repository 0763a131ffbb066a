//! u510 Image Query UI Module
//!
//! Structure:
//! - api.rs: multipart upload and response parsing
//! - view_model.rs: ViewState, request sequencing, ImageQueryVm
//! - layout.rs: pure ViewState -> ScreenPlan mapping
//! - preview.rs: object URL guard for the local preview
//! - view.rs: ImageQueryPage component

mod api;
mod layout;
mod preview;
mod view;
mod view_model;

pub use view::ImageQueryPage;
pub use view_model::{ImageQueryVm, ViewState};
