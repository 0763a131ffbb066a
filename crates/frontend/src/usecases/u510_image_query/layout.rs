//! Pure mapping from [`ViewState`] to what the result area shows.
//!
//! The component only walks the plan; every decision about which panels,
//! badges, thumbnails and notices appear is made here.

use super::view_model::ViewState;
use crate::shared::components::Severity;
use contracts::usecases::u510_image_query::{similar_photo_url, AnalysisResult};

pub const NO_SIMILAR_IMAGES: &str =
    "No similar images found. Possible that model can't detect any objects in your image";

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenPlan {
    Blank,
    Busy,
    Notice(NoticePlan),
    Results(ResultPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticePlan {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPlan {
    pub classes_panel: Option<ClassesPanel>,
    pub gallery: Option<Gallery>,
    pub empty_notice: Option<NoticePlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassesPanel {
    pub stats: Vec<Stat>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: StatValue,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Count(usize),
    /// Rendered as a check mark
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub title: String,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub id: String,
    pub src: String,
    pub caption: String,
    pub alt: String,
}

pub fn plan(state: &ViewState) -> ScreenPlan {
    match state {
        ViewState::Idle => ScreenPlan::Blank,
        ViewState::Busy => ScreenPlan::Busy,
        ViewState::Error(message) => ScreenPlan::Notice(NoticePlan {
            message: message.clone(),
            severity: Severity::Danger,
        }),
        ViewState::Success(result) | ViewState::Empty(result) => {
            ScreenPlan::Results(plan_results(result))
        }
    }
}

fn plan_results(result: &AnalysisResult) -> ResultPlan {
    let classes_panel = result.has_classes().then(|| ClassesPanel {
        stats: vec![
            Stat {
                value: StatValue::Count(result.class_count()),
                label: "Classes",
            },
            Stat {
                value: StatValue::Count(result.similar_count()),
                label: "Similar Images",
            },
            Stat {
                value: StatValue::Complete,
                label: "Analysis Complete",
            },
        ],
        badges: result.detected_classes.clone(),
    });

    let (gallery, empty_notice) = if result.has_similar_images() {
        let thumbnails = result
            .image_ids
            .iter()
            .map(|id| Thumbnail {
                id: id.to_string(),
                src: similar_photo_url(id),
                caption: format!("ID: {}", id),
                alt: format!("Similar image {}", id),
            })
            .collect();
        let gallery = Gallery {
            title: format!("Similar Images ({})", result.similar_count()),
            thumbnails,
        };
        (Some(gallery), None)
    } else {
        let notice = NoticePlan {
            message: NO_SIMILAR_IMAGES.to_string(),
            severity: Severity::Warning,
        };
        (None, Some(notice))
    };

    ResultPlan {
        classes_panel,
        gallery,
        empty_notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u510_image_query::DEFAULT_SERVER_ERROR;

    fn analysed(json: &str) -> ViewState {
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        ViewState::from_analysis(result)
    }

    fn results(state: &ViewState) -> ResultPlan {
        match plan(state) {
            ScreenPlan::Results(r) => r,
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn test_cat_dog_scenario() {
        let state = analysed(r#"{"detected_classes":["cat","dog"],"image_ids":["12","45"]}"#);
        let r = results(&state);

        let panel = r.classes_panel.unwrap();
        assert_eq!(panel.badges, vec!["cat", "dog"]);
        assert_eq!(panel.stats[0].value, StatValue::Count(2));
        assert_eq!(panel.stats[0].label, "Classes");
        assert_eq!(panel.stats[1].value, StatValue::Count(2));
        assert_eq!(panel.stats[1].label, "Similar Images");
        assert_eq!(panel.stats[2].value, StatValue::Complete);

        let gallery = r.gallery.unwrap();
        assert_eq!(gallery.title, "Similar Images (2)");
        let captions: Vec<&str> = gallery.thumbnails.iter().map(|t| t.caption.as_str()).collect();
        assert_eq!(captions, vec!["ID: 12", "ID: 45"]);
        assert_eq!(gallery.thumbnails[0].src, "/static/Photos/12.jpg");
        assert_eq!(gallery.thumbnails[1].src, "/static/Photos/45.jpg");
        assert_eq!(gallery.thumbnails[1].alt, "Similar image 45");
        assert!(r.empty_notice.is_none());
    }

    #[test]
    fn test_nothing_found_scenario() {
        let state = analysed(r#"{"detected_classes":[],"image_ids":[]}"#);
        assert!(matches!(state, ViewState::Empty(_)));

        let r = results(&state);
        assert!(r.classes_panel.is_none());
        assert!(r.gallery.is_none());
        let notice = r.empty_notice.unwrap();
        assert_eq!(notice.severity, Severity::Warning);
        assert!(notice.message.starts_with("No similar images found"));
    }

    #[test]
    fn test_classes_without_images() {
        let r = results(&analysed(r#"{"detected_classes":["person"]}"#));
        let panel = r.classes_panel.unwrap();
        assert_eq!(panel.stats[0].value, StatValue::Count(1));
        assert_eq!(panel.stats[1].value, StatValue::Count(0));
        assert!(r.gallery.is_none());
        assert!(r.empty_notice.is_some());
    }

    #[test]
    fn test_thumbnail_count_matches_ids() {
        let r = results(&analysed(r#"{"image_ids":[1,2,3,4,5]}"#));
        assert!(r.classes_panel.is_none());
        let gallery = r.gallery.unwrap();
        assert_eq!(gallery.thumbnails.len(), 5);
        assert_eq!(gallery.thumbnails[4].caption, "ID: 5");
        assert_eq!(gallery.thumbnails[4].src, "/static/Photos/5.jpg");
    }

    #[test]
    fn test_server_error_scenario() {
        let state = ViewState::Error("model error".to_string());
        assert_eq!(
            plan(&state),
            ScreenPlan::Notice(NoticePlan {
                message: "model error".to_string(),
                severity: Severity::Danger,
            })
        );

        let state = ViewState::Error(DEFAULT_SERVER_ERROR.to_string());
        match plan(&state) {
            ScreenPlan::Notice(n) => assert_eq!(n.message, DEFAULT_SERVER_ERROR),
            other => panic!("expected notice, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_and_busy() {
        assert_eq!(plan(&ViewState::Idle), ScreenPlan::Blank);
        assert_eq!(plan(&ViewState::Busy), ScreenPlan::Busy);
    }
}
