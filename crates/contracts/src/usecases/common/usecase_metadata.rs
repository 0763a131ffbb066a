/// Identity of a use case as shown to users and used in markup
pub trait UseCaseMetadata {
    /// Short index such as `u510`
    fn usecase_index() -> &'static str;

    /// snake_case name such as `image_query`
    fn usecase_name() -> &'static str;

    /// Page heading
    fn display_name() -> &'static str;

    /// One-line subtitle under the heading
    fn description() -> &'static str {
        ""
    }

    /// `{index}_{name}`, used as the page root id
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl UseCaseMetadata for Bare {
        fn usecase_index() -> &'static str {
            "u000"
        }
        fn usecase_name() -> &'static str {
            "bare"
        }
        fn display_name() -> &'static str {
            "Bare"
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Bare::full_name(), "u000_bare");
        assert_eq!(Bare::description(), "");
    }
}
