/// Identity of a use case screen: index, technical name and UI label.
pub trait UseCaseMetadata {
    /// Index such as "u101"
    fn usecase_index() -> &'static str;

    /// Technical name such as "query_builder"
    fn usecase_name() -> &'static str;

    /// Label shown in the sidebar and on the tab
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Tab key, e.g. "u101_query_builder"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
