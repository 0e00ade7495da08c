//! Tab labels: the one place deciding the title of a tab key.

use crate::domain::a001_employee::EmployeeTab;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_query_builder::QueryBuilder;

/// Readable tab title for a key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(tab) = EmployeeTab::parse(key) {
        return tab.title();
    }
    if key == QueryBuilder::full_name() {
        return QueryBuilder::display_name().to_string();
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(tab_label_for_key("a001_employee"), "Employees");
        assert_eq!(tab_label_for_key("a001_employee_edit_10001"), "Edit #10001");
        assert_eq!(tab_label_for_key("u101_query_builder"), "Query Builder");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("d400_monthly_summary"), "d400_monthly_summary");
    }
}
