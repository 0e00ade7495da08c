//! Tab keys of the employee screens.
//!
//! Keys are plain strings so they can live in the `?active=` query parameter.

use contracts::domain::a001_employee::ENTITY_INDEX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeTab {
    List,
    New,
    Columns,
    Detail(i64),
    Edit(i64),
}

impl EmployeeTab {
    pub fn key(&self) -> String {
        match self {
            EmployeeTab::List => ENTITY_INDEX.to_string(),
            EmployeeTab::New => format!("{}_new", ENTITY_INDEX),
            EmployeeTab::Columns => format!("{}_columns", ENTITY_INDEX),
            EmployeeTab::Detail(emp_no) => format!("{}_detail_{}", ENTITY_INDEX, emp_no),
            EmployeeTab::Edit(emp_no) => format!("{}_edit_{}", ENTITY_INDEX, emp_no),
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(ENTITY_INDEX)?;
        if rest.is_empty() {
            return Some(EmployeeTab::List);
        }
        match rest {
            "_new" => Some(EmployeeTab::New),
            "_columns" => Some(EmployeeTab::Columns),
            _ => {
                if let Some(id) = rest.strip_prefix("_detail_") {
                    id.parse().ok().map(EmployeeTab::Detail)
                } else if let Some(id) = rest.strip_prefix("_edit_") {
                    id.parse().ok().map(EmployeeTab::Edit)
                } else {
                    None
                }
            }
        }
    }

    pub fn title(&self) -> String {
        match self {
            EmployeeTab::List => "Employees".to_string(),
            EmployeeTab::New => "Add Employee".to_string(),
            EmployeeTab::Columns => "Employee Columns".to_string(),
            EmployeeTab::Detail(emp_no) => format!("Employee #{}", emp_no),
            EmployeeTab::Edit(emp_no) => format!("Edit #{}", emp_no),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(EmployeeTab::List.key(), "a001_employee");
        assert_eq!(EmployeeTab::Detail(10001).key(), "a001_employee_detail_10001");
        assert_eq!(EmployeeTab::Edit(7).key(), "a001_employee_edit_7");
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(EmployeeTab::parse("a001_employee"), Some(EmployeeTab::List));
        assert_eq!(EmployeeTab::parse("a001_employee_new"), Some(EmployeeTab::New));
        assert_eq!(EmployeeTab::parse("a001_employee_columns"), Some(EmployeeTab::Columns));
        assert_eq!(
            EmployeeTab::parse("a001_employee_detail_10001"),
            Some(EmployeeTab::Detail(10001))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(EmployeeTab::parse("a001_employee_detail_abc"), None);
        assert_eq!(EmployeeTab::parse("a001_employees"), None);
        assert_eq!(EmployeeTab::parse("u101_query_builder"), None);
    }
}
