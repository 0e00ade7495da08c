//! PageFrame: root wrapper of every page rendered inside a tab.
//!
//! Sets `id` (`"{tab_key}--{category}"`, e.g. `"a001_employee--list"`) and
//! `data-page-category` on the root element so pages can be found in the DOM.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table of records
    List,
    /// One record, read-only or as a form
    Detail,
    /// Interactive tool such as the query builder
    UseCase,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::UseCase => "usecase",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            PageCategory::Detail => "page page--detail",
            PageCategory::List | PageCategory::UseCase => "page",
        }
    }
}

pub fn page_id(entity: &str, category: PageCategory) -> String {
    format!("{}--{}", entity, category.as_str())
}

#[component]
pub fn PageFrame(
    /// Entity or use case index, e.g. `"a001_employee"`
    entity: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id(entity, category)
            class=category.css_class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(page_id("a001_employee", PageCategory::List), "a001_employee--list");
        assert_eq!(
            page_id("u101_query_builder", PageCategory::UseCase),
            "u101_query_builder--usecase"
        );
    }
}
