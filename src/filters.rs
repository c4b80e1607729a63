//! Search filter model.
//!
//! A filter group is an ordered list of options of which one is selected.
//! Each group knows how to contribute its selection to a request URL.

use crate::error::SourceError;
use serde::Serialize;
use url::Url;

/// A single selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Value sent to the server.
    pub value: &'static str,

    /// Label shown to the user.
    pub label: &'static str,
}

impl FilterOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Something that can add query parameters to a request URL.
pub trait UriFilter {
    /// Appends this filter's parameters to `url`, if it has any.
    fn add_to_url(&self, url: &mut Url);
}

/// Dropdown-style filter sending `param=<value>` for the selected option.
///
/// When `first_is_unspecified` is set, selecting the first option adds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectFilter {
    name: &'static str,
    param: &'static str,
    options: &'static [FilterOption],
    first_is_unspecified: bool,
    state: usize,
}

impl SelectFilter {
    /// Creates a filter with the first option selected.
    pub const fn new(
        name: &'static str,
        param: &'static str,
        options: &'static [FilterOption],
        first_is_unspecified: bool,
    ) -> Self {
        Self {
            name,
            param,
            options,
            first_is_unspecified,
            state: 0,
        }
    }

    /// Display name of the group.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Query parameter this group writes.
    pub fn param(&self) -> &'static str {
        self.param
    }

    pub fn options(&self) -> &'static [FilterOption] {
        self.options
    }

    /// Index of the selected option.
    pub fn state(&self) -> usize {
        self.state
    }

    pub fn selected(&self) -> Option<&FilterOption> {
        self.options.get(self.state)
    }

    /// Selects the option at `index`.
    pub fn select(&mut self, index: usize) -> Result<(), SourceError> {
        if index >= self.options.len() {
            return Err(SourceError::InvalidFilter(format!(
                "{} has no option #{} ({} options)",
                self.name,
                index,
                self.options.len()
            )));
        }
        self.state = index;
        Ok(())
    }

    /// Selects the option whose value or label matches `needle`, ignoring case.
    pub fn select_value(&mut self, needle: &str) -> Result<(), SourceError> {
        let index = self
            .options
            .iter()
            .position(|o| o.value.eq_ignore_ascii_case(needle) || o.label.eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                SourceError::InvalidFilter(format!("{} has no option '{}'", self.name, needle))
            })?;
        self.select(index)
    }
}

impl UriFilter for SelectFilter {
    fn add_to_url(&self, url: &mut Url) {
        if self.state == 0 && self.first_is_unspecified {
            return;
        }
        if let Some(option) = self.selected() {
            url.query_pairs_mut().append_pair(self.param, option.value);
        }
    }
}

/// Ordered set of filter groups applied together to a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterList {
    filters: Vec<SelectFilter>,
}

impl FilterList {
    pub fn new(filters: Vec<SelectFilter>) -> Self {
        Self { filters }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectFilter> {
        self.filters.iter()
    }

    /// Finds the group writing query parameter `param`.
    pub fn get_mut(&mut self, param: &str) -> Option<&mut SelectFilter> {
        self.filters.iter_mut().find(|f| f.param == param)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl UriFilter for FilterList {
    fn add_to_url(&self, url: &mut Url) {
        for filter in &self.filters {
            filter.add_to_url(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATUS: &[FilterOption] = &[
        FilterOption::new("all", "All"),
        FilterOption::new("ongoing", "Ongoing"),
        FilterOption::new("completed", "Completed"),
    ];

    fn url() -> Url {
        Url::parse("https://mangamad.com/search").unwrap()
    }

    #[test]
    fn test_unspecified_first_option_adds_nothing() {
        let filter = SelectFilter::new("Status", "status", STATUS, true);
        let mut url = url();
        filter.add_to_url(&mut url);

        assert_eq!(url.as_str(), "https://mangamad.com/search");
    }

    #[test]
    fn test_selected_option_adds_param() {
        let mut filter = SelectFilter::new("Status", "status", STATUS, true);
        filter.select(2).unwrap();
        let mut url = url();
        filter.add_to_url(&mut url);

        assert_eq!(url.as_str(), "https://mangamad.com/search?status=completed");
    }

    #[test]
    fn test_first_option_sent_when_specified() {
        let filter = SelectFilter::new("Status", "status", STATUS, false);
        let mut url = url();
        filter.add_to_url(&mut url);

        assert_eq!(url.as_str(), "https://mangamad.com/search?status=all");
    }

    #[test]
    fn test_select_out_of_range() {
        let mut filter = SelectFilter::new("Status", "status", STATUS, true);
        assert!(matches!(filter.select(3), Err(SourceError::InvalidFilter(_))));
        assert_eq!(filter.state(), 0);
    }

    #[test]
    fn test_select_value_by_value_or_label() {
        let mut filter = SelectFilter::new("Status", "status", STATUS, true);
        filter.select_value("ONGOING").unwrap();
        assert_eq!(filter.state(), 1);

        filter.select_value("Completed").unwrap();
        assert_eq!(filter.selected().unwrap().value, "completed");

        assert!(filter.select_value("hiatus").is_err());
    }

    #[test]
    fn test_filter_list_applies_in_order() {
        static SORT: &[FilterOption] = &[
            FilterOption::new("views", "Most Views"),
            FilterOption::new("name", "A-Z"),
        ];
        let mut filters = FilterList::new(vec![
            SelectFilter::new("Sort", "sort", SORT, true),
            SelectFilter::new("Status", "status", STATUS, true),
        ]);
        filters.get_mut("sort").unwrap().select(1).unwrap();
        filters.get_mut("status").unwrap().select(1).unwrap();

        let mut url = url();
        filters.add_to_url(&mut url);
        assert_eq!(url.query(), Some("sort=name&status=ongoing"));
    }
}
