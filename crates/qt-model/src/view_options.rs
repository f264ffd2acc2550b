//! Shared view options and their query-string form.
//!
//! A report view has two pieces of state that every subject table reads and
//! may change: the set of hidden table columns, and whether metrics that do
//! not require action are hidden. Both are mirrored into the location's query
//! string so a view can be bookmarked or shared.
//!
//! # Query string
//!
//! ```text
//! ?hidden_columns=trend,comment&hide_metrics_not_requiring_action=true
//! ```
//!
//! Each parameter is only written when it carries information: an empty
//! column list and a `false` flag are omitted, and with neither present the
//! query string is empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::location::History;
use crate::report::Metric;

/// Query parameter holding the comma-separated hidden column ids.
pub const HIDDEN_COLUMNS_PARAM: &str = "hidden_columns";

/// Query parameter holding the hide-metrics flag.
pub const HIDE_METRICS_PARAM: &str = "hide_metrics_not_requiring_action";

/// Columns of a subject's metric table that the user can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Trend,
    Status,
    Measurement,
    Target,
    Source,
    Comment,
    Tags,
}

impl Column {
    /// All hideable columns in table order.
    pub const ALL: [Column; 7] = [
        Self::Trend,
        Self::Status,
        Self::Measurement,
        Self::Target,
        Self::Source,
        Self::Comment,
        Self::Tags,
    ];

    /// Identifier used in the query string.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Status => "status",
            Self::Measurement => "measurement",
            Self::Target => "target",
            Self::Source => "source",
            Self::Comment => "comment",
            Self::Tags => "tags",
        }
    }

    /// Column header text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trend => "Trend",
            Self::Status => "Status",
            Self::Measurement => "Measurement",
            Self::Target => "Target",
            Self::Source => "Source",
            Self::Comment => "Comment",
            Self::Tags => "Tags",
        }
    }

    /// Look up a column by its query-string identifier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hidden columns and the hide-metrics flag shared by all subjects of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Column ids to omit, in the order the user hid them.
    pub hidden_columns: Vec<String>,

    /// Whether to omit metrics whose status does not require action.
    pub hide_metrics_not_requiring_action: bool,
}

impl ViewOptions {
    /// Create view options from explicit values.
    pub fn new(hidden_columns: Vec<String>, hide_metrics_not_requiring_action: bool) -> Self {
        Self {
            hidden_columns,
            hide_metrics_not_requiring_action,
        }
    }

    /// Parse view options from a query string, with or without the leading `?`.
    ///
    /// Unknown parameters are ignored. Empty column ids are dropped and
    /// repeated ids collapse to their first occurrence.
    pub fn from_search(search: &str) -> Self {
        let mut options = Self::default();
        for (key, value) in query_pairs(search) {
            match key.as_ref() {
                HIDDEN_COLUMNS_PARAM => {
                    options.hidden_columns.clear();
                    for column in value.split(',').filter(|c| !c.is_empty()) {
                        if !options.hidden_columns.iter().any(|c| c == column) {
                            options.hidden_columns.push(column.to_string());
                        }
                    }
                }
                HIDE_METRICS_PARAM => {
                    options.hide_metrics_not_requiring_action = value.as_ref() == "true";
                }
                _ => {}
            }
        }
        options
    }

    /// Whether a column is hidden.
    pub fn is_column_hidden(&self, column: Column) -> bool {
        self.hidden_columns.iter().any(|c| c == column.key())
    }

    /// Columns still shown, in table order.
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| !self.is_column_hidden(*c))
            .collect()
    }

    /// The hidden column list after toggling one column.
    ///
    /// Does not modify `self`; the result is meant for the hidden-columns
    /// setter of the owning view.
    pub fn toggled_column(&self, column: Column) -> Vec<String> {
        if self.is_column_hidden(column) {
            self.hidden_columns
                .iter()
                .filter(|c| *c != column.key())
                .cloned()
                .collect()
        } else {
            let mut columns = self.hidden_columns.clone();
            columns.push(column.key().to_string());
            columns
        }
    }

    /// Whether a metric passes the hide-metrics filter.
    pub fn shows_metric(&self, metric: &Metric) -> bool {
        !self.hide_metrics_not_requiring_action || metric.requires_action()
    }

    /// Query fragments for the two known parameters, in canonical order.
    pub fn query_fragments(&self) -> Vec<String> {
        let mut fragments = Vec::with_capacity(2);
        if !self.hidden_columns.is_empty() {
            fragments.push(format!(
                "{HIDDEN_COLUMNS_PARAM}={}",
                self.hidden_columns.join(",")
            ));
        }
        if self.hide_metrics_not_requiring_action {
            fragments.push(format!(
                "{HIDE_METRICS_PARAM}={}",
                self.hide_metrics_not_requiring_action
            ));
        }
        fragments
    }

    /// The query string holding only these options.
    ///
    /// Returns `""` when nothing needs to be written.
    pub fn to_search(&self) -> String {
        join_search(self.query_fragments())
    }

    /// Patch these options into an existing query string.
    ///
    /// The two known parameters are rewritten (or removed) and placed first;
    /// every other parameter of `current` is kept, in its original order.
    pub fn merged_search(&self, current: &str) -> String {
        let mut fragments = self.query_fragments();
        fragments.extend(
            current
                .trim_start_matches('?')
                .split('&')
                .filter(|pair| !pair.is_empty())
                .filter(|pair| {
                    let key = query_pairs(pair).next().map(|(key, _)| key);
                    !matches!(
                        key.as_deref(),
                        Some(HIDDEN_COLUMNS_PARAM | HIDE_METRICS_PARAM)
                    )
                })
                .map(str::to_string),
        );
        join_search(fragments)
    }

    /// Write these options into the navigation handle's query string.
    pub fn write_to(&self, history: &mut dyn History) {
        let search = self.merged_search(history.search());
        tracing::debug!(search = %search, "replacing query string");
        history.replace_search(search);
    }
}

fn join_search(fragments: Vec<String>) -> String {
    if fragments.is_empty() {
        String::new()
    } else {
        format!("?{}", fragments.join("&"))
    }
}

/// Decoded `key=value` pairs of a query string.
fn query_pairs(search: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
}
