//! Report settings
//!
//! Every configuration key the report engine reads is resolved once, here, into
//! an explicit [`Settings`] value that is passed into the report assembler.
//! Keys missing from the [`ConfigSource`] fall back to [`DEFAULTS`], which also
//! define the built-in reports.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::ReportError;
use crate::core::models::Color;
use crate::core::ports::ConfigSource;
use crate::core::services::autocolor::ColorRules;
use crate::core::services::description::AnnotationDetail;

/// Built-in defaults, overridden key by key by the configuration file
pub const DEFAULTS: &[(&str, &str)] = &[
    ("dateformat", "m/d/Y"),
    ("due", "7"),
    ("color", "off"),
    ("fontunderline", "on"),
    ("locking", "on"),
    ("blanklines", "on"),
    ("defaultwidth", "80"),
    ("annotations", "full"),
    ("color.due", "yellow"),
    ("color.overdue", "bold red"),
    ("color.active", "bold"),
    ("color.pri.H", "bold"),
    // long
    ("report.long.description", "Lists all task, all data, matching the specified criteria"),
    ("report.long.columns", "id,project,priority,entry,start,due,recur,age,tags,description"),
    ("report.long.labels", "ID,Project,Pri,Added,Started,Due,Recur,Age,Tags,Description"),
    ("report.long.sort", "due+,priority-,project+"),
    ("report.long.filter", "status:pending"),
    // list
    ("report.list.description", "Lists all tasks matching the specified criteria"),
    ("report.list.columns", "id,project,priority,due,active,age,description"),
    ("report.list.labels", "ID,Project,Pri,Due,Active,Age,Description"),
    ("report.list.sort", "due+,priority-,project+"),
    ("report.list.filter", "status:pending"),
    // ls
    ("report.ls.description", "Minimal listing of all tasks matching the specified criteria"),
    ("report.ls.columns", "id,project,priority,description"),
    ("report.ls.labels", "ID,Project,Pri,Description"),
    ("report.ls.sort", "priority-,project+"),
    ("report.ls.filter", "status:pending"),
    // minimal
    ("report.minimal.description", "Minimal listing of all tasks matching the specified criteria"),
    ("report.minimal.columns", "id,project,description"),
    ("report.minimal.labels", "ID,Project,Description"),
    ("report.minimal.sort", "project+,description+"),
    ("report.minimal.filter", "status:pending"),
    // newest
    ("report.newest.description", "Shows the newest tasks"),
    ("report.newest.columns", "id,project,priority,due,active,age,description"),
    ("report.newest.labels", "ID,Project,Pri,Due,Active,Age,Description"),
    ("report.newest.sort", "id-"),
    ("report.newest.filter", "status:pending limit:10"),
    // oldest
    ("report.oldest.description", "Shows the oldest tasks"),
    ("report.oldest.columns", "id,project,priority,due,active,age,description"),
    ("report.oldest.labels", "ID,Project,Pri,Due,Active,Age,Description"),
    ("report.oldest.sort", "id+"),
    ("report.oldest.filter", "status:pending limit:10"),
    // active
    ("report.active.description", "Lists active tasks matching the specified criteria"),
    ("report.active.columns", "id,project,priority,due,active,age,description"),
    ("report.active.labels", "ID,Project,Pri,Due,Active,Age,Description"),
    ("report.active.sort", "due+,priority-,project+"),
    ("report.active.filter", "status:pending start.any:"),
    // completed
    ("report.completed.description", "Lists completed tasks matching the specified criteria"),
    ("report.completed.columns", "end,project,priority,age,description"),
    ("report.completed.labels", "Complete,Project,Pri,Age,Description"),
    ("report.completed.sort", "end+,priority-,project+"),
    ("report.completed.filter", "status:completed"),
    // recurring
    ("report.recurring.description", "Lists recurring tasks matching the specified criteria"),
    ("report.recurring.columns", "id,project,priority,due,recur,active,age,description"),
    ("report.recurring.labels", "ID,Project,Pri,Due,Recur,Active,Age,Description"),
    ("report.recurring.sort", "due+,priority-,project+"),
    ("report.recurring.filter", "status:pending recur.any:"),
    // waiting
    ("report.waiting.description", "Lists all waiting tasks matching the specified criteria"),
    ("report.waiting.columns", "id,project,priority,wait,age,description"),
    ("report.waiting.labels", "ID,Project,Pri,Wait,Age,Description"),
    ("report.waiting.sort", "wait+,priority-,project+"),
    ("report.waiting.filter", "status:waiting"),
    // all
    ("report.all.description", "Lists all tasks matching the specified criteria"),
    ("report.all.columns", "id,project,priority,due,end,active,age,description"),
    ("report.all.labels", "ID,Project,Pri,Due,Completed,Active,Age,Description"),
    ("report.all.sort", "priority-,project+"),
    ("report.all.filter", ""),
];

/// A configuration source layered over [`DEFAULTS`]
struct Layered<'a> {
    source: &'a dyn ConfigSource,
}

impl ConfigSource for Layered<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.source.get(key).or_else(|| {
            DEFAULTS.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
        })
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: BTreeSet<String> = self.source.keys().into_iter().collect();
        keys.extend(DEFAULTS.iter().map(|(k, _)| (*k).to_string()));
        keys.into_iter().collect()
    }
}

/// One named report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDefinition {
    /// Report name
    pub name: String,
    /// One-line description
    pub description: String,
    /// `report.<name>.columns`
    pub columns: String,
    /// `report.<name>.labels`
    pub labels: String,
    /// `report.<name>.sort`
    pub sort: String,
    /// `report.<name>.filter`
    pub filter: String,
    /// `report.<name>.limit`, 0 for no limit
    pub limit: usize,
    /// `report.<name>.dateformat`
    pub date_format: Option<String>,
    /// `report.<name>.annotations`
    pub annotations: Option<AnnotationDetail>,
}

/// Everything the report engine reads from configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// `dateformat`
    pub date_format: String,
    /// `dateformat.report`
    pub report_date_format: Option<String>,
    /// `color` or `_forcecolor`
    pub color: bool,
    /// `fontunderline`
    pub font_underline: bool,
    /// `locking`
    pub locking: bool,
    /// `blanklines`
    pub blank_lines: bool,
    /// `defaultwidth`, used when the terminal width is unknown
    pub default_width: usize,
    /// `due`, days ahead that count as imminent
    pub due_horizon_days: i64,
    /// `annotations`
    pub annotations: AnnotationDetail,
    /// `color.due`
    pub color_due: Color,
    /// `color.overdue`
    pub color_overdue: Color,
    /// `color.alternate`
    pub color_alternate: Color,
    /// `color.tagged`, `color.pri.*`, `color.project.*` and friends
    pub color_rules: ColorRules,
    reports: BTreeMap<String, ReportDefinition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_source(&BTreeMap::<String, String>::new())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn color(source: &dyn ConfigSource, key: &str) -> Color {
    source.get(key).map(|spec| Color::parse_lossy(&spec)).unwrap_or_default()
}

fn prefixed_colors(source: &dyn ConfigSource, prefix: &str) -> BTreeMap<String, Color> {
    source
        .keys()
        .into_iter()
        .filter_map(|key| {
            let name = key.strip_prefix(prefix)?.to_string();
            let color = color(source, &key);
            color.nontrivial().then_some((name, color))
        })
        .collect()
}

fn annotations(source: &dyn ConfigSource, key: &str) -> Option<AnnotationDetail> {
    source.get(key).and_then(|value| {
        value.parse().map_err(|e: String| log::warn!("ignoring {key}: {e}")).ok()
    })
}

impl Settings {
    /// Resolve every setting from a configuration source
    #[must_use]
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let source = Layered { source };
        let bool_or = |key: &str, default: bool| source.get_bool(key).unwrap_or(default);

        let color_rules = ColorRules {
            tagged: color(&source, "color.tagged"),
            pri_high: color(&source, "color.pri.H"),
            pri_medium: color(&source, "color.pri.M"),
            pri_low: color(&source, "color.pri.L"),
            pri_none: color(&source, "color.pri.none"),
            active: color(&source, "color.active"),
            recurring: color(&source, "color.recurring"),
            projects: prefixed_colors(&source, "color.project."),
            tags: prefixed_colors(&source, "color.tag."),
            keywords: prefixed_colors(&source, "color.keyword."),
        };

        let report_names: BTreeSet<String> = source
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix("report.")?.split_once('.').map(|(name, _)| name.to_string()))
            .collect();

        let reports = report_names
            .into_iter()
            .filter_map(|name| {
                let key = |field: &str| format!("report.{name}.{field}");
                let columns = non_empty(source.get(&key("columns")))?;
                Some((name.clone(), ReportDefinition {
                    description: source.get(&key("description")).unwrap_or_default(),
                    columns,
                    labels: source.get(&key("labels")).unwrap_or_default(),
                    sort: source.get(&key("sort")).unwrap_or_default(),
                    filter: source.get(&key("filter")).unwrap_or_default(),
                    limit: source
                        .get_int(&key("limit"))
                        .and_then(|l| usize::try_from(l).ok())
                        .unwrap_or(0),
                    date_format: non_empty(source.get(&key("dateformat"))),
                    annotations: annotations(&source, &key("annotations")),
                    name,
                }))
            })
            .collect();

        Self {
            date_format: non_empty(source.get("dateformat")).unwrap_or_else(|| "m/d/Y".to_string()),
            report_date_format: non_empty(source.get("dateformat.report")),
            color: bool_or("color", false) || bool_or("_forcecolor", false),
            font_underline: bool_or("fontunderline", true),
            locking: bool_or("locking", true),
            blank_lines: bool_or("blanklines", true),
            default_width: source
                .get_int("defaultwidth")
                .and_then(|w| usize::try_from(w).ok())
                .filter(|w| *w > 0)
                .unwrap_or(80),
            due_horizon_days: source.get_int("due").unwrap_or(7),
            annotations: annotations(&source, "annotations").unwrap_or_default(),
            color_due: color(&source, "color.due"),
            color_overdue: color(&source, "color.overdue"),
            color_alternate: color(&source, "color.alternate"),
            color_rules,
            reports,
        }
    }

    /// Look up a report by name
    pub fn report(&self, name: &str) -> Result<&ReportDefinition, ReportError> {
        self.reports.get(name).ok_or_else(|| ReportError::UnknownReport(name.to_string()))
    }

    /// All configured reports, by name
    pub fn reports(&self) -> impl Iterator<Item = &ReportDefinition> {
        self.reports.values()
    }

    /// Date format for a report's `due` column: the report's own format, then
    /// `dateformat.report`, then `dateformat`
    #[must_use]
    pub fn due_date_format<'a>(&'a self, report: &'a ReportDefinition) -> &'a str {
        report
            .date_format
            .as_deref()
            .or(self.report_date_format.as_deref())
            .unwrap_or(&self.date_format)
    }

    /// Annotation detail for a report's `description` column
    #[must_use]
    pub fn annotation_detail(&self, report: &ReportDefinition) -> AnnotationDetail {
        report.annotations.unwrap_or(self.annotations)
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }
}
