//! Configuration source port
//!
//! Dotted keys such as `report.list.columns` or `color.overdue`, looked up once
//! when [`Settings`](crate::config::Settings) is built.

/// Read-only key/value configuration
pub trait ConfigSource {
    /// Raw value for a key
    fn get(&self, key: &str) -> Option<String>;

    /// All keys this source defines
    fn keys(&self) -> Vec<String>;

    /// Boolean value (`on`, `yes`, `y`, `true`, `1` are true)
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).map(|value| {
            matches!(value.trim().to_lowercase().as_str(), "on" | "yes" | "y" | "true" | "1")
        })
    }

    /// Integer value; unparseable values are treated as absent
    fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|value| value.trim().parse().ok())
    }
}
