/// Identity of a selectable option. Hosts commonly key options by either a
/// string id or a numeric id, so both are first-class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionValue {
    Text(String),
    Num(i64),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

/// One selectable entry.
///
/// `value` is the stable identity; `label` is what rows display. When
/// `label_in_list` is set it is used for filtering instead of `label`
/// (useful when the display label carries decoration the user would not
/// type). Options are plain data: the menu never mutates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: OptionValue,
    pub label: String,
    pub label_in_list: Option<String>,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            label_in_list: None,
            disabled: false,
        }
    }

    pub fn with_list_label(mut self, label: impl Into<String>) -> Self {
        self.label_in_list = Some(label.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The text the filter engine matches against.
    pub fn filter_text(&self) -> &str {
        self.label_in_list.as_deref().unwrap_or(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_text_prefers_list_label() {
        let plain = SelectOption::new("a", "Apple");
        assert_eq!(plain.filter_text(), "Apple");

        let decorated = SelectOption::new("a", "🍎 Apple").with_list_label("Apple");
        assert_eq!(decorated.filter_text(), "Apple");
    }

    #[test]
    fn values_hash_by_identity() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(OptionValue::from("a"));
        set.insert(OptionValue::from(1));
        assert!(set.contains(&OptionValue::Text("a".into())));
        assert!(set.contains(&OptionValue::Num(1)));
        assert!(!set.contains(&OptionValue::Text("1".into())));
    }
}
