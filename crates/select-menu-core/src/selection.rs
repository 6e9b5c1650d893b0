use crate::option::OptionValue;
use crate::option::SelectOption;
use std::collections::HashSet;

/// Read-only snapshot of the host's selected values.
///
/// The host owns selection. The menu never mutates it; it refreshes this
/// snapshot whenever the host pushes new state and emits select/deselect
/// intents for the host to apply. A value with no matching option simply
/// never tests as selected.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    values: HashSet<OptionValue>,
}

impl Selection {
    pub fn new(values: impl IntoIterator<Item = OptionValue>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn replace(&mut self, values: impl IntoIterator<Item = OptionValue>) {
        self.values = values.into_iter().collect();
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.values.contains(&option.value)
    }

    pub fn contains(&self, value: &OptionValue) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_by_value() {
        let selection = Selection::new([OptionValue::from(1), OptionValue::from("b")]);
        assert!(selection.is_selected(&SelectOption::new(1, "One")));
        assert!(selection.is_selected(&SelectOption::new("b", "Bee")));
        assert!(!selection.is_selected(&SelectOption::new(2, "Two")));
    }

    #[test]
    fn replace_swaps_the_snapshot() {
        let mut selection = Selection::new([OptionValue::from(1)]);
        selection.replace([OptionValue::from(2)]);
        assert!(!selection.contains(&OptionValue::from(1)));
        assert!(selection.contains(&OptionValue::from(2)));
        assert_eq!(selection.len(), 1);
    }
}
