use crate::option::SelectOption;
use nucleo_matcher::pattern::AtomKind;
use nucleo_matcher::pattern::CaseMatching;
use nucleo_matcher::pattern::Normalization;
use nucleo_matcher::pattern::Pattern;
use nucleo_matcher::Config;
use nucleo_matcher::Matcher;
use nucleo_matcher::Utf32Str;

/// Pluggable label filter.
///
/// Given the filterable labels of every option and the current query, an
/// implementation returns a ranked subset of those labels, best match
/// first. The menu maps the returned labels back onto options by exact
/// string comparison, so implementations must return labels verbatim.
///
/// Any `Fn(&[&str], &str) -> Vec<String>` conforms, so hosts can inject a
/// closure without naming a type.
pub trait OptionsFilter {
    fn filter(&self, labels: &[&str], query: &str) -> Vec<String>;
}

impl<F> OptionsFilter for F
where
    F: Fn(&[&str], &str) -> Vec<String>,
{
    fn filter(&self, labels: &[&str], query: &str) -> Vec<String> {
        self(labels, query)
    }
}

/// Default filter: fuzzy subsequence ranking via `nucleo-matcher`.
///
/// Case-insensitive, unicode-normalizing, highest score first; ties keep
/// their input order.
#[derive(Default)]
pub struct FuzzyFilter;

impl OptionsFilter for FuzzyFilter {
    fn filter(&self, labels: &[&str], query: &str) -> Vec<String> {
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut scored: Vec<(u32, &str)> = labels
            .iter()
            .filter_map(|label| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(label, &mut buf);
                pattern.score(haystack, &mut matcher).map(|s| (s, *label))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, label)| label.to_string()).collect()
    }
}

/// Applies `filter` to `options` and returns the visible sequence.
///
/// A trimmed-empty query is the fast path: all options, original order.
/// Otherwise each returned label resolves to the first option whose list
/// label or display label equals it exactly; labels with no counterpart
/// are dropped rather than surfaced as an error.
pub fn filter_options(
    options: &[SelectOption],
    query: &str,
    filter: &dyn OptionsFilter,
) -> Vec<SelectOption> {
    if query.trim().is_empty() {
        return options.to_vec();
    }

    let labels: Vec<&str> = options.iter().map(SelectOption::filter_text).collect();
    filter
        .filter(&labels, query)
        .into_iter()
        .filter_map(|label| {
            options
                .iter()
                .find(|o| {
                    o.label_in_list.as_deref() == Some(label.as_str()) || o.label == label
                })
                .cloned()
        })
        .collect()
}
