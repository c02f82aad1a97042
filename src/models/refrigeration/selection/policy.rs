use std::fmt;

/// How a categorical query field is matched against catalog rows.
///
/// ```
/// use refrig_balance::models::refrigeration::selection::MatchPolicy;
///
/// let voltage = MatchPolicy::exact("230");
/// assert!(voltage.matches(" 230 "));
/// assert!(!voltage.matches("115"));
///
/// assert!(MatchPolicy::from_form_value("All").matches("115"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Every row matches.
    #[default]
    Any,

    /// Rows must carry this value, ignoring case and surrounding whitespace.
    Exact(String),
}

impl MatchPolicy {
    /// Creates an exact-match policy.
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Interprets a form selection.
    ///
    /// A blank value, `any` or `all` (in any case) means no restriction.
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        let normalized = normalize(value);
        if normalized.is_empty() || normalized == "any" || normalized == "all" {
            Self::Any
        } else {
            Self::Exact(value.trim().to_owned())
        }
    }

    /// Returns `true` if a catalog value satisfies this policy.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => normalize(expected) == normalize(candidate),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Exact(value) => f.write_str(value),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ignores_case_and_padding() {
        let style = MatchPolicy::exact("Ducted Horiz");
        assert!(style.matches("DUCTED HORIZ"));
        assert!(style.matches("  ducted horiz\t"));
        assert!(!style.matches("DUCTED VERTICAL"));
        assert!(!style.matches(""));
    }

    #[test]
    fn sentinel_form_values_match_everything() {
        for value in ["", "  ", "any", "ALL", " All "] {
            assert_eq!(MatchPolicy::from_form_value(value), MatchPolicy::Any);
        }
        assert_eq!(
            MatchPolicy::from_form_value(" R448 "),
            MatchPolicy::exact("R448")
        );
    }
}
