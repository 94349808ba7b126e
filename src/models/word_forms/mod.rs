use serde::{Deserialize, Serialize};

/// The three Russian numeral-agreement forms of a noun.
///
/// - `one`: 1, 21, 31, 101 ... ("месяц")
/// - `few`: 2-4, 22-24 ... ("месяца")
/// - `many`: 0, 5-20, 25-30, 111 ... ("месяцев")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    pub one: String,
    pub few: String,
    pub many: String,
}

impl WordForms {
    pub fn new(one: impl Into<String>, few: impl Into<String>, many: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            few: few.into(),
            many: many.into(),
        }
    }

    /// Returns the first form that is empty or whitespace, if any.
    pub fn first_blank(&self) -> Option<&'static str> {
        [("one", &self.one), ("few", &self.few), ("many", &self.many)]
            .into_iter()
            .find(|(_, form)| form.trim().is_empty())
            .map(|(name, _)| name)
    }

    pub fn months() -> Self {
        Self::new("месяц", "месяца", "месяцев")
    }

    pub fn days() -> Self {
        Self::new("день", "дня", "дней")
    }

    pub fn hours() -> Self {
        Self::new("час", "часа", "часов")
    }

    pub fn minutes() -> Self {
        Self::new("минута", "минуты", "минут")
    }
}

impl From<[&str; 3]> for WordForms {
    fn from([one, few, many]: [&str; 3]) -> Self {
        Self::new(one, few, many)
    }
}

/// One set of word forms per displayed countdown unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitWordForms {
    pub months: WordForms,
    pub days: WordForms,
    pub hours: WordForms,
    pub minutes: WordForms,
}

impl Default for UnitWordForms {
    fn default() -> Self {
        Self {
            months: WordForms::months(),
            days: WordForms::days(),
            hours: WordForms::hours(),
            minutes: WordForms::minutes(),
        }
    }
}

impl UnitWordForms {
    /// Iterates `(unit name, forms)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &WordForms)> {
        [
            ("months", &self.months),
            ("days", &self.days),
            ("hours", &self.hours),
            ("minutes", &self.minutes),
        ]
        .into_iter()
    }
}
