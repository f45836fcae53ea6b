use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Preference key under which the chosen language is persisted.
pub const LANGUAGE_KEY: &str = "calendar-language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    De,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LanguageTable {
    pub title: &'static str,
    pub month_names: [&'static str; 12],
    /// Sunday first.
    pub day_abbrev: [&'static str; 7],
    pub today_label: &'static str,
}

static ENGLISH: LanguageTable = LanguageTable {
    title: "Calendar",
    month_names: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    day_abbrev: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    today_label: "Today",
};

static GERMAN: LanguageTable = LanguageTable {
    title: "Kalender",
    month_names: [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    day_abbrev: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    today_label: "Heute",
};

impl LanguageCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Resolves a stored value, using `fallback` when it is missing or unknown.
    pub fn from_persisted(value: Option<&str>, fallback: Self) -> Self {
        match value {
            Some(saved) => Self::parse(saved).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown persisted language '{}'", saved);
                fallback
            }),
            None => fallback,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    pub fn table(self) -> &'static LanguageTable {
        match self {
            Self::En => &ENGLISH,
            Self::De => &GERMAN,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::En => Self::De,
            Self::De => Self::En,
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl LanguageTable {
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[month as usize % 12]
    }

    pub fn day_name(&self, weekday: u32) -> &'static str {
        self.day_abbrev[weekday as usize % 7]
    }
}

/// `"<MonthName> <Year>"` for a zero-based month.
pub fn month_header(language: LanguageCode, year: i32, month: u32) -> String {
    format!("{} {}", language.table().month_name(month), year)
}

/// Footer line describing `date`, ordered the way each language writes dates.
pub fn date_info(language: LanguageCode, date: NaiveDate) -> String {
    let table = language.table();
    let day = table.day_name(date.weekday().num_days_from_sunday());
    let month = table.month_name(date.month0());

    match language {
        LanguageCode::De => format!("{}, {}. {} {}", day, date.day(), month, date.year()),
        LanguageCode::En => format!("{}, {} {}, {}", day, month, date.day(), date.year()),
    }
}
