use chrono::Locale;
use fitlog_domain::{Hydration, ReadError, UpdateError, log_on_error};
use log::debug;
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub trait ThemeRepository {
    /// Returns `None` if no theme has been stored yet.
    fn read_theme(&self) -> Result<Option<Theme>, ReadError>;
    fn write_theme(&self, theme: Theme) -> Result<(), UpdateError>;
}

pub trait LanguageRepository {
    /// Returns `None` if no language has been stored yet.
    fn read_language(&self) -> Result<Option<Language>, ReadError>;
    fn write_language(&self, language: Language) -> Result<(), UpdateError>;
}

impl<R: ThemeRepository + ?Sized> ThemeRepository for &R {
    fn read_theme(&self) -> Result<Option<Theme>, ReadError> {
        (**self).read_theme()
    }

    fn write_theme(&self, theme: Theme) -> Result<(), UpdateError> {
        (**self).write_theme(theme)
    }
}

impl<R: LanguageRepository + ?Sized> LanguageRepository for &R {
    fn read_language(&self) -> Result<Option<Language>, ReadError> {
        (**self).read_language()
    }

    fn write_language(&self, language: Language) -> Result<(), UpdateError> {
        (**self).write_language(language)
    }
}

#[derive(
    serde::Serialize,
    serde::Deserialize,
    AsRefStr,
    Display,
    EnumString,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(
    serde::Serialize,
    serde::Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Ar,
    Ru,
}

impl Language {
    /// Pick the supported language of a BCP 47 tag such as `ru-RU`, defaulting to English.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Self {
        tag.split(['-', '_'])
            .next()
            .and_then(|primary| primary.parse().ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        if self.is_rtl() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    #[must_use]
    pub fn locale(self) -> Locale {
        match self {
            Language::En => Locale::en_US,
            Language::Ar => Locale::ar_EG,
            Language::Ru => Locale::ru_RU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Resolved presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub theme: Theme,
    pub language: Language,
    pub direction: Direction,
}

impl Appearance {
    #[must_use]
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            direction: language.direction(),
        }
    }
}

pub struct ThemeStore<R> {
    repository: R,
    mode: Theme,
    hydration: Hydration,
}

impl<R: ThemeRepository> ThemeStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            mode: Theme::default(),
            hydration: Hydration::Uninitialized,
        }
    }

    pub fn hydrate(&mut self) {
        if self.hydration != Hydration::Uninitialized {
            return;
        }
        self.hydration = Hydration::Hydrating;
        if let Ok(Some(mode)) = log_on_error!(self.repository.read_theme(), "load", "theme") {
            self.mode = mode;
        }
        self.hydration = Hydration::Ready;
        debug!("hydrated theme {}", self.mode);
    }

    #[must_use]
    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.hydration == Hydration::Ready
    }

    #[must_use]
    pub fn mode(&self) -> Theme {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Theme) {
        self.hydrate();
        self.mode = mode;
        let _ = log_on_error!(self.repository.write_theme(mode), "save", "theme");
    }

    pub fn toggle(&mut self) {
        self.hydrate();
        self.set_mode(self.mode.toggled());
    }
}

pub struct LanguageStore<R> {
    repository: R,
    language: Language,
    hydration: Hydration,
}

impl<R: LanguageRepository> LanguageStore<R> {
    /// The given language is used until a stored choice has been hydrated.
    pub fn new(repository: R, language: Language) -> Self {
        Self {
            repository,
            language,
            hydration: Hydration::Uninitialized,
        }
    }

    pub fn hydrate(&mut self) {
        if self.hydration != Hydration::Uninitialized {
            return;
        }
        self.hydration = Hydration::Hydrating;
        if let Ok(Some(language)) =
            log_on_error!(self.repository.read_language(), "load", "language")
        {
            self.language = language;
        }
        self.hydration = Hydration::Ready;
        debug!("hydrated language {}", self.language);
    }

    #[must_use]
    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.hydration == Hydration::Ready
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn set_language(&mut self, language: Language) {
        self.hydrate();
        self.language = language;
        let _ = log_on_error!(
            self.repository.write_language(language),
            "save",
            "language"
        );
    }
}
