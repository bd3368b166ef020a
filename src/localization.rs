use fluent::{FluentResource, concurrent::FluentBundle};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::{Level, enabled, error};
use unic_langid::{LanguageIdentifier, langid};

/// Localized text for the key, first letter uppercased.
macro_rules! titlecase {
    ($key:literal) => {
        $crate::localization::LOCALIZATION
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .titlecase($key)
    };
}

pub(crate) use titlecase;

macro_rules! source {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), $path))
    };
}

const EN: LanguageIdentifier = langid!("en");
const RU: LanguageIdentifier = langid!("ru");

pub(crate) static LOCALIZATION: LazyLock<RwLock<Localization>> =
    LazyLock::new(|| RwLock::new(Localization::new(Locale::En)));

/// Switches the global localization.
pub(crate) fn set(locale: Locale) {
    *LOCALIZATION.write().unwrap_or_else(PoisonError::into_inner) = Localization::new(locale);
}

/// Localization
#[derive(Clone)]
pub(crate) struct Localization(pub(crate) Arc<FluentBundle<FluentResource>>);

impl Localization {
    pub(crate) fn new(locale: Locale) -> Self {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.into()]);
        bundle.set_use_isolating(false);
        for &source in sources(locale) {
            let resource = match FluentResource::try_new(source.to_owned()) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    if enabled!(Level::WARN) {
                        for error in errors {
                            error!(%error);
                        }
                    }
                    resource
                }
            };
            if let Err(errors) = bundle.add_resource(resource) {
                if enabled!(Level::WARN) {
                    for error in errors {
                        error!(%error);
                    }
                }
            }
        }
        Localization(Arc::new(bundle))
    }

    #[cfg(test)]
    pub(crate) fn locale(&self) -> Locale {
        match self.0.locales.first() {
            Some(locale) if *locale == RU => Locale::Ru,
            _ => Locale::En,
        }
    }

    pub(crate) fn content(&self, key: &str) -> Option<String> {
        let message = self.0.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = Vec::new();
        let content = self.0.format_pattern(pattern, None, &mut errors);
        for error in errors {
            error!(%error);
        }
        Some(content.into_owned())
    }

    pub(crate) fn titlecase(&self, key: &str) -> String {
        match self.content(key) {
            Some(content) => {
                let mut chars = content.chars();
                chars
                    .next()
                    .map(char::to_uppercase)
                    .into_iter()
                    .flatten()
                    .chain(chars)
                    .collect()
            }
            None => key.to_uppercase(),
        }
    }
}

/// Locale
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub(crate) const fn text(&self) -> &str {
        match self {
            Self::En => "🇺🇸",
            Self::Ru => "🇷🇺",
        }
    }
}

impl From<Locale> for LanguageIdentifier {
    fn from(value: Locale) -> Self {
        match value {
            Locale::En => EN,
            Locale::Ru => RU,
        }
    }
}

const fn sources(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &[source!("/ftl/en/app.ftl"), source!("/ftl/en/settings.ftl")],
        Locale::Ru => &[source!("/ftl/ru/app.ftl"), source!("/ftl/ru/settings.ftl")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_is_titlecased() {
        let localization = Localization::new(Locale::En);
        assert_eq!(localization.titlecase("add_row"), "Add row");
    }

    #[test]
    fn missing_key_falls_back_to_uppercase() {
        let localization = Localization::new(Locale::Ru);
        assert_eq!(localization.titlecase("no_such_key"), "NO_SUCH_KEY");
        assert_eq!(localization.locale(), Locale::Ru);
    }
}
