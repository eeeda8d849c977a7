use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

type Table = HashMap<&'static str, &'static str>;

static EN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("loading.loading", "RSS is loading"),
        ("loading.success", "RSS loading successfully"),
        ("errors.notURL", "Must be valid url"),
        ("errors.exists", "RSS already exists"),
        ("errors.notRSS", "This source doesn't contain valid RSS"),
        ("errors.network", "Network error"),
        ("errors.timeout", "Time is out for request"),
        ("errors.unknown", "Something goes wrong"),
        ("feeds", "Feeds"),
        ("posts", "Posts"),
        ("preview", "Preview"),
        ("close", "Close"),
        ("readFull", "Read completely"),
    ])
});

static RU: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("loading.loading", "RSS загружается"),
        ("loading.success", "RSS успешно загружен"),
        ("errors.notURL", "Ссылка должна быть валидным URL"),
        ("errors.exists", "RSS уже существует"),
        ("errors.notRSS", "Ресурс не содержит валидный RSS"),
        ("errors.network", "Ошибка сети"),
        ("errors.timeout", "Время ожидания запроса истекло"),
        ("errors.unknown", "Неизвестная ошибка"),
        ("feeds", "Фиды"),
        ("posts", "Посты"),
        ("preview", "Просмотр"),
        ("close", "Закрыть"),
        ("readFull", "Читать полностью"),
    ])
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Tolerant of region and encoding tags ("ru_RU.UTF-8").
    pub fn parse(value: &str) -> Option<Self> {
        let lang = value.split(['-', '_', '.']).next().unwrap_or("");
        match lang.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// Picks the ui locale from the environment, English otherwise.
    pub fn detect() -> Self {
        env::var("LANG")
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    fn table(self) -> &'static Table {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Resolves the first known key of the chain; the last key itself is
    /// the final fallback, so a lookup never comes back empty.
    pub fn t(&self, keys: &[&str]) -> String {
        for key in keys {
            if let Some(text) = self.locale.table().get(key) {
                return (*text).to_owned();
            }
        }
        keys.last().copied().unwrap_or_default().to_owned()
    }
}
