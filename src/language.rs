/// Reply language sent with each request. Closed set; only affects the
/// `lang` field of subsequent sends, never already-rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Spanish];

    /// Wire code carried in the request body.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Spanish => "es",
        }
    }

    /// Label shown in the header selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Spanish => "Español",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_covers_all_codes() {
        let mut lang = Language::default();
        let mut seen = Vec::new();
        for _ in 0..Language::ALL.len() {
            seen.push(lang.code());
            lang = lang.next();
        }
        assert_eq!(seen, vec!["en", "hi", "es"]);
        assert_eq!(lang, Language::English);
    }
}
