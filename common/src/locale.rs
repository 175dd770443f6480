use std::str::FromStr;

use tracing::debug;

use api::locale::{LOCALE_COOKIE, Locale};

// one year, so a visitor who switched language keeps it
pub const LOCALE_COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

// pull a single cookie out of a Cookie header ("a=1; locale=es; b=2")
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim_matches('"'))
}

// Accept-Language, best quality first; ties keep header order
//
// "es-ES,es;q=0.9,en;q=0.8" -> [es-ES, es, en]
fn language_ranges(header: &str) -> Vec<&str> {
    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|item| {
            let mut parts = item.split(';');
            let tag = parts.next()?.trim();

            if tag.is_empty() {
                return None;
            }

            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            Some((tag, quality))
        })
        .filter(|(_, q)| *q > 0.0)
        .collect();

    // sort_by is stable, so equal qualities stay in header order
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges.into_iter().map(|(tag, _)| tag).collect()
}

fn from_accept_language(header: &str) -> Option<Locale> {
    language_ranges(header).into_iter().find_map(|tag| {
        // language tags are case-insensitive, unlike the cookie
        let base = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();
        Locale::from_str(&base).ok()
    })
}

// cookie first, then Accept-Language by base language, then english
//
// an unknown or malformed cookie is ignored rather than rejected
pub fn resolve_locale(cookie_header: Option<&str>, accept_language: Option<&str>) -> Locale {
    let from_cookie = cookie_header
        .and_then(|header| cookie_value(header, LOCALE_COOKIE))
        .and_then(|value| match Locale::from_str(value) {
            Ok(locale) => Some(locale),
            Err(err) => {
                debug!(error = %err, "ignoring locale cookie");
                None
            }
        });

    from_cookie
        .or_else(|| accept_language.and_then(from_accept_language))
        .unwrap_or_default()
}

pub fn locale_cookie(locale: Locale) -> String {
    format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE}; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wins_over_header() {
        assert_eq!(
            resolve_locale(Some("theme=dark; locale=it"), Some("es-ES,es;q=0.9")),
            Locale::It
        );
    }

    #[test]
    fn bad_cookie_falls_back_to_header() {
        assert_eq!(
            resolve_locale(Some("locale=klingon"), Some("es-MX,en;q=0.5")),
            Locale::Es
        );
    }

    #[test]
    fn header_quality_ordering_is_respected() {
        assert_eq!(
            resolve_locale(None, Some("fr;q=0.9, it;q=0.7, es;q=0.8")),
            Locale::Es
        );
        assert_eq!(resolve_locale(None, Some("de, it-CH;q=0.2")), Locale::It);
        assert_eq!(resolve_locale(None, Some("es;q=0, it;q=0.1")), Locale::It);
    }

    #[test]
    fn nothing_usable_means_english() {
        assert_eq!(resolve_locale(None, None), Locale::En);
        assert_eq!(resolve_locale(Some("locale="), Some("fr, de")), Locale::En);
        assert_eq!(resolve_locale(Some(";;="), Some(",,;q=")), Locale::En);
    }

    #[test]
    fn cookie_must_hold_an_exact_code() {
        assert_eq!(resolve_locale(Some("locale=EN"), Some("it")), Locale::It);
        assert_eq!(resolve_locale(Some("locale= es"), Some("it")), Locale::It);
        assert_eq!(resolve_locale(Some("locale=es"), Some("it")), Locale::Es);
    }

    #[test]
    fn header_tags_match_regardless_of_case() {
        assert_eq!(resolve_locale(None, Some("ES-mx, en;q=0.5")), Locale::Es);
    }

    #[test]
    fn cookie_value_handles_spacing_and_quotes() {
        assert_eq!(cookie_value(r#"a=1;  locale="es" ;b=2"#, "locale"), Some("es"));
        assert_eq!(cookie_value("a=1", "locale"), None);
    }

    #[test]
    fn set_cookie_is_site_wide() {
        assert_eq!(
            locale_cookie(Locale::Es),
            "locale=es; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }
}
