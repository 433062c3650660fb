//! Document-level settings: title, description, language, theme colour and fonts.
//!
//! The values ship inside the binary as `assets/site.json` and are validated
//! once when the app mounts.

use serde::{Deserialize, Serialize};
use crate::error::{SiteConfigError, SiteConfigResult};

static SITE_JSON: &str = include_str!("../assets/site.json");

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    pub css_variable: String,
    pub fallback: String,
    pub weights: Vec<u16>,
}

impl FontFace {
    /// `family=` query value for the Google Fonts css2 endpoint
    fn query(&self) -> String {
        let family = self.family.replace(' ', "+");
        if self.weights.is_empty() {
            return family;
        }
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();
        let weights: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
        format!("{}:wght@{}", family, weights.join(";"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub theme_color: String,
    #[serde(default)]
    pub fonts: Vec<FontFace>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TRIBE Club - Running Santa Barbara".to_string(),
            description: "Club de running de Santa Barbara. Nos reunimos los miercoles y viernes a correr. Comunidad, apoyo y crecimiento personal.".to_string(),
            lang: "es".to_string(),
            theme_color: "#0d0d0d".to_string(),
            fonts: vec![
                FontFace {
                    family: "DM Sans".to_string(),
                    css_variable: "--font-dm-sans".to_string(),
                    fallback: "sans-serif".to_string(),
                    weights: vec![400, 500, 700],
                },
                FontFace {
                    family: "Space Grotesk".to_string(),
                    css_variable: "--font-space-grotesk".to_string(),
                    fallback: "sans-serif".to_string(),
                    weights: vec![400, 500, 600, 700],
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Parse and validate the config embedded at build time
    pub fn load() -> SiteConfigResult<Self> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> SiteConfigResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(SiteConfigError::EmptyField("title"));
        }
        if self.lang.trim().is_empty() {
            return Err(SiteConfigError::EmptyField("lang"));
        }
        if !is_language_tag(&self.lang) {
            return Err(SiteConfigError::InvalidLang(self.lang.clone()));
        }
        if !is_hex_color(&self.theme_color) {
            return Err(SiteConfigError::InvalidThemeColor(self.theme_color.clone()));
        }
        for font in &self.fonts {
            if font.family.trim().is_empty() {
                return Err(SiteConfigError::EmptyField("fonts.family"));
            }
            if !font.css_variable.starts_with("--") || font.css_variable.len() == 2 {
                return Err(SiteConfigError::InvalidFontVariable(font.css_variable.clone()));
            }
        }
        Ok(())
    }

    /// Stylesheet URL requesting every configured font, or `None` without fonts
    pub fn google_fonts_href(&self) -> Option<String> {
        if self.fonts.is_empty() {
            return None;
        }
        let families: Vec<String> = self
            .fonts
            .iter()
            .map(|font| format!("family={}", font.query()))
            .collect();
        Some(format!("{}?{}&display=swap", GOOGLE_FONTS_CSS, families.join("&")))
    }

    /// Inline style declaring one CSS custom property per font
    pub fn font_variables(&self) -> String {
        self.fonts
            .iter()
            .map(|font| format!("{}: '{}', {};", font.css_variable, font.family, font.fallback))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// BCP 47 shape only: letters and hyphens, e.g. `es` or `es-AR`
fn is_language_tag(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.lang, "es");
        assert_eq!(config.theme_color, "#0d0d0d");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ \"title\": ").unwrap_err();
        assert!(matches!(err, SiteConfigError::Parse(_)));
    }

    #[test]
    fn rejects_bad_theme_color() {
        let mut config = SiteConfig::default();
        for bad in ["0d0d0d", "#0d0d0", "#zzzzzz", ""] {
            config.theme_color = bad.to_string();
            assert!(matches!(
                config.validate(),
                Err(SiteConfigError::InvalidThemeColor(_))
            ));
        }
    }

    #[test]
    fn rejects_empty_title_and_lang() {
        let mut config = SiteConfig::default();
        config.title = "   ".to_string();
        assert!(matches!(config.validate(), Err(SiteConfigError::EmptyField("title"))));

        let mut config = SiteConfig::default();
        config.lang = String::new();
        assert!(matches!(config.validate(), Err(SiteConfigError::EmptyField("lang"))));
    }

    #[test]
    fn rejects_lang_outside_letters_and_hyphens() {
        let mut config = SiteConfig::default();
        for bad in ["es'; alert(1); '", "es_AR", "es AR", "ñ"] {
            config.lang = bad.to_string();
            assert!(matches!(config.validate(), Err(SiteConfigError::InvalidLang(_))));
        }

        config.lang = "es-AR".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_font_variable_without_prefix() {
        let mut config = SiteConfig::default();
        config.fonts[0].css_variable = "font-dm-sans".to_string();
        assert!(matches!(
            config.validate(),
            Err(SiteConfigError::InvalidFontVariable(_))
        ));
    }

    #[test]
    fn fonts_are_optional() {
        let json = r##"{
            "title": "TRIBE",
            "description": "",
            "lang": "es",
            "theme_color": "#FF5500"
        }"##;
        let config = SiteConfig::from_json(json).unwrap();
        assert!(config.fonts.is_empty());
        assert_eq!(config.google_fonts_href(), None);
        assert_eq!(config.font_variables(), "");
    }

    #[test]
    fn google_fonts_href_lists_every_family() {
        let href = SiteConfig::default().google_fonts_href().unwrap();
        assert_eq!(
            href,
            "https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;700&family=Space+Grotesk:wght@400;500;600;700&display=swap"
        );
    }

    #[test]
    fn font_variables_declare_custom_properties() {
        let style = SiteConfig::default().font_variables();
        assert!(style.contains("--font-dm-sans: 'DM Sans', sans-serif;"));
        assert!(style.contains("--font-space-grotesk: 'Space Grotesk', sans-serif;"));
    }
}
