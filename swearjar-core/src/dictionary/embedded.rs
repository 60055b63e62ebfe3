use super::{Dictionary, DictionarySource};
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static EMBEDDED_DICTIONARIES: OnceLock<HashMap<String, Dictionary>> = OnceLock::new();

macro_rules! embed_dictionary {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn parse_embedded(code: &str, toml_content: &str) -> Result<Dictionary> {
    let dictionary = Dictionary::from_toml_str(toml_content)?;

    if dictionary.code() != code {
        return Err(CoreError::Dictionary(format!(
            "dictionary code mismatch: expected {code}, got {}",
            dictionary.code()
        )));
    }

    Ok(dictionary)
}

fn load_embedded_dictionaries() -> HashMap<String, Dictionary> {
    let embedded = [
        embed_dictionary!("en", "../../dictionaries/en.toml"),
        embed_dictionary!("pt-br", "../../dictionaries/pt-br.toml"),
    ];

    let mut dictionaries = HashMap::new();
    for (code, toml_content) in embedded {
        match parse_embedded(code, toml_content) {
            Ok(dictionary) => {
                dictionaries.insert(code.to_string(), dictionary);
            }
            Err(e) => log::error!("skipping embedded dictionary {code}: {e}"),
        }
    }

    log::debug!("loaded {} embedded dictionaries", dictionaries.len());
    dictionaries
}

/// Dictionaries shipped with the crate: `en` and `pt-br`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionaries;

impl EmbeddedDictionaries {
    fn all() -> &'static HashMap<String, Dictionary> {
        EMBEDDED_DICTIONARIES.get_or_init(load_embedded_dictionaries)
    }

    /// Look up an embedded dictionary with `'static` lifetime
    pub fn get(code: &str) -> Option<&'static Dictionary> {
        Self::all().get(code)
    }
}

impl DictionarySource for EmbeddedDictionaries {
    fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        Self::get(code)
    }

    fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Self::all().keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
