// ABOUTME: Minimal INI reader for the credential file.
// ABOUTME: Parses sections and key/value pairs with case-insensitive keys.

use std::collections::HashMap;

/// Parsed INI document: section name -> (lowercased key -> raw value).
#[derive(Debug, Default)]
pub struct Ini {
    sections: HashMap<String, HashMap<String, String>>,
}

impl Ini {
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut ini = Ini::default();
        let mut current: Option<String> = None;
        let mut last_key: Option<String> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            // Indented line continues the previous value
            let indented = raw_line.starts_with(' ') || raw_line.starts_with('\t');
            if indented {
                if let (Some(section), Some(key)) = (&current, &last_key) {
                    if let Some(value) = ini
                        .sections
                        .get_mut(section)
                        .and_then(|entries| entries.get_mut(key))
                    {
                        value.push('\n');
                        value.push_str(trimmed);
                        continue;
                    }
                }
            }

            if let Some(name) = trimmed.strip_prefix('[') {
                let name = name
                    .strip_suffix(']')
                    .ok_or_else(|| format!("line {line_no}: unterminated section header"))?;
                let name = name.trim().to_string();
                ini.sections.entry(name.clone()).or_default();
                current = Some(name);
                last_key = None;
                continue;
            }

            let section = current
                .as_ref()
                .ok_or_else(|| format!("line {line_no}: key outside of any section"))?;

            let split_at = trimmed
                .find(['=', ':'])
                .ok_or_else(|| format!("line {line_no}: expected `key = value`"))?;
            let key = trimmed[..split_at].trim().to_lowercase();
            let value = trimmed[split_at + 1..].trim().to_string();

            if key.is_empty() {
                return Err(format!("line {line_no}: empty key"));
            }

            ini.sections
                .entry(section.clone())
                .or_default()
                .insert(key.clone(), value);
            last_key = Some(key);
        }

        Ok(ini)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Raw value of `key` in `section`. Keys are matched case-insensitively.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(&key.to_lowercase()))
            .map(String::as_str)
    }
}
