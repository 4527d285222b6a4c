//! Noise masks: fields permitted to differ between two recordings.
//!
//! A mask maps a field path (e.g. `resp.header.date`, `resp.body.token`) to
//! a list of regular-expression rules. An empty rule list masks the field
//! unconditionally; a non-empty list masks a difference only when both
//! recorded values match at least one rule. Masks come in two layers: one
//! global mask and optional per-session overrides, resolved per session by
//! [`resolve`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field-path to matching-rule mapping.
///
/// Sorted map so resolved masks have a stable iteration order.
pub type NoiseMask = BTreeMap<String, Vec<String>>;

/// Noise configuration as loaded from `rebench.yaml`: a global mask plus a
/// per-session override table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    /// Mask applied to every session.
    #[serde(default)]
    pub global: NoiseMask,
    /// Per-session masks; entries override global entries of the same path.
    #[serde(default)]
    pub sessions: BTreeMap<String, NoiseMask>,
}

impl NoiseSettings {
    /// Resolve the effective mask for one session.
    #[must_use]
    pub fn for_session(&self, session: &str) -> NoiseMask {
        resolve(&self.global, self.sessions.get(session))
    }
}

/// Left-join the global mask with a session override.
///
/// Every global path not present in the override passes through unchanged;
/// every override path is present in the result with the override's rules.
/// Pure: neither input is modified.
#[must_use]
pub fn resolve(global: &NoiseMask, session_override: Option<&NoiseMask>) -> NoiseMask {
    let mut resolved = global.clone();
    if let Some(overrides) = session_override {
        for (path, rules) in overrides {
            resolved.insert(path.clone(), rules.clone());
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(entries: &[(&str, &[&str])]) -> NoiseMask {
        entries
            .iter()
            .map(|(path, rules)| {
                ((*path).to_string(), rules.iter().map(|r| (*r).to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn resolve_without_override_is_identity() {
        let global = mask(&[("resp.header.date", &[]), ("resp.body.token", &[".*"])]);
        assert_eq!(resolve(&global, None), global);
    }

    #[test]
    fn resolve_empty_global_takes_override_verbatim() {
        let overrides = mask(&[("req.body.ts", &["[0-9]+"])]);
        assert_eq!(resolve(&NoiseMask::new(), Some(&overrides)), overrides);
    }

    #[test]
    fn override_wins_on_overlapping_path() {
        let global = mask(&[("resp.body.token", &["global-rule"]), ("resp.header.date", &[])]);
        let overrides = mask(&[("resp.body.token", &["session-rule"])]);

        let resolved = resolve(&global, Some(&overrides));

        assert_eq!(resolved["resp.body.token"], vec!["session-rule".to_string()]);
        // Global-only paths pass through unchanged.
        assert!(resolved["resp.header.date"].is_empty());
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn override_only_paths_are_added() {
        let global = mask(&[("resp.header.date", &[])]);
        let overrides = mask(&[("req.url", &[])]);

        let resolved = resolve(&global, Some(&overrides));

        assert!(resolved.contains_key("resp.header.date"));
        assert!(resolved.contains_key("req.url"));
    }

    #[test]
    fn resolve_is_idempotent_over_the_same_override() {
        let global = mask(&[("resp.body.token", &["a"])]);
        let overrides = mask(&[("resp.body.token", &["b"]), ("req.url", &[])]);

        let once = resolve(&global, Some(&overrides));
        let twice = resolve(&once, Some(&overrides));
        assert_eq!(once, twice);
    }

    #[test]
    fn settings_for_session_falls_back_to_global() {
        let settings = NoiseSettings {
            global: mask(&[("resp.header.date", &[])]),
            sessions: BTreeMap::from([("login".to_string(), mask(&[("resp.body.ts", &[])]))]),
        };

        assert_eq!(settings.for_session("checkout"), settings.global);
        let login = settings.for_session("login");
        assert!(login.contains_key("resp.header.date"));
        assert!(login.contains_key("resp.body.ts"));
    }

    #[test]
    fn settings_deserialize_with_all_fields_optional() {
        let settings: NoiseSettings = serde_yaml::from_str("{}").expect("deserialize");
        assert!(settings.global.is_empty());
        assert!(settings.sessions.is_empty());
    }
}
