//! Interactive control declarations and the per-pass selection snapshot.

use anyhow::bail;
use std::collections::BTreeMap;

/// A radio group or select box with a fixed option set.
///
/// Controls are declared fresh on every pass, so an option set that
/// depends on another control's value (the iris y-axis list) is always
/// computed from current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<String>,
}

impl Control {
    pub fn new(id: &'static str, prompt: &'static str, options: Vec<String>) -> Self {
        Self { id, prompt, options }
    }

    /// The effective choice for this pass.
    ///
    /// Returns the stored selection when it is still a member of the
    /// option set; otherwise falls back to the first option. The stored
    /// value can go stale when a dependent option set shifts under it,
    /// and this clamp is what keeps the inconsistency from surviving
    /// the pass. An empty option set is an error.
    pub fn resolve(&self, selections: &Selections) -> anyhow::Result<String> {
        let Some(first) = self.options.first() else {
            bail!("control '{}' has an empty option set", self.id);
        };
        Ok(match selections.choice(self.id) {
            Some(choice) if self.options.iter().any(|o| o == choice) => choice.to_string(),
            Some(stale) => {
                log::debug!(
                    "[TDE Debug] control '{}': stale choice '{}' clamped to '{}'",
                    self.id,
                    stale,
                    first
                );
                first.clone()
            }
            None => first.clone(),
        })
    }
}

/// A boolean checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub id: &'static str,
    pub prompt: &'static str,
}

impl Toggle {
    pub fn new(id: &'static str, prompt: &'static str) -> Self {
        Self { id, prompt }
    }

    /// Unset toggles read as false.
    pub fn resolve(&self, selections: &Selections) -> bool {
        selections.toggle(self.id)
    }
}

/// Snapshot of every control's current value at the start of a pass.
///
/// The hosting UI owns the live values; a pass receives an immutable
/// copy and cannot write back. Missing entries mean the user has not
/// touched that control yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    choices: BTreeMap<String, String>,
    toggles: BTreeMap<String, bool>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(mut self, id: &str, value: &str) -> Self {
        self.set_choice(id, value);
        self
    }

    pub fn with_toggle(mut self, id: &str, value: bool) -> Self {
        self.set_toggle(id, value);
        self
    }

    pub fn set_choice(&mut self, id: &str, value: &str) {
        self.choices.insert(id.to_string(), value.to_string());
    }

    pub fn set_toggle(&mut self, id: &str, value: bool) {
        self.toggles.insert(id.to_string(), value);
    }

    pub fn choice(&self, id: &str) -> Option<&str> {
        self.choices.get(id).map(|s| s.as_str())
    }

    pub fn toggle(&self, id: &str) -> bool {
        self.toggles.get(id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Control {
        Control::new("pick", "Pick one:", vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn untouched_control_resolves_to_first_option() {
        assert_eq!(letters().resolve(&Selections::new()).unwrap(), "a");
    }

    #[test]
    fn valid_choice_is_kept() {
        let sel = Selections::new().with_choice("pick", "b");
        assert_eq!(letters().resolve(&sel).unwrap(), "b");
    }

    #[test]
    fn stale_choice_is_clamped_to_first_option() {
        let sel = Selections::new().with_choice("pick", "gone");
        assert_eq!(letters().resolve(&sel).unwrap(), "a");
    }

    #[test]
    fn resolved_value_is_always_in_the_option_set() {
        let ctl = letters();
        for stored in ["a", "b", "c", "z", ""] {
            let sel = Selections::new().with_choice("pick", stored);
            let resolved = ctl.resolve(&sel).unwrap();
            assert!(ctl.options.contains(&resolved));
        }
    }

    #[test]
    fn empty_option_set_is_an_error() {
        let ctl = Control::new("none", "Nothing:", Vec::new());
        assert!(ctl.resolve(&Selections::new()).is_err());
    }

    #[test]
    fn unset_toggle_reads_false() {
        let t = Toggle::new("flag", "Enable?");
        assert!(!t.resolve(&Selections::new()));
        assert!(t.resolve(&Selections::new().with_toggle("flag", true)));
    }
}
