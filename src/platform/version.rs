//! Loose release ordering.
//!
//! Release strings from distributions and tools are not semver: "5",
//! "4test2", "22.04", "1.0.6-beta". A [`LooseVersion`] splits the string into
//! runs of digits and runs of letters and compares the runs in order.
//! Numbers sort before words, and a string that is a prefix of another sorts
//! first, so "5" is older than "5test2".

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Component {
    Number(u64),
    Word(String),
}

impl Component {
    fn from_run(run: &str) -> Self {
        match run.parse::<u64>() {
            Ok(n) => Component::Number(n),
            Err(_) => Component::Word(run.to_lowercase()),
        }
    }
}

/// A release string compared component by component.
#[derive(Debug, Clone)]
pub struct LooseVersion {
    raw: String,
    components: Vec<Component>,
}

impl LooseVersion {
    /// Parse a release string. Separators are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut components = Vec::new();
        let mut run = String::new();
        let mut run_is_digit = false;

        for c in raw.chars() {
            if !c.is_ascii_alphanumeric() {
                if !run.is_empty() {
                    components.push(Component::from_run(&run));
                    run.clear();
                }
                continue;
            }
            let is_digit = c.is_ascii_digit();
            if !run.is_empty() && is_digit != run_is_digit {
                components.push(Component::from_run(&run));
                run.clear();
            }
            run_is_digit = is_digit;
            run.push(c);
        }
        if !run.is_empty() {
            components.push(Component::from_run(&run));
        }

        Self {
            raw: raw.to_string(),
            components,
        }
    }

    /// The string this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for LooseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for LooseVersion {}

impl Ord for LooseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for LooseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Whether `mine` is at least as new as `theirs`.
pub fn at_least(mine: &str, theirs: &str) -> bool {
    LooseVersion::parse(mine) >= LooseVersion::parse(theirs)
}
