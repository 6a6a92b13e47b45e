//!
//! Directive evaluation: fold a style document into the effective rule set.
//!
//! Directives apply top to bottom, the way the consuming linter evaluates
//! them: later directives win over earlier ones, `rule` replaces any earlier
//! parameter overrides for that rule wholesale, and identifiers that resolve
//! to nothing in the registry change nothing here (validation reports them).

use crate::directive::{DirectiveKind, ParamMap};
use crate::registry;
use crate::style::StyleDocument;
use indexmap::{IndexMap, IndexSet};

/// One rule in the effective set: its canonical identifier plus whatever
/// parameter overrides the style applied. Defaults are not materialized
/// here; ask [`EffectiveRule::effective_params`] when you need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRule {
    pub id: String,
    pub overrides: ParamMap,
}

impl EffectiveRule {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            overrides: ParamMap::new(),
        }
    }

    /// Registry defaults with this rule's overrides applied on top. Override
    /// keys the registry does not know are kept; the linter may understand
    /// more parameters than the registry records.
    pub fn effective_params(&self) -> ParamMap {
        let mut params = registry::resolve(&self.id).map(|info| info.default_params()).unwrap_or_default();
        for (key, value) in &self.overrides {
            params.insert(key.clone(), value.clone());
        }
        params
    }
}

/// The outcome of evaluating a style document: which rules are on, with what
/// overrides, and which were explicitly switched off.
#[derive(Debug, Clone, Default)]
pub struct EffectiveStyle {
    enabled_all: bool,
    rules: IndexMap<String, EffectiveRule>,
    excluded: Vec<String>,
}

impl EffectiveStyle {
    /// Evaluate `doc` against the rule registry.
    pub fn resolve(doc: &StyleDocument) -> Self {
        let mut enabled_all = false;
        let mut rules: IndexMap<String, EffectiveRule> = IndexMap::new();
        let mut ever_excluded: IndexSet<String> = IndexSet::new();

        for directive in doc.directives() {
            match &directive.kind {
                DirectiveKind::All => {
                    enabled_all = true;
                    for info in registry::all_rules() {
                        rules.entry(info.id.to_string()).or_insert_with(|| EffectiveRule::new(info.id));
                    }
                }
                DirectiveKind::Tag { name } => {
                    for info in registry::rules_with_tag(name) {
                        rules.entry(info.id.to_string()).or_insert_with(|| EffectiveRule::new(info.id));
                    }
                }
                DirectiveKind::ExcludeTag { name } => {
                    for info in registry::rules_with_tag(name) {
                        rules.shift_remove(info.id);
                        ever_excluded.insert(info.id.to_string());
                    }
                }
                DirectiveKind::Rule { id, params } => {
                    let Some(info) = registry::resolve(id) else {
                        continue;
                    };
                    let entry = rules.entry(info.id.to_string()).or_insert_with(|| EffectiveRule::new(info.id));
                    entry.overrides = params.clone();
                }
                DirectiveKind::ExcludeRule { id } => {
                    let Some(info) = registry::resolve(id) else {
                        continue;
                    };
                    rules.shift_remove(info.id);
                    ever_excluded.insert(info.id.to_string());
                }
            }
        }

        // An exclusion only counts if nothing re-enabled the rule afterwards
        let excluded = ever_excluded.into_iter().filter(|id| !rules.contains_key(id.as_str())).collect();

        Self {
            enabled_all,
            rules,
            excluded,
        }
    }

    /// Whether an `all` directive was evaluated. Exporters use this to pick
    /// the right baseline in formats with a default-on/default-off switch.
    pub fn enabled_all(&self) -> bool {
        self.enabled_all
    }

    /// Enabled rules in the order they first entered the set.
    pub fn rules(&self) -> impl Iterator<Item = &EffectiveRule> {
        self.rules.values()
    }

    /// Canonical identifiers of rules that were switched off and stayed off.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn is_enabled(&self, query: &str) -> bool {
        self.lookup(query).is_some()
    }

    pub fn get(&self, query: &str) -> Option<&EffectiveRule> {
        self.lookup(query)
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn lookup(&self, query: &str) -> Option<&EffectiveRule> {
        let key = registry::canonical_id(query).unwrap_or(query);
        self.rules.get(key)
    }
}
