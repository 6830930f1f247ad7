//! Prefix-trie nodes holding resolved theme attributes.
//!
//! One node exists per scope-path prefix that some setting has touched.
//! Each node stores the *resolved* attribute state at its path: the
//! parent's resolved state as of node creation, overlaid per-key with
//! every setting terminating at the node. The snapshot is taken exactly
//! once, when the node is created; attributes added to an ancestor later
//! do not propagate to already-created descendants.

use std::collections::{BTreeMap, HashMap};

use crate::attribute::ThemeAttribute;
use crate::setting::ThemeSetting;

/// Resolved attributes at a node, keyed by attribute key so that later
/// overlays replace earlier ones per key. Ordered map keeps lookup output
/// deterministic.
pub(crate) type AttributeMap = BTreeMap<&'static str, ThemeAttribute>;

/// One trie node per scope-path prefix. Construction is strictly
/// additive: nodes are reused across settings, never replaced or deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ThemeTrieElement {
    pub(crate) children: HashMap<String, ThemeTrieElement>,
    pub(crate) attributes: AttributeMap,
    pub(crate) in_selection_attributes: AttributeMap,
    pub(crate) out_selection_attributes: AttributeMap,
}

impl ThemeTrieElement {
    /// Descend into the child for `component`, creating it if missing.
    ///
    /// A freshly created child inherits a snapshot of this node's three
    /// resolved maps; an existing child is returned untouched.
    pub(crate) fn descend_or_create(&mut self, component: &str) -> &mut ThemeTrieElement {
        let attributes = &self.attributes;
        let in_selection = &self.in_selection_attributes;
        let out_selection = &self.out_selection_attributes;
        self.children
            .entry(component.to_string())
            .or_insert_with(|| ThemeTrieElement {
                children: HashMap::new(),
                attributes: attributes.clone(),
                in_selection_attributes: in_selection.clone(),
                out_selection_attributes: out_selection.clone(),
            })
    }

    pub(crate) fn child(&self, component: &str) -> Option<&ThemeTrieElement> {
        self.children.get(component)
    }

    /// Upsert the setting's three collections into this node, key by key.
    /// Attributes not named by the setting keep their current value.
    pub(crate) fn overlay(&mut self, setting: &ThemeSetting) {
        for attr in &setting.attributes {
            self.attributes.insert(attr.key(), attr.clone());
        }
        for attr in &setting.in_selection_attributes {
            self.in_selection_attributes.insert(attr.key(), attr.clone());
        }
        for attr in &setting.out_selection_attributes {
            self.out_selection_attributes
                .insert(attr.key(), attr.clone());
        }
    }
}
