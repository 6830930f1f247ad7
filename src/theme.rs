//! Theme construction and scope lookup.
//!
//! A [`HighlightTheme`] is built once from a decoded list of
//! [`ThemeSetting`]s and is immutable afterwards. Construction expands
//! multi-scope settings, sorts broad-before-narrow, and inserts each
//! setting into a prefix trie; lookup walks the trie by scope component
//! and resolves to the deepest matched prefix.
//!
//! # Construction order
//!
//! Expanded settings are stable-sorted by (scope component count
//! ascending, parent-scope count ascending). Broad rules are therefore
//! inserted before narrow ones, so a narrow rule's node inherits the
//! broad rule's attributes at creation and its own overlays win per key.
//! Empty-scope (global) settings sort first; they style the root node
//! directly and never create trie children.
//!
//! Inheritance is a snapshot taken when a node is created, never
//! recomputed: attributes an ancestor gains later do not reach
//! already-created descendants. Lookup order makes this unobservable for
//! settings fed through [`HighlightTheme::new`], but it is part of the
//! construction contract and kept deliberately.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attribute::{LineStyle, ThemeAttribute, TokenStyle};
use crate::error::ThemeError;
use crate::scope::ScopeName;
use crate::setting::ThemeSetting;
use crate::trie::ThemeTrieElement;

/// The three attribute collections resolved for a scope query.
///
/// Collections are sets keyed by attribute key; iteration order is
/// deterministic (sorted by key) but not otherwise meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAttributes {
    /// Attributes applied unconditionally.
    pub attributes: Vec<ThemeAttribute>,
    /// Attributes applied only inside the selection.
    pub in_selection_attributes: Vec<ThemeAttribute>,
    /// Attributes applied only outside the selection.
    pub out_selection_attributes: Vec<ThemeAttribute>,
}

impl ResolvedAttributes {
    /// Fold the unconditional attributes into a token style.
    pub fn token_style(&self) -> TokenStyle {
        let mut token = TokenStyle::default();
        let mut line = LineStyle::default();
        for attr in &self.attributes {
            attr.apply(&mut token, &mut line);
        }
        token
    }

    /// Fold the unconditional attributes into a line style.
    pub fn line_style(&self) -> LineStyle {
        let mut token = TokenStyle::default();
        let mut line = LineStyle::default();
        for attr in &self.attributes {
            attr.apply(&mut token, &mut line);
        }
        line
    }
}

/// Wire form of a theme file: `{"settings": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeData {
    settings: Vec<ThemeSetting>,
}

/// A scope-resolution theme: owns the trie built from its settings and
/// answers attribute lookups by scope name.
///
/// Immutable after construction; lookups take `&self` and the theme is
/// `Send + Sync`, so a built theme can be queried from any number of
/// threads concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeData", into = "ThemeData")]
pub struct HighlightTheme {
    settings: Vec<ThemeSetting>,
    root: ThemeTrieElement,
}

impl HighlightTheme {
    /// Build a theme from a decoded settings list.
    pub fn new(settings: Vec<ThemeSetting>) -> Self {
        let root = Self::create_trie(&settings);
        Self { settings, root }
    }

    /// A theme with no settings; every lookup resolves to nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The settings this theme was built from, in original order.
    pub fn settings(&self) -> &[ThemeSetting] {
        &self.settings
    }

    /// Parse a theme from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|source| ThemeError::Parse { source })
    }

    /// Serialize the theme's settings back to a JSON document.
    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(|source| ThemeError::Serialize { source })
    }

    /// Load a theme from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ThemeError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the three attribute collections for a scope name.
    ///
    /// Longest-prefix match: descends the trie while components match and
    /// returns the resolved state at the deepest node reached. Unmatched
    /// trailing components never affect the result; a scope matching
    /// nothing at all resolves to the root's (possibly empty) attributes.
    pub fn all_attributes(&self, scope_name: &ScopeName) -> ResolvedAttributes {
        let mut curr = &self.root;
        for component in scope_name.components() {
            match curr.child(component) {
                Some(child) => curr = child,
                None => break,
            }
        }
        ResolvedAttributes {
            attributes: curr.attributes.values().cloned().collect(),
            in_selection_attributes: curr.in_selection_attributes.values().cloned().collect(),
            out_selection_attributes: curr.out_selection_attributes.values().cloned().collect(),
        }
    }

    /// Expand multi-scope settings into single-scope settings and sort
    /// broad-before-narrow.
    ///
    /// Expansion preserves input order; the sort is stable with primary
    /// key scope component count and secondary key parent-scope count,
    /// both ascending.
    fn sort_settings(settings: &[ThemeSetting]) -> Vec<ThemeSetting> {
        let mut expanded = Vec::new();
        for setting in settings {
            for scope in &setting.scopes {
                expanded.push(ThemeSetting {
                    scopes: vec![scope.clone()],
                    parent_scopes: setting.parent_scopes.clone(),
                    attributes: setting.attributes.clone(),
                    in_selection_attributes: setting.in_selection_attributes.clone(),
                    out_selection_attributes: setting.out_selection_attributes.clone(),
                });
            }
        }
        expanded.sort_by_key(|setting| {
            (
                setting.scope().map_or(0, ScopeName::len),
                setting.parent_scopes.len(),
            )
        });
        expanded
    }

    fn create_trie(settings: &[ThemeSetting]) -> ThemeTrieElement {
        let mut sorted = Self::sort_settings(settings);
        let mut root = ThemeTrieElement::default();

        // Global (empty-scope) settings sort first; each one styles the
        // root directly with all three of its collections, in order.
        let globals = sorted
            .iter()
            .take_while(|setting| setting.scope().is_some_and(ScopeName::is_empty))
            .count();
        for setting in sorted.drain(..globals) {
            root.overlay(&setting);
        }

        for setting in &sorted {
            Self::add_setting_to_trie(&mut root, setting);
        }

        tracing::debug!(
            settings = settings.len(),
            expanded = sorted.len() + globals,
            globals,
            "built highlight theme trie"
        );
        root
    }

    /// Insert one expanded (single-scope, non-global) setting.
    fn add_setting_to_trie(root: &mut ThemeTrieElement, setting: &ThemeSetting) {
        let Some(scope) = setting.scope() else {
            return;
        };
        if scope.is_empty() {
            // Globals are consumed before insertion; reject rather than
            // walk a zero-component path.
            tracing::warn!("empty scope selector reached trie insertion, ignoring");
            return;
        }
        if !setting.parent_scopes.is_empty() {
            tracing::warn!(scope = %scope, "parent scope constraints are not implemented");
        }

        let mut curr = root;
        for component in scope.components() {
            curr = curr.descend_or_create(component);
        }
        curr.overlay(setting);
    }
}

impl From<ThemeData> for HighlightTheme {
    fn from(data: ThemeData) -> Self {
        Self::new(data.settings)
    }
}

impl From<HighlightTheme> for ThemeData {
    fn from(theme: HighlightTheme) -> Self {
        Self {
            settings: theme.settings,
        }
    }
}
