//! Theme settings: style rules binding scope selectors to attributes.

use serde::{Deserialize, Serialize};

use crate::attribute::ThemeAttribute;
use crate::scope::ScopeName;

/// A style rule associating scope selectors with attribute overlays.
///
/// A setting naming N scopes is equivalent to N single-scope settings
/// sharing the same attribute collections; expansion happens during theme
/// construction. `parent_scopes` declares required-ancestor context; it is
/// stored and serialized but not enforced during resolution (it does
/// participate in the construction-order tie-break).
///
/// Field names follow the original theme-file format (`parentScopes`,
/// `inSelectionAttributes`, `outSelectionAttributes`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSetting {
    #[serde(default)]
    pub scopes: Vec<ScopeName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_scopes: Vec<ScopeName>,
    /// Attributes applied to matching tokens unconditionally.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ThemeAttribute>,
    /// Attributes applied only inside the editor selection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_selection_attributes: Vec<ThemeAttribute>,
    /// Attributes applied only outside the editor selection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub out_selection_attributes: Vec<ThemeAttribute>,
}

impl ThemeSetting {
    /// A setting with normal attributes only.
    pub fn new(scopes: Vec<ScopeName>, attributes: Vec<ThemeAttribute>) -> Self {
        Self {
            scopes,
            attributes,
            ..Self::default()
        }
    }

    /// The single selector of an expanded setting, if any.
    pub(crate) fn scope(&self) -> Option<&ScopeName> {
        self.scopes.first()
    }
}
