//! Scope-resolved syntax highlighting themes.
//!
//! Maps hierarchical lexical scope names (e.g. `source.rust.keyword.control`)
//! to style attributes using a prefix trie with longest-match semantics and
//! layered attribute inheritance. A theme is built once from an ordered list
//! of settings and queried read-only afterwards:
//!
//! ```
//! use scope_theme::{HighlightTheme, ScopeName, ThemeAttribute, ThemeSetting};
//!
//! let theme = HighlightTheme::new(vec![
//!     ThemeSetting::new(
//!         vec!["comment".parse().unwrap()],
//!         vec![ThemeAttribute::Italic],
//!     ),
//!     ThemeSetting::new(
//!         vec!["comment.line".parse().unwrap()],
//!         vec![ThemeAttribute::Ligature { ligature: 0 }],
//!     ),
//! ]);
//!
//! // Longest-prefix match: "double-slash" has no node of its own, so the
//! // query resolves at "comment.line" and inherits "comment"'s italic.
//! let scope: ScopeName = "comment.line.double-slash".parse().unwrap();
//! let resolved = theme.all_attributes(&scope);
//! assert!(resolved.token_style().italic);
//! assert_eq!(resolved.token_style().ligature, Some(0));
//! ```

pub mod attribute;
pub mod color;
pub mod error;
pub mod scope;
pub mod setting;
pub mod theme;
mod trie;

pub use attribute::{AttributeKind, LineStyle, ThemeAttribute, TokenStyle};
pub use color::Color;
pub use error::ThemeError;
pub use scope::ScopeName;
pub use setting::ThemeSetting;
pub use theme::{HighlightTheme, ResolvedAttributes};
