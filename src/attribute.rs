//! Style attributes attached to theme scopes.
//!
//! Every attribute carries a stable string key (its serialized tag). Keys
//! are the identity used for last-write-wins overrides when settings are
//! layered onto a scope node: a later `Ligature` replaces an earlier
//! `Ligature` but leaves an inherited `Italic` alone.
//!
//! Attributes come in two kinds: token attributes style a character run,
//! line attributes style the enclosing paragraph. The renderer-facing
//! output of an attribute is its effect on a [`TokenStyle`] or
//! [`LineStyle`] accumulator via [`ThemeAttribute::apply`].

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Whether an attribute applies to a token run or a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Token,
    Line,
}

/// A single named style directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", rename_all = "kebab-case")]
pub enum ThemeAttribute {
    Italic,
    Bold,
    Underline,
    Ligature { ligature: i32 },
    Color { color: Color },
    BackgroundColor { color: Color },
    HeadIndent { value: f64 },
    TailIndent { value: f64 },
}

impl ThemeAttribute {
    /// The stable key identifying this attribute for override purposes.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Italic => "italic",
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Ligature { .. } => "ligature",
            Self::Color { .. } => "color",
            Self::BackgroundColor { .. } => "background-color",
            Self::HeadIndent { .. } => "head-indent",
            Self::TailIndent { .. } => "tail-indent",
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Italic
            | Self::Bold
            | Self::Underline
            | Self::Ligature { .. }
            | Self::Color { .. }
            | Self::BackgroundColor { .. } => AttributeKind::Token,
            Self::HeadIndent { .. } | Self::TailIndent { .. } => AttributeKind::Line,
        }
    }

    /// Fold this attribute into the style accumulators.
    pub fn apply(&self, token: &mut TokenStyle, line: &mut LineStyle) {
        match self {
            Self::Italic => token.italic = true,
            Self::Bold => token.bold = true,
            Self::Underline => token.underline = true,
            Self::Ligature { ligature } => token.ligature = Some(*ligature),
            Self::Color { color } => token.foreground = Some(*color),
            Self::BackgroundColor { color } => token.background = Some(*color),
            Self::HeadIndent { value } => line.head_indent = Some(*value),
            Self::TailIndent { value } => line.tail_indent = Some(*value),
        }
    }
}

/// Accumulated token-level style for a character run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenStyle {
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
    pub ligature: Option<i32>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

/// Accumulated line-level (paragraph) style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineStyle {
    pub head_indent: Option<f64>,
    pub tail_indent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(ThemeAttribute::Italic.key(), "italic");
        assert_eq!(ThemeAttribute::Ligature { ligature: 0 }.key(), "ligature");
        assert_eq!(
            ThemeAttribute::HeadIndent { value: 8.0 }.key(),
            "head-indent"
        );
        assert_eq!(
            ThemeAttribute::BackgroundColor {
                color: Color::rgb(0, 0, 0)
            }
            .key(),
            "background-color"
        );
    }

    #[test]
    fn test_kind_split() {
        assert_eq!(ThemeAttribute::Italic.kind(), AttributeKind::Token);
        assert_eq!(
            ThemeAttribute::Ligature { ligature: 1 }.kind(),
            AttributeKind::Token
        );
        assert_eq!(
            ThemeAttribute::HeadIndent { value: 0.0 }.kind(),
            AttributeKind::Line
        );
        assert_eq!(
            ThemeAttribute::TailIndent { value: 0.0 }.kind(),
            AttributeKind::Line
        );
    }

    #[test]
    fn test_apply_dispatch() {
        let mut token = TokenStyle::default();
        let mut line = LineStyle::default();
        ThemeAttribute::Italic.apply(&mut token, &mut line);
        ThemeAttribute::Color {
            color: Color::rgb(10, 20, 30),
        }
        .apply(&mut token, &mut line);
        ThemeAttribute::HeadIndent { value: 12.5 }.apply(&mut token, &mut line);

        assert!(token.italic);
        assert_eq!(token.foreground, Some(Color::rgb(10, 20, 30)));
        assert_eq!(line.head_indent, Some(12.5));
        assert_eq!(line.tail_indent, None);
    }

    #[test]
    fn test_serde_tagged_by_key() {
        let attr = ThemeAttribute::Ligature { ligature: 0 };
        let json = serde_json::to_string(&attr).unwrap();
        assert_eq!(json, r#"{"key":"ligature","ligature":0}"#);

        let attr: ThemeAttribute = serde_json::from_str(r#"{"key":"italic"}"#).unwrap();
        assert_eq!(attr, ThemeAttribute::Italic);

        let attr: ThemeAttribute =
            serde_json::from_str(r##"{"key":"color","color":"#336699"}"##).unwrap();
        assert_eq!(
            attr,
            ThemeAttribute::Color {
                color: Color::rgb(0x33, 0x66, 0x99)
            }
        );
    }
}
