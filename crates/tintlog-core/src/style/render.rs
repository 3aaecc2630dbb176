//! Render strategies for formatted lines

use serde_json::Value;

use super::scheme::ColorScheme;
use crate::types::Severity;

/// How a formatted line is decorated before it reaches the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Browser consoles: `[start + line, token]`, style passed out of band
    DecoratedPair,
    /// Terminals: `[token + line + end]`, style inlined as escape codes
    InlineWrapped,
}

impl RenderStyle {
    /// Pick the style and its color table from an environment decision
    pub fn select(is_browser: bool) -> (RenderStyle, ColorScheme) {
        if is_browser {
            (RenderStyle::DecoratedPair, ColorScheme::browser())
        } else {
            (RenderStyle::InlineWrapped, ColorScheme::terminal())
        }
    }

    /// Decorate a formatted line into sink arguments
    pub fn render(self, scheme: &ColorScheme, severity: Severity, line: &str) -> Vec<Value> {
        let token = scheme.token(severity);
        match self {
            RenderStyle::DecoratedPair => vec![
                Value::String(format!("{}{}", scheme.start, line)),
                Value::String(token.to_string()),
            ],
            RenderStyle::InlineWrapped => {
                vec![Value::String(format!("{}{}{}", token, line, scheme.end))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select() {
        assert_eq!(
            RenderStyle::select(true),
            (RenderStyle::DecoratedPair, ColorScheme::browser())
        );
        assert_eq!(
            RenderStyle::select(false),
            (RenderStyle::InlineWrapped, ColorScheme::terminal())
        );
    }

    #[test]
    fn test_decorated_pair() {
        let (style, scheme) = RenderStyle::select(true);
        let args = style.render(&scheme, Severity::Info, "[t] [INFO] - [a b]");
        assert_eq!(args, vec![json!("%c[t] [INFO] - [a b]"), json!("color : #ff00ff")]);
    }

    #[test]
    fn test_inline_wrapped() {
        let (style, scheme) = RenderStyle::select(false);
        let args = style.render(&scheme, Severity::Error, "[t] [ERROR] - [x]");
        assert_eq!(args, vec![json!("\x1b[31m[t] [ERROR] - [x]\x1b[0m")]);
    }
}
