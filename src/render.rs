//! Positional placeholder substitution for template bodies.
//!
//! A body like `"Hello {0}, we will reach you at {1}."` is rendered by
//! substituting `args[0]` and `args[1]`. `{{` and `}}` are literal braces.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("unclosed placeholder at byte {0}")]
    UnclosedPlaceholder(usize),
    #[error("placeholder index must be numeric, got '{0}'")]
    BadIndex(String),
    #[error("placeholder {{{0}}} is out of range (template takes {1} arguments)")]
    IndexOutOfRange(usize, usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),
}

/// Substitute positional placeholders in `body` with `args`.
pub fn format_positional(body: &str, args: &[&str]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut index = String::new();
                let mut closed = false;
                for (_, d) in chars.by_ref() {
                    if d == '}' {
                        closed = true;
                        break;
                    }
                    index.push(d);
                }
                if !closed {
                    return Err(RenderError::UnclosedPlaceholder(pos));
                }
                let n: usize = index
                    .parse()
                    .map_err(|_| RenderError::BadIndex(index.clone()))?;
                let arg = args
                    .get(n)
                    .ok_or(RenderError::IndexOutOfRange(n, args.len()))?;
                out.push_str(arg);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(RenderError::UnmatchedBrace(pos));
                }
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_name_and_email() {
        let body = "Hello {0}, we will write to you at {1}.";
        let out = format_positional(body, &["Ada", "ada@example.com"]).unwrap();
        assert_eq!(out, "Hello Ada, we will write to you at ada@example.com.");
    }

    #[test]
    fn repeated_placeholders_are_allowed() {
        let out = format_positional("{0} {0} {1}", &["a", "b"]).unwrap();
        assert_eq!(out, "a a b");
    }

    #[test]
    fn doubled_braces_are_literals() {
        let out = format_positional("{{0}} and {0}", &["x"]).unwrap();
        assert_eq!(out, "{0} and x");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(format_positional("no holes", &[]).unwrap(), "no holes");
    }

    #[test]
    fn out_of_range_index_fails() {
        let err = format_positional("{2}", &["a", "b"]).unwrap_err();
        assert_eq!(err, RenderError::IndexOutOfRange(2, 2));
    }

    #[test]
    fn non_numeric_index_fails() {
        let err = format_positional("{name}", &["a"]).unwrap_err();
        assert_eq!(err, RenderError::BadIndex("name".into()));
    }

    #[test]
    fn unclosed_placeholder_fails() {
        let err = format_positional("hi {0", &["a"]).unwrap_err();
        assert_eq!(err, RenderError::UnclosedPlaceholder(3));
    }

    #[test]
    fn lone_closing_brace_fails() {
        let err = format_positional("oops }", &[]).unwrap_err();
        assert_eq!(err, RenderError::UnmatchedBrace(5));
    }
}
