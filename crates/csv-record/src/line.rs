//! CSV line grammar.
//!
//! A document is split into lines on `\r` or `\n` outside quoted fields, with
//! empty lines dropped. Each line is split into fields by a two-state machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Split a document into its non-empty lines.
///
/// Line terminators inside a quoted field belong to the field.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\r' | '\n' if !in_quotes => {
                if idx > start {
                    lines.push(&text[start..idx]);
                }
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    if text.len() > start {
        lines.push(&text[start..]);
    }

    lines
}

/// Split one line into unescaped fields.
///
/// The end of the line always terminates the last field, so an empty line
/// yields one empty field and a trailing comma yields a trailing empty field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = State::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (State::Unquoted, ',') => fields.push(std::mem::take(&mut current)),
            (State::Unquoted, '"') => state = State::Quoted,
            (State::Quoted, '"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    state = State::Unquoted;
                }
            }
            (_, other) => current.push(other),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(parse_line(""), vec![""]);
        assert_eq!(parse_line(","), vec!["", ""]);
        assert_eq!(parse_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        assert_eq!(parse_line("30,\"A,B\",x;y"), vec!["30", "A,B", "x;y"]);
        assert_eq!(parse_line("\"say \"\"hi\"\"\""), vec!["say \"hi\""]);
        assert_eq!(parse_line("\"\""), vec![""]);
        assert_eq!(parse_line("\"\"\"\""), vec!["\""]);
    }

    #[test]
    fn test_parse_quote_mid_field() {
        // Quotes toggle state wherever they appear
        assert_eq!(parse_line("a\"b,c\"d"), vec!["ab,cd"]);
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(parse_line("\"abc,def"), vec!["abc,def"]);
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        assert_eq!(split_lines("a\n\n\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("\n\n"), Vec::<&str>::new());
        assert_eq!(split_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn test_split_lines_keeps_quoted_terminators() {
        let text = "Note\n\"line1\nline2\"\n";
        assert_eq!(split_lines(text), vec!["Note", "\"line1\nline2\""]);
        assert_eq!(parse_line(split_lines(text)[1]), vec!["line1\nline2"]);
    }

    #[test]
    fn test_split_lines_without_trailing_terminator() {
        assert_eq!(split_lines("x,y"), vec!["x,y"]);
    }
}
