//! Permissive CSV tokenizer.
//!
//! Splits raw statement text into rows of string fields:
//!   - `"` toggles quoting; `""` inside quotes is one literal quote
//!   - `,` ends a field and `\n` ends a row, outside quotes only
//!   - `\r` outside quotes is dropped, so LF and CRLF files read the same
//!   - an unterminated quote swallows the rest of the input as field text
//!
//! Never fails. Empty input yields no rows.

/// An ordered list of untyped fields from one logical line
pub type RawRow = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Tokenize CSV text into rows. Each call owns its scanner state.
pub fn tokenize(text: &str) -> Vec<RawRow> {
    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<RawRow> = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut state = State::Unquoted;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Quoted => {
                if c == '"' {
                    if chars.get(i + 1) == Some(&'"') {
                        field.push('"');
                        i += 1;
                    } else {
                        state = State::Unquoted;
                    }
                } else {
                    field.push(c);
                }
            }
            State::Unquoted => match c {
                '"' => state = State::Quoted,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => field.push(c),
            },
        }
        i += 1;
    }

    // input without a trailing newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
