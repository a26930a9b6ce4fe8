// ABOUTME: Quote-aware single-line CSV tokenizer with a configurable separator
// ABOUTME: Doubled quotes unescape, separators inside quotes are literal, unterminated quotes degrade gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accumulates one field; `protected` marks the byte length that came from
/// inside quotes so trailing-whitespace trimming never eats quoted spaces.
#[derive(Default)]
struct FieldBuffer {
    text: String,
    protected: usize,
}

impl FieldBuffer {
    fn push_unquoted(&mut self, c: char) {
        // Leading whitespace outside quotes is dropped
        if self.text.is_empty() && c.is_whitespace() {
            return;
        }
        self.text.push(c);
    }

    fn push_quoted(&mut self, c: char) {
        self.text.push(c);
        self.protected = self.text.len();
    }

    fn close_quote(&mut self) {
        self.protected = self.text.len();
    }

    fn take(&mut self) -> String {
        let keep = self.protected + self.text[self.protected..].trim_end().len();
        self.text.truncate(keep);
        self.protected = 0;
        std::mem::take(&mut self.text)
    }
}

/// Split one line into fields.
///
/// - A field may be wrapped in double quotes; `""` inside quotes is one literal quote.
/// - The separator inside quotes is literal.
/// - Whitespace outside quotes is trimmed from both ends of each field.
/// - The final field is emitted even without a trailing separator.
/// - An unterminated quote runs to the end of the line; nothing is rejected.
///
/// # Examples
///
/// ```rust
/// use pierre_import::split_fields;
///
/// let fields = split_fields(r#"1; "Bench; Press" ;"say ""hi""""#, ';');
/// assert_eq!(fields, vec!["1", "Bench; Press", r#"say "hi""#]);
/// ```
#[must_use]
pub fn split_fields(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = FieldBuffer::default();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push_quoted('"');
                } else {
                    in_quotes = false;
                    field.close_quote();
                }
            } else {
                field.push_quoted(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == separator {
            fields.push(field.take());
        } else {
            field.push_unquoted(c);
        }
    }
    fields.push(field.take());

    fields
}

/// Whether a tokenized line carries at least one non-empty field
#[must_use]
pub fn has_content(fields: &[String]) -> bool {
    fields.iter().any(|f| !f.is_empty())
}
