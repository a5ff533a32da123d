#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Split one CSV line on commas, keeping commas inside single- or
/// double-quoted fields. Fields come back trimmed and unquoted.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == ',' {
                    out.push(strip_surrounding_quotes(cur.trim()).to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    // A trailing comma means an empty final field, which still counts.
    if !cur.is_empty() || !out.is_empty() {
        out.push(strip_surrounding_quotes(cur.trim()).to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn splits_and_unquotes() {
        let line = r#"1,55,Male,"Clothing, Casual",Fall"#;
        let fields = split_csv_line(line);
        assert_eq!(fields, vec!["1", "55", "Male", "Clothing, Casual", "Fall"]);
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        assert_eq!(split_csv_line("1,Weekly,"), vec!["1", "Weekly", ""]);
        assert_eq!(split_csv_line("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_csv_line(","), vec!["", ""]);
        assert!(split_csv_line("").is_empty());
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let fields = split_csv_line(" a , 42 ,  'x y' ");
        assert_eq!(fields, vec!["a", "42", "x y"]);
    }
}
