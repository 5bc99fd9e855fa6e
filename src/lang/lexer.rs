/// Splits `src` on `sep` occurring at parenthesis depth 0 and outside
/// quoted literals. Quoted values are opaque: parens and operator words
/// inside them never split or change nesting.
///
/// Returns `None` for unbalanced parentheses or an unterminated quote.
pub fn split_level(src: &str, sep: &str) -> Option<Vec<String>> {
    let bytes = src.as_bytes();
    let sep_bytes = sep.as_bytes();

    let mut parts = vec![];
    let mut start = 0;
    let mut depth = 0usize;
    let mut quoted = false;

    // Structural characters and separators are ASCII, so every cut
    // position is a char boundary.
    let mut i = 0;
    while i < bytes.len() {
        if quoted {
            if bytes[i] == b'"' {
                quoted = false;
            }
            i += 1;
            continue;
        }

        match bytes[i] {
            b'"' => {
                quoted = true;
                i += 1;
            }
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                i += 1;
            }
            _ if depth == 0 && bytes[i..].starts_with(sep_bytes) => {
                parts.push(src[start..i].to_string());
                i += sep_bytes.len();
                start = i;
            }
            _ => i += 1,
        }
    }

    if quoted || depth > 0 {
        return None;
    }

    parts.push(src[start..].to_string());
    Some(parts)
}

/// Strips exactly one paren pair wrapping the whole token, returning the
/// body. `None` when the token is not a single fully enclosed group, e.g.
/// `(a) OR (b)` where the first pair closes early.
pub fn enclosed(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return None;
    }

    let mut depth = 0usize;
    let mut quoted = false;

    for (i, byte) in bytes.iter().enumerate() {
        if quoted {
            if *byte == b'"' {
                quoted = false;
            }
            continue;
        }

        match byte {
            b'"' => quoted = true,
            b'(' => depth += 1,
            b')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 && i != bytes.len() - 1 {
                    return None;
                }
            }
            _ => (),
        }
    }

    if quoted || depth > 0 {
        return None;
    }

    Some(&token[1..token.len() - 1])
}

#[cfg(test)]
mod tests;
