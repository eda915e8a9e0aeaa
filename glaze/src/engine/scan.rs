//! Class-candidate extraction from raw content.

use std::collections::BTreeSet;

const MAX_CANDIDATE_LEN: usize = 128;

pub fn candidates<'a>(sources: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    sources
        .into_iter()
        .flat_map(|raw| raw.split(is_delimiter))
        .filter(|token| is_candidate(token))
        .map(str::to_string)
        .collect()
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '<' | '>' | '=' | '{' | '}' | ';' | ',')
}

fn is_candidate(token: &str) -> bool {
    token.len() <= MAX_CANDIDATE_LEN
        && token.starts_with(|c: char| c.is_ascii_lowercase())
        && !token.ends_with(':')
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.' | '/'))
}
