const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Syntactic check only: `local@domain.tld`, no whitespace, a dotted domain.
/// Nothing here proves the mailbox exists.
pub fn is_valid_email(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_ADDRESS_LEN {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    !local.chars().any(|c| {
        // U+FFFD is what an undecodable percent escape turns into.
        c.is_whitespace()
            || c.is_control()
            || c == char::REPLACEMENT_CHARACTER
            || matches!(c, '"' | '(' | ')' | ',' | ':' | ';' | '<' | '>' | '[' | '\\' | ']')
    })
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && !tld.chars().all(|c| c.is_ascii_digit())
}
