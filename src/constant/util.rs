pub(crate) enum SensitiveMode {
    /// do not show any char
    Full,
    /// only the specified number of characters will be displayed at most.
    /// However, if the length is less than this number, none of them will be displayed.
    /// to ensure that there are definitely some characters that are not displayed.
    Normal(usize),
}

/// # get hidden sensitive string
///
/// convert string from "something" to "so*****ng"
///
/// ### Arguments
///
/// * `str`: original string
/// * `sensitive_mode`: mode to show sensitive string
pub(crate) fn get_hidden_sensitive_string(str: &str, sensitive_mode: SensitiveMode) -> String {
    let len = str.chars().count();
    let show_len = match sensitive_mode {
        SensitiveMode::Full => 0,
        SensitiveMode::Normal(shown_len) => shown_len,
    };

    let prefix_len = show_len / 2;
    let suffix_len = show_len - prefix_len;

    str.chars()
        .enumerate()
        .map(|(i, c)| {
            if len <= show_len || (i >= prefix_len && i < len - suffix_len) {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// # join url
///
/// join two url parts with exactly one `/` between them.
pub(crate) fn join_url(base: &str, tail: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        tail.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_hidden_sensitive_string_full() {
        let str = "1234567890";
        let result = get_hidden_sensitive_string(str, SensitiveMode::Full);
        assert_eq!(result, "**********");
    }

    #[test]
    fn test_get_hidden_sensitive_string_normal() {
        let str = "1234567890";
        let result = get_hidden_sensitive_string(str, SensitiveMode::Normal(4));
        assert_eq!(result, "12******90");
    }

    #[test]
    fn test_get_hidden_sensitive_string_too_short() {
        let result = get_hidden_sensitive_string("abcd", SensitiveMode::Normal(4));
        assert_eq!(result, "****");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://dev.azure.com/", "/contoso"),
            "https://dev.azure.com/contoso"
        );
        assert_eq!(
            join_url("https://dev.azure.com", "contoso"),
            "https://dev.azure.com/contoso"
        );
    }
}
