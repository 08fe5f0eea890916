//! Host comparison used to keep stylesheet fetches on the page's own domain.

/// Returns the lowercase `host[:port]` of a URL, or `None` if it cannot be parsed.
///
/// The port is only included when it differs from the scheme default, so
/// `https://Example.com:443/a` and `https://example.com/b` share a key.
#[must_use]
pub fn host_key(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    })
}

/// Whether two URLs point at the same network host.
#[must_use]
pub fn is_same_host(a: &str, b: &str) -> bool {
    host_key(a) == host_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_key_lowercases_host() {
        assert_eq!(
            host_key("https://WWW.Stripe.com/payments").as_deref(),
            Some("www.stripe.com")
        );
    }

    #[test]
    fn host_key_drops_default_port() {
        assert_eq!(
            host_key("https://example.com:443/a").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn host_key_keeps_explicit_port() {
        assert_eq!(
            host_key("http://127.0.0.1:8080/site.css").as_deref(),
            Some("127.0.0.1:8080")
        );
    }

    #[test]
    fn host_key_none_for_garbage() {
        assert_eq!(host_key("not a url"), None);
    }

    #[test]
    fn same_host_ignores_path_and_scheme_case() {
        assert!(is_same_host(
            "https://example.com/",
            "HTTPS://EXAMPLE.COM/assets/site.css"
        ));
    }

    #[test]
    fn cdn_subdomain_is_a_different_host() {
        assert!(!is_same_host(
            "https://example.com/",
            "https://cdn.example.com/site.css"
        ));
    }

    #[test]
    fn different_ports_are_different_hosts() {
        assert!(!is_same_host(
            "http://127.0.0.1:4000/",
            "http://127.0.0.1:4001/site.css"
        ));
    }
}
