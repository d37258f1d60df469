pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the projects/contact API, taken from `NFX_BACKEND_URL` at build time.
pub fn get_backend_url() -> String {
    resolve_backend_url(option_env!("NFX_BACKEND_URL"))
}

pub fn resolve_backend_url(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_local_backend() {
        assert_eq!(resolve_backend_url(None), "http://localhost:8000");
        assert_eq!(resolve_backend_url(Some("   ")), "http://localhost:8000");
    }

    #[test]
    fn configured_url_loses_trailing_slash() {
        assert_eq!(
            resolve_backend_url(Some("https://api.nfxcreations.com/")),
            "https://api.nfxcreations.com"
        );
        assert_eq!(resolve_backend_url(Some(" http://10.0.0.2:9000 ")), "http://10.0.0.2:9000");
    }
}
