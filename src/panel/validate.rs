use url::Url;

const GENERIC_HINT: &str =
    "Enter an absolute http(s) URL pointing to a template repository index";

/// Validate a candidate repository URL before it is submitted to the backend.
///
/// Two checks:
/// - the candidate must parse as an absolute `http`/`https` URL;
/// - if the host is a known code-hosting provider's web UI, the URL must be
///   that provider's raw-content form, otherwise the error names the raw form
///   to use instead.
///
/// Advisory only — the backend remains the authority on acceptance.
pub fn validate_repository_url(candidate: &str) -> Result<(), String> {
    let Ok(parsed) = Url::parse(candidate) else {
        return Err(GENERIC_HINT.to_owned());
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(GENERIC_HINT.to_owned());
    }

    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    let path = parsed.path();

    // github.com serves HTML pages; raw content lives on raw.githubusercontent.com.
    if host == "github.com" || host == "www.github.com" {
        return Err(
            "This is a GitHub web page, not a raw file link. Use the raw content URL, \
             e.g. https://raw.githubusercontent.com/<org>/<repo>/<branch>/index.json"
                .to_owned(),
        );
    }

    // GitLab raw content is served from the same host under /-/raw/.
    if (host == "gitlab.com" || host.starts_with("gitlab.")) && !path.contains("/-/raw/") {
        return Err(
            "This is a GitLab web page, not a raw file link. Use the raw content URL, \
             e.g. https://gitlab.com/<group>/<project>/-/raw/<branch>/index.json"
                .to_owned(),
        );
    }

    // Bitbucket raw content is served from the same host under /raw/.
    if host == "bitbucket.org" && !path.contains("/raw/") {
        return Err(
            "This is a Bitbucket web page, not a raw file link. Use the raw content URL, \
             e.g. https://bitbucket.org/<workspace>/<repo>/raw/<branch>/index.json"
                .to_owned(),
        );
    }

    Ok(())
}
