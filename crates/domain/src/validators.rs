pub fn validate_exposition_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Ok(());
    }
    if !path.starts_with('/') {
        return Err("must be an absolute path".to_string());
    }
    if path.len() > 1024 {
        return Err("cannot exceed 1024 characters".to_string());
    }
    if path.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err("cannot contain whitespace, '?' or '#'".to_string());
    }
    // The router treats these as captures or wildcards
    if path.contains(['{', '}']) {
        return Err("cannot contain '{' or '}'".to_string());
    }
    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err("segments cannot start with ':' or '*'".to_string());
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<url::Url, String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    let parsed = url::Url::parse(url).map_err(|e| e.to_string())?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("unsupported scheme {:?}", parsed.scheme()));
    }
    if parsed.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(parsed)
}
