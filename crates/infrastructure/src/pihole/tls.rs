use pihole_exporter_domain::ConfigError;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

/// Read every certificate of a PEM bundle.
///
/// A file that can't be read, contains malformed PEM, or holds no
/// certificate at all is rejected.
pub fn load_ca_bundle(path: &str) -> Result<Vec<reqwest::Certificate>, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidCaFile {
        path: path.to_string(),
        message,
    };

    let file = File::open(path).map_err(|e| invalid(e.to_string()))?;
    let mut reader = BufReader::new(file);

    let ders = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(e.to_string()))?;

    if ders.is_empty() {
        return Err(invalid("no PEM certificate found".to_string()));
    }

    ders.iter()
        .map(|der| reqwest::Certificate::from_der(der.as_ref()).map_err(|e| invalid(e.to_string())))
        .collect()
}

/// Whether a rustls error sits anywhere in the error chain.
///
/// The TLS connector nests the rustls error in `io::Error`s, and
/// `io::Error::source` skips its own payload, so each payload is searched too.
pub(crate) fn is_tls_failure(error: &(dyn Error + 'static)) -> bool {
    if error.is::<rustls::Error>() {
        return true;
    }
    if let Some(io) = error.downcast_ref::<std::io::Error>() {
        if io.get_ref().is_some_and(|inner| is_tls_failure(inner)) {
            return true;
        }
    }
    error.source().is_some_and(is_tls_failure)
}
