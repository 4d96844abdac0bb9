//! X.509 subject parsing for organization extraction.

use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::{FromDer, X509Certificate};

use crate::error::{Result, WireError};

/// Extracts the subject Organization ("O") attribute from a DER or PEM
/// encoded certificate.
///
/// A subject without an O attribute yields an empty string, never an
/// error; only an unparseable certificate fails.
pub fn organization_from_cert(identity: &[u8]) -> Result<String> {
    let der;
    let bytes = if identity.starts_with(b"-----BEGIN") {
        let (_, pem) =
            parse_x509_pem(identity).map_err(|err| WireError::Certificate(err.to_string()))?;
        der = pem.contents;
        der.as_slice()
    } else {
        identity
    };

    let (_, cert) =
        X509Certificate::from_der(bytes).map_err(|err| WireError::Certificate(err.to_string()))?;
    let org = cert
        .subject()
        .iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok())
        .unwrap_or_default()
        .to_owned();
    Ok(org)
}
