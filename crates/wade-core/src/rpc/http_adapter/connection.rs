use reqwest::Url;

use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidEndpoint(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.to_owned()),
        other => Err(CoreError::InvalidEndpoint(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}
