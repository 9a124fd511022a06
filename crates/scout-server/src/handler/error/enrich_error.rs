//! Mapping from enrichment collaborator errors to HTTP errors.

use super::{Error, ErrorKind};

impl From<scout_rig::Error> for Error<'static> {
    fn from(error: scout_rig::Error) -> Self {
        match error {
            scout_rig::Error::Scrape { url, message } => ErrorKind::BadGateway
                .with_message("Failed to scrape website")
                .with_resource("enrichment")
                .with_context(format!("{url}: {message}")),
            scout_rig::Error::Parse(message) => ErrorKind::InternalServerError
                .with_message("Failed to parse AI response")
                .with_resource("enrichment")
                .with_context(message),
            scout_rig::Error::Provider { provider, message } => ErrorKind::InternalServerError
                .with_message("AI provider request failed")
                .with_resource("enrichment")
                .with_context(format!("{provider}: {message}")),
            scout_rig::Error::Config(message) => ErrorKind::NotImplemented
                .with_message("Enrichment is not configured")
                .with_resource("enrichment")
                .with_context(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_failures_map_to_bad_gateway() {
        let error: Error = scout_rig::Error::scrape("https://acme.test", "timeout").into();
        assert_eq!(error.kind(), ErrorKind::BadGateway);
        assert_eq!(error.message(), Some("Failed to scrape website"));
    }

    #[test]
    fn parse_failures_map_to_internal_error() {
        let error: Error = scout_rig::Error::parse("unexpected token").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("Failed to parse AI response"));
    }

    #[test]
    fn missing_configuration_maps_to_not_implemented() {
        let error: Error = scout_rig::Error::config("GROQ_API_KEY is not set").into();
        assert_eq!(error.kind(), ErrorKind::NotImplemented);
    }
}
