use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The embedded `endpoints.json` document is not valid JSON.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse embedded endpoints document: {0}")]
    EndpointsDocument(#[source] serde_json::Error),
}
