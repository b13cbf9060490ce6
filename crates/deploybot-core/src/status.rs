//! Human-readable messages for DeployBot response codes.

/// Message for a DeployBot HTTP response code.
pub fn status_message(code: u16) -> &'static str {
    match code {
        200 => "Success.",
        400 => "Bad Request: Malformed JSON payload.",
        401 => "Authentication Required: Missing or invalid API token.",
        403 => "Forbidden: Attempting to perform a restricted action.",
        422 => "Unprocessable Entity: Something is not right with the request data.",
        500 => {
            "Internal Server Error: An error on the DeployBot side. Contact support if it persists."
        }
        _ => "Response code unknown.",
    }
}
