use coverline_core::Error;

/// Emit one structured event for `err`: `code`, numeric `status`, and the data
/// bag as compact JSON.
///
/// Server-class statuses log at `error`, everything else at `warn`. Titles,
/// messages and details are user copy and are not repeated beyond the event
/// message (the title).
pub fn report(err: &Error) {
    let code = err.code().as_str();
    let status = err.status().as_u16();
    let data = data_json(err);

    if err.status().is_server_error() {
        ::tracing::error!(code, status, data = %data, "{}", err.title());
    } else {
        ::tracing::warn!(code, status, data = %data, "{}", err.title());
    }
}

fn data_json(err: &Error) -> String {
    match err.data() {
        Some(data) => serde_json::to_string(data).unwrap_or_default(),
        None => String::from("{}"),
    }
}
