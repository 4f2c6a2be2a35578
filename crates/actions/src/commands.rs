//! Workflow command formatting.
//!
//! The runner scans stdout for lines of the form
//! `::command key=value,key=value::message` and acts on them (masking,
//! annotations, legacy outputs). Data and property values are percent-escaped
//! so a message can never terminate the command early.

/// Escapes a command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Formats a workflow command line (without the trailing newline).
pub fn issue(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);
    if !properties.is_empty() {
        line.push(' ');
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect();
        line.push_str(&rendered.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}
