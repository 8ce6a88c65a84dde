use crate::domain::models::ChatMode;

/// Classify the answer to the welcome prompt.
///
/// Matching is case-insensitive on the trimmed text. "listen" wins when
/// both keywords appear.
pub fn classify_mode(input: &str) -> Option<ChatMode> {
    let text = input.trim().to_lowercase();

    if text.contains("listen") || text == "l" {
        Some(ChatMode::Listen)
    } else if text.contains("talk") || text.contains("respond") || text == "t" {
        Some(ChatMode::Talk)
    } else {
        None
    }
}
