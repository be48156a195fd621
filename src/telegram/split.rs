/// Maximum length of a single Telegram message, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Split text into pieces that each fit in one message. Cuts after the
/// last newline that fits when there is one, otherwise as late as
/// possible. Never splits a character. Empty text yields no pieces.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while utf16_len(rest) > limit {
        // Byte offset of the longest prefix that fits
        let mut units = 0;
        let mut end = 0;
        for (idx, ch) in rest.char_indices() {
            if units + ch.len_utf16() > limit {
                break;
            }
            units += ch.len_utf16();
            end = idx + ch.len_utf8();
        }
        if end == 0 {
            end = rest.chars().next().map(char::len_utf8).unwrap_or(rest.len());
        }

        let cut = match rest[..end].rfind('\n') {
            Some(pos) if pos > 0 => pos + 1,
            _ => end,
        };
        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }
    chunks
}
