/// Incremental decoder for `text/event-stream` bodies.
///
/// Network chunks split SSE lines at arbitrary byte offsets, so partial lines
/// are buffered until the terminating newline arrives. Only `data:` lines
/// carry payloads; comments and other fields are dropped.
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buf: Vec<u8>,
}

impl SseLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one chunk of bytes and returns the data payloads of every
    /// line the chunk completed, in arrival order.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(bytes);
        let mut payloads = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            if let Some(payload) = data_payload(&line[..line.len() - 1]) {
                payloads.push(payload);
            }
        }
        payloads
    }

    /// Flushes a trailing line that ended with end-of-stream instead of a
    /// newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.buf);
        data_payload(&line)
    }
}

fn data_payload(line: &[u8]) -> Option<String> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let rest = line.strip_prefix(b"data:")?;
    let rest = rest.strip_prefix(b" ").unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(rest).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one_event_per_feed() {
        let mut decoder = SseLineDecoder::new();
        let payloads = decoder.feed(b"data: {\"a\":1}\n\n");
        assert_eq!(payloads, vec!["{\"a\":1}".to_string()]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn buffers_lines_split_across_feeds() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: {\"text\":\"hel").is_empty());
        let payloads = decoder.feed(b"lo\"}\ndata: {\"text\":\"world\"}\n");
        assert_eq!(
            payloads,
            vec![
                "{\"text\":\"hello\"}".to_string(),
                "{\"text\":\"world\"}".to_string()
            ]
        );
    }

    #[test]
    fn preserves_arrival_order_within_one_feed() {
        let mut decoder = SseLineDecoder::new();
        let payloads = decoder.feed(b"data: 1\ndata: 2\ndata: 3\n");
        assert_eq!(payloads, vec!["1", "2", "3"]);
    }

    #[test]
    fn handles_crlf_terminated_lines() {
        let mut decoder = SseLineDecoder::new();
        let payloads = decoder.feed(b"data: {\"b\":2}\r\n\r\n");
        assert_eq!(payloads, vec!["{\"b\":2}".to_string()]);
    }

    #[test]
    fn ignores_comments_and_other_fields() {
        let mut decoder = SseLineDecoder::new();
        let payloads = decoder.feed(b": keep-alive\nevent: message\nretry: 100\ndata: x\n");
        assert_eq!(payloads, vec!["x"]);
    }

    #[test]
    fn finish_flushes_unterminated_data_line() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: tail").is_empty());
        assert_eq!(decoder.finish(), Some("tail".to_string()));
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn empty_data_lines_yield_nothing() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data:\ndata: \n").is_empty());
    }
}
