// Line framing for the stdio transport

use bytes::BytesMut;
use std::io;
use tokio_util::codec::{Decoder, LinesCodec, LinesCodecError};

/// One framed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The line could not be decoded; carries the reason
    Malformed(String),
}

/// `LinesCodec` that turns undecodable or oversized lines into
/// [`Line::Malformed`] items instead of stream errors, so a framed
/// reader keeps going after a bad line. Only I/O failures are errors.
#[derive(Debug)]
pub struct LineDecoder {
    inner: LinesCodec,
}

impl LineDecoder {
    pub fn new(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn classify(
        result: Result<Option<String>, LinesCodecError>,
    ) -> Result<Option<Line>, LinesCodecError> {
        match result {
            Ok(line) => Ok(line.map(Line::Text)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Line::Malformed(
                "line exceeds maximum length".to_string(),
            ))),
            Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Some(Line::Malformed(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}

impl Decoder for LineDecoder {
    type Item = Line;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Line>, LinesCodecError> {
        Self::classify(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Line>, LinesCodecError> {
        Self::classify(self.inner.decode_eof(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_is_malformed_and_consumed() {
        let mut decoder = LineDecoder::new(64);
        let mut buf = BytesMut::from(&b"\xff\xfe junk\n{\"ok\":1}\n"[..]);

        assert!(matches!(decoder.decode(&mut buf).unwrap(), Some(Line::Malformed(_))));
        assert_eq!(
            decoder.decode(&mut buf).unwrap(),
            Some(Line::Text("{\"ok\":1}".to_string()))
        );
    }

    #[test]
    fn test_oversized_line_is_discarded() {
        let mut decoder = LineDecoder::new(8);
        let mut buf = BytesMut::from(&b"0123456789abcdef\nshort\n"[..]);

        assert_eq!(
            decoder.decode(&mut buf).unwrap(),
            Some(Line::Malformed("line exceeds maximum length".to_string()))
        );
        assert_eq!(decoder.decode(&mut buf).unwrap(), Some(Line::Text("short".to_string())));
    }
}
