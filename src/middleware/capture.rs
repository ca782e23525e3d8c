use axum::body::{Body, Bytes, HttpBody};
use axum::BoxError;
use std::borrow::Cow;

/// Fully buffered copy of a body stream.
///
/// Reading it for logging never moves a cursor: every call to [`text`](Self::text)
/// starts from the first byte, and [`into_body`](Self::into_body) hands back
/// exactly the bytes that were collected.
#[derive(Debug, Clone, Default)]
pub struct CapturedBody {
    bytes: Bytes,
}

impl CapturedBody {
    pub async fn collect<B>(body: B) -> Result<Self, axum::Error>
    where
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_body(self) -> Body {
        Body::from(self.bytes)
    }
}

impl From<Bytes> for CapturedBody {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn collects_chunked_stream_in_order() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"hel")),
            Ok(Bytes::from_static(b"lo ")),
            Ok(Bytes::from_static(b"world")),
        ];
        let body = Body::from_stream(stream::iter(chunks));

        let captured = CapturedBody::collect(body).await.unwrap();
        assert_eq!(captured.bytes().as_ref(), b"hello world");
    }

    #[tokio::test]
    async fn reading_text_leaves_bytes_untouched() {
        let captured = CapturedBody::collect(Body::from("ok")).await.unwrap();

        assert_eq!(captured.text(), "ok");
        assert_eq!(captured.text(), "ok");

        let replay = axum::body::to_bytes(captured.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(replay.as_ref(), b"ok");
    }

    #[tokio::test]
    async fn invalid_utf8_is_logged_lossily_but_kept_exact() {
        let raw = Bytes::from_static(&[0x66, 0xff, 0x6f]);
        let captured = CapturedBody::from(raw.clone());

        assert_eq!(captured.text(), "f\u{fffd}o");
        assert_eq!(captured.bytes(), &raw);
        assert_eq!(captured.len(), 3);
    }

    #[tokio::test]
    async fn stream_error_is_returned() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "upstream hung up")),
        ];
        let body = Body::from_stream(stream::iter(chunks));

        assert!(CapturedBody::collect(body).await.is_err());
    }
}
