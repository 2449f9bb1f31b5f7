// Test fixtures - reusable test data
// Provides fixed instants, encoded images and fake image sources

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};

/// Sample instants for testing, all in UTC+8
pub mod dates {
    use super::*;

    pub fn manila() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
        manila()
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
    }

    /// Saturday 17 October 2026, mid-afternoon
    pub fn autumn_afternoon() -> DateTime<FixedOffset> {
        at(2026, 10, 17, 15, 42, 9)
    }

    /// Valentine's Day 2025 at noon
    pub fn valentine_noon_2025() -> DateTime<FixedOffset> {
        at(2025, 2, 14, 12, 0, 0)
    }
}

/// Encoded test images
pub mod images {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    pub fn solid(width: u32, height: u32, rgb: [u8; 3], format: ImageFormat) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    pub fn solid_red_png() -> Vec<u8> {
        solid(120, 80, [255, 0, 0], ImageFormat::Png)
    }

    pub fn solid_red_jpeg() -> Vec<u8> {
        solid(120, 80, [255, 0, 0], ImageFormat::Jpeg)
    }

    /// 100x100 with the left 40 columns one colour and the rest another, so
    /// the downsampled centre pixel only sees the right-hand colour.
    pub fn split_png(left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
        let image = RgbImage::from_fn(100, 100, |x, _| if x < 40 { Rgb(left) } else { Rgb(right) });
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }
}

/// Fake image sources
pub mod sources {
    use anyhow::{anyhow, Result};
    use memory_album::services::color::ImageSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves fixed bytes, optionally after a delay, and counts fetches.
    pub struct InMemorySource {
        bytes: Vec<u8>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl InMemorySource {
        pub fn new(bytes: Vec<u8>) -> Self {
            Self::slow(bytes, Duration::ZERO)
        }

        pub fn slow(bytes: Vec<u8>, delay: Duration) -> Self {
            Self {
                bytes,
                delay,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ImageSource for InMemorySource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.bytes.clone())
        }
    }

    pub struct FailingSource;

    impl ImageSource for FailingSource {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            Err(anyhow!("connection refused while fetching {}", url))
        }
    }
}

/// A throwaway HTTP server on the loopback interface
pub mod http {
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `body` once with the given status after `delay`. Returns the
    /// base URL (`http://127.0.0.1:PORT`).
    pub async fn serve_once(status: u16, body: Vec<u8>, delay: Duration) -> String {
        serve(status, body, delay, true).await
    }

    /// Like [`serve_once`] but without a `Content-Length` header; the body is
    /// written in small pieces and ends when the connection closes.
    pub async fn serve_streamed(body: Vec<u8>) -> String {
        serve(200, body, Duration::ZERO, false).await
    }

    async fn serve(status: u16, body: Vec<u8>, delay: Duration, with_length: bool) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            tokio::time::sleep(delay).await;

            let length = if with_length {
                format!("Content-Length: {}\r\n", body.len())
            } else {
                String::new()
            };
            let head = format!(
                "HTTP/1.1 {} X\r\nContent-Type: image/png\r\n{}Connection: close\r\n\r\n",
                status, length
            );
            if socket.write_all(head.as_bytes()).await.is_err() {
                return;
            }
            for piece in body.chunks(4096) {
                if socket.write_all(piece).await.is_err() {
                    return;
                }
            }
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }
}
