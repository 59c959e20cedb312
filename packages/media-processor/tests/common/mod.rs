#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use media_core::{ObjectStore, StorageError};
use media_processor::{AppState, Config};

/// キーとバイト列を保持するだけのストア
#[derive(Default)]
pub struct MemoryStore {
    objects: HashMap<String, Bytes>,
}

impl MemoryStore {
    pub fn with(mut self, key: &str, data: Vec<u8>) -> Self {
        self.objects.insert(key.to_string(), Bytes::from(data));
        self
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        self.objects
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
                status: Some(404),
            })
    }
}

pub fn state(store: MemoryStore) -> AppState {
    let config = Config::from_lookup(|_| None).unwrap();
    AppState::new(Arc::new(store), &config)
}

fn encode_png(img: RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

/// グラデーションの PNG
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    }))
}

/// ほぼ圧縮できないノイズの PNG
pub fn noise_png(width: u32, height: u32) -> Vec<u8> {
    let mut seed: u32 = 0x1234_5678;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed
    };
    encode_png(RgbaImage::from_fn(width, height, |_, _| {
        let v = next().to_le_bytes();
        Rgba([v[0], v[1], v[2], v[3]])
    }))
}
