//! Optional logo watermark.
//!
//! The configured PNG is decoded up front. Any problem (no path, missing
//! file, undecodable data) falls back to the procedural emblem; the caller
//! only ever sees which of the two to draw.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode logo PNG: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported logo colour layout {0:?}")]
    UnsupportedFormat(png::ColorType),
}

/// Decoded logo pixels, 8-bit RGBA, unmultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoAsset {
    Image { image: LogoImage, alt: String },
    /// Procedural rings-and-star emblem.
    Emblem,
}

impl LogoAsset {
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

pub fn resolve_logo(source: Option<&Path>, alt: &str) -> LogoAsset {
    let Some(path) = source else {
        return LogoAsset::Emblem;
    };

    match load_png(path) {
        Ok(image) => {
            log::info!(
                "Loaded logo {} ({}x{})",
                path.display(),
                image.width,
                image.height
            );
            LogoAsset::Image {
                image,
                alt: alt.to_string(),
            }
        }
        Err(err) => {
            log::warn!("Logo unavailable, using fallback emblem: {err}");
            LogoAsset::Emblem
        }
    }
}

pub fn load_png(path: &Path) -> Result<LogoImage, LogoError> {
    let bytes = fs::read(path).map_err(|source| LogoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
}

pub fn decode_png(bytes: &[u8]) -> Result<LogoImage, LogoError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => return Err(LogoError::UnsupportedFormat(other)),
    };

    Ok(LogoImage {
        width: info.width,
        height: info.height,
        rgba,
    })
}
