/// Environment-driven defaults for the CLI
pub mod config;

use crate::decoder::{DecodeOptions, Decoded, decode_bitstring, sample_with, validate_markers};
use crate::encoder::encode;
use crate::error::ToolError;
use crate::models::{BarcodeGeometry, PixelGrid, SampledBitstring};
use crate::pbm::{read_pbm, write_pbm};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// True when `path` ends in `.pbm` (any case).
pub fn has_pbm_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pbm"))
        .unwrap_or(false)
}

/// Load a `P1` image from disk.
pub fn load_pbm<P: AsRef<Path>>(path: P) -> Result<PixelGrid, ToolError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_pbm(BufReader::new(file)).map_err(|source| ToolError::Pbm {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a grid to disk as `P1`, replacing any existing file.
pub fn save_pbm<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> Result<(), ToolError> {
    let path = path.as_ref();
    let io_err = |source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_pbm(BufWriter::new(file), grid).map_err(io_err)
}

/// Encode `identifier` and save it to `path`, which must end in `.pbm`.
///
/// Nothing is written when validation fails.
pub fn encode_to_file<P: AsRef<Path>>(
    identifier: &str,
    geometry: &BarcodeGeometry,
    path: P,
) -> Result<PixelGrid, ToolError> {
    let path = path.as_ref();
    if !has_pbm_extension(path) {
        return Err(ToolError::Extension {
            path: path.to_path_buf(),
        });
    }
    let grid = encode(identifier, geometry)?;
    save_pbm(path, &grid)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "barcode written"
    );
    Ok(grid)
}

/// Load and decode a single file.
pub fn decode_file<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Decoded, ToolError> {
    decode_report(path.as_ref(), options).result
}

/// Outcome for one file of a batch decode
#[derive(Debug)]
pub struct FileReport {
    /// Input path
    pub path: PathBuf,
    /// Sampled modules, present once the guard patterns matched, even when
    /// the digits then failed to decode
    pub bitstring: Option<SampledBitstring>,
    /// Decode outcome
    pub result: Result<Decoded, ToolError>,
}

/// Load and decode one file, keeping the sampled modules for diagnostics.
pub fn decode_report<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> FileReport {
    let path = path.as_ref();
    let decode_err = |source| ToolError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let report = |bitstring, result| FileReport {
        path: path.to_path_buf(),
        bitstring,
        result,
    };

    let grid = match load_pbm(path) {
        Ok(grid) => grid,
        Err(err) => return report(None, Err(err)),
    };
    let bits = match sample_with(&grid, options.sampling) {
        Ok(bits) => bits,
        Err(err) => return report(None, Err(decode_err(err))),
    };
    let bitstring = validate_markers(&bits).ok().map(|()| bits);
    let result = decode_bitstring(bits, options.verify_checksum).map_err(decode_err);
    report(bitstring, result)
}

/// Decode many files in parallel. Reports come back in input order.
pub fn decode_files<P>(paths: &[P], options: &DecodeOptions) -> Vec<FileReport>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let report = decode_report(path, options);
            if let Err(err) = &report.result {
                warn!(%err, "decode failed");
            }
            report
        })
        .collect()
}

/// Collect `.pbm` files under `root`, sorted.
pub fn collect_pbm_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut stack = vec![root.as_ref().to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if has_pbm_extension(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}
