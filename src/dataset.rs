//! The poverty-indicator dataset — CSV load, region filtering, and the
//! summary aggregates the dashboard is built from.
//!
//! One row per (provinsi, kab/kota) pair. The CSV headers are the exact
//! column names of the published `Tingkat_Kemiskinan_Indonesia` dataset;
//! they are long, Indonesian, and fixed, so the serde renames below are
//! the single place they appear. Rows are immutable after load.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Read {
        path: String,
        source: csv::Error,
    },
    #[error("dataset row {row}: {source}")]
    Row { row: usize, source: csv::Error },
    #[error("dataset {0} contains no rows")]
    Empty(String),
}

/// One district (kab/kota) record with its indicator columns and the
/// binary poverty label.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    #[serde(rename = "Provinsi")]
    pub provinsi: String,
    #[serde(rename = "Kab/Kota")]
    pub kab_kota: String,
    #[serde(rename = "Persentase Penduduk Miskin (P0) Menurut Kabupaten/Kota (Persen)")]
    pub p0: f64,
    #[serde(rename = "Rata-rata Lama Sekolah Penduduk 15+ (Tahun)")]
    pub lama_sekolah: f64,
    #[serde(rename = "Pengeluaran per Kapita Disesuaikan (Ribu Rupiah/Orang/Tahun)")]
    pub pengeluaran: f64,
    #[serde(rename = "Indeks Pembangunan Manusia")]
    pub ipm: f64,
    #[serde(rename = "Umur Harapan Hidup (Tahun)")]
    pub umur_harapan: f64,
    #[serde(rename = "Persentase rumah tangga yang memiliki akses terhadap sanitasi layak")]
    pub sanitasi: f64,
    #[serde(rename = "Persentase rumah tangga yang memiliki akses terhadap air minum layak")]
    pub air_minum: f64,
    #[serde(rename = "Tingkat Pengangguran Terbuka")]
    pub tpt: f64,
    #[serde(rename = "Tingkat Partisipasi Angkatan Kerja")]
    pub tpak: f64,
    #[serde(rename = "PDRB atas Dasar Harga Konstan menurut Pengeluaran (Rupiah)")]
    pub pdrb: f64,
    #[serde(rename = "Klasifikasi Kemiskinan")]
    pub klasifikasi: u8,
}

/// The full dataset, loaded once at startup.
#[derive(Debug)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Parse the CSV at `path`. Fails on unreadable files, malformed rows,
    /// or an empty dataset — all of which abort startup.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut rows = Vec::new();
        for (idx, record) in reader.deserialize::<Row>().enumerate() {
            // CSV data rows start at line 2 (line 1 is the header)
            let row = record.map_err(|source| DatasetError::Row {
                row: idx + 2,
                source,
            })?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty(path.display().to_string()));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows for one province, or every row when `provinsi` is `None`.
    /// Exact-match filter, preserving dataset order.
    pub fn filtered(&self, provinsi: Option<&str>) -> Vec<&Row> {
        match provinsi {
            None => self.rows.iter().collect(),
            Some(p) => self.rows.iter().filter(|r| r.provinsi == p).collect(),
        }
    }

    /// Sorted distinct province names, for the filter and predict dropdowns.
    pub fn provinces(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.provinsi.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }

    /// Province → kab/kota grouping for the cascading predict form.
    /// Each kab/kota appears exactly once under its owning province, in
    /// dataset order within the group.
    pub fn kabkota_by_province(&self) -> BTreeMap<String, Vec<String>> {
        let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in &self.rows {
            mapping
                .entry(row.provinsi.clone())
                .or_default()
                .push(row.kab_kota.clone());
        }
        mapping
    }

    /// First row matching the (provinsi, kab/kota) pair exactly, if any.
    /// The data implies uniqueness; duplicates would silently resolve to
    /// the first occurrence.
    pub fn find(&self, provinsi: &str, kab_kota: &str) -> Option<&Row> {
        self.rows
            .iter()
            .find(|r| r.provinsi == provinsi && r.kab_kota == kab_kota)
    }
}

// ---------------------------------------------------------------------------
// Summary aggregates
// ---------------------------------------------------------------------------

/// Aggregates over a filtered view, shown in the per-selection cards.
/// Means are `None` over an empty view.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub kabkota: usize,
    pub miskin: usize,
    pub tidak_miskin: usize,
    pub avg_p0: Option<f64>,
    pub avg_ipm: Option<f64>,
}

/// National aggregates, computed once at startup and shown on every
/// dashboard render regardless of the active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct NationalSummary {
    pub provinsi: usize,
    pub kabkota: usize,
    pub miskin: usize,
    pub tidak_miskin: usize,
    pub avg_p0: Option<f64>,
    pub avg_ipm: Option<f64>,
    pub avg_pengeluaran: Option<f64>,
}

fn mean(rows: &[&Row], f: impl Fn(&Row) -> f64) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| f(r)).sum::<f64>() / rows.len() as f64)
}

fn distinct_kabkota(rows: &[&Row]) -> usize {
    rows.iter()
        .map(|r| r.kab_kota.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Summarize a filtered view of the dataset.
pub fn summarize(rows: &[&Row]) -> RegionSummary {
    RegionSummary {
        kabkota: distinct_kabkota(rows),
        miskin: rows.iter().filter(|r| r.klasifikasi == 1).count(),
        tidak_miskin: rows.iter().filter(|r| r.klasifikasi == 0).count(),
        avg_p0: mean(rows, |r| r.p0),
        avg_ipm: mean(rows, |r| r.ipm),
    }
}

impl NationalSummary {
    pub fn compute(dataset: &Dataset) -> Self {
        let rows = dataset.filtered(None);
        let region = summarize(&rows);
        Self {
            provinsi: dataset.provinces().len(),
            kabkota: region.kabkota,
            miskin: region.miskin,
            tidak_miskin: region.tidak_miskin,
            avg_p0: region.avg_p0,
            avg_ipm: region.avg_ipm,
            avg_pengeluaran: mean(&rows, |r| r.pengeluaran),
        }
    }
}
