//! Shared fixtures for unit and router tests: a six-row sample of the
//! dataset spanning three provinces, and a compact three-tree artifact
//! compatible with it. Tests write these to a tempdir rather than relying
//! on the shipped `data/` files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::state::AppState;

pub const SAMPLE_CSV_HEADER: &str = "Provinsi,Kab/Kota,Persentase Penduduk Miskin (P0) Menurut Kabupaten/Kota (Persen),Rata-rata Lama Sekolah Penduduk 15+ (Tahun),Pengeluaran per Kapita Disesuaikan (Ribu Rupiah/Orang/Tahun),Indeks Pembangunan Manusia,Umur Harapan Hidup (Tahun),Persentase rumah tangga yang memiliki akses terhadap sanitasi layak,Persentase rumah tangga yang memiliki akses terhadap air minum layak,Tingkat Pengangguran Terbuka,Tingkat Partisipasi Angkatan Kerja,PDRB atas Dasar Harga Konstan menurut Pengeluaran (Rupiah),Klasifikasi Kemiskinan";

const SAMPLE_ROWS: &str = "\
Aceh,Simeulue,19.98,9.07,7032,65.60,65.22,59.62,91.13,1.48,70.33,1710000000000,1
Aceh,Aceh Barat,18.34,8.41,8258,70.39,67.85,70.10,83.84,5.19,65.22,5130000000000,1
Bali,Tabanan,4.21,8.90,14210,76.16,73.33,91.20,95.50,2.30,75.10,9970000000000,0
Bali,Badung,1.98,10.50,17600,80.87,74.80,96.70,98.20,3.10,72.40,29500000000000,0
Banten,Serang,4.70,7.70,10500,66.70,64.30,78.90,89.60,8.10,62.50,65000000000000,0
Banten,Lebak,8.91,6.50,8600,63.91,67.23,69.40,77.30,7.80,64.10,22000000000000,1";

/// Three shallow trees splitting on P0 and IPM; enough to make the sample
/// rows classify the same way their true labels read.
pub const SAMPLE_MODEL_JSON: &str = r#"{
    "feature_names": [
        "Provinsi_lbl",
        "KabKota_lbl",
        "Persentase Penduduk Miskin (P0) Menurut Kabupaten/Kota (Persen)",
        "Rata-rata Lama Sekolah Penduduk 15+ (Tahun)",
        "Pengeluaran per Kapita Disesuaikan (Ribu Rupiah/Orang/Tahun)",
        "Indeks Pembangunan Manusia",
        "Umur Harapan Hidup (Tahun)",
        "Persentase rumah tangga yang memiliki akses terhadap sanitasi layak",
        "Persentase rumah tangga yang memiliki akses terhadap air minum layak",
        "Tingkat Pengangguran Terbuka",
        "Tingkat Partisipasi Angkatan Kerja",
        "PDRB atas Dasar Harga Konstan menurut Pengeluaran (Rupiah)"
    ],
    "trees": [
        {"nodes": [
            {"feature": 2, "threshold": 10.0, "left": 1, "right": 2},
            {"counts": [8.0, 2.0]},
            {"counts": [1.0, 9.0]}
        ]},
        {"nodes": [
            {"feature": 5, "threshold": 68.0, "left": 1, "right": 2},
            {"counts": [2.0, 8.0]},
            {"counts": [9.0, 1.0]}
        ]},
        {"nodes": [
            {"feature": 2, "threshold": 12.0, "left": 1, "right": 2},
            {"counts": [7.0, 1.0]},
            {"counts": [0.0, 10.0]}
        ]}
    ]
}"#;

pub fn feature_names_json() -> String {
    let parsed: serde_json::Value = serde_json::from_str(SAMPLE_MODEL_JSON).unwrap();
    parsed["feature_names"].to_string()
}

pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("tingkat_kemiskinan.csv");
    std::fs::write(&path, format!("{SAMPLE_CSV_HEADER}\n{SAMPLE_ROWS}\n")).unwrap();
    path
}

pub fn write_sample_model(dir: &Path) -> PathBuf {
    let path = dir.join("model_kemiskinan.json");
    std::fs::write(&path, SAMPLE_MODEL_JSON).unwrap();
    path
}

/// Build a fully loaded `AppState` from the sample fixtures.
/// The tempdir guard must be kept alive for the duration of the test.
pub fn sample_state() -> (Arc<AppState>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let data = write_sample_csv(dir.path());
    let model = write_sample_model(dir.path());
    let state = AppState::load(&data, &model).unwrap();
    (Arc::new(state), dir)
}
