//! Process-wide application state.
//!
//! Everything a handler touches — dataset, the two fitted encoders, the
//! classifier, and the startup summary — is loaded eagerly here, exactly
//! once, and shared read-only behind an `Arc` for the life of the server.
//! No reload, no mutation.

use std::path::Path;

use crate::dataset::{Dataset, DatasetError, NationalSummary, Row};
use crate::encoder::{LabelEncoder, UnseenValue};
use crate::model::{Classifier, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Encode(#[from] UnseenValue),
}

/// Outcome of classifying one dataset row through the model.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The dataset row the features came from, including its true label.
    pub row: Row,
    pub label: u8,
    pub proba_tidak_miskin: f64,
    pub proba_miskin: f64,
}

#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    /// Sorted distinct province names, shared by both page dropdowns.
    pub provinces: Vec<String>,
    pub national: NationalSummary,
    provinsi_encoder: LabelEncoder,
    kabkota_encoder: LabelEncoder,
    model: Classifier,
}

impl AppState {
    /// One-shot startup load: parse the CSV, fit both encoders over its
    /// distinct values, load the artifact, and precompute the national
    /// summary. Any failure here aborts startup.
    pub fn load(data_path: &Path, model_path: &Path) -> Result<Self, StateError> {
        let dataset = Dataset::load(data_path)?;
        tracing::info!(
            path = %data_path.display(),
            rows = dataset.rows().len(),
            "dataset loaded"
        );

        let provinsi_encoder = LabelEncoder::fit(dataset.rows().iter().map(|r| &r.provinsi));
        let kabkota_encoder = LabelEncoder::fit(dataset.rows().iter().map(|r| &r.kab_kota));

        let model = Classifier::load(model_path)?;
        tracing::info!(
            path = %model_path.display(),
            trees = model.n_trees(),
            "classifier loaded"
        );

        let provinces = dataset.provinces();
        let national = NationalSummary::compute(&dataset);

        Ok(Self {
            dataset,
            provinces,
            national,
            provinsi_encoder,
            kabkota_encoder,
            model,
        })
    }

    pub fn model(&self) -> &Classifier {
        &self.model
    }

    /// Classify the dataset row matching (provinsi, kab/kota) exactly.
    ///
    /// Returns `Ok(None)` when no row matches — the one user-visible data
    /// error. The feature vector is assembled in the artifact's trained
    /// order: the two encoded categoricals, then the ten indicators.
    /// Encoder misses cannot occur for a row found in the dataset the
    /// encoders were fitted on, but the error path is kept typed rather
    /// than panicking.
    pub fn classify(
        &self,
        provinsi: &str,
        kab_kota: &str,
    ) -> Result<Option<Prediction>, StateError> {
        let Some(row) = self.dataset.find(provinsi, kab_kota) else {
            return Ok(None);
        };

        let provinsi_lbl = self.provinsi_encoder.transform(&row.provinsi)?;
        let kabkota_lbl = self.kabkota_encoder.transform(&row.kab_kota)?;

        // Order must match the artifact's feature_names; the model has no
        // schema check of its own.
        let features = [
            f64::from(provinsi_lbl),
            f64::from(kabkota_lbl),
            row.p0,
            row.lama_sekolah,
            row.pengeluaran,
            row.ipm,
            row.umur_harapan,
            row.sanitasi,
            row.air_minum,
            row.tpt,
            row.tpak,
            row.pdrb,
        ];

        let label = self.model.predict(&features)?;
        let proba = self.model.predict_proba(&features)?;

        tracing::debug!(provinsi, kab_kota, label, "classified row");

        Ok(Some(Prediction {
            row: row.clone(),
            label,
            proba_tidak_miskin: proba[0],
            proba_miskin: proba[1],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn load_populates_summary_and_provinces() {
        let (state, _dir) = testutil::sample_state();
        assert_eq!(state.provinces, vec!["Aceh", "Bali", "Banten"]);
        assert_eq!(state.national.provinsi, 3);
        assert_eq!(state.national.kabkota, 6);
        assert_eq!(state.model().n_trees(), 3);
    }

    #[test]
    fn classify_known_row_returns_valid_probabilities() {
        let (state, _dir) = testutil::sample_state();
        let pred = state.classify("Aceh", "Simeulue").unwrap().unwrap();
        assert!(pred.label == 0 || pred.label == 1);
        assert!((pred.proba_miskin + pred.proba_tidak_miskin - 1.0).abs() < 1e-9);
        assert_eq!(pred.row.kab_kota, "Simeulue");
        assert_eq!(pred.row.klasifikasi, 1);
    }

    #[test]
    fn classify_agrees_with_sample_labels() {
        // The fixture forest splits on P0/IPM thresholds that separate
        // the sample rows cleanly.
        let (state, _dir) = testutil::sample_state();
        for row in state.dataset.rows() {
            let pred = state
                .classify(&row.provinsi, &row.kab_kota)
                .unwrap()
                .unwrap();
            assert_eq!(
                pred.label, row.klasifikasi,
                "{}/{}",
                row.provinsi, row.kab_kota
            );
        }
    }

    #[test]
    fn classify_unknown_pair_is_none() {
        let (state, _dir) = testutil::sample_state();
        assert!(state.classify("Aceh", "Tabanan").unwrap().is_none());
        assert!(state.classify("Papua", "Merauke").unwrap().is_none());
        // Exact match only
        assert!(state.classify("aceh", "Simeulue").unwrap().is_none());
    }

    #[test]
    fn load_fails_on_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let data = testutil::write_sample_csv(dir.path());
        let err = AppState::load(&data, &dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, StateError::Model(ModelError::Read { .. })));
    }

    #[test]
    fn load_fails_on_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let model = testutil::write_sample_model(dir.path());
        let err = AppState::load(&dir.path().join("missing.csv"), &model).unwrap_err();
        assert!(matches!(err, StateError::Dataset(DatasetError::Read { .. })));
    }
}
