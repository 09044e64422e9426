//! `GET /model-info` — static description of the classifier. The only
//! data-dependent parts are the feature list and tree count read from the
//! loaded artifact.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::web::render::{self, escape, Nav};

pub async fn show(State(state): State<Arc<AppState>>) -> Html<String> {
    let model = state.model();

    let mut features = String::from("<ol class=\"features\">");
    for name in model.feature_names() {
        features.push_str(&format!("<li>{}</li>", escape(name)));
    }
    features.push_str("</ol>");

    let body = format!(
        "<h1>Tentang Model</h1>\
         <p>Model klasifikasi kemiskinan: random forest biner yang dilatih di \
         notebook analisis terpisah dan diekspor sebagai artefak. Server ini \
         hanya memakai <code>predict</code> dan <code>predict_proba</code>; \
         tidak ada pelatihan ulang.</p>\
         <ul class=\"facts\">\
         <li>Keluaran: label 0 (tidak miskin) / 1 (miskin) beserta probabilitas kedua kelas</li>\
         <li>Jumlah pohon: {trees}</li>\
         <li>Provinsi dan Kab/Kota dikodekan dengan label encoding (urutan leksikografis)</li>\
         </ul>\
         <h2>Urutan fitur</h2>\
         <p>Urutan berikut harus dijaga persis saat memanggil model; artefak \
         tidak memvalidasi skema masukannya sendiri.</p>\
         {features}",
        trees = model.n_trees(),
    );

    Html(render::page("Tentang Model", Some(Nav::ModelInfo), &body))
}
