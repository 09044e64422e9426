//! `GET /predict` and `POST /predict` — the point-prediction form.
//!
//! The form offers cascading province → kab/kota selects; the grouping is
//! embedded as JSON and filtered client-side. Submission looks up the
//! exact dataset row, runs it through the classifier, and re-renders the
//! page with the result (or the not-found message) below the form.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::state::{AppState, Prediction};
use crate::web::error::AppError;
use crate::web::render::{self, escape, fmt_proba, Nav};

/// User-visible message for a (provinsi, kab/kota) pair with no dataset row.
pub const NOT_FOUND_MESSAGE: &str =
    "Data untuk kombinasi Provinsi & Kab/Kota tidak ditemukan.";

#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub provinsi: String,
    pub kabkota: String,
}

enum Outcome {
    NotFound,
    Predicted(Prediction),
}

pub async fn form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state, None))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, AppError> {
    let outcome = match state.classify(&form.provinsi, &form.kabkota)? {
        Some(prediction) => Outcome::Predicted(prediction),
        None => {
            tracing::info!(
                provinsi = %form.provinsi,
                kabkota = %form.kabkota,
                "predict lookup missed"
            );
            Outcome::NotFound
        }
    };
    Ok(Html(render_page(&state, Some(outcome))))
}

fn render_page(state: &AppState, outcome: Option<Outcome>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Prediksi Klasifikasi Kemiskinan</h1>");
    body.push_str(
        "<p>Pilih provinsi dan kab/kota; baris data yang cocok akan \
         dijalankan melalui model.</p>",
    );
    body.push_str(&render_form(state));

    match outcome {
        None => {}
        Some(Outcome::NotFound) => {
            body.push_str(&format!(
                "<section class=\"result not-found\"><p>{NOT_FOUND_MESSAGE}</p></section>"
            ));
        }
        Some(Outcome::Predicted(prediction)) => {
            body.push_str(&render_result(&prediction));
        }
    }

    render::page("Prediksi", Some(Nav::Predict), &body)
}

fn render_form(state: &AppState) -> String {
    let mut options = String::from("<option value=\"\" disabled selected>Pilih provinsi</option>");
    for p in &state.provinces {
        options.push_str(&format!(
            "<option value=\"{v}\">{v}</option>",
            v = escape(p)
        ));
    }

    // Embedded as JSON for the cascading select. `</` must not appear
    // inside a script element.
    let mapping = serde_json::to_string(&state.dataset.kabkota_by_province())
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    format!(
        "<form method=\"post\" action=\"/predict\" class=\"predict\">\
         <label for=\"provinsi\">Provinsi</label>\
         <select id=\"provinsi\" name=\"provinsi\" required>{options}</select>\
         <label for=\"kabkota\">Kab/Kota</label>\
         <select id=\"kabkota\" name=\"kabkota\" required>\
         <option value=\"\" disabled selected>Pilih kab/kota</option></select>\
         <button type=\"submit\">Prediksi</button>\
         </form>\
         <script>\
         const MAPPING = {mapping};\
         const prov = document.getElementById(\"provinsi\");\
         const kab = document.getElementById(\"kabkota\");\
         prov.addEventListener(\"change\", () => {{\
           kab.innerHTML = \"\";\
           for (const k of MAPPING[prov.value] || []) {{\
             const opt = document.createElement(\"option\");\
             opt.value = k; opt.textContent = k;\
             kab.appendChild(opt);\
           }}\
         }});\
         </script>"
    )
}

fn detail_row(label: &str, value: String) -> String {
    format!("<tr><th>{label}</th><td>{value}</td></tr>")
}

fn render_result(prediction: &Prediction) -> String {
    let row = &prediction.row;
    let (hasil, class) = if prediction.label == 1 {
        ("MISKIN (label 1)", "miskin")
    } else {
        ("TIDAK MISKIN (label 0)", "tidak-miskin")
    };

    let mut details = String::from("<table class=\"detail\"><tbody>");
    details.push_str(&detail_row("Provinsi", escape(&row.provinsi)));
    details.push_str(&detail_row("Kab/Kota", escape(&row.kab_kota)));
    details.push_str(&detail_row("P0 (%)", format!("{:.2}", row.p0)));
    details.push_str(&detail_row("Lama Sekolah (Tahun)", format!("{:.2}", row.lama_sekolah)));
    details.push_str(&detail_row("Pengeluaran", format!("{:.0}", row.pengeluaran)));
    details.push_str(&detail_row("IPM", format!("{:.2}", row.ipm)));
    details.push_str(&detail_row("Umur Harapan Hidup", format!("{:.2}", row.umur_harapan)));
    details.push_str(&detail_row("Sanitasi Layak (%)", format!("{:.2}", row.sanitasi)));
    details.push_str(&detail_row("Air Minum Layak (%)", format!("{:.2}", row.air_minum)));
    details.push_str(&detail_row("TPT", format!("{:.2}", row.tpt)));
    details.push_str(&detail_row("TPAK", format!("{:.2}", row.tpak)));
    details.push_str(&detail_row("PDRB", format!("{:.0}", row.pdrb)));
    details.push_str(&detail_row("Label Asli", row.klasifikasi.to_string()));
    details.push_str("</tbody></table>");

    format!(
        "<section class=\"result\">\
         <h2>Hasil Prediksi</h2>\
         <p class=\"hasil {class}\">{hasil}</p>\
         <ul class=\"proba\">\
         <li>Probabilitas tidak miskin: {p0}</li>\
         <li>Probabilitas miskin: {p1}</li>\
         </ul>\
         <h2>Detail Baris Data</h2>\
         {details}\
         </section>",
        p0 = fmt_proba(prediction.proba_tidak_miskin),
        p1 = fmt_proba(prediction.proba_miskin),
    )
}
