//! `GET /` — the main dashboard.
//!
//! National summary cards, a per-selection summary, the province filter,
//! and the indicator table for the filtered view. The filter is an
//! optional `provinsi` query parameter; absent or `ALL` means the whole
//! dataset.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::dataset::{self, Row};
use crate::state::AppState;
use crate::web::render::{self, escape, fmt_mean, Nav};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub provinsi: Option<String>,
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    // `ALL` is the sentinel the filter dropdown sends for "no filter".
    let selected = query
        .provinsi
        .as_deref()
        .filter(|p| *p != "ALL")
        .map(str::to_string);

    let view = state.dataset.filtered(selected.as_deref());
    let summary = dataset::summarize(&view);

    let title = match &selected {
        None => "Semua Provinsi di Indonesia".to_string(),
        Some(p) => format!("Provinsi {p}"),
    };

    tracing::debug!(
        provinsi = selected.as_deref().unwrap_or("ALL"),
        rows = view.len(),
        "dashboard render"
    );

    let body = render_body(&state, &title, selected.as_deref(), &summary, &view);
    Html(render::page(&title, Some(Nav::Dashboard), &body))
}

fn summary_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"card\"><span class=\"value\">{value}</span>\
         <span class=\"label\">{label}</span></div>"
    )
}

fn filter_form(provinces: &[String], selected: Option<&str>) -> String {
    let mut options = String::from("<option value=\"ALL\">Semua Provinsi</option>");
    for p in provinces {
        let sel = if selected == Some(p.as_str()) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{v}\"{sel}>{v}</option>",
            v = escape(p)
        ));
    }
    format!(
        "<form method=\"get\" action=\"/\" class=\"filter\">\
         <label for=\"provinsi\">Filter provinsi</label>\
         <select id=\"provinsi\" name=\"provinsi\" onchange=\"this.form.submit()\">{options}</select>\
         <noscript><button type=\"submit\">Terapkan</button></noscript>\
         </form>"
    )
}

fn table_row(row: &Row) -> String {
    let label = if row.klasifikasi == 1 {
        "<span class=\"tag miskin\">Miskin</span>"
    } else {
        "<span class=\"tag tidak-miskin\">Tidak Miskin</span>"
    };
    format!(
        "<tr><td>{provinsi}</td><td>{kab}</td><td>{p0:.2}</td><td>{ipm:.2}</td>\
         <td>{pengeluaran:.0}</td><td>{umur:.2}</td><td>{label}</td></tr>",
        provinsi = escape(&row.provinsi),
        kab = escape(&row.kab_kota),
        p0 = row.p0,
        ipm = row.ipm,
        pengeluaran = row.pengeluaran,
        umur = row.umur_harapan,
    )
}

fn render_body(
    state: &AppState,
    title: &str,
    selected: Option<&str>,
    summary: &dataset::RegionSummary,
    view: &[&Row],
) -> String {
    let national = &state.national;

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>", escape(title)));

    body.push_str("<h2>Ringkasan Nasional</h2><section class=\"cards\">");
    body.push_str(&summary_card("Provinsi", &national.provinsi.to_string()));
    body.push_str(&summary_card("Kab/Kota", &national.kabkota.to_string()));
    body.push_str(&summary_card("Miskin", &national.miskin.to_string()));
    body.push_str(&summary_card(
        "Tidak Miskin",
        &national.tidak_miskin.to_string(),
    ));
    body.push_str(&summary_card("Rata-rata P0 (%)", &fmt_mean(national.avg_p0)));
    body.push_str(&summary_card("Rata-rata IPM", &fmt_mean(national.avg_ipm)));
    body.push_str(&summary_card(
        "Rata-rata Pengeluaran",
        &fmt_mean(national.avg_pengeluaran),
    ));
    body.push_str("</section>");

    body.push_str(&filter_form(&state.provinces, selected));

    body.push_str("<h2>Ringkasan Terpilih</h2><section class=\"cards\">");
    body.push_str(&summary_card("Kab/Kota", &summary.kabkota.to_string()));
    body.push_str(&summary_card("Miskin", &summary.miskin.to_string()));
    body.push_str(&summary_card(
        "Tidak Miskin",
        &summary.tidak_miskin.to_string(),
    ));
    body.push_str(&summary_card("Rata-rata P0 (%)", &fmt_mean(summary.avg_p0)));
    body.push_str(&summary_card("Rata-rata IPM", &fmt_mean(summary.avg_ipm)));
    body.push_str("</section>");

    body.push_str(
        "<table class=\"data\"><thead><tr>\
         <th>Provinsi</th><th>Kab/Kota</th><th>P0 (%)</th><th>IPM</th>\
         <th>Pengeluaran</th><th>Umur Harapan Hidup</th><th>Klasifikasi</th>\
         </tr></thead><tbody>",
    );
    for row in view {
        body.push_str(&table_row(row));
    }
    body.push_str("</tbody></table>");

    if view.is_empty() {
        body.push_str("<p class=\"empty\">Tidak ada data untuk pilihan ini.</p>");
    }

    body
}
