// SPDX-License-Identifier: MPL-2.0
use bloodlink_console::app::config::{self, Config, GeneralConfig, PortalConfig};
use bloodlink_console::domain::{seed_inventory, seed_requests};
use bloodlink_console::export::{
    self, table, ExportFormat, ExportJob, INVENTORY_TABLE_ID, REQUESTS_TABLE_ID,
};
use bloodlink_console::ui::theming::ThemeMode;
use chrono::Local;
use tempfile::tempdir;

#[test]
fn config_round_trip_through_custom_directory() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base_dir = dir.path().to_path_buf();

    let original = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        portal: PortalConfig {
            base_url: Some("http://portal.test:9000".to_string()),
        },
    };
    config::save_with_override(&original, Some(base_dir.clone()))
        .expect("failed to save config");

    let (loaded, warning) = config::load_with_override(Some(base_dir));
    assert!(warning.is_none());
    assert_eq!(loaded, original);
}

#[test]
fn requests_table_exports_as_csv() {
    let now = Local::now();
    let requests = seed_requests(now);
    let inventory = seed_inventory(now);

    let job = ExportJob::new(ExportFormat::Csv, REQUESTS_TABLE_ID);
    let snapshot = table::snapshot(&job.table_id, &requests, &inventory);
    let rendered = export::render(&job, &snapshot)
        .expect("csv render should not fail")
        .expect("csv is a supported format");

    assert_eq!(rendered.file_name, "export.csv");

    let mut lines = rendered.contents.lines();
    let header = lines.next().expect("header row");
    assert_eq!(
        header,
        "\"Request\",\"Hospital\",\"Blood Type\",\"Units\",\"Needed By\",\"Requested\""
    );
    // One line per seed request, every cell quoted
    assert_eq!(lines.clone().count(), requests.len());
    assert!(lines.all(|line| line.starts_with('"') && line.ends_with('"')));
}

#[test]
fn inventory_table_exports_as_excel_html() {
    let now = Local::now();
    let requests = seed_requests(now);
    let inventory = seed_inventory(now);

    let job = ExportJob::new(ExportFormat::Excel, INVENTORY_TABLE_ID);
    let snapshot = table::snapshot(&job.table_id, &requests, &inventory);
    let rendered = export::render(&job, &snapshot)
        .expect("excel render should not fail")
        .expect("excel is a supported format");

    assert_eq!(rendered.file_name, "export.xls");
    assert!(rendered
        .contents
        .contains("xmlns:x=\"urn:schemas-microsoft-com:office:excel\""));
    assert!(rendered.contents.contains("<th>Blood Type</th>"));
    // Eight blood types, eight data rows
    assert_eq!(rendered.contents.matches("<tr>").count(), inventory.len() + 1);
}

#[test]
fn pdf_export_renders_nothing() {
    let now = Local::now();
    let requests = seed_requests(now);
    let inventory = seed_inventory(now);

    let job = ExportJob::new(ExportFormat::Pdf, REQUESTS_TABLE_ID);
    let snapshot = table::snapshot(&job.table_id, &requests, &inventory);

    let rendered = export::render(&job, &snapshot).expect("pdf render should not fail");
    assert!(rendered.is_none());
}

#[test]
fn unknown_table_id_still_produces_a_document() {
    let now = Local::now();
    let requests = seed_requests(now);
    let inventory = seed_inventory(now);

    let job = ExportJob::new(ExportFormat::Csv, "no-such-table");
    let snapshot = table::snapshot(&job.table_id, &requests, &inventory);
    assert!(snapshot.is_empty());

    let rendered = export::render(&job, &snapshot)
        .expect("empty render should not fail")
        .expect("csv is a supported format");
    assert_eq!(rendered.contents, "");
}
