//! XLSX fixtures for tests
//!
//! Builds minimal SpreadsheetML packages in memory: content types, package
//! and workbook relationships, `xl/workbook.xml` and one worksheet part per
//! sheet. Text cells are written as inline strings, so no shared strings or
//! styles part is needed.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// One fixture cell
#[derive(Debug, Clone)]
pub enum Cell {
    /// No `<c>` element at all
    Blank,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Blank
        } else {
            Cell::Text(s.to_string())
        }
    }
}

/// Text rows; an empty string leaves the cell out
pub fn text_rows(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| row.iter().map(|&s| Cell::from(s)).collect())
        .collect()
}

/// In-memory XLSX builder
#[derive(Default)]
pub struct XlsxFixture {
    sheets: Vec<(String, Vec<Vec<Cell>>)>,
}

impl XlsxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(mut self, name: &str, rows: Vec<Vec<Cell>>) -> Self {
        self.sheets.push((name.to_string(), rows));
        self
    }

    pub fn text_sheet(self, name: &str, rows: &[&[&str]]) -> Self {
        self.sheet(name, text_rows(rows))
    }

    /// Serialize the package
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let mut overrides = String::new();
        let mut sheet_tags = String::new();
        let mut sheet_rels = String::new();
        for (i, (name, _)) in self.sheets.iter().enumerate() {
            let n = i + 1;
            overrides.push_str(&format!(
                "<Override PartName=\"/xl/worksheets/sheet{n}.xml\" \
                 ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>"
            ));
            sheet_tags.push_str(&format!(
                "<sheet name=\"{}\" sheetId=\"{n}\" r:id=\"rId{n}\"/>",
                escape(name)
            ));
            sheet_rels.push_str(&format!(
                "<Relationship Id=\"rId{n}\" Type=\"{REL_NS}/worksheet\" Target=\"worksheets/sheet{n}.xml\"/>"
            ));
        }

        let parts = [
            (
                "[Content_Types].xml".to_string(),
                format!(
                    "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
                     <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
                     <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
                     <Override PartName=\"/xl/workbook.xml\" \
                     ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
                     {overrides}</Types>"
                ),
            ),
            (
                "_rels/.rels".to_string(),
                format!(
                    "<Relationships xmlns=\"{PKG_REL_NS}\">\
                     <Relationship Id=\"rId1\" Type=\"{REL_NS}/officeDocument\" Target=\"xl/workbook.xml\"/>\
                     </Relationships>"
                ),
            ),
            (
                "xl/workbook.xml".to_string(),
                format!(
                    "<workbook xmlns=\"{MAIN_NS}\" xmlns:r=\"{REL_NS}\"><sheets>{sheet_tags}</sheets></workbook>"
                ),
            ),
            (
                "xl/_rels/workbook.xml.rels".to_string(),
                format!("<Relationships xmlns=\"{PKG_REL_NS}\">{sheet_rels}</Relationships>"),
            ),
        ];

        for (name, body) in parts {
            write_part(&mut zip, &name, &body, options);
        }
        for (i, (_, rows)) in self.sheets.iter().enumerate() {
            let body = worksheet_xml(rows);
            write_part(&mut zip, &format!("xl/worksheets/sheet{}.xml", i + 1), &body, options);
        }

        zip.finish().unwrap().into_inner()
    }

    /// Write the package to `dir/file_name`
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.to_bytes()).unwrap();
        path
    }
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    body: &str,
    options: SimpleFileOptions,
) {
    zip.start_file(name, options).unwrap();
    zip.write_all(b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n")
        .unwrap();
    zip.write_all(body.as_bytes()).unwrap();
}

fn worksheet_xml(rows: &[Vec<Cell>]) -> String {
    let mut xml = format!("<worksheet xmlns=\"{MAIN_NS}\" xmlns:r=\"{REL_NS}\"><sheetData>");
    for (r, row) in rows.iter().enumerate() {
        if row.iter().all(|c| matches!(c, Cell::Blank)) {
            continue;
        }
        xml.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letter(c), r + 1);
            match cell {
                Cell::Blank => {}
                Cell::Text(text) => xml.push_str(&format!(
                    "<c r=\"{reference}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                    escape(text)
                )),
                Cell::Number(value) => {
                    xml.push_str(&format!("<c r=\"{reference}\"><v>{value}</v></c>"))
                }
                Cell::Bool(value) => xml.push_str(&format!(
                    "<c r=\"{reference}\" t=\"b\"><v>{}</v></c>",
                    u8::from(*value)
                )),
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

// 0 -> A, 25 -> Z, 26 -> AA
fn column_letter(col: usize) -> String {
    let mut result = String::new();
    let mut col = col + 1;
    while col > 0 {
        col -= 1;
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    result
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
