use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::result::ZipResult;
use zip::write::FileOptions;

pub const HEADER: &str = "LC / PO #,Address,PROFORMA INVOICE NUMBER:,Film,Size MM:,Reels,Net Weight,Gross Weight,Pallet Dimension MM:,Pallet No.";

/// One data row with the given pallet number.
pub fn data_row(pallet: u32) -> String {
    format!(
        "PO-{pallet:03},\"ACME FILMS SL, CALLE MAYOR {pallet}, SPAIN\",INV-77,BOPP CLEAR 20 MIC,1040,4,812.5,845,1100 x 1200 x 1350,{pallet}"
    )
}

/// A CSV with a title row above the header and `rows` data rows.
pub fn tag_csv(rows: u32) -> String {
    let mut csv = String::from(",,,,\n");
    csv.push_str(HEADER);
    csv.push('\n');
    for pallet in 1..=rows {
        csv.push_str(&data_row(pallet));
        csv.push('\n');
    }
    csv
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// A small two-tone PNG, twice as wide as it is tall.
pub fn logo_png() -> Vec<u8> {
    let image = ImageBuffer::from_fn(8, 4, |x, _| {
        if x < 4 {
            Rgb([200u8, 30, 30])
        } else {
            Rgb([30u8, 30, 200])
        }
    });
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

const XLSX_CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const XLSX_ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const XLSX_WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Tags" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const XLSX_WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// A worksheet cell.
pub enum XlsxCell {
    Text(String),
    Number(f64),
}

impl XlsxCell {
    fn to_xml(&self, at: &str) -> String {
        match self {
            XlsxCell::Text(t) => {
                format!(r#"<c r="{at}" t="inlineStr"><is><t>{t}</t></is></c>"#)
            }
            XlsxCell::Number(n) => format!(r#"<c r="{at}"><v>{n}</v></c>"#),
        }
    }
}

fn text(s: &str) -> XlsxCell {
    XlsxCell::Text(s.to_string())
}

/// Header and data rows as typed workbook cells. Reels, weights and pallet
/// numbers are numeric; the gross weight sits exactly on a rounding tie.
pub fn tag_sheet(pallets: &[u32]) -> Vec<Vec<XlsxCell>> {
    let mut rows = vec![HEADER.split(',').map(text).collect()];
    for &pallet in pallets {
        rows.push(vec![
            XlsxCell::Text(format!("PO-{pallet:03}")),
            XlsxCell::Text(format!("ACME FILMS SL, CALLE MAYOR {pallet}, SPAIN")),
            text("INV-77"),
            text("BOPP CLEAR 20 MIC"),
            XlsxCell::Number(1040.0),
            XlsxCell::Number(4.0),
            XlsxCell::Number(812.5),
            XlsxCell::Number(845.125),
            text("1100 x 1200 x 1350"),
            XlsxCell::Number(pallet as f64),
        ]);
    }
    rows
}

/// A single-sheet `.xlsx` whose rows begin at sheet row `first_row`
/// (1-based), leaving everything above it blank.
pub fn tag_xlsx(rows: &[Vec<XlsxCell>], first_row: u32) -> ZipResult<Vec<u8>> {
    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (i, row) in rows.iter().enumerate() {
        let r = first_row + i as u32;
        sheet.push_str(&format!(r#"<row r="{r}">"#));
        for (j, cell) in row.iter().enumerate() {
            let at = format!("{}{r}", (b'A' + j as u8) as char);
            sheet.push_str(&cell.to_xml(&at));
        }
        sheet.push_str("</row>");
    }
    sheet.push_str("</sheetData></worksheet>");

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<()> = FileOptions::default();
    for (name, body) in [
        ("[Content_Types].xml", XLSX_CONTENT_TYPES),
        ("_rels/.rels", XLSX_ROOT_RELS),
        ("xl/workbook.xml", XLSX_WORKBOOK),
        ("xl/_rels/workbook.xml.rels", XLSX_WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
    ] {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}
