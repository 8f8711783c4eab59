mod common;

use common::fixtures::*;
use common::pdf_assertions::{image_xobject_count, media_box, page_text};
use common::{GeneratedPdf, TestResult, generate_file, generate_pdf};
use pallet_tag::{PipelineError, TagPipelineBuilder};
use tempfile::tempdir;

#[test]
fn test_one_page_per_data_row() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(3).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 3);
    for pallet in 1..=3u32 {
        let text = page_text(&pdf.doc, pallet);
        assert!(text.contains(&format!("PO-{pallet:03}")), "page {pallet}: {text}");
    }
    Ok(())
}

#[test]
fn test_tag_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "SHIPMENT CONT #7.csv", tag_csv(1).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "PALLET TAG");
    assert_pdf_contains_text!(pdf, "CONT # 07");
    assert_pdf_contains_text!(pdf, "ACME FILMS SL");
    assert_pdf_contains_text!(pdf, "INV-77");
    assert_pdf_contains_text!(pdf, "845.00");
    assert_pdf_contains_text!(pdf, "812.5");
    assert_pdf_not_contains_text!(pdf, "812.50");
    assert_pdf_contains_text!(pdf, "MADE IN PAKISTAN");
    Ok(())
}

#[test]
fn test_format_net_weight_option() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(1).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().with_format_net_weight(true).build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_contains_text!(pdf, "812.50");
    Ok(())
}

#[test]
fn test_page_is_six_by_four_inches() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(2).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    for page in 1..=2 {
        let (width, height) = media_box(&pdf.doc, page).ok_or("missing MediaBox")?;
        assert!((width - 432.0).abs() < 0.01, "width {width}");
        assert!((height - 288.0).abs() < 0.01, "height {height}");
    }
    Ok(())
}

#[test]
fn test_no_data_rows_writes_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "empty.csv", format!("{HEADER}\n,,,\n").as_bytes())?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let written = generate_file(&pipeline, &input)?;

    assert!(written.is_none());
    assert!(!dir.path().join("empty.pdf").exists());
    Ok(())
}

#[test]
fn test_output_file_replaces_extension() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "TAGS CONT 3.csv", tag_csv(2).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let written = generate_file(&pipeline, &input)?.ok_or("nothing written")?;

    assert_eq!(written, dir.path().join("TAGS CONT 3.pdf"));
    let pdf = GeneratedPdf::from_file(&written)?;
    assert_pdf_page_count!(pdf, 2);
    assert_pdf_contains_text!(pdf, "CONT # 03");
    Ok(())
}

#[test]
fn test_output_dir_is_created() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(1).as_bytes())?;
    let out = dir.path().join("out").join("pdf");

    let pipeline = TagPipelineBuilder::new().with_output_dir(&out).build()?;
    let written = generate_file(&pipeline, &input)?.ok_or("nothing written")?;

    assert_eq!(written, out.join("tags.pdf"));
    assert!(written.exists());
    Ok(())
}

#[test]
fn test_logo_embedded_once_for_all_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(3).as_bytes())?;
    let logo = write_file(dir.path(), "logo.png", &logo_png())?;

    let pipeline = TagPipelineBuilder::new().with_logo(&logo).build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 3);
    assert_eq!(image_xobject_count(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_logo_from_file_url() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(1).as_bytes())?;
    let logo = write_file(dir.path(), "logo.png", &logo_png())?;

    let pipeline = TagPipelineBuilder::new()
        .with_logo(format!("file://{}", logo.display()))
        .build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_eq!(image_xobject_count(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_missing_logo_is_tolerated() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(2).as_bytes())?;

    let pipeline = TagPipelineBuilder::new()
        .with_logo(dir.path().join("does-not-exist.png"))
        .build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 2);
    assert_eq!(image_xobject_count(&pdf.doc), 0);
    Ok(())
}

#[test]
fn test_corrupt_logo_is_tolerated() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(1).as_bytes())?;
    let logo = write_file(dir.path(), "logo.png", b"not an image")?;

    let pipeline = TagPipelineBuilder::new().with_logo(&logo).build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 1);
    assert_eq!(image_xobject_count(&pdf.doc), 0);
    Ok(())
}

#[test]
fn test_workbook_with_numeric_cells() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let workbook = tag_xlsx(&tag_sheet(&[17, 18]), 1)?;
    let input = write_file(dir.path(), "TAG - CONT # 03.xlsx", &workbook)?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 2);
    for (page, pallet) in [(1u32, "17"), (2, "18")] {
        let text = page_text(&pdf.doc, page);
        assert!(text.contains(pallet), "page {page}: {text}");
        assert!(!text.contains(&format!("{pallet}.0")), "page {page}: {text}");
    }
    assert_pdf_contains_text!(pdf, "PO-017");
    assert_pdf_contains_text!(pdf, "CONT # 03");
    assert_pdf_contains_text!(pdf, "1040");
    assert_pdf_contains_text!(pdf, "812.5");
    assert_pdf_contains_text!(pdf, "845.13");
    Ok(())
}

#[test]
fn test_workbook_header_far_below_first_row() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let workbook = tag_xlsx(&tag_sheet(&[5, 6, 7]), 9)?;
    let input = write_file(dir.path(), "tags.xlsx", &workbook)?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 3);
    for (page, po) in [(1u32, "PO-005"), (3, "PO-007")] {
        let text = page_text(&pdf.doc, page);
        assert!(text.contains(po), "page {page}: {text}");
    }
    Ok(())
}

#[test]
fn test_unreadable_input_is_fatal() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = dir.path().join("missing.xlsx");

    let pipeline = TagPipelineBuilder::new().build()?;
    let result = generate_file(&pipeline, &input);

    assert!(matches!(result, Err(PipelineError::Source(_))), "{result:?}");
    assert!(!dir.path().join("missing.pdf").exists());
    Ok(())
}

#[test]
fn test_malformed_workbook_is_fatal() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "broken.xlsx", b"this is not a zip archive")?;

    let pipeline = TagPipelineBuilder::new().build()?;
    let result = generate_file(&pipeline, &input);

    assert!(matches!(result, Err(PipelineError::Source(_))), "{result:?}");
    Ok(())
}

#[test]
fn test_uncompressed_output_is_valid() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir()?;
    let input = write_file(dir.path(), "tags.csv", tag_csv(2).as_bytes())?;

    let pipeline = TagPipelineBuilder::new().with_compression(false).build()?;
    let pdf = generate_pdf(&pipeline, &input)?;

    assert_pdf_page_count!(pdf, 2);
    assert_pdf_contains_text!(pdf, "PALLET NUMBER:");
    Ok(())
}
