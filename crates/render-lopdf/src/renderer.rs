use crate::encoding::to_win_ansi;
use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use pallet_tag_resource::LogoImage;
use pallet_tag_types::{DrawOp, FontWeight, PageOps, Point, Rect, Size, TextStyle, mm_to_pt};
use std::collections::BTreeMap;
use std::io::Write;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Writes laid-out pages into a single in-memory PDF.
///
/// Every page shares one resources dictionary holding the two Helvetica
/// faces and any registered images, so an image added once is embedded
/// once no matter how many pages place it.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    page_size_pt: Size,
    compress: bool,
}

impl LopdfRenderer {
    /// `page_size` is in millimeters.
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size_pt: page_size.to_pt(),
            compress: true,
        }
    }

    /// Toggles Flate compression of content and image streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn page_size_pt(&self) -> Size {
        self.page_size_pt
    }

    pub fn render(
        &self,
        pages: &[PageOps],
        images: &[(&str, &LogoImage)],
    ) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.render_to(pages, images, &mut bytes)?;
        Ok(bytes)
    }

    pub fn render_to<W: Write>(
        &self,
        pages: &[PageOps],
        images: &[(&str, &LogoImage)],
        writer: &mut W,
    ) -> Result<(), RenderError> {
        let mut document = self.build(pages, images)?;
        document.save_to(writer)?;
        Ok(())
    }

    /// Builds the object graph without serializing it.
    pub fn build(
        &self,
        pages: &[PageOps],
        images: &[(&str, &LogoImage)],
    ) -> Result<Document, RenderError> {
        if pages.is_empty() {
            return Err(RenderError::NoPages);
        }

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let regular_id = document.add_object(font_dict("Helvetica"));
        let bold_id = document.add_object(font_dict("Helvetica-Bold"));

        let mut xobjects = Dictionary::new();
        let mut image_names = BTreeMap::new();
        for (index, (key, image)) in images.iter().enumerate() {
            let name = format!("Im{}", index + 1);
            let image_id = document.add_object(self.image_stream(image)?);
            xobjects.set(name.clone(), image_id);
            image_names.insert(*key, name);
            log::debug!(
                "Registered image '{}' ({}x{} px)",
                key,
                image.width_px,
                image.height_px
            );
        }

        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
            "XObject" => xobjects,
        });

        let (page_width, page_height) = (self.page_size_pt.width, self.page_size_pt.height);
        let mut page_ids = Vec::with_capacity(pages.len());
        for ops in pages {
            let content = PageWriter::new(page_height, &image_names).write(ops);
            let stream = self.stream(Dictionary::new(), content.encode()?)?;
            let content_id = document.add_object(stream);
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        let info_id = document.add_object(dictionary! {
            "Title" => Object::string_literal("Pallet Tags"),
            "Producer" => Object::string_literal("pallet-tag"),
        });
        document.trailer.set("Info", info_id);

        log::debug!("Built PDF with {} page(s)", page_ids.len());
        Ok(document)
    }

    fn image_stream(&self, image: &LogoImage) -> Result<Stream, RenderError> {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width_px as i64,
            "Height" => image.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        self.stream(dict, image.rgb.clone())
    }

    fn stream(&self, mut dict: Dictionary, data: Vec<u8>) -> Result<Stream, RenderError> {
        if !self.compress {
            return Ok(Stream::new(dict, data));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&data)?;
        let compressed = encoder.finish()?;
        dict.set("Filter", "FlateDecode");
        Ok(Stream::new(dict, compressed))
    }
}

fn font_dict(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Translates one page of draw ops into content stream operators, flipping
/// from top-left millimeters to bottom-left points.
struct PageWriter<'a> {
    page_height: f32,
    images: &'a BTreeMap<&'a str, String>,
    content: Content,
    font: Option<(FontWeight, f32)>,
    line_width: Option<f32>,
}

impl<'a> PageWriter<'a> {
    fn new(page_height: f32, images: &'a BTreeMap<&'a str, String>) -> Self {
        Self {
            page_height,
            images,
            content: Content { operations: vec![] },
            font: None,
            line_width: None,
        }
    }

    fn write(mut self, ops: &PageOps) -> Content {
        for op in ops.ops() {
            match op {
                DrawOp::Text { text, at, style } => self.draw_text(text, *at, *style),
                DrawOp::Image { key, rect } => self.draw_image(key, *rect),
                DrawOp::Line { from, to, width } => self.draw_line(*from, *to, *width),
            }
        }
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn flip(&self, point: Point) -> (f32, f32) {
        (mm_to_pt(point.x), self.page_height - mm_to_pt(point.y))
    }

    fn set_font(&mut self, style: TextStyle) {
        if self.font == Some((style.weight, style.size)) {
            return;
        }
        let name = match style.weight {
            FontWeight::Normal => REGULAR_FONT,
            FontWeight::Bold => BOLD_FONT,
        };
        self.push("Tf", vec![name.into(), style.size.into()]);
        self.font = Some((style.weight, style.size));
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let (x, y) = self.flip(at);
        self.push("BT", vec![]);
        self.set_font(style);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_image(&mut self, key: &str, rect: Rect) {
        let Some(name) = self.images.get(key).cloned() else {
            log::warn!("No image registered under '{}'; skipping", key);
            return;
        };
        let (x, y) = self.flip(Point::new(rect.x, rect.bottom()));
        let (w, h) = (mm_to_pt(rect.width), mm_to_pt(rect.height));
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32) {
        let width = mm_to_pt(width);
        if self.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.line_width = Some(width);
        }
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }
}
