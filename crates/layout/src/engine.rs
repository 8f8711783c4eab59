use crate::context::PageContext;
use crate::metrics::StandardFonts;
use crate::wrap::split_text_to_size;
use pallet_tag_fields::{FieldOptions, TagFields};
use pallet_tag_traits::TextMetrics;
use pallet_tag_types::{DrawOp, PageOps, Point, Rect, Record, Size, TextStyle};

/// Key under which the renderer registers the shared logo image.
pub const LOGO_KEY: &str = "logo";
/// Height the logo is scaled to; width follows its aspect ratio.
pub const LOGO_HEIGHT_MM: f32 = 8.0;

pub const TITLE: &str = "PALLET TAG";
pub const ORIGIN_TEXT: &str = "MADE IN PAKISTAN";

const TITLE_STYLE: TextStyle = TextStyle::bold(13.0);
const CONTAINER_STYLE: TextStyle = TextStyle::bold(11.0);
const LABEL: TextStyle = TextStyle::bold(7.5);
const VALUE: TextStyle = TextStyle::normal(7.5);
const DIMENSION: TextStyle = TextStyle::normal(7.0);

const ROW: f32 = 4.0;
const WRAPPED_ROW: f32 = 3.5;
const DIMENSION_ROW: f32 = 3.5;
const INVOICE_ROW: f32 = 4.5;
const INLINE_GAP: f32 = 2.0;
const WEIGHT_VALUE_GAP: f32 = 3.0;
const DIMENSION_LABEL_INDENT: f32 = 5.0;
const DIMENSION_VALUE_OFFSET: f32 = 42.0;
const PALLET_VALUE_OFFSET: f32 = 36.0;
const FILM_WRAP_INSET: f32 = 20.0;
const ORIGIN_BOTTOM_OFFSET: f32 = 1.5;
const UNDERLINE_DROP: f32 = 0.8;
const UNDERLINE_OVERHANG: f32 = 1.0;
const UNDERLINE_WIDTH: f32 = 0.3;

/// Turns one record into the draw instructions for one tag page.
///
/// Layout is a pure function of the record, the filename, the page context
/// and the logo size: identical inputs always yield identical ops.
#[derive(Debug, Clone)]
pub struct PageLayoutEngine<M: TextMetrics = StandardFonts> {
    ctx: PageContext,
    metrics: M,
    options: FieldOptions,
    logo: Option<Size>,
}

impl PageLayoutEngine<StandardFonts> {
    pub fn new(ctx: PageContext) -> Self {
        Self::with_metrics(ctx, StandardFonts)
    }
}

impl<M: TextMetrics> PageLayoutEngine<M> {
    pub fn with_metrics(ctx: PageContext, metrics: M) -> Self {
        Self {
            ctx,
            metrics,
            options: FieldOptions::default(),
            logo: None,
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Reserves the logo slot; `size` is the placed size in millimeters.
    pub fn with_logo(mut self, size: Option<Size>) -> Self {
        self.logo = size;
        self
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub fn layout(&self, record: &Record, filename: &str) -> PageOps {
        let fields = TagFields::resolve(record, filename, self.options);
        self.layout_fields(&fields)
    }

    pub fn layout_fields(&self, fields: &TagFields) -> PageOps {
        let ctx = &self.ctx;
        let left = ctx.left_col;
        let right = ctx.right_col;
        let mut page = PageOps::new();

        // Header
        let header_y = ctx.margin;
        if let Some(size) = self.logo {
            page.push(DrawOp::Image {
                key: LOGO_KEY.to_string(),
                rect: Rect::new(left, header_y, size.width, size.height),
            });
        }
        self.centered(&mut page, TITLE, header_y + 3.0, TITLE_STYLE);
        let container = format!("CONT # {}", fields.container_number);
        self.centered(&mut page, &container, header_y + 7.0, CONTAINER_STYLE);

        let mut y = header_y + 13.0;

        put(&mut page, "LC / PO #", left, y, LABEL);
        put(&mut page, &fields.lc_po_number, left + ctx.label_value_gap, y, VALUE);
        y += ROW;

        put(&mut page, &fields.customer, left, y, LABEL);
        y += ROW;

        let address = self.wrap(&fields.address, ctx.col_width, LABEL);
        self.put_lines(&mut page, &address, left, y, LABEL);
        y += (address.len() as f32 * WRAPPED_ROW).max(WRAPPED_ROW);

        put(&mut page, &fields.country, left, y, LABEL);
        y += ROW;

        let invoice_label = "PROFORMA INVOICE NUMBER:";
        put(&mut page, invoice_label, left, y, LABEL);
        let invoice_x = left + self.width(invoice_label, VALUE) + INLINE_GAP;
        put(&mut page, &fields.invoice_number, invoice_x, y, VALUE);
        y += INVOICE_ROW;

        put(&mut page, "FILM DESCP:", left, y, LABEL);
        let film = self.wrap(&fields.film_description, ctx.content_width - FILM_WRAP_INSET, VALUE);
        self.put_lines(&mut page, &film, left + ctx.label_value_gap, y, VALUE);
        y += (film.len() as f32 * WRAPPED_ROW).max(ROW);

        put(&mut page, "SIZE MM:", left, y, LABEL);
        put(&mut page, &fields.size, left + ctx.label_value_gap, y, VALUE);
        let reels_label = "No. OF REELS / PALLET";
        put(&mut page, reels_label, right, y, LABEL);
        let reels_x = right + self.width(reels_label, VALUE) + INLINE_GAP;
        put(&mut page, &fields.reel_count, reels_x, y, VALUE);
        y += ROW;

        let net_label = "NET WEIGHT (PALLET):";
        let gross_label = "GROSS WEIGHT (PALLET):";
        let weight_x = left
            + self.width(net_label, LABEL).max(self.width(gross_label, LABEL))
            + WEIGHT_VALUE_GAP;
        let weights = [
            (net_label, &fields.net_weight),
            (gross_label, &fields.gross_weight),
        ];
        for (label, value) in weights {
            put(&mut page, label, left, y, LABEL);
            put(&mut page, value, weight_x, y, VALUE);
            let unit_x = weight_x + self.width(value, VALUE) + INLINE_GAP;
            put(&mut page, "KGS.", unit_x, y, VALUE);
            y += ROW;
        }

        put(&mut page, "PALLET DIMENSIONS MM:", left, y, LABEL);
        y += ROW;
        let dims = &fields.dimensions;
        let label_x = left + DIMENSION_LABEL_INDENT;
        let value_x = left + DIMENSION_VALUE_OFFSET;
        for (label, value) in [("Width", &dims.width), ("Height", &dims.height)] {
            put(&mut page, label, label_x, y, DIMENSION);
            put(&mut page, value, value_x, y, DIMENSION);
            y += DIMENSION_ROW;
        }
        put(&mut page, "Length", label_x, y, DIMENSION);
        put(&mut page, &dims.length, value_x, y, DIMENSION);
        y += ROW;

        put(&mut page, "PALLET NUMBER:", right, y, LABEL);
        put(&mut page, &fields.pallet_number, right + PALLET_VALUE_OFFSET, y, VALUE);

        // Footer
        let origin_width = self.width(ORIGIN_TEXT, LABEL);
        let origin_x = ctx.centered_x(origin_width);
        let origin_y = ctx.page_height - ctx.margin - ORIGIN_BOTTOM_OFFSET;
        put(&mut page, ORIGIN_TEXT, origin_x, origin_y, LABEL);
        let underline_y = origin_y + UNDERLINE_DROP;
        page.line(
            Point::new(origin_x - UNDERLINE_OVERHANG, underline_y),
            Point::new(origin_x + origin_width + UNDERLINE_OVERHANG, underline_y),
            UNDERLINE_WIDTH,
        );

        log::trace!("Laid out tag page with {} ops", page.len());
        page
    }

    fn width(&self, text: &str, style: TextStyle) -> f32 {
        self.metrics.text_width(text, style)
    }

    fn wrap(&self, text: &str, max_width: f32, style: TextStyle) -> Vec<String> {
        split_text_to_size(text, max_width, style, &self.metrics)
    }

    fn centered(&self, page: &mut PageOps, text: &str, y: f32, style: TextStyle) {
        let x = self.ctx.centered_x(self.width(text, style));
        put(page, text, x, y, style);
    }

    fn put_lines(&self, page: &mut PageOps, lines: &[String], x: f32, y: f32, style: TextStyle) {
        let step = self.metrics.line_height(style);
        for (i, line) in lines.iter().enumerate() {
            put(page, line, x, y + i as f32 * step, style);
        }
    }
}

/// Empty values draw nothing.
fn put(page: &mut PageOps, text: &str, x: f32, y: f32, style: TextStyle) {
    if !text.is_empty() {
        page.text(text, x, y, style);
    }
}
