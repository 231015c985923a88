//! The column descriptor.

use std::cmp::Ordering;
use std::fmt;

use tabula_style::{Color, EdgeInsets, RichText, TextDirection};
use uuid::Uuid;

use super::{ColumnFeatures, ColumnFrozen, ColumnSort, ColumnTextAlign};
use crate::column_type::ColumnType;
use crate::config::ColumnDefaults;
use crate::error::{CallbackError, ColumnError};
use crate::filter::FilterKind;
use crate::focus::FocusId;
use crate::group::{GroupId, GroupRegistry};
use crate::render::{
    CellRenderer, CellView, FooterRenderContext, FooterRenderer, GridState, RenderContext,
};
use crate::row::{Cell, Row};
use crate::value::CellValue;

/// Per-cell read-only predicate.
pub type ReadOnlyCheck = Box<dyn Fn(&Row, &Cell) -> bool + Send + Sync>;

/// Column-level value formatter.
pub type Formatter = Box<dyn Fn(&CellValue) -> Result<String, CallbackError> + Send + Sync>;

/// Identity of a column descriptor, generated once at construction.
///
/// Two columns declared with identical settings still get different keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ColumnKey(Uuid);

impl ColumnKey {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration of one grid column.
///
/// Public fields may be changed by the grid state manager after
/// construction (resize, reorder, group, sort, hide/show). The read-only
/// predicate, formatter and renderers can only be supplied through the
/// builder methods while the column is being declared.
///
/// `width` must never be set below `min_width`; [`Column::set_width`]
/// clamps, direct writes are trusted.
pub struct Column {
    /// Title shown in the column header.
    pub title: String,
    /// Key of this column's cell in every row.
    pub field: String,
    key: ColumnKey,
    pub column_type: Box<dyn ColumnType>,

    pub width: f32,
    pub min_width: f32,
    pub title_padding: Option<EdgeInsets>,
    pub filter_padding: Option<EdgeInsets>,
    pub cell_padding: Option<EdgeInsets>,
    /// Rich header content; replaces the plain `title` when set.
    pub title_span: Option<RichText>,

    pub text_align: ColumnTextAlign,
    pub title_text_align: ColumnTextAlign,

    pub frozen: ColumnFrozen,
    pub hide: bool,
    /// Left edge in the current visible layout.
    ///
    /// Written by the layout pass whenever column order or visibility
    /// changes; may be stale in between.
    pub start_position: f32,

    /// Declared read-only default.
    pub read_only: bool,
    check_read_only: Option<ReadOnlyCheck>,
    pub sort: ColumnSort,
    formatter: Option<Formatter>,
    /// Show formatted values while editing picker-style or read-only cells.
    pub apply_formatter_in_editing: bool,
    pub background_color: Option<Color>,
    renderer: Option<CellRenderer>,
    footer_renderer: Option<FooterRenderer>,
    pub features: ColumnFeatures,

    pub group: Option<GroupId>,

    default_filter: Option<FilterKind>,
    filter_focus: Option<FocusId>,
    pub filter_hint_text: Option<String>,
}

impl Column {
    /// Declare a column with the built-in [`ColumnDefaults`].
    pub fn new(
        title: impl Into<String>,
        field: impl Into<String>,
        column_type: impl ColumnType + 'static,
    ) -> Self {
        Self::with_defaults(title, field, column_type, &ColumnDefaults::default())
    }

    /// Declare a column taking layout and feature defaults from `defaults`.
    pub fn with_defaults(
        title: impl Into<String>,
        field: impl Into<String>,
        column_type: impl ColumnType + 'static,
        defaults: &ColumnDefaults,
    ) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
            key: ColumnKey::new(),
            column_type: Box::new(column_type),
            width: defaults.width.max(defaults.min_width),
            min_width: defaults.min_width,
            title_padding: defaults.title_padding,
            filter_padding: defaults.filter_padding,
            cell_padding: defaults.cell_padding,
            title_span: None,
            text_align: defaults.text_align,
            title_text_align: defaults.title_text_align,
            frozen: ColumnFrozen::None,
            hide: false,
            start_position: 0.0,
            read_only: false,
            check_read_only: None,
            sort: ColumnSort::None,
            formatter: None,
            apply_formatter_in_editing: defaults.apply_formatter_in_editing,
            background_color: None,
            renderer: None,
            footer_renderer: None,
            features: defaults.features,
            group: None,
            default_filter: None,
            filter_focus: None,
            filter_hint_text: None,
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the width. Raised to `min_width` if below it.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(self.min_width);
        self
    }

    /// Set the minimum width. The width is raised to match if needed.
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self.width = self.width.max(min_width);
        self
    }

    pub fn title_padding(mut self, padding: EdgeInsets) -> Self {
        self.title_padding = Some(padding);
        self
    }

    pub fn filter_padding(mut self, padding: EdgeInsets) -> Self {
        self.filter_padding = Some(padding);
        self
    }

    pub fn cell_padding(mut self, padding: EdgeInsets) -> Self {
        self.cell_padding = Some(padding);
        self
    }

    pub fn title_span(mut self, span: impl Into<RichText>) -> Self {
        self.title_span = Some(span.into());
        self
    }

    pub fn text_align(mut self, align: ColumnTextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn title_text_align(mut self, align: ColumnTextAlign) -> Self {
        self.title_text_align = align;
        self
    }

    pub fn frozen(mut self, frozen: ColumnFrozen) -> Self {
        self.frozen = frozen;
        self
    }

    pub fn hide(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Decide read-only per cell.
    ///
    /// When both a row and a cell are known, the predicate's answer replaces
    /// the static `read_only` flag for that cell.
    pub fn check_read_only<F>(mut self, check: F) -> Self
    where
        F: Fn(&Row, &Cell) -> bool + Send + Sync + 'static,
    {
        self.check_read_only = Some(Box::new(check));
        self
    }

    pub fn sort(mut self, sort: ColumnSort) -> Self {
        self.sort = sort;
        self
    }

    /// Format displayed values with an infallible function.
    pub fn formatter<F, S>(self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> S + Send + Sync + 'static,
        S: ToString,
    {
        self.try_formatter(move |value| Ok(formatter(value).to_string()))
    }

    /// Format displayed values with a function that may fail.
    pub fn try_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> Result<String, CallbackError> + Send + Sync + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn apply_formatter_in_editing(mut self, apply: bool) -> Self {
        self.apply_formatter_in_editing = apply;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Render cells of this column with a custom hook.
    pub fn renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Result<CellView, CallbackError> + Send + Sync + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Render a footer below this column.
    pub fn footer_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&FooterRenderContext<'_>) -> Result<CellView, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.footer_renderer = Some(Box::new(renderer));
        self
    }

    pub fn features(mut self, features: ColumnFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn filter_hint_text(mut self, hint: impl Into<String>) -> Self {
        self.filter_hint_text = Some(hint.into());
        self
    }

    // -------------------------------------------------------------------------
    // Identity and capabilities
    // -------------------------------------------------------------------------

    pub fn key(&self) -> ColumnKey {
        self.key
    }

    pub fn has_check_read_only(&self) -> bool {
        self.check_read_only.is_some()
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn has_footer_renderer(&self) -> bool {
        self.footer_renderer.is_some()
    }

    pub fn has_title_span(&self) -> bool {
        self.title_span.is_some()
    }

    pub fn is_visible(&self) -> bool {
        !self.hide
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Resize, never going below `min_width`. Returns the width applied.
    pub fn set_width(&mut self, width: f32) -> f32 {
        if width < self.min_width {
            log::warn!(
                "Column '{}': width {} below minimum {}, clamping",
                self.field,
                width,
                self.min_width
            );
        }
        self.width = width.max(self.min_width);
        self.width
    }

    /// Change the minimum width, widening the column if it is now too narrow.
    pub fn set_min_width(&mut self, min_width: f32) {
        self.min_width = min_width;
        self.width = self.width.max(min_width);
    }

    /// Position `(dx, dy)` of a content box of size `content` inside a cell
    /// of size `cell`, measured from the cell origin.
    ///
    /// The content is placed inside the cell padding according to
    /// `text_align`, resolved for `direction`.
    pub fn content_offset(
        &self,
        direction: TextDirection,
        cell: (f32, f32),
        content: (f32, f32),
    ) -> (f32, f32) {
        let padding = self.cell_padding.unwrap_or(EdgeInsets::ZERO);
        let inner = (
            cell.0 - padding.horizontal_total(),
            cell.1 - padding.vertical_total(),
        );
        let (dx, dy) = self
            .text_align
            .alignment()
            .resolve(direction)
            .offset(inner, content);
        (padding.left + dx, padding.top + dy)
    }

    // -------------------------------------------------------------------------
    // Read-only resolution
    // -------------------------------------------------------------------------

    /// Effective read-only state of a cell in this column.
    ///
    /// Without a predicate, or without a concrete row and cell, this is the
    /// static `read_only` flag.
    pub fn resolve_read_only(&self, row: Option<&Row>, cell: Option<&Cell>) -> bool {
        match (&self.check_read_only, row, cell) {
            (Some(check), Some(row), Some(cell)) => {
                log::trace!("Column '{}': read-only check for row {}", self.field, row.key);
                check(row, cell)
            }
            _ => self.read_only,
        }
    }

    /// Whether editing goes through a picker or is blocked.
    fn disallows_text_editing(&self) -> bool {
        self.read_only
            || self.column_type.is_select()
            || self.column_type.is_time()
            || self.column_type.is_date()
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    /// Type-level display form: numeric types format, others stringify.
    pub fn formatted_value_for_type(&self, value: &CellValue) -> String {
        if self.column_type.is_number() {
            self.column_type.apply_format(value)
        } else {
            value.to_string()
        }
    }

    /// Display form outside editing mode.
    ///
    /// The column formatter wins over the type-level format when set.
    pub fn formatted_value_for_display(&self, value: &CellValue) -> Result<String, ColumnError> {
        match &self.formatter {
            Some(formatter) => {
                formatter(value).map_err(|source| ColumnError::formatter(&self.field, source))
            }
            None => Ok(self.formatted_value_for_type(value)),
        }
    }

    /// Display form while the cell is being edited.
    ///
    /// The formatter only applies when `apply_formatter_in_editing` is set
    /// and the cell cannot be edited as free text (read-only column, or a
    /// select, date or time type). Otherwise the raw value's text is shown.
    pub fn formatted_value_for_display_in_editing(
        &self,
        value: &CellValue,
    ) -> Result<String, ColumnError> {
        if let Some(formatter) = &self.formatter
            && self.apply_formatter_in_editing
            && self.disallows_text_editing()
        {
            return formatter(value).map_err(|source| ColumnError::formatter(&self.field, source));
        }

        Ok(value.to_string())
    }

    /// Display form for the given mode.
    pub fn formatted_value(&self, value: &CellValue, editing: bool) -> Result<String, ColumnError> {
        if editing {
            self.formatted_value_for_display_in_editing(value)
        } else {
            self.formatted_value_for_display(value)
        }
    }

    /// Compare two values of this column in its current sort direction.
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        self.sort.apply(self.column_type.compare(a, b))
    }

    // -------------------------------------------------------------------------
    // Titles
    // -------------------------------------------------------------------------

    /// Header content: the title span if set, else the plain title.
    pub fn header_text(&self) -> RichText {
        match &self.title_span {
            Some(span) => span.clone(),
            None => RichText::plain(self.title.as_str()),
        }
    }

    /// Natural width of the header content, title padding included.
    ///
    /// `char_width` is the size of one display column in the grid's units.
    pub fn header_extent(&self, char_width: f32) -> f32 {
        let padding = self.title_padding.unwrap_or(EdgeInsets::ZERO);
        self.header_text().width() as f32 * char_width + padding.horizontal_total()
    }

    /// Title prefixed by the titles of the column's group chain.
    ///
    /// Farthest ancestor first, the column's own title last, joined by
    /// spaces. An expanded group contributes no segment of its own. A group
    /// id unknown to `groups` is treated as no group.
    pub fn title_with_group(&self, groups: &GroupRegistry) -> String {
        let Some(group_id) = self.group else {
            return self.title.clone();
        };
        let Some(group) = groups.get(group_id) else {
            log::debug!(
                "Column '{}': group {} not in registry, using bare title",
                self.field,
                group_id
            );
            return self.title.clone();
        };

        let mut titles = vec![self.title.as_str()];
        if !group.expanded_column {
            titles.push(group.title.as_str());
        }
        titles.extend(groups.parents(group_id).map(|parent| parent.title.as_str()));

        titles.reverse();
        titles.join(" ")
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Run the custom renderer for one cell.
    ///
    /// Returns `Ok(None)` when the column has no renderer, leaving the cell
    /// to the default painter.
    pub fn render_cell(
        &self,
        row_idx: usize,
        row: &Row,
        cell: &Cell,
        state: &dyn GridState,
    ) -> Result<Option<CellView>, ColumnError> {
        let Some(renderer) = &self.renderer else {
            return Ok(None);
        };

        log::trace!("Column '{}': rendering row {}", self.field, row_idx);
        let context = RenderContext::new(self, row_idx, row, cell, state);
        renderer(&context)
            .map(Some)
            .map_err(|source| ColumnError::renderer(&self.field, source))
    }

    /// Run the footer renderer, if any.
    pub fn render_footer(&self, state: &dyn GridState) -> Result<Option<CellView>, ColumnError> {
        let Some(renderer) = &self.footer_renderer else {
            return Ok(None);
        };

        let context = FooterRenderContext {
            column: self,
            state,
        };
        renderer(&context)
            .map(Some)
            .map_err(|source| ColumnError::renderer(&self.field, source))
    }

    // -------------------------------------------------------------------------
    // Filter UI slots
    // -------------------------------------------------------------------------

    /// Filter kind preselected in this column's filter popup.
    ///
    /// [`FilterKind::Contains`] until set.
    pub fn default_filter(&self) -> FilterKind {
        self.default_filter.unwrap_or_default()
    }

    pub fn set_default_filter(&mut self, kind: FilterKind) {
        self.default_filter = Some(kind);
    }

    pub fn filter_focus(&self) -> Option<&FocusId> {
        self.filter_focus.as_ref()
    }

    pub fn set_filter_focus(&mut self, focus: Option<FocusId>) {
        self.filter_focus = focus;
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("field", &self.field)
            .field("key", &self.key)
            .field("column_type", &self.column_type)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("frozen", &self.frozen)
            .field("hide", &self.hide)
            .field("read_only", &self.read_only)
            .field("has_check_read_only", &self.has_check_read_only())
            .field("sort", &self.sort)
            .field("has_formatter", &self.has_formatter())
            .field("has_renderer", &self.has_renderer())
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
