//! Column groups: the multi-level headers spanning several columns.
//!
//! Groups form a tree owned by a [`GroupRegistry`]. Columns link to their
//! group through a [`GroupId`] handle and only ever read the chain; they
//! never own a group.

use std::fmt;

use tabula_style::Color;

use crate::column::{Column, ColumnTextAlign};
use crate::error::ColumnError;

/// Handle to a group inside a [`GroupRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaration of a group before it is registered.
#[derive(Debug, Clone, Default)]
pub struct GroupSpec {
    pub title: String,
    /// Fields of the columns directly under this group.
    pub fields: Vec<String>,
    /// Merge the group header with its single column's title.
    pub expanded_column: bool,
    pub background_color: Option<Color>,
    pub title_text_align: ColumnTextAlign,
}

impl GroupSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expanded_column = true;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn title_text_align(mut self, align: ColumnTextAlign) -> Self {
        self.title_text_align = align;
        self
    }
}

/// A registered group.
#[derive(Debug, Clone)]
pub struct ColumnGroup {
    pub title: String,
    pub fields: Vec<String>,
    pub expanded_column: bool,
    pub background_color: Option<Color>,
    pub title_text_align: ColumnTextAlign,
    parent: Option<GroupId>,
    children: Vec<GroupId>,
}

impl ColumnGroup {
    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Owner of the group tree.
///
/// Parents must be registered before their children, so parent chains are
/// always finite.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<ColumnGroup>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level group.
    pub fn add_root(&mut self, spec: GroupSpec) -> Result<GroupId, ColumnError> {
        self.insert(None, spec)
    }

    /// Register a group under `parent`.
    pub fn add_child(&mut self, parent: GroupId, spec: GroupSpec) -> Result<GroupId, ColumnError> {
        if self.get(parent).is_none() {
            return Err(ColumnError::UnknownGroup(parent));
        }
        self.insert(Some(parent), spec)
    }

    fn insert(&mut self, parent: Option<GroupId>, spec: GroupSpec) -> Result<GroupId, ColumnError> {
        if spec.expanded_column && spec.fields.len() != 1 {
            return Err(ColumnError::ExpandedGroupFields {
                title: spec.title,
                count: spec.fields.len(),
            });
        }

        let id = GroupId(self.groups.len());
        self.groups.push(ColumnGroup {
            title: spec.title,
            fields: spec.fields,
            expanded_column: spec.expanded_column,
            background_color: spec.background_color,
            title_text_align: spec.title_text_align,
            parent,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            self.groups[parent.0].children.push(id);
        }

        Ok(id)
    }

    pub fn get(&self, id: GroupId) -> Option<&ColumnGroup> {
        self.groups.get(id.0)
    }

    /// Mutable access for renaming or restyling a group.
    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut ColumnGroup> {
        self.groups.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Top-level groups in registration order.
    pub fn roots(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.parent.is_none())
            .map(|(index, _)| GroupId(index))
    }

    /// Ancestors of `id`, nearest first. Empty for a root or unknown id.
    pub fn parents(&self, id: GroupId) -> impl Iterator<Item = &ColumnGroup> + '_ {
        let first = self
            .get(id)
            .and_then(|group| group.parent)
            .and_then(|parent| self.get(parent));

        std::iter::successors(first, move |group| {
            group.parent.and_then(|parent| self.get(parent))
        })
    }

    /// Number of ancestors of `id`.
    pub fn depth(&self, id: GroupId) -> usize {
        self.parents(id).count()
    }

    /// The deepest group listing `field`.
    pub fn group_of_field(&self, field: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.fields.iter().any(|f| f == field))
            .map(|(index, _)| GroupId(index))
            .max_by_key(|id| self.depth(*id))
    }

    /// Link every column to the group listing its field (or to none).
    pub fn assign(&self, columns: &mut [Column]) {
        for column in columns {
            column.group = self.group_of_field(&column.field);
        }
    }
}
