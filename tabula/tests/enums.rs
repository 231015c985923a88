use std::cmp::Ordering;

use tabula::prelude::*;
use tabula_style::{Alignment, AlignmentDirectional, BlockAlignment, TextDirection};

const ALIGNS: [ColumnTextAlign; 5] = [
    ColumnTextAlign::Start,
    ColumnTextAlign::Left,
    ColumnTextAlign::Center,
    ColumnTextAlign::Right,
    ColumnTextAlign::End,
];

// ============================================================================
// ColumnTextAlign
// ============================================================================

#[test]
fn test_center_maps_to_centered_text_and_block() {
    let align = ColumnTextAlign::Center;

    assert_eq!(align.text_align(), TextAlign::Center);
    assert_eq!(align.alignment(), BlockAlignment::Absolute(Alignment::CENTER));
    assert!(align.alignment().is_horizontally_centered());
    assert!(align.alignment().is_vertically_centered());
}

#[test]
fn test_align_mappings() {
    assert_eq!(ColumnTextAlign::Start.text_align(), TextAlign::Start);
    assert_eq!(
        ColumnTextAlign::Start.alignment(),
        BlockAlignment::Directional(AlignmentDirectional::CENTER_START)
    );
    assert_eq!(ColumnTextAlign::Left.alignment(), BlockAlignment::from(Alignment::CENTER_LEFT));
    assert_eq!(ColumnTextAlign::Right.alignment(), BlockAlignment::from(Alignment::CENTER_RIGHT));
    assert_eq!(
        ColumnTextAlign::End.alignment().resolve(TextDirection::Ltr),
        Alignment::CENTER_RIGHT
    );
    assert_eq!(
        ColumnTextAlign::End.alignment().resolve(TextDirection::Rtl),
        Alignment::CENTER_LEFT
    );
}

#[test]
fn test_exactly_one_align_predicate() {
    for align in ALIGNS {
        let flags = [
            align.is_start(),
            align.is_left(),
            align.is_center(),
            align.is_right(),
            align.is_end(),
        ];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{align:?}");
    }
}

#[test]
fn test_every_align_is_vertically_centered() {
    for align in ALIGNS {
        assert!(align.alignment().is_vertically_centered(), "{align:?}");
    }
}

// ============================================================================
// ColumnFrozen
// ============================================================================

#[test]
fn test_frozen_predicates_are_exclusive() {
    for frozen in [ColumnFrozen::None, ColumnFrozen::Left, ColumnFrozen::Right] {
        let flags = [frozen.is_none(), frozen.is_left(), frozen.is_right()];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{frozen:?}");
        assert_eq!(frozen.is_frozen(), !frozen.is_none());
    }
}

#[test]
fn test_column_frozen_default() {
    let column = Column::new("Id", "id", NumberType::new());
    assert!(column.frozen.is_none());
    assert!(!column.frozen.is_frozen());

    let column = column.frozen(ColumnFrozen::Right);
    assert!(column.frozen.is_right());
    assert!(column.frozen.is_frozen());
}

// ============================================================================
// ColumnSort
// ============================================================================

#[test]
fn test_sort_round_trip() {
    for sort in [ColumnSort::Ascending, ColumnSort::Descending] {
        assert_eq!(ColumnSort::from_short_name(sort.short_name()), sort);
        assert_eq!(sort.to_string().parse::<ColumnSort>(), Ok(sort));
    }
    assert_eq!(ColumnSort::Ascending.short_name(), "ascending");
    assert_eq!(ColumnSort::Descending.short_name(), "descending");
}

#[test]
fn test_sort_unknown_labels_become_none() {
    for label in ["foo", "", "none", "ASCENDING", "asc", " descending"] {
        assert_eq!(ColumnSort::from(label), ColumnSort::None, "{label:?}");
    }
}

#[test]
fn test_sort_predicates() {
    assert!(ColumnSort::None.is_none());
    assert!(ColumnSort::Ascending.is_ascending());
    assert!(ColumnSort::Descending.is_descending());
    assert!(!ColumnSort::Descending.is_ascending());
}

#[test]
fn test_sort_toggle_cycle() {
    let mut sort = ColumnSort::None;
    let mut seen = Vec::new();
    for _ in 0..3 {
        sort = sort.toggled();
        seen.push(sort);
    }
    assert_eq!(
        seen,
        [ColumnSort::Ascending, ColumnSort::Descending, ColumnSort::None]
    );
}

#[test]
fn test_sort_apply() {
    assert_eq!(ColumnSort::Ascending.apply(Ordering::Less), Ordering::Less);
    assert_eq!(ColumnSort::Descending.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(ColumnSort::None.apply(Ordering::Less), Ordering::Equal);
}
